//! Contextual control panels.
//!
//! Each object category owns one panel entity, spawned hidden at startup
//! and anchored every frame to a point above its selected object. The
//! wall panel carries texture controls and a swatch picker; shelves and
//! columns share a simpler variant with a property edit entry. Button
//! presses leave the UI as [`state::ControlActionEvent`]s and are applied
//! to the room by the store, so the panels never mutate objects
//! themselves.

/// Anchor maths and the panel placement system.
pub mod anchor;
/// Interaction systems for buttons and texture swatches.
pub mod interactions;
/// Panel and picker entity spawning.
pub mod panel;
/// Panel descriptors, events and UI marker components.
pub mod state;

use bevy::prelude::*;

pub struct ControlPanelPlugin;

impl Plugin for ControlPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<state::TexturePickerState>()
            .add_systems(Startup, panel::spawn_control_panels)
            .add_systems(
                Update,
                (
                    interactions::panel_button_interaction,
                    interactions::texture_swatch_interaction,
                    interactions::close_picker_on_selection_change,
                    anchor::update_panel_anchors,
                ),
            );
    }
}
