use bevy::prelude::*;

use super::panel::{BUTTON_BASE, BUTTON_HOVERED, BUTTON_PRESSED};
use super::state::{
    APPLY_TEXTURE, ControlActionEvent, PanelAction, PanelButton, PanelKind, TexturePickerState,
    TextureSwatch, WallControlsClosedEvent, descriptor,
};
use crate::engine::layout::objects::ObjectKind;
use crate::store::SelectionState;

/// Drives the panel button strips. A press resolves the action against
/// the category's current selection and forwards it as a
/// [`ControlActionEvent`]; actions flagged close-on-invoke also raise
/// [`WallControlsClosedEvent`] so the wall session ends.
pub fn panel_button_interaction(
    mut buttons: Query<
        (&Interaction, &PanelButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    selection: Res<SelectionState>,
    mut picker: ResMut<TexturePickerState>,
    mut actions: EventWriter<ControlActionEvent>,
    mut closed: EventWriter<WallControlsClosedEvent>,
) {
    for (interaction, button, mut background) in &mut buttons {
        match *interaction {
            Interaction::Pressed => {
                *background = BackgroundColor(BUTTON_PRESSED);

                let Some(id) = selection.selected_id(button.kind) else {
                    continue;
                };
                let id = id.to_string();

                if button.action == PanelAction::OpenTexturePicker {
                    picker.open = !picker.open;
                }

                let Some(entry) = descriptor(PanelKind::of(button.kind), button.action) else {
                    continue;
                };
                let Some(action) = button.action.to_control_action(None) else {
                    continue;
                };
                actions.write(ControlActionEvent {
                    kind: button.kind,
                    id,
                    action,
                });

                if entry.close_on_invoke && button.kind == ObjectKind::Wall {
                    closed.write(WallControlsClosedEvent);
                }
            }
            Interaction::Hovered => {
                *background = BackgroundColor(BUTTON_HOVERED);
            }
            Interaction::None => {
                *background = BackgroundColor(BUTTON_BASE);
            }
        }
    }
}

/// Drives the texture picker rows. Picking a swatch applies the texture
/// to the selected wall, closes the picker, and ends the session per
/// the swatch descriptor.
pub fn texture_swatch_interaction(
    mut swatches: Query<
        (&Interaction, &TextureSwatch, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    selection: Res<SelectionState>,
    mut picker: ResMut<TexturePickerState>,
    mut actions: EventWriter<ControlActionEvent>,
    mut closed: EventWriter<WallControlsClosedEvent>,
) {
    for (interaction, swatch, mut background) in &mut swatches {
        match *interaction {
            Interaction::Pressed => {
                *background = BackgroundColor(BUTTON_PRESSED);

                let Some(id) = selection.selected_id(ObjectKind::Wall) else {
                    continue;
                };
                let Some(action) = PanelAction::ApplyTexture.to_control_action(Some(swatch.key))
                else {
                    continue;
                };
                actions.write(ControlActionEvent {
                    kind: ObjectKind::Wall,
                    id: id.to_string(),
                    action,
                });

                picker.open = false;
                if APPLY_TEXTURE.close_on_invoke {
                    closed.write(WallControlsClosedEvent);
                }
            }
            Interaction::Hovered => {
                *background = BackgroundColor(BUTTON_HOVERED);
            }
            Interaction::None => {
                *background = BackgroundColor(BUTTON_BASE);
            }
        }
    }
}

/// Closes the picker whenever the selection set changes, so it never
/// lingers over a wall it no longer describes.
pub fn close_picker_on_selection_change(
    selection: Res<SelectionState>,
    mut picker: ResMut<TexturePickerState>,
) {
    if selection.is_changed() && picker.open {
        picker.open = false;
    }
}
