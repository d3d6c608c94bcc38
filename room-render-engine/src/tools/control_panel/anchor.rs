use bevy::prelude::*;

use super::panel::{PANEL_HEIGHT, PICKER_GAP, PICKER_WIDTH, panel_width};
use super::state::{PanelRoot, TexturePickerRoot, TexturePickerState};
use crate::engine::layout::objects::{ObjectKind, Placement};
use crate::store::{RoomObjects, SelectionState};
use crate::tools::move_controller::MovementController;
use constants::render_settings::{OBJECT_CONTROLS_LIFT, WALL_CONTROLS_LIFT};
use constants::units::to_scene_units;

/// World-space point a panel hovers over: the top face of the object,
/// lifted by the per-category clearance.
pub fn overlay_anchor(position: Placement, height_cm: f32, kind: ObjectKind) -> Vec3 {
    let base = position.to_scene();
    let lift = match kind {
        ObjectKind::Wall => WALL_CONTROLS_LIFT,
        ObjectKind::Shelf | ObjectKind::Column => OBJECT_CONTROLS_LIFT,
    };
    Vec3::new(
        base.x,
        to_scene_units(position.y + height_cm * 0.5) + lift,
        base.z,
    )
}

/// Resolves the anchor for one category's panel, or `None` when that
/// panel should stay hidden. The wall panel additionally stands down
/// while an object is being moved and never appears for the floor.
pub fn panel_anchor(
    kind: ObjectKind,
    objects: &RoomObjects,
    selection: &SelectionState,
    movement_active: bool,
) -> Option<Vec3> {
    let id = selection.selected_id(kind)?;
    match kind {
        ObjectKind::Wall => {
            if movement_active {
                return None;
            }
            let wall = objects.wall(id)?;
            if wall.is_floor() {
                return None;
            }
            Some(overlay_anchor(wall.position, wall.height, kind))
        }
        ObjectKind::Shelf => {
            let shelf = objects.shelf(id)?;
            Some(overlay_anchor(shelf.position, shelf.height, kind))
        }
        ObjectKind::Column => {
            let column = objects.column(id)?;
            Some(overlay_anchor(column.position, column.height, kind))
        }
    }
}

/// Projects every panel anchor into the viewport and repositions the
/// UI nodes, hiding panels whose anchor is unresolved or behind the
/// camera. The texture picker tracks the wall panel while open.
pub fn update_panel_anchors(
    objects: Res<RoomObjects>,
    selection: Res<SelectionState>,
    movement: Res<MovementController>,
    picker: Res<TexturePickerState>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut panels: Query<(&PanelRoot, &mut Node), Without<TexturePickerRoot>>,
    mut pickers: Query<&mut Node, With<TexturePickerRoot>>,
) {
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    let mut wall_panel_screen = None;

    for (panel, mut node) in &mut panels {
        let anchor = panel_anchor(panel.kind, &objects, &selection, movement.active);
        let screen = anchor
            .and_then(|point| camera.world_to_viewport(camera_transform, point).ok());

        match screen {
            Some(screen) => {
                node.display = Display::Flex;
                node.left = Val::Px(screen.x - panel_width(panel.kind) * 0.5);
                node.top = Val::Px(screen.y - PANEL_HEIGHT * 0.5);
                if panel.kind == ObjectKind::Wall {
                    wall_panel_screen = Some(screen);
                }
            }
            None => node.display = Display::None,
        }
    }

    for mut node in &mut pickers {
        match wall_panel_screen {
            Some(screen) if picker.open => {
                node.display = Display::Flex;
                node.left = Val::Px(screen.x - PICKER_WIDTH * 0.5);
                node.top = Val::Px(screen.y + PANEL_HEIGHT * 0.5 + PICKER_GAP);
            }
            _ => node.display = Display::None,
        }
    }
}
