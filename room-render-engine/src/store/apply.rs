use bevy::prelude::*;

use crate::engine::layout::objects::ObjectKind;
use crate::store::objects::RoomObjects;
use crate::store::selection::SelectionState;
use crate::tools::control_panel::state::{
    ControlAction, ControlActionEvent, WallControlsClosedEvent,
};
use crate::tools::move_controller::{MovementController, ObjectMoveEvent};
use crate::tools::object_selection::ObjectClickEvent;

/// System filling selection slots from scene clicks. Clicks on the
/// already selected object are dropped before touching the resource,
/// so change detection only fires on genuine transitions.
pub fn apply_object_clicks(
    mut clicks: EventReader<ObjectClickEvent>,
    mut selection: ResMut<SelectionState>,
) {
    for click in clicks.read() {
        if selection.is_selected(click.kind, &click.id) {
            continue;
        }
        if selection.select(click.kind, &click.id) {
            info!("Selected {} '{}'", click.kind.label(), click.id);
        }
    }
}

/// System applying control panel actions to the room state.
pub fn apply_control_actions(
    mut actions: EventReader<ControlActionEvent>,
    mut objects: ResMut<RoomObjects>,
    mut selection: ResMut<SelectionState>,
    mut movement: ResMut<MovementController>,
) {
    for event in actions.read() {
        apply_action(
            &mut objects,
            &mut selection,
            &mut movement,
            event.kind,
            &event.id,
            &event.action,
        );
    }
}

/// System applying dragged positions from the move controller.
pub fn apply_object_moves(mut moves: EventReader<ObjectMoveEvent>, mut objects: ResMut<RoomObjects>) {
    for event in moves.read() {
        if !objects.translate(event.kind, &event.id, event.position) {
            warn!(
                "Position update for missing {} '{}'",
                event.kind.label(),
                event.id
            );
        }
    }
}

/// System ending the wall control session by emptying the wall slot.
pub fn apply_wall_controls_closed(
    mut closed: EventReader<WallControlsClosedEvent>,
    mut selection: ResMut<SelectionState>,
) {
    for _event in closed.read() {
        selection.quit(ObjectKind::Wall);
        info!("Wall controls closed");
    }
}

/// System routing keyboard shortcuts through the same action path the
/// panels use: Escape deselects every category, Delete removes every
/// selected object. Stands down while a move is running so Escape can
/// cancel the move instead.
pub fn handle_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    movement: Res<MovementController>,
    selection: Res<SelectionState>,
    mut actions: EventWriter<ControlActionEvent>,
) {
    if movement.active {
        return;
    }

    let action = if keyboard.just_pressed(KeyCode::Escape) {
        ControlAction::Quit
    } else if keyboard.just_pressed(KeyCode::Delete) {
        ControlAction::Delete
    } else {
        return;
    };

    for kind in [ObjectKind::Wall, ObjectKind::Shelf, ObjectKind::Column] {
        if let Some(id) = selection.selected_id(kind) {
            actions.write(ControlActionEvent {
                kind,
                id: id.to_string(),
                action: action.clone(),
            });
        }
    }
}

fn apply_action(
    objects: &mut RoomObjects,
    selection: &mut SelectionState,
    movement: &mut MovementController,
    kind: ObjectKind,
    id: &str,
    action: &ControlAction,
) {
    match action {
        ControlAction::Quit => {
            selection.quit(kind);
            info!("Deselected {} '{}'", kind.label(), id);
        }
        ControlAction::Delete => {
            if objects.delete(kind, id) {
                selection.clear_if_selected(kind, id);
                info!("Deleted {} '{}'", kind.label(), id);
            } else {
                warn!("Delete requested for missing {} '{}'", kind.label(), id);
            }
        }
        ControlAction::Move => {
            if objects.contains(kind, id) {
                movement.begin(kind, id.to_string());
            } else {
                warn!("Move requested for missing {} '{}'", kind.label(), id);
            }
        }
        ControlAction::Clone => match objects.clone_object(kind, id) {
            Some(new_id) => info!("Cloned {} '{}' as '{}'", kind.label(), id, new_id),
            None => warn!("Clone requested for missing {} '{}'", kind.label(), id),
        },
        ControlAction::Edit => {
            info!("Property editor requested for {} '{}'", kind.label(), id);
        }
        ControlAction::OpenTexturePicker => {
            info!("Colour picker toggled for wall '{}'", id);
        }
        ControlAction::ApplyTexture(key) => {
            if objects.set_wall_texture(id, key) {
                info!("Wall '{}' texture set to '{}'", id, key);
            } else {
                warn!("Texture change requested for missing wall '{}'", id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::layout::objects::{Placement, Shelf, Wall};

    fn fixtures() -> (RoomObjects, SelectionState, MovementController) {
        let objects = RoomObjects {
            walls: vec![Wall {
                id: "wall-north".to_string(),
                name: "North wall".to_string(),
                width: 400.0,
                height: 250.0,
                depth: 20.0,
                position: Placement::new(0.0, 125.0, -200.0),
                rotation: Placement::default(),
                is_locked: false,
                texture: "brick".to_string(),
            }],
            shelves: vec![Shelf {
                id: "shelf-1".to_string(),
                width: 120.0,
                height: 180.0,
                depth: 40.0,
                position: Placement::new(-300.0, 90.0, 150.0),
                rotation: None,
            }],
            columns: Vec::new(),
        };
        (objects, SelectionState::default(), MovementController::default())
    }

    #[test]
    fn delete_clears_the_slot_of_the_deleted_object() {
        let (mut objects, mut selection, mut movement) = fixtures();
        selection.select(ObjectKind::Wall, "wall-north");
        selection.select(ObjectKind::Shelf, "shelf-1");

        apply_action(
            &mut objects,
            &mut selection,
            &mut movement,
            ObjectKind::Wall,
            "wall-north",
            &ControlAction::Delete,
        );

        assert!(!objects.contains(ObjectKind::Wall, "wall-north"));
        assert_eq!(selection.selected_id(ObjectKind::Wall), None);
        assert_eq!(selection.selected_id(ObjectKind::Shelf), Some("shelf-1"));
    }

    #[test]
    fn deleting_an_unselected_object_keeps_the_slot() {
        let (mut objects, mut selection, mut movement) = fixtures();
        selection.select(ObjectKind::Wall, "wall-other");

        apply_action(
            &mut objects,
            &mut selection,
            &mut movement,
            ObjectKind::Wall,
            "wall-north",
            &ControlAction::Delete,
        );

        assert_eq!(selection.selected_id(ObjectKind::Wall), Some("wall-other"));
    }

    #[test]
    fn move_only_starts_for_existing_objects() {
        let (mut objects, mut selection, mut movement) = fixtures();

        apply_action(
            &mut objects,
            &mut selection,
            &mut movement,
            ObjectKind::Shelf,
            "shelf-9",
            &ControlAction::Move,
        );
        assert!(!movement.active);

        apply_action(
            &mut objects,
            &mut selection,
            &mut movement,
            ObjectKind::Shelf,
            "shelf-1",
            &ControlAction::Move,
        );
        assert!(movement.active);
        assert_eq!(movement.target(), Some((ObjectKind::Shelf, "shelf-1")));
    }

    #[test]
    fn clone_leaves_the_selection_on_the_source() {
        let (mut objects, mut selection, mut movement) = fixtures();
        selection.select(ObjectKind::Wall, "wall-north");

        apply_action(
            &mut objects,
            &mut selection,
            &mut movement,
            ObjectKind::Wall,
            "wall-north",
            &ControlAction::Clone,
        );

        assert_eq!(objects.walls.len(), 2);
        assert_eq!(selection.selected_id(ObjectKind::Wall), Some("wall-north"));
    }

    #[test]
    fn texture_apply_updates_the_wall_and_keeps_the_selection() {
        let (mut objects, mut selection, mut movement) = fixtures();
        selection.select(ObjectKind::Wall, "wall-north");

        apply_action(
            &mut objects,
            &mut selection,
            &mut movement,
            ObjectKind::Wall,
            "wall-north",
            &ControlAction::ApplyTexture("marble".to_string()),
        );

        assert_eq!(objects.wall("wall-north").unwrap().texture, "marble");
        assert_eq!(selection.selected_id(ObjectKind::Wall), Some("wall-north"));
    }

    #[test]
    fn quit_empties_only_the_requested_category() {
        let (mut objects, mut selection, mut movement) = fixtures();
        selection.select(ObjectKind::Wall, "wall-north");
        selection.select(ObjectKind::Shelf, "shelf-1");

        apply_action(
            &mut objects,
            &mut selection,
            &mut movement,
            ObjectKind::Shelf,
            "shelf-1",
            &ControlAction::Quit,
        );

        assert_eq!(selection.selected_id(ObjectKind::Shelf), None);
        assert_eq!(selection.selected_id(ObjectKind::Wall), Some("wall-north"));
    }
}
