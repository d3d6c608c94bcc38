//! Object picking in the 3D scene.
//!
//! Turns left clicks into selection requests by casting a ray from the
//! cursor through every placed object's oriented box. The nearest hit
//! wins. Clicks on the floor, on locked objects and over UI are
//! swallowed. A hover pass mirrors the same rules onto the mouse cursor
//! so a visitor can see what is clickable before committing.

/// Ray intersection against oriented boxes.
pub mod ray;

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, SystemCursorIcon};
use bevy::winit::cursor::CursorIcon;

use crate::engine::layout::objects::ObjectKind;
use crate::engine::scene::room::{FloorPlane, LockedObject, ObjectSize, PlacedObject};
use crate::tools::move_controller::MovementController;
use ray::ray_box_intersection;

/// Event fired when a selectable object is clicked.
#[derive(Event)]
pub struct ObjectClickEvent {
    pub kind: ObjectKind,
    pub id: String,
}

type SceneObjectItem<'a> = (
    &'a GlobalTransform,
    &'a ObjectSize,
    &'a PlacedObject,
    Option<&'a LockedObject>,
    Option<&'a FloorPlane>,
);

/// System turning left clicks into [`ObjectClickEvent`]s. Runs before the
/// move controller so a click that settles a move never doubles as a
/// selection.
pub fn handle_object_click(
    buttons: Res<ButtonInput<MouseButton>>,
    movement: Res<MovementController>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    ui_interactions: Query<&Interaction, With<Button>>,
    q_objects: Query<SceneObjectItem>,
    mut clicks: EventWriter<ObjectClickEvent>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    // The move controller owns the mouse while an object follows it.
    if movement.active {
        return;
    }
    // Clicks landing on panel buttons must not fall through to the scene.
    if ui_interactions
        .iter()
        .any(|interaction| *interaction != Interaction::None)
    {
        return;
    }

    let Ok(window) = windows.single() else { return };
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    let Ok((cam_xf, camera)) = cameras.single() else {
        return;
    };
    let Ok(cursor_ray) = camera.viewport_to_world(cam_xf, cursor_pos) else {
        return;
    };

    let hit = nearest_hit(
        cursor_ray.origin,
        cursor_ray.direction.as_vec3(),
        q_objects.iter(),
    );
    let Some((_, placed, unselectable)) = hit else {
        return;
    };

    // A floor or locked hit still wins the depth test; it just produces
    // no selection, so nothing behind it gets picked either.
    if unselectable {
        return;
    }

    clicks.write(ObjectClickEvent {
        kind: placed.kind,
        id: placed.id.clone(),
    });
}

/// System reflecting hover state onto the OS cursor: a pointer over
/// selectable objects, not-allowed over the floor and locked objects,
/// a grab while move mode drags something.
pub fn update_hover_cursor(
    windows: Query<(Entity, &Window), With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    movement: Res<MovementController>,
    ui_interactions: Query<&Interaction, With<Button>>,
    q_objects: Query<SceneObjectItem>,
    current_icons: Query<Option<&CursorIcon>, With<PrimaryWindow>>,
    mut commands: Commands,
) {
    let Ok((window_entity, window)) = windows.single() else {
        return;
    };

    let desired = CursorIcon::System(desired_cursor(
        window,
        &cameras,
        &movement,
        &ui_interactions,
        &q_objects,
    ));

    // Re-insert only on change so the window component is not rewritten
    // every frame.
    let needs_update = match current_icons.get(window_entity) {
        Ok(Some(existing)) => *existing != desired,
        _ => true,
    };
    if needs_update {
        commands.entity(window_entity).insert(desired);
    }
}

fn desired_cursor(
    window: &Window,
    cameras: &Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    movement: &MovementController,
    ui_interactions: &Query<&Interaction, With<Button>>,
    q_objects: &Query<SceneObjectItem>,
) -> SystemCursorIcon {
    if movement.active {
        return SystemCursorIcon::Grabbing;
    }
    if ui_interactions
        .iter()
        .any(|interaction| *interaction != Interaction::None)
    {
        return SystemCursorIcon::Pointer;
    }

    let Some(cursor_pos) = window.cursor_position() else {
        return SystemCursorIcon::Default;
    };
    let Ok((cam_xf, camera)) = cameras.single() else {
        return SystemCursorIcon::Default;
    };
    let Ok(cursor_ray) = camera.viewport_to_world(cam_xf, cursor_pos) else {
        return SystemCursorIcon::Default;
    };

    match nearest_hit(
        cursor_ray.origin,
        cursor_ray.direction.as_vec3(),
        q_objects.iter(),
    ) {
        Some((_, _, true)) => SystemCursorIcon::NotAllowed,
        Some(_) => SystemCursorIcon::Pointer,
        None => SystemCursorIcon::Default,
    }
}

/// Closest box along the ray. The returned flag marks hits that cannot
/// be selected: the floor plane and locked objects.
fn nearest_hit<'a>(
    origin: Vec3,
    direction: Vec3,
    objects: impl Iterator<Item = SceneObjectItem<'a>>,
) -> Option<(f32, &'a PlacedObject, bool)> {
    let mut best: Option<(f32, &'a PlacedObject, bool)> = None;
    for (transform, ObjectSize(size), placed, locked, floor) in objects {
        let Some(t) = ray_box_intersection(origin, direction, transform, *size) else {
            continue;
        };
        if t > 0.0 && best.as_ref().is_none_or(|(best_t, _, _)| t < *best_t) {
            best = Some((t, placed, locked.is_some() || floor.is_some()));
        }
    }
    best
}
