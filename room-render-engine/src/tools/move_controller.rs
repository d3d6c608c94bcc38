//! Move mode for placed objects.
//!
//! While a move is in progress the target object follows the ground-plane
//! point under the cursor, keeping its own height. A left click settles
//! the object where it is; Escape abandons the mode. Position updates go
//! out as [`ObjectMoveEvent`]s for the store to apply.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::engine::camera::viewport_camera::ViewportCamera;
use crate::engine::layout::objects::{ObjectKind, Placement};
use crate::store::objects::RoomObjects;
use constants::render_settings::MOVE_INDICATOR_RADIUS;
use constants::units::to_centimetres;

/// Minimum cursor travel, in centimetres, before a new position is
/// emitted.
const MOVE_EMIT_THRESHOLD_CM: f32 = 0.1;

/// Resource tracking move mode and its target object.
#[derive(Resource, Debug, Default)]
pub struct MovementController {
    /// Whether an object is currently following the cursor. Wall panels
    /// stay hidden while this is set.
    pub active: bool,
    target: Option<(ObjectKind, String)>,
}

impl MovementController {
    /// Starts moving an object, replacing any move in progress.
    pub fn begin(&mut self, kind: ObjectKind, id: String) {
        info!("Move started for {} '{}'", kind.label(), id);
        self.active = true;
        self.target = Some((kind, id));
    }

    /// Ends move mode and hands back the target.
    pub fn finish(&mut self) -> Option<(ObjectKind, String)> {
        self.active = false;
        self.target.take()
    }

    /// Target of the move in progress.
    pub fn target(&self) -> Option<(ObjectKind, &str)> {
        self.target.as_ref().map(|(kind, id)| (*kind, id.as_str()))
    }
}

/// Event fired while an object is dragged to a new centimetre position.
#[derive(Event)]
pub struct ObjectMoveEvent {
    pub kind: ObjectKind,
    pub id: String,
    pub position: Placement,
}

#[derive(Component)]
pub struct MoveIndicator;

/// Spawns the hidden drop indicator marking the ground hit during a move.
pub fn spawn_move_indicator(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(MOVE_INDICATOR_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.6, 0.1),
            emissive: LinearRgba::new(1.0, 0.6, 0.1, 1.0),
            unlit: true,
            ..default()
        })),
        Transform::default(),
        Visibility::Hidden,
        MoveIndicator,
        Name::new("MoveIndicator"),
    ));
}

/// System driving an active move: follows the cursor across the ground
/// plane, emits position updates, settles on click and cancels on
/// Escape. Keyboard shortcuts run earlier in the frame and stand down
/// while a move is active, so Escape reaches this system first.
pub fn drive_move_mode(
    buttons: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut movement: ResMut<MovementController>,
    mut viewport_camera: ResMut<ViewportCamera>,
    objects: Res<RoomObjects>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    mut moves: EventWriter<ObjectMoveEvent>,
    mut indicators: Query<(&mut Transform, &mut Visibility), With<MoveIndicator>>,
) {
    if !movement.active {
        if let Ok((_, mut visibility)) = indicators.single_mut() {
            if *visibility != Visibility::Hidden {
                *visibility = Visibility::Hidden;
            }
        }
        return;
    }

    if keyboard.just_pressed(KeyCode::Escape) {
        if let Some((kind, id)) = movement.finish() {
            info!("Move cancelled for {} '{}'", kind.label(), id);
        }
        return;
    }

    let Some((kind, id)) = movement.target().map(|(kind, id)| (kind, id.to_string())) else {
        movement.active = false;
        return;
    };
    // The target can vanish mid-move, e.g. deleted via keyboard shortcut.
    let Some(current) = objects.position_of(kind, &id) else {
        movement.finish();
        return;
    };

    let Ok(window) = windows.single() else { return };
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    let Ok((cam_xf, camera)) = cameras.single() else {
        return;
    };
    let Some(hit) = viewport_camera.mouse_to_ground_plane(cursor_pos, camera, cam_xf) else {
        return;
    };

    if let Ok((mut transform, mut visibility)) = indicators.single_mut() {
        transform.translation = hit;
        *visibility = Visibility::Visible;
    }

    // Objects keep their own height; only X and Z track the cursor.
    let target = Placement::new(to_centimetres(hit.x), current.y, to_centimetres(hit.z));
    let travelled = Vec2::new(target.x - current.x, target.z - current.z).length();
    if travelled > MOVE_EMIT_THRESHOLD_CM {
        moves.write(ObjectMoveEvent {
            kind,
            id: id.clone(),
            position: target,
        });
    }

    if buttons.just_pressed(MouseButton::Left) {
        movement.finish();
        info!("Move settled for {} '{}'", kind.label(), id);
    }
}
