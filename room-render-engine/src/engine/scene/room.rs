//! Scene synchronisation for room objects.
//!
//! The 3D view is derived state: whenever the room store or the selection
//! changes, every object entity is torn down and respawned with its
//! current geometry and material. Layouts are a few dozen boxes, so a
//! full rebuild stays well under a frame.

use bevy::prelude::*;

use super::materials::{column_material, floor_material, shelf_material, wall_material};
use crate::engine::layout::objects::{ObjectKind, Placement};
use crate::store::{RoomObjects, SelectionState};
use constants::units::to_scene_vec;

// Components
#[derive(Component)]
pub struct PlacedObject {
    pub kind: ObjectKind,
    pub id: String,
}

/// Full extent of the object's box in scene units. Picking rays test
/// against this.
#[derive(Component)]
pub struct ObjectSize(pub Vec3);

#[derive(Component)]
pub struct LockedObject;

#[derive(Component)]
pub struct FloorPlane;

/// System rebuilding the object entities from the room store. The floor
/// keeps its neutral material regardless of selection or texture key;
/// everything else resolves through the selection-aware material
/// functions.
pub fn sync_room_scene(
    objects: Res<RoomObjects>,
    selection: Res<SelectionState>,
    existing: Query<Entity, With<PlacedObject>>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !objects.is_changed() && !selection.is_changed() {
        return;
    }

    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }

    for wall in &objects.walls {
        let material = if wall.is_floor() {
            floor_material()
        } else {
            wall_material(
                &wall.texture,
                selection.is_selected(ObjectKind::Wall, &wall.id),
            )
        };
        spawn_object_box(
            &mut commands,
            &mut meshes,
            &mut materials,
            ObjectKind::Wall,
            &wall.id,
            wall.size_cm(),
            wall.position,
            wall.rotation,
            material,
            wall.is_locked,
            wall.is_floor(),
        );
    }

    for shelf in &objects.shelves {
        spawn_object_box(
            &mut commands,
            &mut meshes,
            &mut materials,
            ObjectKind::Shelf,
            &shelf.id,
            shelf.size_cm(),
            shelf.position,
            shelf.rotation_or_default(),
            shelf_material(selection.is_selected(ObjectKind::Shelf, &shelf.id)),
            false,
            false,
        );
    }

    for column in &objects.columns {
        spawn_object_box(
            &mut commands,
            &mut meshes,
            &mut materials,
            ObjectKind::Column,
            &column.id,
            column.size_cm(),
            column.position,
            column.rotation,
            column_material(selection.is_selected(ObjectKind::Column, &column.id)),
            column.is_locked,
            false,
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn spawn_object_box(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    kind: ObjectKind,
    id: &str,
    size_cm: Vec3,
    position: Placement,
    rotation: Placement,
    material: StandardMaterial,
    locked: bool,
    is_floor: bool,
) {
    let size = to_scene_vec(size_cm.x, size_cm.y, size_cm.z);
    let mut entity = commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
        MeshMaterial3d(materials.add(material)),
        Transform::from_translation(position.to_scene()).with_rotation(rotation.to_rotation()),
        PlacedObject {
            kind,
            id: id.to_string(),
        },
        ObjectSize(size),
        Name::new(format!("{}:{}", kind.label(), id)),
    ));
    if locked {
        entity.insert(LockedObject);
    }
    if is_floor {
        entity.insert(FloorPlane);
    }
}
