//! Used-area overlay above the floor.
//!
//! A translucent sheet covering the bounding box of all wall footprints,
//! floating a hair above the floor surface. Rebuilt alongside the room
//! whenever the store changes; an empty room gets no overlay at all.

use bevy::prelude::*;

use super::materials::used_area_material;
use crate::engine::layout::utilization::used_floor_area;
use crate::store::RoomObjects;
use constants::render_settings::USED_AREA_SURFACE_OFFSET;
use constants::units::to_scene_units;

#[derive(Component)]
pub struct UsedAreaOverlay;

/// System keeping the overlay in step with the wall list.
pub fn sync_used_area_overlay(
    objects: Res<RoomObjects>,
    existing: Query<Entity, With<UsedAreaOverlay>>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !objects.is_changed() {
        return;
    }

    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }

    let Some(rect) = used_floor_area(&objects.walls) else {
        return;
    };

    let floor_top = objects
        .walls
        .iter()
        .find(|wall| wall.is_floor())
        .map(|floor| to_scene_units(floor.position.y + floor.height * 0.5))
        .unwrap_or(0.0);

    let center = rect.center();
    let size = rect.size();
    commands.spawn((
        Mesh3d(meshes.add(
            Plane3d::default()
                .mesh()
                .size(to_scene_units(size.x), to_scene_units(size.y)),
        )),
        MeshMaterial3d(materials.add(used_area_material())),
        Transform::from_xyz(
            to_scene_units(center.x),
            floor_top + USED_AREA_SURFACE_OFFSET,
            to_scene_units(center.y),
        ),
        UsedAreaOverlay,
        Name::new("UsedAreaOverlay"),
    ));
}
