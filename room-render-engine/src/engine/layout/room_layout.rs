use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::objects::{Column, Shelf, Wall};
use super::utilization::used_floor_area;
use constants::units::{to_scene_units, to_scene_vec};

/// Complete room layout as a Bevy asset. Mirrors the JSON structure of a
/// saved design exactly: one wall list (floor included), shelves and
/// columns, all in centimetres.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath)]
pub struct RoomLayout {
    pub name: String,
    #[serde(default)]
    pub walls: Vec<Wall>,
    #[serde(default)]
    pub shelves: Vec<Shelf>,
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl RoomLayout {
    /// Floor record, when the layout carries one.
    pub fn floor(&self) -> Option<&Wall> {
        self.walls.iter().find(|wall| wall.is_floor())
    }

    /// Room centre in scene units for camera framing. Falls back to the
    /// wall footprints, then to the origin, when no floor record exists.
    pub fn room_center(&self) -> Vec3 {
        if let Some(floor) = self.floor() {
            return floor.position.to_scene();
        }
        match used_floor_area(&self.walls) {
            Some(rect) => {
                let center = rect.center();
                to_scene_vec(center.x, 0.0, center.y)
            }
            None => Vec3::ZERO,
        }
    }

    /// Room extents in scene units for camera framing.
    pub fn room_size(&self) -> Vec3 {
        let height = self.tallest_wall_height_cm();
        if let Some(floor) = self.floor() {
            let size = floor.size_cm();
            return to_scene_vec(size.x, height, size.z);
        }
        match used_floor_area(&self.walls) {
            Some(rect) => to_scene_vec(rect.size().x, height, rect.size().y),
            None => Vec3::new(10.0, 2.5, 10.0),
        }
    }

    /// Height of the walkable floor surface in scene units.
    pub fn ground_height(&self) -> f32 {
        self.floor()
            .map(|floor| to_scene_units(floor.position.y + floor.height * 0.5))
            .unwrap_or(0.0)
    }

    /// Total object count for load reporting.
    pub fn object_count(&self) -> usize {
        self.walls.len() + self.shelves.len() + self.columns.len()
    }

    fn tallest_wall_height_cm(&self) -> f32 {
        self.walls
            .iter()
            .filter(|wall| !wall.is_floor())
            .map(|wall| wall.height)
            .fold(250.0, f32::max)
    }
}
