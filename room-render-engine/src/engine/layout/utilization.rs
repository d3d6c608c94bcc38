//! Floor utilization.
//!
//! Derives the occupied region of the floor from the wall list. Every wall
//! contributes its axis-aligned footprint regardless of rotation, so the
//! result is the bounding box of all footprints, which over-reports for
//! rotated walls. The floor record itself never contributes.

use bevy::math::Vec2;

use super::objects::Wall;

/// Axis-aligned region of the floor plane, in centimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsedRect {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl UsedRect {
    /// Footprint of one wall: its position extended by half its width and
    /// depth on each side. Rotation is ignored.
    fn from_footprint(wall: &Wall) -> Self {
        let half_width = wall.width * 0.5;
        let half_depth = wall.depth * 0.5;
        Self {
            min_x: wall.position.x - half_width,
            max_x: wall.position.x + half_width,
            min_z: wall.position.z - half_depth,
            max_z: wall.position.z + half_depth,
        }
    }

    fn union(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            max_x: self.max_x.max(other.max_x),
            min_z: self.min_z.min(other.min_z),
            max_z: self.max_z.max(other.max_z),
        }
    }

    /// Centre of the region on the floor plane, in centimetres.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.min_x + self.max_x) * 0.5,
            (self.min_z + self.max_z) * 0.5,
        )
    }

    /// Width and depth of the region, in centimetres.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.max_x - self.min_x, self.max_z - self.min_z)
    }
}

/// Bounding box of all wall footprints, excluding the floor record.
/// Returns `None` when no walls remain after that filter.
pub fn used_floor_area(walls: &[Wall]) -> Option<UsedRect> {
    walls
        .iter()
        .filter(|wall| !wall.is_floor())
        .map(UsedRect::from_footprint)
        .reduce(UsedRect::union)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::layout::objects::{FLOOR_ID, Placement};
    use approx::assert_relative_eq;

    fn wall(id: &str, x: f32, z: f32, width: f32, depth: f32) -> Wall {
        Wall {
            id: id.to_string(),
            name: id.to_string(),
            width,
            height: 250.0,
            depth,
            position: Placement::new(x, 125.0, z),
            rotation: Placement::default(),
            is_locked: false,
            texture: String::new(),
        }
    }

    #[test]
    fn no_walls_yields_none() {
        assert_eq!(used_floor_area(&[]), None);
        assert_eq!(
            used_floor_area(&[wall(FLOOR_ID, 0.0, 0.0, 1000.0, 800.0)]),
            None
        );
    }

    #[test]
    fn two_walls_union_to_their_bounding_box() {
        let walls = [
            wall(FLOOR_ID, 0.0, 0.0, 1000.0, 800.0),
            wall("wall-a", 0.0, 0.0, 200.0, 200.0),
            wall("wall-b", 300.0, 0.0, 200.0, 200.0),
        ];
        let rect = used_floor_area(&walls).unwrap();
        assert_relative_eq!(rect.min_x, -100.0);
        assert_relative_eq!(rect.max_x, 400.0);
        assert_relative_eq!(rect.min_z, -100.0);
        assert_relative_eq!(rect.max_z, 100.0);
        assert_relative_eq!(rect.center().x, 150.0);
        assert_relative_eq!(rect.size().x, 500.0);
        assert_relative_eq!(rect.size().y, 200.0);
    }

    #[test]
    fn single_wall_reports_its_own_footprint() {
        let rect = used_floor_area(&[wall("wall-a", 50.0, -20.0, 100.0, 40.0)]).unwrap();
        assert_eq!(
            rect,
            UsedRect {
                min_x: 0.0,
                max_x: 100.0,
                min_z: -40.0,
                max_z: 0.0,
            }
        );
    }

    #[test]
    fn rotation_does_not_change_the_footprint() {
        let mut rotated = wall("wall-a", 0.0, 0.0, 200.0, 20.0);
        rotated.rotation = Placement::new(0.0, std::f32::consts::FRAC_PI_4, 0.0);
        let plain = wall("wall-b", 0.0, 0.0, 200.0, 20.0);
        assert_eq!(
            used_floor_area(&[rotated]),
            used_floor_area(std::slice::from_ref(&plain))
        );
    }
}
