//! Layout object records.
//!
//! Walls, shelves and columns as they appear in a layout file. Every length
//! is stored in centimetres; rotations are Euler angles in radians. The room
//! floor travels inside the wall list as a regular wall record whose id is
//! [`FLOOR_ID`].

use bevy::prelude::*;
use constants::render_settings::MIN_DIMENSION_CM;
use constants::units::to_scene_vec;
use serde::{Deserialize, Serialize};

/// Identifier of the floor record inside a layout's wall list.
pub const FLOOR_ID: &str = "floor";

/// The placeable object categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Wall,
    Shelf,
    Column,
}

impl ObjectKind {
    /// Lowercase name used in log output.
    pub fn label(&self) -> &'static str {
        match self {
            ObjectKind::Wall => "wall",
            ObjectKind::Shelf => "shelf",
            ObjectKind::Column => "column",
        }
    }
}

/// Per-axis triple used for positions and rotations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Placement {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Reads the triple as a centimetre position and converts it to scene
    /// space.
    pub fn to_scene(&self) -> Vec3 {
        to_scene_vec(self.x, self.y, self.z)
    }

    /// Reads the triple as Euler angles in radians.
    pub fn to_rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.x, self.y, self.z)
    }
}

/// Clamps raw dimensions to values mesh generation can accept. Zero,
/// negative and non-finite inputs all collapse to [`MIN_DIMENSION_CM`].
pub fn clamped_dimensions(width: f32, height: f32, depth: f32) -> Vec3 {
    let mut w = width.max(MIN_DIMENSION_CM);
    let mut h = height.max(MIN_DIMENSION_CM);
    let mut d = depth.max(MIN_DIMENSION_CM);

    if !w.is_finite() {
        w = MIN_DIMENSION_CM;
    }
    if !h.is_finite() {
        h = MIN_DIMENSION_CM;
    }
    if !d.is_finite() {
        d = MIN_DIMENSION_CM;
    }

    Vec3::new(w, h, d)
}

/// A wall segment, or the floor when the id is [`FLOOR_ID`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wall {
    pub id: String,
    pub name: String,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub position: Placement,
    pub rotation: Placement,
    pub is_locked: bool,
    pub texture: String,
}

impl Wall {
    /// Whether this record is the room floor rather than a wall segment.
    pub fn is_floor(&self) -> bool {
        self.id == FLOOR_ID
    }

    /// Clamped dimensions in centimetres.
    pub fn size_cm(&self) -> Vec3 {
        clamped_dimensions(self.width, self.height, self.depth)
    }
}

/// A free-standing shelf unit. Shelves carry no lock flag and may omit
/// their rotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shelf {
    pub id: String,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub position: Placement,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Placement>,
}

impl Shelf {
    /// Clamped dimensions in centimetres.
    pub fn size_cm(&self) -> Vec3 {
        clamped_dimensions(self.width, self.height, self.depth)
    }

    /// Rotation, treating an absent field as no rotation.
    pub fn rotation_or_default(&self) -> Placement {
        self.rotation.unwrap_or_default()
    }
}

/// A structural column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: String,
    pub name: String,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub position: Placement,
    pub rotation: Placement,
    pub is_locked: bool,
}

impl Column {
    /// Clamped dimensions in centimetres.
    pub fn size_cm(&self) -> Vec3 {
        clamped_dimensions(self.width, self.height, self.depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_dimensions_clamp_to_minimum() {
        assert_eq!(
            clamped_dimensions(0.0, -40.0, f32::NAN),
            Vec3::splat(MIN_DIMENSION_CM)
        );
        assert_eq!(
            clamped_dimensions(f32::INFINITY, 250.0, 20.0),
            Vec3::new(MIN_DIMENSION_CM, 250.0, 20.0)
        );
    }

    #[test]
    fn valid_dimensions_pass_through() {
        assert_eq!(
            clamped_dimensions(300.0, 250.0, 15.0),
            Vec3::new(300.0, 250.0, 15.0)
        );
    }

    #[test]
    fn floor_is_recognised_by_id() {
        let mut wall = sample_wall("wall-north");
        assert!(!wall.is_floor());
        wall.id = FLOOR_ID.to_string();
        assert!(wall.is_floor());
    }

    #[test]
    fn wall_parses_camel_case_fields() {
        let wall: Wall = serde_json::from_str(
            r#"{
                "id": "wall-north",
                "name": "North wall",
                "width": 1000.0,
                "height": 250.0,
                "depth": 20.0,
                "position": { "x": 0.0, "y": 125.0, "z": -390.0 },
                "rotation": { "x": 0.0, "y": 0.0, "z": 0.0 },
                "isLocked": true,
                "texture": "brick"
            }"#,
        )
        .unwrap();
        assert!(wall.is_locked);
        assert_eq!(wall.texture, "brick");
        assert_eq!(wall.position.y, 125.0);
    }

    #[test]
    fn shelf_rotation_defaults_when_absent() {
        let shelf: Shelf = serde_json::from_str(
            r#"{
                "id": "shelf-2",
                "width": 100.0,
                "height": 90.0,
                "depth": 35.0,
                "position": { "x": 150.0, "y": 45.0, "z": 60.0 }
            }"#,
        )
        .unwrap();
        assert_eq!(shelf.rotation, None);
        assert_eq!(shelf.rotation_or_default(), Placement::default());
        assert_eq!(shelf.rotation_or_default().to_rotation(), Quat::IDENTITY);
    }

    fn sample_wall(id: &str) -> Wall {
        Wall {
            id: id.to_string(),
            name: "Wall".to_string(),
            width: 200.0,
            height: 250.0,
            depth: 20.0,
            position: Placement::default(),
            rotation: Placement::default(),
            is_locked: false,
            texture: String::new(),
        }
    }
}
