use bevy::prelude::*;

use crate::engine::layout::objects::{Column, ObjectKind, Placement, Shelf, Wall};
use crate::engine::layout::room_layout::RoomLayout;
use constants::render_settings::CLONE_OFFSET_CM;

/// Authoritative set of objects in the room, keyed by category and id.
/// Mutations go through the methods here; the scene rebuilds from this
/// resource whenever it changes.
#[derive(Resource, Debug, Clone, Default)]
pub struct RoomObjects {
    pub walls: Vec<Wall>,
    pub shelves: Vec<Shelf>,
    pub columns: Vec<Column>,
}

impl RoomObjects {
    pub fn wall(&self, id: &str) -> Option<&Wall> {
        self.walls.iter().find(|wall| wall.id == id)
    }

    pub fn shelf(&self, id: &str) -> Option<&Shelf> {
        self.shelves.iter().find(|shelf| shelf.id == id)
    }

    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == id)
    }

    /// Whether an object with this category and id exists.
    pub fn contains(&self, kind: ObjectKind, id: &str) -> bool {
        match kind {
            ObjectKind::Wall => self.wall(id).is_some(),
            ObjectKind::Shelf => self.shelf(id).is_some(),
            ObjectKind::Column => self.column(id).is_some(),
        }
    }

    /// Position of an object in centimetres.
    pub fn position_of(&self, kind: ObjectKind, id: &str) -> Option<Placement> {
        match kind {
            ObjectKind::Wall => self.wall(id).map(|wall| wall.position),
            ObjectKind::Shelf => self.shelf(id).map(|shelf| shelf.position),
            ObjectKind::Column => self.column(id).map(|column| column.position),
        }
    }

    /// Removes an object. Returns whether anything was removed.
    pub fn delete(&mut self, kind: ObjectKind, id: &str) -> bool {
        match kind {
            ObjectKind::Wall => {
                let before = self.walls.len();
                self.walls.retain(|wall| wall.id != id);
                self.walls.len() < before
            }
            ObjectKind::Shelf => {
                let before = self.shelves.len();
                self.shelves.retain(|shelf| shelf.id != id);
                self.shelves.len() < before
            }
            ObjectKind::Column => {
                let before = self.columns.len();
                self.columns.retain(|column| column.id != id);
                self.columns.len() < before
            }
        }
    }

    /// Moves an object to a new centimetre position. Returns whether the
    /// object exists.
    pub fn translate(&mut self, kind: ObjectKind, id: &str, position: Placement) -> bool {
        match kind {
            ObjectKind::Wall => {
                if let Some(wall) = self.walls.iter_mut().find(|wall| wall.id == id) {
                    wall.position = position;
                    return true;
                }
            }
            ObjectKind::Shelf => {
                if let Some(shelf) = self.shelves.iter_mut().find(|shelf| shelf.id == id) {
                    shelf.position = position;
                    return true;
                }
            }
            ObjectKind::Column => {
                if let Some(column) = self.columns.iter_mut().find(|column| column.id == id) {
                    column.position = position;
                    return true;
                }
            }
        }
        false
    }

    /// Replaces a wall's texture key. Returns whether the wall exists.
    pub fn set_wall_texture(&mut self, id: &str, texture_key: &str) -> bool {
        if let Some(wall) = self.walls.iter_mut().find(|wall| wall.id == id) {
            wall.texture = texture_key.to_string();
            return true;
        }
        false
    }

    /// Duplicates an object under a fresh id, offset on X and Z so the
    /// copy is visible next to the source. The floor cannot be cloned.
    /// Returns the new id.
    pub fn clone_object(&mut self, kind: ObjectKind, id: &str) -> Option<String> {
        match kind {
            ObjectKind::Wall => {
                let source = self.wall(id)?;
                if source.is_floor() {
                    return None;
                }
                let mut copy = source.clone();
                copy.id = self.next_copy_id(kind, id);
                copy.position = offset_for_clone(copy.position);
                let new_id = copy.id.clone();
                self.walls.push(copy);
                Some(new_id)
            }
            ObjectKind::Shelf => {
                let mut copy = self.shelf(id)?.clone();
                copy.id = self.next_copy_id(kind, id);
                copy.position = offset_for_clone(copy.position);
                let new_id = copy.id.clone();
                self.shelves.push(copy);
                Some(new_id)
            }
            ObjectKind::Column => {
                let mut copy = self.column(id)?.clone();
                copy.id = self.next_copy_id(kind, id);
                copy.position = offset_for_clone(copy.position);
                let new_id = copy.id.clone();
                self.columns.push(copy);
                Some(new_id)
            }
        }
    }

    fn next_copy_id(&self, kind: ObjectKind, base: &str) -> String {
        let mut counter = 1;
        loop {
            let candidate = format!("{base}-{counter}");
            if !self.contains(kind, &candidate) {
                return candidate;
            }
            counter += 1;
        }
    }
}

impl From<&RoomLayout> for RoomObjects {
    fn from(layout: &RoomLayout) -> Self {
        Self {
            walls: layout.walls.clone(),
            shelves: layout.shelves.clone(),
            columns: layout.columns.clone(),
        }
    }
}

fn offset_for_clone(position: Placement) -> Placement {
    Placement::new(
        position.x + CLONE_OFFSET_CM,
        position.y,
        position.z + CLONE_OFFSET_CM,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::layout::objects::FLOOR_ID;

    fn store_with_walls() -> RoomObjects {
        RoomObjects {
            walls: vec![
                wall(FLOOR_ID, true),
                wall("wall-north", false),
                wall("wall-west", false),
            ],
            shelves: vec![Shelf {
                id: "shelf-1".to_string(),
                width: 120.0,
                height: 180.0,
                depth: 40.0,
                position: Placement::new(-300.0, 90.0, 150.0),
                rotation: None,
            }],
            columns: Vec::new(),
        }
    }

    fn wall(id: &str, locked: bool) -> Wall {
        Wall {
            id: id.to_string(),
            name: id.to_string(),
            width: 200.0,
            height: 250.0,
            depth: 20.0,
            position: Placement::new(0.0, 125.0, 0.0),
            rotation: Placement::default(),
            is_locked: locked,
            texture: "brick".to_string(),
        }
    }

    #[test]
    fn delete_removes_only_the_named_object() {
        let mut store = store_with_walls();
        assert!(store.delete(ObjectKind::Wall, "wall-north"));
        assert!(!store.contains(ObjectKind::Wall, "wall-north"));
        assert!(store.contains(ObjectKind::Wall, "wall-west"));
        assert!(!store.delete(ObjectKind::Wall, "wall-north"));
    }

    #[test]
    fn translate_rejects_unknown_ids() {
        let mut store = store_with_walls();
        let target = Placement::new(50.0, 90.0, -10.0);
        assert!(store.translate(ObjectKind::Shelf, "shelf-1", target));
        assert_eq!(store.shelf("shelf-1").unwrap().position, target);
        assert!(!store.translate(ObjectKind::Shelf, "shelf-9", target));
    }

    #[test]
    fn clone_offsets_the_copy_and_keeps_the_source() {
        let mut store = store_with_walls();
        let new_id = store.clone_object(ObjectKind::Wall, "wall-north").unwrap();
        assert_eq!(new_id, "wall-north-1");
        let copy = store.wall(&new_id).unwrap();
        assert_eq!(copy.position.x, CLONE_OFFSET_CM);
        assert_eq!(copy.position.y, 125.0);
        assert_eq!(copy.position.z, CLONE_OFFSET_CM);
        assert!(store.contains(ObjectKind::Wall, "wall-north"));
    }

    #[test]
    fn clone_ids_stay_unique_across_repeated_clones() {
        let mut store = store_with_walls();
        let first = store.clone_object(ObjectKind::Wall, "wall-north").unwrap();
        let second = store.clone_object(ObjectKind::Wall, "wall-north").unwrap();
        assert_ne!(first, second);
        assert_eq!(second, "wall-north-2");
    }

    #[test]
    fn the_floor_cannot_be_cloned() {
        let mut store = store_with_walls();
        assert_eq!(store.clone_object(ObjectKind::Wall, FLOOR_ID), None);
        assert_eq!(store.walls.len(), 3);
    }

    #[test]
    fn set_wall_texture_replaces_the_key() {
        let mut store = store_with_walls();
        assert!(store.set_wall_texture("wall-north", "marble"));
        assert_eq!(store.wall("wall-north").unwrap().texture, "marble");
        assert!(!store.set_wall_texture("wall-missing", "marble"));
    }
}
