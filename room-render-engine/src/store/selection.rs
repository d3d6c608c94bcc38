use bevy::prelude::*;

use crate::engine::layout::objects::{FLOOR_ID, ObjectKind};

/// Current selection, one independent slot per object category. Selecting
/// a shelf does not clear a selected wall; each category is quit on its
/// own.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub selected_wall_id: Option<String>,
    pub selected_shelf_id: Option<String>,
    pub selected_column_id: Option<String>,
}

impl SelectionState {
    /// Fills a category slot. The floor is not selectable, so a wall
    /// selection naming [`FLOOR_ID`] is ignored. Returns whether the slot
    /// changed.
    pub fn select(&mut self, kind: ObjectKind, id: &str) -> bool {
        if kind == ObjectKind::Wall && id == FLOOR_ID {
            return false;
        }
        let slot = self.slot_mut(kind);
        if slot.as_deref() == Some(id) {
            return false;
        }
        *slot = Some(id.to_string());
        true
    }

    /// Empties a category slot.
    pub fn quit(&mut self, kind: ObjectKind) {
        *self.slot_mut(kind) = None;
    }

    /// Empties a category slot, but only while it names the given id.
    pub fn clear_if_selected(&mut self, kind: ObjectKind, id: &str) {
        let slot = self.slot_mut(kind);
        if slot.as_deref() == Some(id) {
            *slot = None;
        }
    }

    /// Selected id of a category, when one is set.
    pub fn selected_id(&self, kind: ObjectKind) -> Option<&str> {
        match kind {
            ObjectKind::Wall => self.selected_wall_id.as_deref(),
            ObjectKind::Shelf => self.selected_shelf_id.as_deref(),
            ObjectKind::Column => self.selected_column_id.as_deref(),
        }
    }

    /// Whether the given object is the selected one of its category.
    pub fn is_selected(&self, kind: ObjectKind, id: &str) -> bool {
        self.selected_id(kind) == Some(id)
    }

    fn slot_mut(&mut self, kind: ObjectKind) -> &mut Option<String> {
        match kind {
            ObjectKind::Wall => &mut self.selected_wall_id,
            ObjectKind::Shelf => &mut self.selected_shelf_id,
            ObjectKind::Column => &mut self.selected_column_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_fills_the_matching_slot() {
        let mut selection = SelectionState::default();
        assert!(selection.select(ObjectKind::Wall, "wall-north"));
        assert_eq!(selection.selected_id(ObjectKind::Wall), Some("wall-north"));
        assert!(selection.is_selected(ObjectKind::Wall, "wall-north"));
        assert!(!selection.is_selected(ObjectKind::Shelf, "wall-north"));
    }

    #[test]
    fn reselecting_the_same_object_reports_no_change() {
        let mut selection = SelectionState::default();
        assert!(selection.select(ObjectKind::Shelf, "shelf-1"));
        assert!(!selection.select(ObjectKind::Shelf, "shelf-1"));
    }

    #[test]
    fn the_floor_is_never_selectable() {
        let mut selection = SelectionState::default();
        assert!(!selection.select(ObjectKind::Wall, FLOOR_ID));
        assert_eq!(selection.selected_id(ObjectKind::Wall), None);
    }

    #[test]
    fn categories_do_not_clear_each_other() {
        let mut selection = SelectionState::default();
        selection.select(ObjectKind::Wall, "wall-north");
        selection.select(ObjectKind::Shelf, "shelf-1");
        selection.select(ObjectKind::Column, "column-1");
        assert_eq!(selection.selected_id(ObjectKind::Wall), Some("wall-north"));
        assert_eq!(selection.selected_id(ObjectKind::Shelf), Some("shelf-1"));
        assert_eq!(selection.selected_id(ObjectKind::Column), Some("column-1"));

        selection.quit(ObjectKind::Shelf);
        assert_eq!(selection.selected_id(ObjectKind::Shelf), None);
        assert_eq!(selection.selected_id(ObjectKind::Wall), Some("wall-north"));
    }

    #[test]
    fn clear_if_selected_only_touches_the_matching_id() {
        let mut selection = SelectionState::default();
        selection.select(ObjectKind::Wall, "wall-north");
        selection.clear_if_selected(ObjectKind::Wall, "wall-west");
        assert_eq!(selection.selected_id(ObjectKind::Wall), Some("wall-north"));
        selection.clear_if_selected(ObjectKind::Wall, "wall-north");
        assert_eq!(selection.selected_id(ObjectKind::Wall), None);
    }
}
