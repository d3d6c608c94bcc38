//! Room state store.
//!
//! Owns the object lists and the per-category selection, and applies every
//! mutation requested by the interaction tools. Tools never touch the room
//! state directly; they raise events and the systems here play them back:
//!
//! ```text
//! ObjectClickEvent          └─> fills a selection slot
//! ControlActionEvent        └─> delete / clone / move / texture / quit
//! ObjectMoveEvent           └─> updates a dragged object's position
//! WallControlsClosedEvent   └─> empties the wall slot
//! ```
//!
//! The scene is rebuilt from [`objects::RoomObjects`] and
//! [`selection::SelectionState`] whenever either resource changes, so once
//! an event is applied here the 3D view follows on its own.

/// Event application systems and keyboard shortcut routing.
pub mod apply;

/// Object lists with lookup, delete, clone, move and texture mutations.
pub mod objects;

/// Per-category selection slots.
pub mod selection;

pub use objects::RoomObjects;
pub use selection::SelectionState;
