//! Scene presentation for the room designer.
//!
//! Rebuilds object entities from the room store, resolves their materials
//! from selection state, and shades the occupied part of the floor.

/// Used-area overlay floating above the floor surface.
///
/// Translucent sheet covering the bounding box of all wall footprints.
pub mod floor_overlay;

/// Selection-aware material resolution for walls, shelves and columns.
///
/// Maps texture keys and selection state to PBR materials.
pub mod materials;

/// Entity synchronisation from the room store.
///
/// Respawns object boxes with their current geometry and material on
/// every store or selection change.
pub mod room;
