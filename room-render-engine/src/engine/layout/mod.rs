//! Room layout data for the designer scene.
//!
//! Handles the layout asset loaded from JSON, the object records it
//! contains, and the floor-utilization measure derived from them.

/// Wall, shelf and column records with centimetre dimensions.
pub mod objects;

/// Room layout asset mirroring the saved JSON structure.
pub mod room_layout;

/// Occupied floor region derived from the wall list.
pub mod utilization;
