//! Shared policy values for the room planner workspace.
//!
//! Everything the render engine and the designer tools must agree on lives
//! here: the centimetre/scene-unit conversion, the wall texture table and
//! object colour families, and the numeric settings that shape selection
//! highlighting and overlay placement.

/// Numeric settings for highlighting, overlays and manipulation.
pub mod render_settings;

/// Wall texture table and object colour families.
pub mod textures;

/// Centimetre to scene-unit conversion.
pub mod units;
