//! Numeric settings for highlighting, overlays and manipulation.

/// Emissive scale applied to a selected object's colour.
pub const SELECTED_EMISSIVE_INTENSITY: f32 = 0.3;

/// Emissive scale applied while an object is not selected.
pub const UNSELECTED_EMISSIVE_INTENSITY: f32 = 0.1;

/// Base-colour alpha of a selected object.
pub const SELECTED_OPACITY: f32 = 0.7;

/// Alpha of the used-area overlay above the floor.
pub const USED_AREA_OPACITY: f32 = 0.45;

/// Lift between the floor surface and the used-area overlay, in scene
/// units. Keeps the overlay clear of the floor face it shades.
pub const USED_AREA_SURFACE_OFFSET: f32 = 0.01;

/// Clearance between a wall's top face and its control panel anchor,
/// in scene units.
pub const WALL_CONTROLS_LIFT: f32 = 0.5;

/// Clearance between a shelf or column top face and its control panel
/// anchor, in scene units.
pub const OBJECT_CONTROLS_LIFT: f32 = 0.3;

/// Smallest dimension handed to mesh generation, in centimetres.
pub const MIN_DIMENSION_CM: f32 = 0.1;

/// Offset applied on X and Z when an object is cloned, in centimetres.
pub const CLONE_OFFSET_CM: f32 = 20.0;

/// Radius of the drop indicator shown while moving an object, in scene
/// units.
pub const MOVE_INDICATOR_RADIUS: f32 = 0.125;
