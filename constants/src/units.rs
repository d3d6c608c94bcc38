//! Centimetre to scene-unit conversion.
//!
//! Layout records store every length in centimetres. The render engine works
//! in scene units (metres). All conversion between the two happens through
//! this module; no other module divides or multiplies by the ratio itself.

use bevy::math::Vec3;

/// Number of centimetres that make up one scene unit.
pub const CENTIMETRES_PER_SCENE_UNIT: f32 = 100.0;

/// Converts a centimetre length to scene units.
pub fn to_scene_units(centimetres: f32) -> f32 {
    centimetres / CENTIMETRES_PER_SCENE_UNIT
}

/// Converts a scene-unit length back to centimetres.
pub fn to_centimetres(scene_units: f32) -> f32 {
    scene_units * CENTIMETRES_PER_SCENE_UNIT
}

/// Converts a centimetre triple to a scene-space vector.
pub fn to_scene_vec(x_cm: f32, y_cm: f32, z_cm: f32) -> Vec3 {
    Vec3::new(
        to_scene_units(x_cm),
        to_scene_units(y_cm),
        to_scene_units(z_cm),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_centimetres_to_scene_units() {
        assert_eq!(to_scene_units(250.0), 2.5);
        assert_eq!(to_scene_units(0.0), 0.0);
        assert_eq!(to_scene_units(-50.0), -0.5);
    }

    #[test]
    fn conversion_round_trips() {
        assert_eq!(to_centimetres(to_scene_units(137.5)), 137.5);
    }

    #[test]
    fn converts_triples_componentwise() {
        assert_eq!(
            to_scene_vec(100.0, 250.0, -400.0),
            Vec3::new(1.0, 2.5, -4.0)
        );
    }
}
