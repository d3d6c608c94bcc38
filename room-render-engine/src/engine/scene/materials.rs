//! Material resolution for room objects.
//!
//! Selection state is expressed entirely through materials: the selected
//! object of each category swaps to a higher-contrast colour with an
//! emissive glow and partial transparency, everything else renders its
//! base look. The floor sits outside this scheme with one fixed neutral
//! material.

use bevy::prelude::*;

use constants::render_settings::{
    SELECTED_EMISSIVE_INTENSITY, SELECTED_OPACITY, UNSELECTED_EMISSIVE_INTENSITY,
    USED_AREA_OPACITY,
};
use constants::textures::{
    column_colour, floor_colour, shelf_colour, used_area_colour, wall_texture_info,
};

/// Wall material for a texture key, switched to the higher-contrast
/// variant while selected. Unknown keys resolve through the default
/// table entry.
pub fn wall_material(texture_key: &str, selected: bool) -> StandardMaterial {
    let info = wall_texture_info(texture_key);
    highlighted(
        info.colour(selected),
        info.roughness,
        info.metalness,
        selected,
    )
}

/// Shelf material in its base or selected state.
pub fn shelf_material(selected: bool) -> StandardMaterial {
    highlighted(shelf_colour(selected), 0.8, 0.0, selected)
}

/// Column material in its base or selected state.
pub fn column_material(selected: bool) -> StandardMaterial {
    highlighted(column_colour(selected), 0.85, 0.0, selected)
}

/// Fixed neutral floor material. The floor ignores selection and texture
/// keys entirely.
pub fn floor_material() -> StandardMaterial {
    StandardMaterial {
        base_color: floor_colour(),
        perceptual_roughness: 0.95,
        ..default()
    }
}

/// Translucent shade laid over the occupied floor region.
pub fn used_area_material() -> StandardMaterial {
    StandardMaterial {
        base_color: used_area_colour().with_alpha(USED_AREA_OPACITY),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    }
}

fn highlighted(colour: Color, roughness: f32, metalness: f32, selected: bool) -> StandardMaterial {
    let (emissive, opacity, alpha_mode) = if selected {
        (
            colour.to_linear() * SELECTED_EMISSIVE_INTENSITY,
            SELECTED_OPACITY,
            AlphaMode::Blend,
        )
    } else {
        (
            LinearRgba::BLACK * UNSELECTED_EMISSIVE_INTENSITY,
            1.0,
            AlphaMode::Opaque,
        )
    };

    StandardMaterial {
        base_color: colour.with_alpha(opacity),
        emissive,
        perceptual_roughness: roughness,
        metallic: metalness,
        alpha_mode,
        ..default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn selected_walls_glow_and_turn_translucent() {
        let material = wall_material("brick", true);
        assert_relative_eq!(material.base_color.alpha(), SELECTED_OPACITY);
        assert_eq!(material.alpha_mode, AlphaMode::Blend);
        assert_eq!(
            material.emissive,
            wall_texture_info("brick").colour(true).to_linear() * SELECTED_EMISSIVE_INTENSITY
        );
    }

    #[test]
    fn unselected_walls_render_solid_without_glow() {
        let material = wall_material("brick", false);
        assert_relative_eq!(material.base_color.alpha(), 1.0);
        assert_eq!(material.alpha_mode, AlphaMode::Opaque);
        assert_relative_eq!(material.emissive.red, 0.0);
        assert_relative_eq!(material.emissive.green, 0.0);
        assert_relative_eq!(material.emissive.blue, 0.0);
    }

    #[test]
    fn unknown_texture_keys_use_the_default_entry() {
        let unknown = wall_material("velvet", false);
        let default = wall_material("default", false);
        assert_eq!(unknown.base_color, default.base_color);
        assert_relative_eq!(unknown.perceptual_roughness, default.perceptual_roughness);
    }

    #[test]
    fn the_floor_material_is_fixed() {
        let material = floor_material();
        assert_eq!(material.base_color, floor_colour());
        assert_eq!(material.alpha_mode, AlphaMode::Opaque);
    }

    #[test]
    fn shelf_and_column_materials_follow_the_two_state_scheme() {
        assert_ne!(
            shelf_material(true).base_color,
            shelf_material(false).base_color
        );
        assert_relative_eq!(shelf_material(true).base_color.alpha(), SELECTED_OPACITY);
        assert_relative_eq!(column_material(false).base_color.alpha(), 1.0);
    }
}
