//! Wall texture table and object colour families.
//!
//! Walls carry a free-form texture key; this module maps each key to its
//! surface properties and to a higher-contrast variant used while the wall
//! is selected. Unknown or empty keys fall back to the default entry, so a
//! misspelled key in a layout file still renders.

use bevy::prelude::*;

/// Surface properties behind one wall texture key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallTextureInfo {
    pub key: &'static str,
    base_rgb: [f32; 3],
    selected_rgb: [f32; 3],
    pub roughness: f32,
    pub metalness: f32,
}

impl WallTextureInfo {
    /// Base colour, or the higher-contrast selected variant.
    pub fn colour(&self, selected: bool) -> Color {
        let rgb = if selected {
            self.selected_rgb
        } else {
            self.base_rgb
        };
        Color::srgb(rgb[0], rgb[1], rgb[2])
    }
}

/// Mapping of wall texture keys to their surface properties.
pub const WALL_TEXTURE_MAP: &[WallTextureInfo] = &[
    WallTextureInfo {
        key: "wood",
        base_rgb: [0.55, 0.36, 0.22],
        selected_rgb: [0.78, 0.56, 0.36],
        roughness: 0.70,
        metalness: 0.0,
    },
    WallTextureInfo {
        key: "brick",
        base_rgb: [0.64, 0.26, 0.18],
        selected_rgb: [0.86, 0.44, 0.32],
        roughness: 0.90,
        metalness: 0.0,
    },
    WallTextureInfo {
        key: "concrete",
        base_rgb: [0.60, 0.60, 0.58],
        selected_rgb: [0.80, 0.80, 0.76],
        roughness: 0.95,
        metalness: 0.0,
    },
    WallTextureInfo {
        key: "tile",
        base_rgb: [0.82, 0.83, 0.85],
        selected_rgb: [0.94, 0.96, 1.0],
        roughness: 0.20,
        metalness: 0.05,
    },
    WallTextureInfo {
        key: "marble",
        base_rgb: [0.90, 0.89, 0.86],
        selected_rgb: [1.0, 0.98, 0.92],
        roughness: 0.15,
        metalness: 0.10,
    },
];

/// Entry used when a wall names no texture or an unknown one.
pub const DEFAULT_WALL_TEXTURE: WallTextureInfo = WallTextureInfo {
    key: "default",
    base_rgb: [0.75, 0.75, 0.75],
    selected_rgb: [0.90, 0.90, 0.95],
    roughness: 0.60,
    metalness: 0.0,
};

/// Resolves a texture key, falling back to [`DEFAULT_WALL_TEXTURE`].
pub fn wall_texture_info(key: &str) -> &'static WallTextureInfo {
    WALL_TEXTURE_MAP
        .iter()
        .find(|info| info.key == key)
        .unwrap_or(&DEFAULT_WALL_TEXTURE)
}

/// Shelf colour in its base or selected state.
pub fn shelf_colour(selected: bool) -> Color {
    if selected {
        Color::srgb(0.42, 0.62, 0.86)
    } else {
        Color::srgb(0.24, 0.40, 0.60)
    }
}

/// Column colour in its base or selected state.
pub fn column_colour(selected: bool) -> Color {
    if selected {
        Color::srgb(0.78, 0.72, 0.58)
    } else {
        Color::srgb(0.55, 0.50, 0.42)
    }
}

/// Neutral floor colour, independent of selection and texture keys.
pub fn floor_colour() -> Color {
    Color::srgb(0.42, 0.42, 0.44)
}

/// Darker shade drawn over the occupied part of the floor.
pub fn used_area_colour() -> Color {
    Color::srgb(0.16, 0.18, 0.22)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve_to_their_entry() {
        for info in WALL_TEXTURE_MAP {
            assert_eq!(wall_texture_info(info.key).key, info.key);
        }
    }

    #[test]
    fn unknown_and_empty_keys_fall_back_to_default() {
        assert_eq!(wall_texture_info("velvet").key, "default");
        assert_eq!(wall_texture_info("").key, "default");
    }

    #[test]
    fn selected_variant_differs_from_base() {
        for info in WALL_TEXTURE_MAP {
            assert_ne!(info.colour(true), info.colour(false));
        }
        assert_ne!(shelf_colour(true), shelf_colour(false));
        assert_ne!(column_colour(true), column_colour(false));
    }
}
