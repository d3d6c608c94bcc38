use bevy::prelude::*;

/// Intersects a world-space ray with an oriented box by transforming the
/// ray into the box's local space. `size` is the full extent of the box.
/// Returns the distance along the ray, or the exit distance when the ray
/// starts inside the box.
pub fn ray_box_intersection(
    origin: Vec3,
    direction: Vec3,
    box_transform: &GlobalTransform,
    size: Vec3,
) -> Option<f32> {
    let inverse = box_transform.compute_matrix().inverse();
    let local_origin = inverse.transform_point3(origin);
    let local_direction = inverse.transform_vector3(direction);
    let half_extent = size * 0.5;
    slab_intersection(local_origin, local_direction, -half_extent, half_extent)
}

// Slab-method ray–AABB intersection, one axis at a time.
fn slab_intersection(origin: Vec3, direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;

    for axis in 0..3 {
        if direction[axis].abs() < f32::EPSILON {
            // Ray runs parallel to this slab; it must start between the
            // slab planes to ever hit.
            if origin[axis] < min[axis] || origin[axis] > max[axis] {
                return None;
            }
            continue;
        }

        let mut t_near = (min[axis] - origin[axis]) / direction[axis];
        let mut t_far = (max[axis] - origin[axis]) / direction[axis];
        if t_near > t_far {
            std::mem::swap(&mut t_near, &mut t_far);
        }

        t_enter = t_enter.max(t_near);
        t_exit = t_exit.min(t_far);
        if t_enter > t_exit {
            return None;
        }
    }

    if t_exit < 0.0 {
        return None;
    }
    Some(if t_enter >= 0.0 { t_enter } else { t_exit })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_4;

    fn box_at(translation: Vec3) -> GlobalTransform {
        GlobalTransform::from(Transform::from_translation(translation))
    }

    #[test]
    fn head_on_ray_reports_the_entry_distance() {
        let t = ray_box_intersection(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, -1.0),
            &box_at(Vec3::ZERO),
            Vec3::new(2.0, 2.0, 2.0),
        )
        .unwrap();
        assert_relative_eq!(t, 4.0);
    }

    #[test]
    fn ray_pointing_away_misses() {
        let hit = ray_box_intersection(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, 1.0),
            &box_at(Vec3::ZERO),
            Vec3::new(2.0, 2.0, 2.0),
        );
        assert_eq!(hit, None);
    }

    #[test]
    fn offset_ray_misses_a_narrow_box() {
        let hit = ray_box_intersection(
            Vec3::new(3.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, -1.0),
            &box_at(Vec3::ZERO),
            Vec3::new(2.0, 2.0, 2.0),
        );
        assert_eq!(hit, None);
    }

    #[test]
    fn ray_starting_inside_returns_the_exit_distance() {
        let t = ray_box_intersection(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -1.0),
            &box_at(Vec3::ZERO),
            Vec3::new(2.0, 2.0, 2.0),
        )
        .unwrap();
        assert_relative_eq!(t, 1.0);
    }

    #[test]
    fn rotation_is_honoured() {
        // A box rotated 45 degrees around Y presents its corner to a ray
        // along -Z, so the hit lands closer than the unrotated face.
        let rotated = GlobalTransform::from(
            Transform::from_translation(Vec3::ZERO).with_rotation(Quat::from_rotation_y(FRAC_PI_4)),
        );
        let t = ray_box_intersection(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, -1.0),
            &rotated,
            Vec3::new(2.0, 2.0, 2.0),
        )
        .unwrap();
        assert_relative_eq!(t, 5.0 - 2.0_f32.sqrt(), epsilon = 1e-5);
    }
}
