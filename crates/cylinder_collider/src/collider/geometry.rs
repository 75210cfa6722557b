//! Pure geometry for the compound cylinder approximation
//!
//! All formulas are written assuming Y is the cylinder's long axis and are
//! remapped once at the end via a component permutation, so the three axis
//! cases stay bit-identical to each other.

use crate::collider::config::{Axis, ColliderConfig};
use crate::foundation::math::{constants::STRAIGHT_ANGLE, utils::deg_to_rad, Vec3};

/// Re-express a vector authored in Y-long-axis space in the given axis's
/// space. A pure component permutation, not a rotation.
pub fn axis_remap(axis: Axis, value: Vec3) -> Vec3 {
    match axis {
        Axis::X => Vec3::new(value.y, value.x, value.z),
        Axis::Y => value,
        Axis::Z => Vec3::new(value.x, value.z, value.y),
    }
}

/// Unit vector along the cylinder's long axis in local space
pub fn direction_vector(axis: Axis) -> Vec3 {
    axis_remap(axis, Vec3::new(0.0, 1.0, 0.0))
}

/// Number of box primitives in the approximation: `sides / 2`.
///
/// The sides invariant (even, within [6, 72]) keeps this at 3 or more.
pub fn primitive_count(config: &ColliderConfig) -> u32 {
    config.sides() / 2
}

/// Incremental rotation between consecutive primitives, in degrees
pub fn angle_step_deg(count: u32) -> f32 {
    STRAIGHT_ANGLE / count as f32
}

/// Extents of one box primitive.
///
/// Each box spans the full diameter through the circle and the full
/// height along the axis; its width is sized so that `count` boxes rotated
/// by the angular step circumscribe the circle without gaps:
/// `width = |2r * tan(step / 2)|`.
pub fn box_size(config: &ColliderConfig) -> Vec3 {
    let half_step_deg = angle_step_deg(primitive_count(config)) * 0.5;
    let diameter = config.radius() * 2.0;
    let size = Vec3::new(
        (diameter * deg_to_rad(half_step_deg).tan()).abs(),
        config.height(),
        diameter,
    );

    axis_remap(config.axis(), size)
}

/// Size of the axis-aligned box enclosing the whole approximation
pub fn bounds_size(config: &ColliderConfig) -> Vec3 {
    let diameter = config.radius() * 2.0;
    let size = Vec3::new(diameter, config.height(), diameter);

    axis_remap(config.axis(), size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_axis_remap_permutations() {
        let v = Vec3::new(1.0, 2.0, 3.0);

        assert_eq!(axis_remap(Axis::X, v), Vec3::new(2.0, 1.0, 3.0));
        assert_eq!(axis_remap(Axis::Y, v), v);
        assert_eq!(axis_remap(Axis::Z, v), Vec3::new(1.0, 3.0, 2.0));
    }

    #[test]
    fn test_direction_vector_per_axis() {
        assert_eq!(direction_vector(Axis::X), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(direction_vector(Axis::Y), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(direction_vector(Axis::Z), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_primitive_count_is_half_sides() {
        for sides in (6..=72).step_by(2) {
            let config = ColliderConfig::default().with_sides(sides);
            let count = primitive_count(&config);
            assert_eq!(count, sides / 2);
            assert!(count >= 3);
        }
    }

    #[test]
    fn test_angle_step() {
        assert_relative_eq!(angle_step_deg(3), 60.0, epsilon = 1e-6);
        assert_relative_eq!(angle_step_deg(36), 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_box_size_hexagon() {
        // sides=6 => 3 boxes, 60° step, width = 2 * tan(30°) ≈ 1.1547
        let config = ColliderConfig::default()
            .with_sides(6)
            .with_radius(1.0)
            .with_height(2.0);
        let size = box_size(&config);

        assert_relative_eq!(size.x, 1.1547005, epsilon = 1e-4);
        assert_relative_eq!(size.y, 2.0, epsilon = 1e-6);
        assert_relative_eq!(size.z, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_box_size_matches_y_axis_formula() {
        let config = ColliderConfig::default()
            .with_sides(24)
            .with_radius(2.5)
            .with_height(4.0);
        let count = primitive_count(&config) as f32;
        let half_angle = 180.0 / count * 0.5;
        let expected_width = (2.0 * 2.5 * deg_to_rad(half_angle).tan()).abs();

        let size = box_size(&config);
        assert_relative_eq!(size.x, expected_width, epsilon = 1e-6);
        assert_relative_eq!(size.y, 4.0, epsilon = 1e-6);
        assert_relative_eq!(size.z, 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_box_size_remapped_for_x_axis() {
        let y_config = ColliderConfig::default()
            .with_sides(10)
            .with_radius(1.5)
            .with_height(3.0);
        let x_config = y_config.clone().with_axis(Axis::X);

        let y_size = box_size(&y_config);
        let x_size = box_size(&x_config);

        // X axis swaps the width and length components, keeps depth
        assert_eq!(x_size, Vec3::new(y_size.y, y_size.x, y_size.z));
    }

    #[test]
    fn test_bounds_size() {
        let config = ColliderConfig::default()
            .with_sides(8)
            .with_radius(3.0)
            .with_height(5.0);

        assert_eq!(bounds_size(&config), Vec3::new(6.0, 5.0, 6.0));
        assert_eq!(
            bounds_size(&config.with_axis(Axis::Z)),
            Vec3::new(6.0, 6.0, 5.0)
        );
    }

    #[test]
    fn test_degenerate_dimensions_are_accepted() {
        let flat = ColliderConfig::default().with_radius(0.0).with_height(0.0);
        let size = box_size(&flat);

        assert_eq!(size, Vec3::zeros());
        assert_eq!(bounds_size(&flat), Vec3::zeros());
    }
}
