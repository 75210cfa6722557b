//! Math utilities and types
//!
//! Provides the fundamental math types shared by the geometry calculator
//! and the scene model.

pub use nalgebra::{Quaternion, Unit, Vector3, Vector4};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Build a rotation about `axis` (assumed unit length) by `angle_deg` degrees.
pub fn rotation_about_axis(axis: Vec3, angle_deg: f32) -> Quat {
    Quat::from_axis_angle(&Unit::new_normalize(axis), utils::deg_to_rad(angle_deg))
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// A straight angle, in degrees
    pub const STRAIGHT_ANGLE: f32 = 180.0;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }
}
