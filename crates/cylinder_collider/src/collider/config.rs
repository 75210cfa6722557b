//! Collider authoring parameters

use crate::collider::geometry;
use crate::config::Config;
use crate::foundation::math::Vec3;
use crate::scene::{Aabb, MaterialHandle};
use serde::{Deserialize, Serialize};

/// Minimum number of polygon sides (a hexagonal approximation)
pub const MIN_SIDES: u32 = 6;

/// Maximum number of polygon sides
pub const MAX_SIDES: u32 = 72;

/// Which local axis is the cylinder's long axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Local X axis
    X,
    /// Local Y axis
    #[default]
    Y,
    /// Local Z axis
    Z,
}

/// Authoring parameters for the compound cylinder collider.
///
/// `sides` is kept even and within `[MIN_SIDES, MAX_SIDES]` at every
/// mutation point; the generated primitive count is `sides / 2`. Fields
/// are private so the invariant cannot be bypassed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColliderConfig {
    sides: u32,
    radius: f32,
    height: f32,
    center: Vec3,
    axis: Axis,
    is_trigger: bool,
    material: Option<MaterialHandle>,
}

impl Default for ColliderConfig {
    fn default() -> Self {
        Self {
            sides: MIN_SIDES,
            radius: 1.0,
            height: 1.0,
            center: Vec3::zeros(),
            axis: Axis::Y,
            is_trigger: false,
            material: None,
        }
    }
}

impl Config for ColliderConfig {
    fn sanitize(&mut self) {
        self.sides = sanitize_sides(self.sides);
        self.radius = self.radius.max(0.0);
        self.height = self.height.max(0.0);
    }
}

/// Clamp to the valid range, then mask off the low bit to force evenness
fn sanitize_sides(sides: u32) -> u32 {
    sides.clamp(MIN_SIDES, MAX_SIDES) & !1
}

impl ColliderConfig {
    /// Number of polygon sides in the approximation
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Cylinder radius
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Cylinder height along the long axis
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Offset of the cylinder from the owning object's origin
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// The cylinder's long axis
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Whether generated primitives are trigger volumes
    pub fn is_trigger(&self) -> bool {
        self.is_trigger
    }

    /// Physics material mirrored onto generated primitives
    pub fn material(&self) -> Option<MaterialHandle> {
        self.material
    }

    /// Set the side count (coerced even and into `[MIN_SIDES, MAX_SIDES]`)
    pub fn set_sides(&mut self, sides: u32) {
        self.sides = sanitize_sides(sides);
    }

    /// Set the radius (clamped non-negative)
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.max(0.0);
    }

    /// Set the height (clamped non-negative)
    pub fn set_height(&mut self, height: f32) {
        self.height = height.max(0.0);
    }

    /// Set the center offset
    pub fn set_center(&mut self, center: Vec3) {
        self.center = center;
    }

    /// Set the long axis
    pub fn set_axis(&mut self, axis: Axis) {
        self.axis = axis;
    }

    /// Set the trigger flag
    pub fn set_is_trigger(&mut self, is_trigger: bool) {
        self.is_trigger = is_trigger;
    }

    /// Set the physics material reference
    pub fn set_material(&mut self, material: Option<MaterialHandle>) {
        self.material = material;
    }

    /// Builder: side count
    pub fn with_sides(mut self, sides: u32) -> Self {
        self.set_sides(sides);
        self
    }

    /// Builder: radius
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.set_radius(radius);
        self
    }

    /// Builder: height
    pub fn with_height(mut self, height: f32) -> Self {
        self.set_height(height);
        self
    }

    /// Builder: center offset
    pub fn with_center(mut self, center: Vec3) -> Self {
        self.set_center(center);
        self
    }

    /// Builder: long axis
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.set_axis(axis);
        self
    }

    /// Builder: trigger flag
    pub fn with_trigger(mut self, is_trigger: bool) -> Self {
        self.set_is_trigger(is_trigger);
        self
    }

    /// Builder: physics material reference
    pub fn with_material(mut self, material: Option<MaterialHandle>) -> Self {
        self.set_material(material);
        self
    }

    /// Derive radius and height from an existing bounding box, e.g. the
    /// render mesh of the object being approximated.
    pub fn fit_to_bounds(&mut self, bounds: &Aabb) {
        let size = bounds.size();
        self.set_height(size.y);
        self.set_radius((size.x + size.z) * 0.25);
    }

    /// Number of generated box primitives: `sides / 2`
    pub fn primitive_count(&self) -> u32 {
        geometry::primitive_count(self)
    }

    /// Rotation between consecutive primitives, in degrees
    pub fn angle_step_deg(&self) -> f32 {
        geometry::angle_step_deg(self.primitive_count())
    }

    /// Unit vector along the cylinder's long axis in local space
    pub fn direction_vector(&self) -> Vec3 {
        geometry::direction_vector(self.axis)
    }

    /// Extents of one generated box primitive
    pub fn box_size(&self) -> Vec3 {
        geometry::box_size(self)
    }

    /// Size of the box enclosing the whole approximation
    pub fn bounds_size(&self) -> Vec3 {
        geometry::bounds_size(self)
    }

    /// Axis-aligned bounds of the approximation, at the center offset
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.center, self.bounds_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_sides_coerced_down() {
        let mut config = ColliderConfig::default();
        config.set_sides(7);
        assert_eq!(config.sides(), 6);

        config.set_sides(71);
        assert_eq!(config.sides(), 70);
    }

    #[test]
    fn test_sides_clamped_to_range() {
        let config = ColliderConfig::default().with_sides(2);
        assert_eq!(config.sides(), MIN_SIDES);

        let config = ColliderConfig::default().with_sides(100);
        assert_eq!(config.sides(), MAX_SIDES);

        // Clamp happens before masking: 73 -> 72, not 72 -> ... -> 72
        let config = ColliderConfig::default().with_sides(73);
        assert_eq!(config.sides(), 72);
    }

    #[test]
    fn test_negative_dimensions_clamped() {
        let config = ColliderConfig::default().with_radius(-1.0).with_height(-2.0);
        assert_eq!(config.radius(), 0.0);
        assert_eq!(config.height(), 0.0);
    }

    #[test]
    fn test_sanitize_restores_invariants() {
        // Simulates a config that arrived from disk with raw field values
        let mut config = ColliderConfig::default();
        config.sides = 9;
        config.radius = -3.0;

        config.sanitize();
        assert_eq!(config.sides(), 8);
        assert_eq!(config.radius(), 0.0);
    }

    #[test]
    fn test_ron_roundtrip_preserves_config() {
        let config = ColliderConfig::default()
            .with_sides(12)
            .with_radius(2.0)
            .with_height(3.0)
            .with_axis(Axis::Z)
            .with_trigger(true)
            .with_material(Some(MaterialHandle(7)));

        let text = ron::to_string(&config).unwrap();
        let parsed: ColliderConfig = ron::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_fit_to_bounds() {
        let mut config = ColliderConfig::default();
        let mesh_bounds = Aabb::from_center_size(Vec3::zeros(), Vec3::new(2.0, 5.0, 4.0));

        config.fit_to_bounds(&mesh_bounds);
        assert_eq!(config.height(), 5.0);
        assert_eq!(config.radius(), 1.5);
    }

    #[test]
    fn test_bounds_accessor_centered_on_offset() {
        let center = Vec3::new(1.0, 2.0, 3.0);
        let config = ColliderConfig::default()
            .with_radius(1.0)
            .with_height(2.0)
            .with_center(center);

        let bounds = config.bounds();
        assert_eq!(bounds.center(), center);
        assert_eq!(bounds.size(), Vec3::new(2.0, 2.0, 2.0));
    }
}
