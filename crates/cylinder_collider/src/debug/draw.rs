//! Debug drawing primitives
//!
//! A retained list of simple wireframe shapes that a host renderer can
//! consume. The library only fills the list; drawing is the host's job.

use crate::foundation::math::{Quat, Vec3, Vec4};

/// Debug shape primitives that can be rendered for visualization
#[derive(Clone, Debug, PartialEq)]
pub enum DebugShape {
    /// Line segment from start to end
    Line {
        /// Segment start point
        start: Vec3,
        /// Segment end point
        end: Vec3,
        /// RGBA color
        color: Vec4,
    },

    /// Oriented box at center with full extents
    Box {
        /// Box center
        center: Vec3,
        /// Full extents (width, height, depth)
        size: Vec3,
        /// Box orientation
        rotation: Quat,
        /// RGBA color
        color: Vec4,
        /// Draw as wireframe rather than solid
        wireframe: bool,
    },
}

/// Retained debug shape list with a master enable flag
pub struct DebugDrawSystem {
    shapes: Vec<DebugShape>,

    /// Master enable/disable flag
    pub enabled: bool,
}

impl DebugDrawSystem {
    /// Create a new debug draw system
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            enabled: true,
        }
    }

    /// Queue a line segment
    pub fn draw_line(&mut self, start: Vec3, end: Vec3, color: Vec4) {
        if !self.enabled {
            return;
        }
        self.shapes.push(DebugShape::Line { start, end, color });
    }

    /// Queue an oriented wireframe box
    pub fn draw_wire_box(&mut self, center: Vec3, size: Vec3, rotation: Quat, color: Vec4) {
        if !self.enabled {
            return;
        }
        self.shapes.push(DebugShape::Box {
            center,
            size,
            rotation,
            color,
            wireframe: true,
        });
    }

    /// All queued shapes, in submission order
    pub fn shapes(&self) -> &[DebugShape] {
        &self.shapes
    }

    /// Discard all queued shapes
    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}

impl Default for DebugDrawSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapes_retained_in_order() {
        let mut draw = DebugDrawSystem::new();
        draw.draw_line(Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0), Vec4::zeros());
        draw.draw_wire_box(
            Vec3::zeros(),
            Vec3::new(1.0, 1.0, 1.0),
            Quat::identity(),
            Vec4::zeros(),
        );

        assert_eq!(draw.shapes().len(), 2);
        assert!(matches!(draw.shapes()[0], DebugShape::Line { .. }));
        assert!(matches!(draw.shapes()[1], DebugShape::Box { .. }));

        draw.clear();
        assert!(draw.shapes().is_empty());
    }

    #[test]
    fn test_disabled_system_drops_shapes() {
        let mut draw = DebugDrawSystem::new();
        draw.enabled = false;
        draw.draw_line(Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0), Vec4::zeros());

        assert!(draw.shapes().is_empty());
    }
}
