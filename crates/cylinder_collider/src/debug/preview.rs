//! Wireframe preview of a compound cylinder collider
//!
//! Consumes core outputs only (direction vector, bounds, primitive count,
//! box size, angular step); never mutates the collider or the scene.

use crate::collider::CylinderCollider;
use crate::debug::draw::{DebugDrawSystem, DebugShape};
use crate::foundation::math::{rotation_about_axis, Vec4};

/// Color scheme for the collider preview
#[derive(Clone, Debug)]
pub struct PreviewColors {
    /// Color for the per-primitive wireframe boxes
    pub primitive: Vec4,

    /// Color for the overall bounds box
    pub bounds: Vec4,
}

impl Default for PreviewColors {
    fn default() -> Self {
        Self {
            primitive: Vec4::new(0.2, 0.8, 0.098, 1.0), // Green
            bounds: Vec4::new(0.5, 0.8, 1.0, 0.5),      // Light blue
        }
    }
}

/// Collider preview visualizer.
///
/// Emits one wireframe box per generated primitive, each rotated by the
/// angular step about the cylinder's long axis, plus the overall
/// axis-aligned bounds box.
pub struct ColliderPreview {
    debug_draw: DebugDrawSystem,
    colors: PreviewColors,

    /// Show the per-primitive boxes
    pub show_primitives: bool,

    /// Show the overall bounds box
    pub show_bounds: bool,
}

impl ColliderPreview {
    /// Create a preview with default colors
    pub fn new() -> Self {
        Self {
            debug_draw: DebugDrawSystem::new(),
            colors: PreviewColors::default(),
            show_primitives: true,
            show_bounds: true,
        }
    }

    /// Set a custom color scheme
    pub fn with_colors(mut self, colors: PreviewColors) -> Self {
        self.colors = colors;
        self
    }

    /// Queue the preview shapes for a collider
    pub fn draw(&mut self, collider: &CylinderCollider) {
        let count = collider.primitive_count();
        let step_deg = collider.config().angle_step_deg();
        let size = collider.config().box_size();
        let axis = collider.direction_vector();
        let bounds = collider.bounds();

        if self.show_primitives {
            for i in 0..count {
                let rotation = rotation_about_axis(axis, step_deg * i as f32);
                self.debug_draw
                    .draw_wire_box(bounds.center(), size, rotation, self.colors.primitive);
            }
        }
        if self.show_bounds {
            self.debug_draw.draw_wire_box(
                bounds.center(),
                bounds.size(),
                crate::foundation::math::Quat::identity(),
                self.colors.bounds,
            );
        }
    }

    /// All queued preview shapes
    pub fn shapes(&self) -> &[DebugShape] {
        self.debug_draw.shapes()
    }

    /// Discard all queued shapes
    pub fn clear(&mut self) {
        self.debug_draw.clear();
    }
}

impl Default for ColliderPreview {
    fn default() -> Self {
        Self::new()
    }
}
