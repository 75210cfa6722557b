//! Box collision shape component

use crate::foundation::math::Vec3;
use crate::scene::bounds::Aabb;
use serde::{Deserialize, Serialize};

/// Opaque handle to a physics material resource.
///
/// The library never interprets the referenced resource; handles are only
/// copied onto generated shapes and compared for equality during
/// validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialHandle(pub u32);

/// Box-shaped collision primitive attached to a scene node.
///
/// Extents are expressed in the node's local space. `bounds` is the
/// engine-reported axis-aligned bounds recorded when the shape was
/// attached; the synchronizer uses it during validation.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxShape {
    /// Full extents (width, height, depth) of the box
    pub size: Vec3,

    /// Trigger volumes report overlaps but produce no physical response
    pub is_trigger: bool,

    /// Physics material applied to the shape, if any
    pub material: Option<MaterialHandle>,

    /// Recorded axis-aligned bounds of the shape
    pub bounds: Aabb,
}

impl BoxShape {
    /// Create a box shape with the given extents, centered at the origin
    pub fn new(size: Vec3) -> Self {
        Self {
            size,
            is_trigger: false,
            material: None,
            bounds: Aabb::from_center_size(Vec3::zeros(), size),
        }
    }
}
