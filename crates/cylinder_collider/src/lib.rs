//! # Cylinder Collider
//!
//! Approximates a cylindrical collision volume with a ring of oriented box
//! colliders, for physics engines that have no native cylinder primitive.
//!
//! The configuration (`sides`, `radius`, `height`, `center`, long axis,
//! trigger flag, material) is the single source of truth; the generated
//! child primitives are a derived materialization that is validated
//! against it and fully rebuilt when stale. Regeneration is an explicit,
//! authoring-time action.
//!
//! ## Quick Start
//!
//! ```rust
//! use cylinder_collider::prelude::*;
//!
//! let mut graph = LocalSceneGraph::new();
//! let mut collider = CylinderCollider::new(
//!     ColliderConfig::default()
//!         .with_sides(12)
//!         .with_radius(0.5)
//!         .with_height(2.0),
//! );
//!
//! collider.regenerate(&mut graph, Mode::Authoring);
//! assert!(collider.is_consistent(&graph, Mode::Authoring));
//! assert_eq!(collider.primitive_count(), 6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod collider;
pub mod config;
pub mod debug;
pub mod foundation;
pub mod scene;

/// Common imports for library users
pub mod prelude {
    pub use crate::collider::{
        holder_name, Axis, ColliderConfig, CylinderCollider, Mode, MAX_SIDES, MIN_SIDES,
    };
    pub use crate::config::{Config, ConfigError};
    pub use crate::debug::{ColliderPreview, DebugShape};
    pub use crate::foundation::math::{Quat, Vec3};
    pub use crate::scene::{Aabb, BoxShape, LocalSceneGraph, MaterialHandle, NodeKey, SceneGraph};
}
