//! Compound cylinder collider: configuration, geometry, synchronization

mod config;
pub mod geometry;
mod synchronizer;

pub use config::{Axis, ColliderConfig, MAX_SIDES, MIN_SIDES};
pub use synchronizer::{holder_name, CylinderCollider, Mode, HOLDER_NAME_PREFIX};
