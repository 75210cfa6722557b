//! Debug visualization helpers

mod draw;
mod preview;

pub use draw::{DebugDrawSystem, DebugShape};
pub use preview::{ColliderPreview, PreviewColors};
