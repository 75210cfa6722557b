//! Scene model: bounds, box shapes, and the scene graph seam

mod bounds;
mod graph;
mod shape;

pub use bounds::Aabb;
pub use graph::{LocalSceneGraph, NodeKey, SceneGraph};
pub use shape::{BoxShape, MaterialHandle};
