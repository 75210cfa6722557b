//! Scene graph collaborator trait and a local implementation
//!
//! The collider synchronizer only needs a handful of scene primitives:
//! named child creation and lookup, destruction, local transform access,
//! and box shape attachment. The [`SceneGraph`] trait captures exactly
//! that seam so the library can drive any host scene system; the
//! slotmap-backed [`LocalSceneGraph`] is the in-process implementation
//! used by the demo and the tests.

use crate::foundation::math::{Quat, Vec3};
use crate::scene::shape::BoxShape;
use slotmap::SlotMap;
use std::collections::HashMap;

slotmap::new_key_type! {
    /// Stable handle to a scene node
    pub struct NodeKey;
}

/// Scene graph primitives required by the collider synchronizer.
///
/// Accessors taking a [`NodeKey`] return `None` (or silently no-op for
/// setters) when the key no longer refers to a live node.
pub trait SceneGraph {
    /// Create a child node with the given name and return its handle
    fn create_child(&mut self, name: &str) -> NodeKey;

    /// Find a child node by name
    fn find_child(&self, name: &str) -> Option<NodeKey>;

    /// Destroy a node. Returns true if the node existed.
    fn destroy(&mut self, key: NodeKey) -> bool;

    /// Get a node's local position
    fn local_position(&self, key: NodeKey) -> Option<Vec3>;

    /// Set a node's local position
    fn set_local_position(&mut self, key: NodeKey, position: Vec3);

    /// Get a node's local rotation
    fn local_rotation(&self, key: NodeKey) -> Option<Quat>;

    /// Set a node's local rotation
    fn set_local_rotation(&mut self, key: NodeKey, rotation: Quat);

    /// Attach a box shape with the given extents to a node
    fn attach_box_shape(&mut self, key: NodeKey, size: Vec3);

    /// Get a node's box shape, if one is attached
    fn box_shape(&self, key: NodeKey) -> Option<&BoxShape>;

    /// Get mutable access to a node's box shape, if one is attached
    fn box_shape_mut(&mut self, key: NodeKey) -> Option<&mut BoxShape>;

    /// Mark a node as protected (a derived artifact, not authored data)
    fn set_protected(&mut self, key: NodeKey, protected: bool);

    /// Check whether a node is marked protected
    fn is_protected(&self, key: NodeKey) -> bool;
}

/// A scene node: name, local transform, and an optional box shape
#[derive(Debug, Clone)]
struct Node {
    name: String,
    local_position: Vec3,
    local_rotation: Quat,
    shape: Option<BoxShape>,
    protected: bool,
}

impl Node {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            local_position: Vec3::zeros(),
            local_rotation: Quat::identity(),
            shape: None,
            protected: false,
        }
    }
}

/// In-process scene graph with name-indexed child lookup.
///
/// Node names are expected to be unique; creating a second node with an
/// existing name makes the newest node the one found by name lookup.
#[derive(Default)]
pub struct LocalSceneGraph {
    nodes: SlotMap<NodeKey, Node>,
    by_name: HashMap<String, NodeKey>,
}

impl LocalSceneGraph {
    /// Create an empty scene graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the name of a node
    pub fn name(&self, key: NodeKey) -> Option<&str> {
        self.nodes.get(key).map(|node| node.name.as_str())
    }
}

impl SceneGraph for LocalSceneGraph {
    fn create_child(&mut self, name: &str) -> NodeKey {
        let key = self.nodes.insert(Node::new(name));
        self.by_name.insert(name.to_string(), key);
        key
    }

    fn find_child(&self, name: &str) -> Option<NodeKey> {
        self.by_name.get(name).copied()
    }

    fn destroy(&mut self, key: NodeKey) -> bool {
        match self.nodes.remove(key) {
            Some(node) => {
                // Only drop the name mapping if it still points at this node
                if self.by_name.get(&node.name) == Some(&key) {
                    self.by_name.remove(&node.name);
                }
                true
            }
            None => false,
        }
    }

    fn local_position(&self, key: NodeKey) -> Option<Vec3> {
        self.nodes.get(key).map(|node| node.local_position)
    }

    fn set_local_position(&mut self, key: NodeKey, position: Vec3) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.local_position = position;
        }
    }

    fn local_rotation(&self, key: NodeKey) -> Option<Quat> {
        self.nodes.get(key).map(|node| node.local_rotation)
    }

    fn set_local_rotation(&mut self, key: NodeKey, rotation: Quat) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.local_rotation = rotation;
        }
    }

    fn attach_box_shape(&mut self, key: NodeKey, size: Vec3) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.shape = Some(BoxShape::new(size));
        }
    }

    fn box_shape(&self, key: NodeKey) -> Option<&BoxShape> {
        self.nodes.get(key).and_then(|node| node.shape.as_ref())
    }

    fn box_shape_mut(&mut self, key: NodeKey) -> Option<&mut BoxShape> {
        self.nodes.get_mut(key).and_then(|node| node.shape.as_mut())
    }

    fn set_protected(&mut self, key: NodeKey, protected: bool) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.protected = protected;
        }
    }

    fn is_protected(&self, key: NodeKey) -> bool {
        self.nodes.get(key).is_some_and(|node| node.protected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_find_by_name() {
        let mut graph = LocalSceneGraph::new();
        let key = graph.create_child("holder_0");

        assert_eq!(graph.find_child("holder_0"), Some(key));
        assert_eq!(graph.find_child("holder_1"), None);
        assert_eq!(graph.name(key), Some("holder_0"));
    }

    #[test]
    fn test_destroy_removes_name_mapping() {
        let mut graph = LocalSceneGraph::new();
        let key = graph.create_child("holder_0");

        assert!(graph.destroy(key));
        assert!(graph.find_child("holder_0").is_none());
        assert!(graph.is_empty());

        // Destroying again is a no-op
        assert!(!graph.destroy(key));
    }

    #[test]
    fn test_stale_keys_return_none() {
        let mut graph = LocalSceneGraph::new();
        let key = graph.create_child("holder_0");
        graph.destroy(key);

        assert!(graph.local_position(key).is_none());
        assert!(graph.box_shape(key).is_none());
        assert!(!graph.is_protected(key));

        // Setters on stale keys are silent no-ops
        graph.set_local_position(key, Vec3::new(1.0, 2.0, 3.0));
        graph.attach_box_shape(key, Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_transform_and_shape_storage() {
        let mut graph = LocalSceneGraph::new();
        let key = graph.create_child("node");

        let position = Vec3::new(0.5, 1.0, -2.0);
        graph.set_local_position(key, position);
        assert_eq!(graph.local_position(key), Some(position));
        assert_eq!(graph.local_rotation(key), Some(Quat::identity()));

        graph.attach_box_shape(key, Vec3::new(2.0, 4.0, 2.0));
        let shape = graph.box_shape(key).unwrap();
        assert_eq!(shape.size, Vec3::new(2.0, 4.0, 2.0));
        assert!(!shape.is_trigger);
        assert!(shape.material.is_none());

        graph.set_protected(key, true);
        assert!(graph.is_protected(key));
    }
}
