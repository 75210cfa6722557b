//! Collider synchronizer
//!
//! Owns the authoring configuration and the set of generated holder
//! nodes, validates whether the generated set still matches the
//! configuration, and rebuilds it wholesale when it does not.

use crate::collider::config::ColliderConfig;
use crate::collider::geometry;
use crate::foundation::math::{rotation_about_axis, Vec3};
use crate::scene::{Aabb, NodeKey, SceneGraph};

/// Reserved name prefix for generated holder nodes.
///
/// The synchronizer exclusively owns children matching this pattern; no
/// other component may create nodes with these names without corrupting
/// validation.
pub const HOLDER_NAME_PREFIX: &str = "collider_holder_q5yTiMRz_";

/// Whether the host is being authored or actively simulated.
///
/// Mutation of generated primitives is only permitted while authoring; at
/// runtime whatever primitives exist are trusted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Editing by a user; regeneration allowed
    Authoring,
    /// Simulation running; generated primitives are read-only
    Runtime,
}

/// Name of the generated holder at the given index
pub fn holder_name(index: usize) -> String {
    format!("{HOLDER_NAME_PREFIX}{index}")
}

/// An approximation of a cylinder collider using compound box primitives.
///
/// The configuration is the single source of truth; the generated holders
/// are a derived materialization that is either exactly consistent with it
/// or gets fully destroyed and recreated. There is no partial-update path:
/// a side-count change alters the primitive count itself and would
/// invalidate the index-to-angle correspondence of any patched subset.
///
/// All operations are synchronous and must be serialized by the caller;
/// there is no internal locking.
#[derive(Debug, Default)]
pub struct CylinderCollider {
    config: ColliderConfig,
    holders: Vec<NodeKey>,
}

impl CylinderCollider {
    /// Create a synchronizer for the given configuration
    pub fn new(config: ColliderConfig) -> Self {
        Self {
            config,
            holders: Vec::new(),
        }
    }

    /// The current authoring configuration
    pub fn config(&self) -> &ColliderConfig {
        &self.config
    }

    /// Replace the configuration. The generated holders become stale until
    /// the next [`regenerate`](Self::regenerate).
    pub fn set_config(&mut self, config: ColliderConfig) {
        self.config = config;
    }

    /// Mutate the configuration in place
    pub fn update_config(&mut self, f: impl FnOnce(&mut ColliderConfig)) {
        f(&mut self.config);
    }

    /// Handles of the holders created by the last regeneration.
    ///
    /// A cache of the last generation; validation re-discovers holders by
    /// name so out-of-band scene edits are still detected.
    pub fn holders(&self) -> &[NodeKey] {
        &self.holders
    }

    /// Number of generated box primitives for the current configuration
    pub fn primitive_count(&self) -> u32 {
        self.config.primitive_count()
    }

    /// Unit vector along the cylinder's long axis in local space
    pub fn direction_vector(&self) -> Vec3 {
        self.config.direction_vector()
    }

    /// Axis-aligned bounds of the approximation
    pub fn bounds(&self) -> Aabb {
        self.config.bounds()
    }

    /// Probe the reserved name pattern for indices 0, 1, 2, ... until a
    /// name is not found, returning the discovered holder nodes in order.
    fn discover_holders(graph: &dyn SceneGraph) -> Vec<NodeKey> {
        let mut discovered = Vec::new();

        while let Some(key) = graph.find_child(&holder_name(discovered.len())) {
            discovered.push(key);
        }
        discovered
    }

    /// Check whether the generated holders match the configuration.
    ///
    /// In [`Mode::Runtime`] this always reports consistent: no mutation is
    /// permitted then, so whatever primitives exist must be trusted.
    pub fn is_consistent(&self, graph: &dyn SceneGraph, mode: Mode) -> bool {
        if mode == Mode::Runtime {
            return true;
        }
        let discovered = Self::discover_holders(graph);

        if discovered.len() as u32 != self.config.primitive_count() {
            return false;
        }
        // Defensive existence probe: the chain must truly end here
        if graph.find_child(&holder_name(discovered.len())).is_some() {
            return false;
        }
        for key in discovered {
            // A holder without a shape is consistent by omission; only
            // shape-bearing holders are checked.
            if let Some(shape) = graph.box_shape(key) {
                let center_matches = graph.local_position(key) == Some(self.config.center());
                let bounds_match = shape.bounds.size() == self.config.bounds_size();
                // The bounds alone cannot distinguish an axis swap when
                // height == diameter; the box extents always can, since
                // width == depth would need tan(step / 2) = 1.
                let size_matches = shape.size == self.config.box_size();
                let trigger_matches = shape.is_trigger == self.config.is_trigger();
                let material_matches = shape.material == self.config.material();

                if !(center_matches && bounds_match && size_matches && trigger_matches
                    && material_matches)
                {
                    return false;
                }
            }
        }
        true
    }

    /// Destroy stale holders and materialize a fresh set from the
    /// configuration. Idempotent: if the existing holders are already
    /// consistent this is a no-op, as is any call in [`Mode::Runtime`].
    pub fn regenerate(&mut self, graph: &mut dyn SceneGraph, mode: Mode) {
        if mode == Mode::Runtime {
            log::debug!("regenerate requested at runtime; ignoring");
            return;
        }
        if self.is_consistent(graph, mode) {
            log::debug!("collider holders already consistent; nothing to do");
            return;
        }
        let stale = Self::discover_holders(graph);
        for key in &stale {
            graph.destroy(*key);
        }

        let count = self.config.primitive_count();
        let step_deg = geometry::angle_step_deg(count);
        let size = self.config.box_size();
        let axis = self.config.direction_vector();
        let bounds = self.config.bounds();

        self.holders.clear();
        for i in 0..count {
            let key = graph.create_child(&holder_name(i as usize));
            graph.set_local_position(key, self.config.center());
            graph.set_local_rotation(key, rotation_about_axis(axis, step_deg * i as f32));
            graph.attach_box_shape(key, size);
            if let Some(shape) = graph.box_shape_mut(key) {
                shape.is_trigger = self.config.is_trigger();
                shape.material = self.config.material();
                shape.bounds = bounds;
            }
            // Derived artifact, not authored data
            graph.set_protected(key, true);
            self.holders.push(key);
        }

        log::info!(
            "regenerated cylinder collider: {} holders ({} destroyed), step {:.2}°",
            count,
            stale.len(),
            step_deg
        );
    }
}
