/// Scene — a collection of SceneNodes for rendering.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys.
/// Nodes are stored contiguously for cache-friendly iteration.

use std::sync::{Arc, Mutex};
use slotmap::SlotMap;
use glam::Mat4;
use crate::mesh::Mesh;
use super::scene_node::SceneNode;

slotmap::new_key_type! {
    /// Stable key for a node in a Scene
    pub struct SceneNodeKey;
}

/// A renderable scene containing SceneNodes.
///
/// Nodes are managed via stable keys (SceneNodeKey). Keys remain valid even
/// after other nodes are removed.
pub struct Scene {
    /// Scene nodes stored in a slot map for O(1) insert/remove
    nodes: SlotMap<SceneNodeKey, SceneNode>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }

    /// Add a mesh to the scene with the given world transform
    ///
    /// Returns a stable key that remains valid until the node is removed.
    pub fn add_mesh(&mut self, mesh: Arc<Mutex<Mesh>>, world_matrix: Mat4) -> SceneNodeKey {
        self.nodes.insert(SceneNode::new(mesh, world_matrix))
    }

    /// Remove a node from the scene. Returns false if the key is invalid.
    pub fn remove_node(&mut self, key: SceneNodeKey) -> bool {
        self.nodes.remove(key).is_some()
    }

    /// Get a node by key
    pub fn node(&self, key: SceneNodeKey) -> Option<&SceneNode> {
        self.nodes.get(key)
    }

    /// Set the world matrix of a node. Returns false if the key is invalid.
    pub fn set_world_matrix(&mut self, key: SceneNodeKey, matrix: Mat4) -> bool {
        if let Some(node) = self.nodes.get_mut(key) {
            node.set_world_matrix(matrix);
            true
        } else {
            false
        }
    }

    /// Iterate over all nodes (key, node)
    pub fn nodes(&self) -> impl Iterator<Item = (SceneNodeKey, &SceneNode)> {
        self.nodes.iter()
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// True if the scene has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove all nodes
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
