/// SceneNode — one drawable entry in a Scene.
///
/// Holds a shared mesh and its world transform. Nodes are created and
/// mutated exclusively through the owning Scene.

use std::sync::{Arc, Mutex};
use glam::Mat4;
use crate::mesh::Mesh;

/// A drawable scene entry: shared mesh + world matrix.
pub struct SceneNode {
    mesh: Arc<Mutex<Mesh>>,
    world_matrix: Mat4,
}

impl SceneNode {
    /// Create a new node (internal: only via Scene::add_mesh)
    pub(crate) fn new(mesh: Arc<Mutex<Mesh>>, world_matrix: Mat4) -> Self {
        Self { mesh, world_matrix }
    }

    /// The node's mesh.
    pub fn mesh(&self) -> &Arc<Mutex<Mesh>> {
        &self.mesh
    }

    /// The node's world transform.
    pub fn world_matrix(&self) -> &Mat4 {
        &self.world_matrix
    }

    pub(crate) fn set_world_matrix(&mut self, matrix: Mat4) {
        self.world_matrix = matrix;
    }
}
