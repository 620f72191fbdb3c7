/// Rect — a positioned rectangle entity with a shared quad mesh.
///
/// The mesh starts with a minimal placeholder material; owners install their
/// own. The mesh is shared (`Arc<Mutex<Mesh>>`) so the caller can insert it
/// into a scene while the owning entity keeps mutating it.

use std::sync::{Arc, Mutex};
use glam::Vec2;
use crate::error::Result;
use crate::vista_err;
use crate::geometry::QuadGeometry;
use crate::material::ShaderMaterial;
use crate::mesh::Mesh;
use crate::renderer::WrapMode;

/// Rect creation descriptor
#[derive(Debug, Clone)]
pub struct RectDesc {
    /// Layout position (center offset, layout units)
    pub position: Vec2,
    /// Layout size (width, height in layout units)
    pub size: Vec2,
    /// Texture wrap mode for the rect's material
    pub wrap_mode: WrapMode,
}

impl Default for RectDesc {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            size: Vec2::ONE,
            wrap_mode: WrapMode::ClampToEdge,
        }
    }
}

/// A positioned rectangle entity displaying a quad mesh.
pub struct Rect {
    position: Vec2,
    size: Vec2,
    wrap_mode: WrapMode,
    mesh: Arc<Mutex<Mesh>>,
}

impl Rect {
    /// Create a rect from a descriptor.
    pub fn new(desc: RectDesc) -> Self {
        let geometry = QuadGeometry::new(desc.size.x, desc.size.y);
        let mesh = Mesh::new(geometry, ShaderMaterial::basic());
        Self {
            position: desc.position,
            size: desc.size,
            wrap_mode: desc.wrap_mode,
            mesh: Arc::new(Mutex::new(mesh)),
        }
    }

    /// Layout position.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Set the layout position.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Layout size.
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Set the layout size and rebuild the quad geometry to match.
    pub fn set_size(&mut self, size: Vec2) -> Result<()> {
        self.size = size;
        let mut mesh = self.mesh.lock().map_err(|_| {
            vista_err!("vista3d::Rect", "Mesh lock poisoned")
        })?;
        mesh.geometry_mut().set_size(size.x, size.y);
        Ok(())
    }

    /// Layout width.
    pub fn width(&self) -> f32 {
        self.size.x
    }

    /// Layout height.
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Texture wrap mode.
    pub fn wrap_mode(&self) -> WrapMode {
        self.wrap_mode
    }

    /// The rect's mesh, shared for scene insertion.
    pub fn mesh(&self) -> &Arc<Mutex<Mesh>> {
        &self.mesh
    }
}

#[cfg(test)]
#[path = "rect_tests.rs"]
mod tests;
