/// Mesh — quad geometry plus material plus an extensible before-render hook.
///
/// Meshes are shared as `Arc<Mutex<Mesh>>`: the owning entity mutates the
/// material and geometry, while any scene that contains the mesh reads it at
/// draw time. Renderers fire the before-render hook immediately before
/// drawing the mesh.

use crate::geometry::QuadGeometry;
use crate::material::ShaderMaterial;

/// Callback invoked by renderers immediately before the mesh is drawn.
///
/// The hook must not lock the mesh it is installed on.
pub type BeforeRenderHook = Box<dyn FnMut() + Send>;

/// Drawable mesh: geometry + material + optional before-render hook.
pub struct Mesh {
    geometry: QuadGeometry,
    material: ShaderMaterial,
    before_render: Option<BeforeRenderHook>,
}

impl Mesh {
    /// Create a mesh from geometry and material.
    pub fn new(geometry: QuadGeometry, material: ShaderMaterial) -> Self {
        Self {
            geometry,
            material,
            before_render: None,
        }
    }

    /// Mesh geometry.
    pub fn geometry(&self) -> &QuadGeometry {
        &self.geometry
    }

    /// Mutable mesh geometry.
    pub fn geometry_mut(&mut self) -> &mut QuadGeometry {
        &mut self.geometry
    }

    /// Mesh material.
    pub fn material(&self) -> &ShaderMaterial {
        &self.material
    }

    /// Mutable mesh material.
    pub fn material_mut(&mut self) -> &mut ShaderMaterial {
        &mut self.material
    }

    /// Replace the material.
    pub fn set_material(&mut self, material: ShaderMaterial) {
        self.material = material;
    }

    /// Install the before-render hook, replacing any existing one.
    pub fn set_before_render(&mut self, hook: BeforeRenderHook) {
        self.before_render = Some(hook);
    }

    /// Remove the before-render hook.
    pub fn clear_before_render(&mut self) {
        self.before_render = None;
    }

    /// Whether a before-render hook is installed.
    pub fn has_before_render(&self) -> bool {
        self.before_render.is_some()
    }

    /// Fire the before-render hook, if installed.
    ///
    /// Called by renderer implementations immediately before drawing.
    pub fn fire_before_render(&mut self) {
        if let Some(hook) = self.before_render.as_mut() {
            hook();
        }
    }
}

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
