/// Shader material — vertex/fragment shader source text plus named uniforms.
///
/// A ShaderMaterial is a pure data description of how a mesh is shaded.
/// No GPU resources are created at this level; the renderer backend compiles
/// the shader sources and resolves the uniform bindings when it draws.

use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::error::Result;
use crate::vista_bail;
use crate::renderer::Texture;

// ===== UNIFORM VALUES =====

/// A typed uniform value for the material
#[derive(Clone)]
pub enum UniformValue {
    Float(f32),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
    Vec4([f32; 4]),
    Int(i32),
    UInt(u32),
    /// Sampled texture binding
    Texture(Arc<dyn Texture>),
}

/// Which faces get rasterized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Front faces only
    Front,
    /// Back faces only
    Back,
    /// Both faces (no culling)
    Double,
}

// ===== DESCRIPTOR =====

/// Shader material creation descriptor
pub struct ShaderMaterialDesc {
    /// Vertex shader source text
    pub vertex_shader: String,
    /// Fragment shader source text
    pub fragment_shader: String,
    /// Named uniform bindings
    pub uniforms: Vec<(String, UniformValue)>,
    /// Face culling mode
    pub side: Side,
    /// Write to the depth buffer
    pub depth_write: bool,
    /// Test against the depth buffer
    pub depth_test: bool,
    /// Render with alpha blending
    pub transparent: bool,
}

// ===== SHADER MATERIAL =====

/// Shader material: pure data, compiled and bound by the renderer backend.
pub struct ShaderMaterial {
    vertex_shader: String,
    fragment_shader: String,
    uniforms: Vec<(String, UniformValue)>,
    uniform_names: FxHashMap<String, usize>,
    side: Side,
    depth_write: bool,
    depth_test: bool,
    transparent: bool,
    needs_update: bool,
}

impl ShaderMaterial {
    /// Create a material from a descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error if two uniforms share a name.
    pub fn from_desc(desc: ShaderMaterialDesc) -> Result<Self> {
        // No duplicate uniform names
        let mut seen_names = std::collections::HashSet::new();
        for (name, _) in &desc.uniforms {
            if !seen_names.insert(name) {
                vista_bail!("vista3d::ShaderMaterial",
                    "Duplicate uniform name '{}'", name);
            }
        }

        let mut uniforms = Vec::with_capacity(desc.uniforms.len());
        let mut uniform_names = FxHashMap::default();
        for (vec_index, (name, value)) in desc.uniforms.into_iter().enumerate() {
            uniform_names.insert(name.clone(), vec_index);
            uniforms.push((name, value));
        }

        Ok(Self {
            vertex_shader: desc.vertex_shader,
            fragment_shader: desc.fragment_shader,
            uniforms,
            uniform_names,
            side: desc.side,
            depth_write: desc.depth_write,
            depth_test: desc.depth_test,
            transparent: desc.transparent,
            needs_update: false,
        })
    }

    /// Minimal unlit material (solid white, front faces, opaque).
    ///
    /// Placeholder installed on a fresh rectangle until the owner binds its
    /// own material.
    pub fn basic() -> Self {
        Self {
            vertex_shader: BASIC_VERTEX_SHADER.to_string(),
            fragment_shader: BASIC_FRAGMENT_SHADER.to_string(),
            uniforms: Vec::new(),
            uniform_names: FxHashMap::default(),
            side: Side::Front,
            depth_write: true,
            depth_test: true,
            transparent: false,
            needs_update: false,
        }
    }

    // ===== SHADER ACCESS =====

    /// Vertex shader source text.
    pub fn vertex_shader(&self) -> &str {
        &self.vertex_shader
    }

    /// Fragment shader source text.
    pub fn fragment_shader(&self) -> &str {
        &self.fragment_shader
    }

    // ===== UNIFORM ACCESS =====

    /// Get uniform value by name
    pub fn uniform(&self, name: &str) -> Option<&UniformValue> {
        let idx = self.uniform_names.get(name)?;
        self.uniforms.get(*idx).map(|(_, v)| v)
    }

    /// Get uniform name and value by index
    pub fn uniform_at(&self, index: usize) -> Option<(&str, &UniformValue)> {
        self.uniforms.get(index).map(|(n, v)| (n.as_str(), v))
    }

    /// Get number of uniforms
    pub fn uniform_count(&self) -> usize {
        self.uniforms.len()
    }

    /// Set a uniform value, replacing any existing binding with that name.
    ///
    /// Marks the material as needing a backend update.
    pub fn set_uniform(&mut self, name: &str, value: UniformValue) {
        match self.uniform_names.get(name) {
            Some(&idx) => self.uniforms[idx].1 = value,
            None => {
                self.uniform_names.insert(name.to_string(), self.uniforms.len());
                self.uniforms.push((name.to_string(), value));
            }
        }
        self.needs_update = true;
    }

    /// Get the texture bound to a uniform, if that uniform is a texture.
    pub fn texture_uniform(&self, name: &str) -> Option<&Arc<dyn Texture>> {
        match self.uniform(name)? {
            UniformValue::Texture(texture) => Some(texture),
            _ => None,
        }
    }

    // ===== RENDER STATE =====

    /// Face culling mode.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Whether the material writes to the depth buffer.
    pub fn depth_write(&self) -> bool {
        self.depth_write
    }

    /// Whether the material tests against the depth buffer.
    pub fn depth_test(&self) -> bool {
        self.depth_test
    }

    /// Whether the material renders with alpha blending.
    pub fn transparent(&self) -> bool {
        self.transparent
    }

    /// Whether the backend must re-upload material state before drawing.
    pub fn needs_update(&self) -> bool {
        self.needs_update
    }

    /// Mark or clear the backend update flag.
    pub fn set_needs_update(&mut self, needs_update: bool) {
        self.needs_update = needs_update;
    }
}

// ===== BASIC SHADERS =====

const BASIC_VERTEX_SHADER: &str = "\
void main() {
    gl_Position = projectionMatrix * modelViewMatrix * vec4(position, 1.0);
}
";

const BASIC_FRAGMENT_SHADER: &str = "\
void main() {
    gl_FragColor = vec4(1.0, 1.0, 1.0, 1.0);
}
";

#[cfg(test)]
#[path = "shader_material_tests.rs"]
mod tests;
