/// Quad geometry — a flat rectangle with UV texture coordinates.
///
/// Four vertices, two triangles, centered on the origin in the XY plane.
/// The bounding volume queries never report a finite volume: the quad is
/// exempt from frustum and occlusion culling, whatever the camera does.

use bytemuck::{Pod, Zeroable};
use super::bounds::{BoundingBox, BoundingSphere};

/// One quad vertex: position + UV.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    /// Position in local space (XY plane, Z = 0)
    pub position: [f32; 3],
    /// Texture coordinate (0..1)
    pub uv: [f32; 2],
}

/// UV-mapped quad centered on the origin.
pub struct QuadGeometry {
    vertices: [QuadVertex; 4],
    indices: [u16; 6],
    bounding_sphere: BoundingSphere,
    bounding_box: BoundingBox,
}

impl QuadGeometry {
    /// Create a quad of the given size, centered on the origin.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            vertices: Self::build_vertices(width, height),
            indices: [0, 1, 2, 2, 3, 0],
            bounding_sphere: BoundingSphere::unbounded(),
            bounding_box: BoundingBox::empty(),
        }
    }

    fn build_vertices(width: f32, height: f32) -> [QuadVertex; 4] {
        let half_width = width * 0.5;
        let half_height = height * 0.5;
        [
            QuadVertex { position: [-half_width, -half_height, 0.0], uv: [0.0, 0.0] },
            QuadVertex { position: [half_width, -half_height, 0.0], uv: [1.0, 0.0] },
            QuadVertex { position: [half_width, half_height, 0.0], uv: [1.0, 1.0] },
            QuadVertex { position: [-half_width, half_height, 0.0], uv: [0.0, 1.0] },
        ]
    }

    /// Rebuild vertex positions for a new size. UVs are unchanged.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.vertices = Self::build_vertices(width, height);
    }

    /// Vertex data.
    pub fn vertices(&self) -> &[QuadVertex] {
        &self.vertices
    }

    /// Vertex data as raw bytes (for upload to a vertex buffer).
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data (two CCW triangles).
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Recompute the bounding sphere.
    ///
    /// Always produces an unbounded sphere, regardless of vertex data.
    pub fn compute_bounding_sphere(&mut self) {
        self.bounding_sphere = BoundingSphere::unbounded();
    }

    /// Recompute the bounding box.
    ///
    /// Always produces an empty box, regardless of vertex data.
    pub fn compute_bounding_box(&mut self) {
        self.bounding_box = BoundingBox::empty();
    }

    /// Current bounding sphere.
    pub fn bounding_sphere(&self) -> &BoundingSphere {
        &self.bounding_sphere
    }

    /// Current bounding box.
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }
}

#[cfg(test)]
#[path = "quad_tests.rs"]
mod tests;
