/// Bounding volumes for culling queries.
///
/// A sphere with infinite radius and an empty box are the two "never cull"
/// sentinels: an unbounded sphere intersects every frustum, and an empty box
/// contains nothing for occlusion tests to reject against.

use glam::Vec3;

/// Bounding sphere (center + radius).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    center: Vec3,
    radius: f32,
}

impl BoundingSphere {
    /// Create a bounding sphere from center and radius.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Sphere with infinite radius — intersects every frustum.
    pub fn unbounded() -> Self {
        Self {
            center: Vec3::ZERO,
            radius: f32::INFINITY,
        }
    }

    /// Sphere center.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Sphere radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// True if the radius is infinite.
    pub fn is_unbounded(&self) -> bool {
        self.radius.is_infinite()
    }
}

/// Axis-aligned bounding box (min/max corners).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    min: Vec3,
    max: Vec3,
}

impl BoundingBox {
    /// Create a bounding box from min and max corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Empty box (min > max on every axis). Contains no points.
    pub fn empty() -> Self {
        Self {
            min: Vec3::INFINITY,
            max: Vec3::NEG_INFINITY,
        }
    }

    /// Minimum corner.
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Maximum corner.
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// True if the box contains no points.
    pub fn is_empty(&self) -> bool {
        self.max.x < self.min.x || self.max.y < self.min.y || self.max.z < self.min.z
    }
}

#[cfg(test)]
#[path = "bounds_tests.rs"]
mod tests;
