/// Camera — perspective projection parameters plus a world position.
///
/// Stores the projection parameters (vertical field of view, aspect ratio,
/// near/far planes) and a position, and derives the view, projection, and
/// view-projection matrices on demand. The camera has identity orientation:
/// it looks down the negative Z axis.

use glam::{Mat4, Vec3};

/// Perspective camera. Matrices are derived from the stored parameters.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Vertical field of view in degrees
    fov_y: f32,
    /// Width / height aspect ratio
    aspect: f32,
    /// Near clip plane distance
    near: f32,
    /// Far clip plane distance
    far: f32,
    /// World position (orientation is identity, looking down -Z)
    position: Vec3,
}

impl Camera {
    /// Create a perspective camera at the origin.
    ///
    /// # Arguments
    ///
    /// * `fov_y` - Vertical field of view in degrees
    /// * `aspect` - Width / height aspect ratio
    /// * `near` - Near clip plane distance
    /// * `far` - Far clip plane distance
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y,
            aspect,
            near,
            far,
            position: Vec3::ZERO,
        }
    }

    // ===== GETTERS =====

    /// Vertical field of view in degrees.
    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    /// Width / height aspect ratio.
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Near clip plane distance.
    pub fn near(&self) -> f32 {
        self.near
    }

    /// Far clip plane distance.
    pub fn far(&self) -> f32 {
        self.far
    }

    /// World position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// View matrix (inverse of the camera's world transform).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(-self.position)
    }

    /// Projection matrix (right-handed perspective).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y.to_radians(), self.aspect, self.near, self.far)
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    // ===== SETTERS =====

    /// Set the vertical field of view in degrees.
    pub fn set_fov_y(&mut self, fov_y: f32) {
        self.fov_y = fov_y;
    }

    /// Set the aspect ratio.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Set the near clip plane distance.
    pub fn set_near(&mut self, near: f32) {
        self.near = near;
    }

    /// Set the far clip plane distance.
    pub fn set_far(&mut self, far: f32) {
        self.far = far;
    }

    /// Set the world position.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
