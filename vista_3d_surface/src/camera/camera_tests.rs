/// Tests for Camera

use super::*;
use glam::{Vec3, Vec4};

// ============================================================================
// Tests: Construction
// ============================================================================

#[test]
fn test_perspective_stores_parameters() {
    let camera = Camera::perspective(45.0, 1.0, 5.0, 100_000_000.0);
    assert_eq!(camera.fov_y(), 45.0);
    assert_eq!(camera.aspect(), 1.0);
    assert_eq!(camera.near(), 5.0);
    assert_eq!(camera.far(), 100_000_000.0);
}

#[test]
fn test_perspective_starts_at_origin() {
    let camera = Camera::perspective(60.0, 1.5, 0.1, 1000.0);
    assert_eq!(camera.position(), Vec3::ZERO);
}

// ============================================================================
// Tests: Setters
// ============================================================================

#[test]
fn test_set_position() {
    let mut camera = Camera::perspective(45.0, 1.0, 5.0, 1000.0);
    camera.set_position(Vec3::new(0.0, 0.0, 1000.0));
    assert_eq!(camera.position(), Vec3::new(0.0, 0.0, 1000.0));
}

#[test]
fn test_set_aspect() {
    let mut camera = Camera::perspective(45.0, 1.0, 5.0, 1000.0);
    camera.set_aspect(2.0);
    assert_eq!(camera.aspect(), 2.0);
}

#[test]
fn test_set_fov_y() {
    let mut camera = Camera::perspective(45.0, 1.0, 5.0, 1000.0);
    camera.set_fov_y(90.0);
    assert_eq!(camera.fov_y(), 90.0);
}

#[test]
fn test_set_clip_planes() {
    let mut camera = Camera::perspective(45.0, 1.0, 5.0, 1000.0);
    camera.set_near(1.0);
    camera.set_far(2000.0);
    assert_eq!(camera.near(), 1.0);
    assert_eq!(camera.far(), 2000.0);
}

// ============================================================================
// Tests: Matrices
// ============================================================================

#[test]
fn test_view_matrix_is_inverse_translation() {
    let mut camera = Camera::perspective(45.0, 1.0, 5.0, 1000.0);
    camera.set_position(Vec3::new(0.0, 0.0, 1000.0));

    let view = camera.view_matrix();
    let transformed = view * Vec4::new(0.0, 0.0, 1000.0, 1.0);

    // The camera position maps to the view-space origin
    assert!((transformed.x).abs() < 1e-6);
    assert!((transformed.y).abs() < 1e-6);
    assert!((transformed.z).abs() < 1e-6);
}

#[test]
fn test_projection_matrix_is_finite() {
    let camera = Camera::perspective(45.0, 1.0, 5.0, 100_000_000.0);
    let projection = camera.projection_matrix();
    assert!(projection.is_finite());
}

#[test]
fn test_view_projection_composition() {
    let mut camera = Camera::perspective(45.0, 1.0, 5.0, 1000.0);
    camera.set_position(Vec3::new(0.0, 0.0, 100.0));

    let expected = camera.projection_matrix() * camera.view_matrix();
    assert_eq!(camera.view_projection_matrix(), expected);
}

#[test]
fn test_point_in_front_projects_inside_clip_volume() {
    let mut camera = Camera::perspective(45.0, 1.0, 5.0, 100_000.0);
    camera.set_position(Vec3::new(0.0, 0.0, 1000.0));

    // A point on the view axis, well inside the clip range
    let clip = camera.view_projection_matrix() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc_z = clip.z / clip.w;
    assert!(clip.w > 0.0);
    assert!((0.0..=1.0).contains(&ndc_z));
}
