/// Tests for MockRenderer

use super::*;
use std::sync::Mutex;
use crate::geometry::QuadGeometry;
use crate::material::ShaderMaterial;
use crate::mesh::Mesh;
use crate::renderer::{FilterMode, TextureFormat, TargetUsage};
use glam::Mat4;

fn test_target_desc(width: u32, height: u32) -> RenderTargetDesc {
    RenderTargetDesc {
        width,
        height,
        min_filter: FilterMode::Linear,
        mag_filter: FilterMode::Nearest,
        format: TextureFormat::R8G8B8A8_UNORM,
        usage: TargetUsage::SAMPLED | TargetUsage::COLOR_ATTACHMENT,
    }
}

// ============================================================================
// Tests: Target creation
// ============================================================================

#[test]
fn test_create_render_target_matches_desc() {
    let mut renderer = MockRenderer::new();
    let target = renderer.create_render_target(test_target_desc(1200, 600)).unwrap();

    assert_eq!(target.info().width, 1200);
    assert_eq!(target.info().height, 600);
    assert_eq!(target.info().mag_filter, FilterMode::Nearest);
    assert_eq!(renderer.created_target_count, 1);
}

#[test]
fn test_created_target_texture_matches_dimensions() {
    let mut renderer = MockRenderer::new();
    let target = renderer.create_render_target(test_target_desc(200, 100)).unwrap();

    let texture = target.texture();
    assert_eq!(texture.info().width, 200);
    assert_eq!(texture.info().height, 100);
}

// ============================================================================
// Tests: Rendering
// ============================================================================

#[test]
fn test_render_records_call() {
    let mut renderer = MockRenderer::new();
    let target = renderer.create_render_target(test_target_desc(64, 64)).unwrap();
    let scene = Scene::new();
    let camera = Camera::perspective(45.0, 1.0, 5.0, 1000.0);

    renderer.render(&scene, &camera, &target).unwrap();
    renderer.render(&scene, &camera, &target).unwrap();

    assert_eq!(renderer.render_count, 2);
    let record = renderer.last_render.as_ref().unwrap();
    assert_eq!(record.node_count, 0);
    assert_eq!(record.target_width, 64);
    assert_eq!(record.target_height, 64);
}

#[test]
fn test_render_fires_before_render_hooks() {
    let mut renderer = MockRenderer::new();
    let target = renderer.create_render_target(test_target_desc(64, 64)).unwrap();
    let camera = Camera::perspective(45.0, 1.0, 5.0, 1000.0);

    let fired = Arc::new(Mutex::new(0u32));
    let mut mesh = Mesh::new(QuadGeometry::new(10.0, 10.0), ShaderMaterial::basic());
    let captured = fired.clone();
    mesh.set_before_render(Box::new(move || {
        *captured.lock().unwrap() += 1;
    }));

    let mut scene = Scene::new();
    scene.add_mesh(Arc::new(Mutex::new(mesh)), Mat4::IDENTITY);

    renderer.render(&scene, &camera, &target).unwrap();
    assert_eq!(*fired.lock().unwrap(), 1);
}

#[test]
fn test_render_counts_scene_nodes() {
    let mut renderer = MockRenderer::new();
    let target = renderer.create_render_target(test_target_desc(64, 64)).unwrap();
    let camera = Camera::perspective(45.0, 1.0, 5.0, 1000.0);

    let mut scene = Scene::new();
    for _ in 0..3 {
        let mesh = Mesh::new(QuadGeometry::new(1.0, 1.0), ShaderMaterial::basic());
        scene.add_mesh(Arc::new(Mutex::new(mesh)), Mat4::IDENTITY);
    }

    renderer.render(&scene, &camera, &target).unwrap();
    assert_eq!(renderer.last_render.as_ref().unwrap().node_count, 3);
    assert_eq!(renderer.stats().draw_calls, 3);
    assert_eq!(renderer.stats().triangles, 6);
}

#[test]
fn test_failing_render_propagates_error() {
    let mut renderer = MockRenderer::new();
    let target = renderer.create_render_target(test_target_desc(64, 64)).unwrap();
    let scene = Scene::new();
    let camera = Camera::perspective(45.0, 1.0, 5.0, 1000.0);

    renderer.fail_renders = true;
    let result = renderer.render(&scene, &camera, &target);

    assert!(result.is_err());
    assert_eq!(renderer.render_count, 0);
}

#[test]
fn test_wait_idle_succeeds() {
    let renderer = MockRenderer::new();
    assert!(renderer.wait_idle().is_ok());
}
