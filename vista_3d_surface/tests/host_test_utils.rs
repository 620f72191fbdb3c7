#![allow(dead_code)]
//! Host test utilities - shared mock host environment for integration tests
//!
//! Provides a renderer, screen, canvas, context, and window handle backed by
//! plain counters, so integration tests can exercise the full surface flow
//! through the public API without a GPU or a display.

use std::sync::{Arc, Mutex};

use vista_3d_surface::vista3d::camera::Camera;
use vista_3d_surface::vista3d::event::EventChannel;
use vista_3d_surface::vista3d::render::{
    RenderTarget, RenderTargetDesc, RenderTargetInfo, Renderer, RendererStats,
    Texture, TextureInfo,
};
use vista_3d_surface::vista3d::scene::Scene;
use vista_3d_surface::vista3d::screen::{Canvas, RenderContext, Screen, WindowHandle};
use vista_3d_surface::vista3d::Result;

// ============================================================================
// Renderer side
// ============================================================================

pub struct TestTexture {
    info: TextureInfo,
}

impl Texture for TestTexture {
    fn info(&self) -> &TextureInfo {
        &self.info
    }
}

pub struct TestTarget {
    info: RenderTargetInfo,
    texture: Arc<dyn Texture>,
}

impl RenderTarget for TestTarget {
    fn info(&self) -> &RenderTargetInfo {
        &self.info
    }

    fn texture(&self) -> &Arc<dyn Texture> {
        &self.texture
    }
}

/// Renderer that records calls and fires before-render hooks.
pub struct TestRenderer {
    pub render_count: u32,
    pub created_target_count: u32,
    /// (width, height, node_count) of the last render call
    pub last_render: Option<(u32, u32, usize)>,
}

impl TestRenderer {
    pub fn new() -> Self {
        Self {
            render_count: 0,
            created_target_count: 0,
            last_render: None,
        }
    }
}

impl Renderer for TestRenderer {
    fn create_render_target(&mut self, desc: RenderTargetDesc) -> Result<Arc<dyn RenderTarget>> {
        self.created_target_count += 1;
        Ok(Arc::new(TestTarget {
            info: RenderTargetInfo {
                width: desc.width,
                height: desc.height,
                min_filter: desc.min_filter,
                mag_filter: desc.mag_filter,
                format: desc.format,
                usage: desc.usage,
            },
            texture: Arc::new(TestTexture {
                info: TextureInfo {
                    width: desc.width,
                    height: desc.height,
                    format: desc.format,
                },
            }),
        }))
    }

    fn render(
        &mut self,
        scene: &Scene,
        _camera: &Camera,
        target: &Arc<dyn RenderTarget>,
    ) -> Result<()> {
        for (_key, node) in scene.nodes() {
            if let Ok(mut mesh) = node.mesh().lock() {
                mesh.fire_before_render();
            }
        }

        let info = target.info();
        self.last_render = Some((info.width, info.height, scene.node_count()));
        self.render_count += 1;
        Ok(())
    }

    fn resize(&mut self, _width: u32, _height: u32) {}

    fn stats(&self) -> RendererStats {
        RendererStats::default()
    }

    fn wait_idle(&self) -> Result<()> {
        Ok(())
    }
}

// ============================================================================
// Screen side
// ============================================================================

pub struct TestCanvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas for TestCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

pub struct TestContext;

impl RenderContext for TestContext {}

pub struct TestWindow;

impl WindowHandle for TestWindow {}

pub struct TestScreen {
    renderer: Arc<Mutex<TestRenderer>>,
    canvas: Arc<TestCanvas>,
    context: Arc<TestContext>,
    window: Arc<TestWindow>,
    title: Mutex<String>,
    fov: Mutex<f32>,
    events: EventChannel,
}

impl TestScreen {
    pub fn new() -> Self {
        Self {
            renderer: Arc::new(Mutex::new(TestRenderer::new())),
            canvas: Arc::new(TestCanvas { width: 1024, height: 768 }),
            context: Arc::new(TestContext),
            window: Arc::new(TestWindow),
            title: Mutex::new(String::new()),
            fov: Mutex::new(60.0),
            events: EventChannel::new(),
        }
    }

    /// Typed access to the test renderer for assertions
    pub fn test_renderer(&self) -> &Arc<Mutex<TestRenderer>> {
        &self.renderer
    }
}

impl Screen for TestScreen {
    fn canvas(&self) -> Arc<dyn Canvas> {
        self.canvas.clone()
    }

    fn renderer(&self) -> Arc<Mutex<dyn Renderer>> {
        let renderer: Arc<Mutex<dyn Renderer>> = self.renderer.clone();
        renderer
    }

    fn context(&self) -> Arc<dyn RenderContext> {
        self.context.clone()
    }

    fn window(&self) -> Arc<dyn WindowHandle> {
        self.window.clone()
    }

    fn title(&self) -> String {
        self.title.lock().map(|t| t.clone()).unwrap_or_default()
    }

    fn set_title(&self, title: &str) {
        if let Ok(mut lock) = self.title.lock() {
            *lock = title.to_string();
        }
    }

    fn fov(&self) -> f32 {
        self.fov.lock().map(|f| *f).unwrap_or(0.0)
    }

    fn set_fov(&self, fov: f32) {
        if let Ok(mut lock) = self.fov.lock() {
            *lock = fov;
        }
    }

    fn events(&self) -> &EventChannel {
        &self.events
    }
}

/// Create a shared test screen for surface construction
pub fn create_test_screen() -> Arc<TestScreen> {
    Arc::new(TestScreen::new())
}
