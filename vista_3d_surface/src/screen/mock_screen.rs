/// Mock Screen for unit tests (no window or GPU required)
///
/// Bundles a MockRenderer behind the Screen trait so surface tests can
/// construct surfaces and inspect what the renderer was asked to do.

#[cfg(test)]
use std::sync::{Arc, Mutex};

#[cfg(test)]
use crate::event::EventChannel;
#[cfg(test)]
use crate::renderer::mock_renderer::MockRenderer;
#[cfg(test)]
use crate::renderer::Renderer;
#[cfg(test)]
use super::screen::{Canvas, RenderContext, Screen, WindowHandle};

// ============================================================================
// Mock collaborators
// ============================================================================

#[cfg(test)]
#[derive(Debug)]
pub struct MockCanvas {
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
impl Canvas for MockCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
#[derive(Debug)]
pub struct MockContext;

#[cfg(test)]
impl RenderContext for MockContext {}

#[cfg(test)]
#[derive(Debug)]
pub struct MockWindow;

#[cfg(test)]
impl WindowHandle for MockWindow {}

// ============================================================================
// Mock Screen
// ============================================================================

#[cfg(test)]
pub struct MockScreen {
    renderer: Arc<Mutex<MockRenderer>>,
    canvas: Arc<MockCanvas>,
    context: Arc<MockContext>,
    window: Arc<MockWindow>,
    title: Mutex<String>,
    fov: Mutex<f32>,
    events: EventChannel,
}

#[cfg(test)]
impl MockScreen {
    pub fn new() -> Self {
        Self {
            renderer: Arc::new(Mutex::new(MockRenderer::new())),
            canvas: Arc::new(MockCanvas { width: 800, height: 600 }),
            context: Arc::new(MockContext),
            window: Arc::new(MockWindow),
            title: Mutex::new(String::new()),
            fov: Mutex::new(60.0),
            events: EventChannel::new(),
        }
    }

    /// Typed access to the mock renderer for test assertions
    pub fn mock_renderer(&self) -> &Arc<Mutex<MockRenderer>> {
        &self.renderer
    }
}

#[cfg(test)]
impl Screen for MockScreen {
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
