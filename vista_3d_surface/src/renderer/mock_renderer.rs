/// Mock Renderer for unit tests (no GPU required)
///
/// This mock renderer allows testing the surface and other components
/// without requiring a real GPU or graphics backend. It records every
/// render call and fires before-render hooks like a real backend.

#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use crate::error::{Error, Result};
#[cfg(test)]
use crate::camera::Camera;
#[cfg(test)]
use crate::scene::Scene;
#[cfg(test)]
use crate::renderer::{
    Renderer, RendererStats,
    RenderTarget, RenderTargetDesc, RenderTargetInfo,
    Texture, TextureInfo,
};

// ============================================================================
// Mock Texture
// ============================================================================

#[cfg(test)]
#[derive(Debug)]
pub struct MockTexture {
    pub info: TextureInfo,
}

#[cfg(test)]
impl MockTexture {
    pub fn new(width: u32, height: u32, format: crate::renderer::TextureFormat) -> Self {
        Self {
            info: TextureInfo {
                width,
                height,
                format,
            },
        }
    }
}

#[cfg(test)]
impl Texture for MockTexture {
    fn info(&self) -> &TextureInfo {
        &self.info
    }
}

// ============================================================================
// Mock RenderTarget
// ============================================================================

#[cfg(test)]
pub struct MockRenderTarget {
    pub info: RenderTargetInfo,
    pub texture: Arc<dyn Texture>,
}

#[cfg(test)]
impl MockRenderTarget {
    pub fn new(desc: &RenderTargetDesc) -> Self {
        Self {
            info: RenderTargetInfo {
                width: desc.width,
                height: desc.height,
                min_filter: desc.min_filter,
                mag_filter: desc.mag_filter,
                format: desc.format,
                usage: desc.usage,
            },
            texture: Arc::new(MockTexture::new(desc.width, desc.height, desc.format)),
        }
    }
}

#[cfg(test)]
impl RenderTarget for MockRenderTarget {
    fn info(&self) -> &RenderTargetInfo {
        &self.info
    }

    fn texture(&self) -> &Arc<dyn Texture> {
        &self.texture
    }
}

// ============================================================================
// Mock Renderer
// ============================================================================

/// Record of a single render call
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct MockRenderRecord {
    pub node_count: usize,
    pub target_width: u32,
    pub target_height: u32,
}

#[cfg(test)]
pub struct MockRenderer {
    /// Number of render calls performed
    pub render_count: u32,
    /// Number of render targets created
    pub created_target_count: u32,
    /// Last render call, if any
    pub last_render: Option<MockRenderRecord>,
    /// When true, render() fails with a backend error
    pub fail_renders: bool,
    stats: RendererStats,
}

#[cfg(test)]
impl MockRenderer {
    pub fn new() -> Self {
        Self {
            render_count: 0,
            created_target_count: 0,
            last_render: None,
            fail_renders: false,
            stats: RendererStats::default(),
        }
    }
}

#[cfg(test)]
impl Renderer for MockRenderer {
    fn create_render_target(&mut self, desc: RenderTargetDesc) -> Result<Arc<dyn RenderTarget>> {
        self.created_target_count += 1;
        Ok(Arc::new(MockRenderTarget::new(&desc)))
    }

    fn render(
        &mut self,
        scene: &Scene,
        _camera: &Camera,
        target: &Arc<dyn RenderTarget>,
    ) -> Result<()> {
        if self.fail_renders {
            return Err(Error::BackendError("simulated render failure".to_string()));
        }

        // Fire before-render hooks like a real backend
        for (_key, node) in scene.nodes() {
            if let Ok(mut mesh) = node.mesh().lock() {
                mesh.fire_before_render();
            }
        }

        let info = target.info();
        self.last_render = Some(MockRenderRecord {
            node_count: scene.node_count(),
            target_width: info.width,
            target_height: info.height,
        });
        self.render_count += 1;
        self.stats.draw_calls = scene.node_count() as u32;
        self.stats.triangles = (scene.node_count() * 2) as u32;
        Ok(())
    }

    fn resize(&mut self, _width: u32, _height: u32) {}

    fn stats(&self) -> RendererStats {
        self.stats
    }

    fn wait_idle(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "mock_renderer_tests.rs"]
mod tests;
