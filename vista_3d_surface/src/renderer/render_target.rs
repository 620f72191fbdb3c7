/// Render target trait and descriptor — where a scene gets rendered to.
///
/// A render target is an offscreen destination buffer a renderer can draw
/// into, later sampled as a texture. Targets are allocated through
/// `Renderer::create_render_target()` and replaced, never resized.

use std::sync::Arc;
use bitflags::bitflags;
use super::texture::{FilterMode, Texture, TextureFormat};

bitflags! {
    /// What a render target's color texture may be used for
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TargetUsage: u32 {
        /// Texture can be sampled in shaders
        const SAMPLED = 1 << 0;
        /// Texture can be rendered into
        const COLOR_ATTACHMENT = 1 << 1;
    }
}

/// Descriptor for creating a render target
#[derive(Debug, Clone)]
pub struct RenderTargetDesc {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Minification filter for sampling the color texture
    pub min_filter: FilterMode,
    /// Magnification filter for sampling the color texture
    pub mag_filter: FilterMode,
    /// Color texture pixel format
    pub format: TextureFormat,
    /// Usage flags
    pub usage: TargetUsage,
}

/// Read-only properties of a created render target.
#[derive(Debug, Clone)]
pub struct RenderTargetInfo {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Minification filter
    pub min_filter: FilterMode,
    /// Magnification filter
    pub mag_filter: FilterMode,
    /// Color texture pixel format
    pub format: TextureFormat,
    /// Usage flags
    pub usage: TargetUsage,
}

/// Render target resource trait
///
/// Implemented by backend-specific target types. The target and its color
/// texture are automatically destroyed when dropped.
pub trait RenderTarget: Send + Sync {
    /// Get the read-only properties of this render target
    fn info(&self) -> &RenderTargetInfo;

    /// Get the color texture the target renders into
    fn texture(&self) -> &Arc<dyn Texture>;
}

#[cfg(test)]
#[path = "render_target_tests.rs"]
mod tests;
