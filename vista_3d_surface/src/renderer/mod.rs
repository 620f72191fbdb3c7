//! Renderer module — backend seam for the surface.
//!
//! The crate ships no GPU backend. Backends implement the [`Renderer`],
//! [`RenderTarget`], and [`Texture`] traits and register a factory with the
//! plugin registry; hosts expose the resulting renderer through their
//! [`crate::screen::Screen`] implementation.

// Module declarations
pub mod renderer;
pub mod render_target;
pub mod texture;
pub mod mock_renderer;

// Re-export everything from renderer.rs
pub use renderer::*;

// Re-export from other modules
pub use render_target::*;
pub use texture::*;
