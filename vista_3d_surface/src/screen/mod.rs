//! Screen module — the host collaborator a surface is constructed against.
//!
//! A Screen bundles what the host environment provides: the renderer, the
//! presentation canvas, the drawing context, the window handle, title and
//! field-of-view properties, and the host's own event channel. Surfaces take
//! an explicit `Arc<dyn Screen>` at construction.

mod screen;
mod mock_screen;

pub use screen::{Canvas, RenderContext, Screen, WindowHandle};

#[cfg(test)]
pub use mock_screen::{MockCanvas, MockContext, MockScreen, MockWindow};
