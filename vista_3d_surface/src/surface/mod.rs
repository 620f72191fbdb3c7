//! Surface module — the render-to-texture surface.
//!
//! Provides the surface entity itself plus the deferred-render queue it uses
//! to re-render its inner scene once per host frame.

mod render_queue;
mod surface;

pub use render_queue::{CancellationToken, RenderQueue};
pub use surface::{Surface, SurfaceDesc, RESIZE_EVENT};
