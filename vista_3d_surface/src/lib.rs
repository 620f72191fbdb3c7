/*!
# Vista 3D Surface

Render-to-texture surface for compositing a secondary 3D scene as a texture
inside a primary scene (a view-within-a-view, a render preview panel, a
portal-like effect).

A [`surface::Surface`] owns its own camera and scene graph, renders that
sub-scene into an offscreen render target sized to the surface's layout
dimensions (at 2x density), and displays the target's color texture on a
textured quad mesh that the caller inserts into an *outer* scene.

The rendering backend is not part of this crate. Collaborators are defined as
traits implemented by the host environment:

- **Renderer**: renders a (scene, camera, target) triple and allocates targets
- **RenderTarget** / **Texture**: offscreen destination and its color texture
- **Screen**: the host window/renderer context injected into the surface

Backend implementations register themselves through the renderer plugin
system and hand the resulting renderer to their `Screen` implementation.
*/

// Internal modules
mod error;
pub mod log;
pub mod camera;
pub mod event;
pub mod geometry;
pub mod material;
pub mod mesh;
pub mod rect;
pub mod renderer;
pub mod scene;
pub mod screen;
pub mod surface;

// Main vista3d namespace module
pub mod vista3d {
    // Error types
    pub use crate::error::{Error, Result};

    // The render-to-texture surface itself
    pub use crate::surface::{
        CancellationToken, RenderQueue, Surface, SurfaceDesc, RESIZE_EVENT,
    };

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{
            log, log_detailed, reset_logger, set_logger,
            DefaultLogger, LogEntry, LogSeverity, Logger,
        };
        // Note: vista_* macros are exported at the crate root, not here
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Event sub-module
    pub mod event {
        pub use crate::event::*;
    }

    // Geometry sub-module
    pub mod geometry {
        pub use crate::geometry::*;
    }

    // Material sub-module
    pub mod material {
        pub use crate::material::*;
    }

    // Mesh sub-module
    pub mod mesh {
        pub use crate::mesh::*;
    }

    // Rectangle entity sub-module
    pub mod rect {
        pub use crate::rect::*;
    }

    // Render sub-module with all renderer-facing types
    pub mod render {
        pub use crate::renderer::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Screen sub-module
    pub mod screen {
        pub use crate::screen::*;
    }
}

// Re-export math library at crate root
pub use glam;
