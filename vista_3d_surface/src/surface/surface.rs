/// Surface — a render-to-texture surface.
///
/// A Surface owns an independent camera and scene, renders that sub-scene
/// into an offscreen render target sized to the surface's layout dimensions
/// (at 2x density), and displays the target's color texture on a quad mesh.
/// The caller inserts the mesh into an *outer* scene; the inner scene/camera
/// pair never contains it.
///
/// The inner scene is re-rendered once per host frame: the mesh's
/// before-render hook schedules a redraw token, and the host calls `pump()`
/// after its own draw to run it. Resizing replaces the render target,
/// re-renders immediately, rebinds the mesh's texture uniform, and emits a
/// resize event.

use std::sync::{Arc, Mutex};
use glam::{Vec2, Vec3};

use crate::error::Result;
use crate::{vista_debug, vista_err, vista_info};
use crate::camera::Camera;
use crate::event::{EventCallback, EventChannel, SurfaceEvent};
use crate::mesh::Mesh;
use crate::material::{ShaderMaterial, ShaderMaterialDesc, Side, UniformValue};
use crate::rect::{Rect, RectDesc};
use crate::renderer::{
    FilterMode, RenderTarget, RenderTargetDesc, Renderer, TargetUsage, TextureFormat,
};
use crate::scene::Scene;
use crate::screen::{Canvas, RenderContext, Screen, WindowHandle};
use super::render_queue::RenderQueue;

/// Event name the surface's own channel fires on resize.
pub const RESIZE_EVENT: &str = "resize";

// Layout defaults: a square region centered on the origin. Caller-supplied
// position/size are overwritten with these at construction.
const DEFAULT_POSITION: Vec2 = Vec2::new(-300.0, -300.0);
const DEFAULT_SIZE: Vec2 = Vec2::new(600.0, 600.0);

// Offscreen target pixel density relative to layout size.
const OVERSAMPLE: u32 = 2;

// Default inner camera: perspective, effectively unbounded far plane,
// pulled back along +Z.
const DEFAULT_FOV_Y: f32 = 45.0;
const DEFAULT_NEAR: f32 = 5.0;
const DEFAULT_FAR: f32 = 100_000_000.0;
const DEFAULT_CAMERA_Z: f32 = 1000.0;

// Name of the sampled-texture uniform on the display material.
const TEXTURE_UNIFORM: &str = "t";

const SURFACE_VERTEX_SHADER: &str = "\
varying vec2 tc;
void main() {
    tc = uv;
    gl_Position = projectionMatrix * modelViewMatrix * vec4(position, 1.0);
}
";

const SURFACE_FRAGMENT_SHADER: &str = "\
varying vec2 tc;
uniform sampler2D t;
void main() {
    gl_FragColor = texture2D(t, tc);
}
";

/// Surface creation descriptor
pub struct SurfaceDesc {
    /// Camera to adopt for the inner scene. A default perspective camera is
    /// created when absent.
    pub camera: Option<Camera>,
    /// Scene to adopt as the inner scene. An empty scene is created when
    /// absent.
    pub scene: Option<Scene>,
    /// Options for the underlying rectangle entity. Position and size are
    /// overwritten with the fixed defaults.
    pub rect: RectDesc,
}

impl Default for SurfaceDesc {
    fn default() -> Self {
        Self {
            camera: None,
            scene: None,
            rect: RectDesc::default(),
        }
    }
}

/// A render-to-texture surface.
pub struct Surface {
    screen: Arc<dyn Screen>,
    rect: Rect,
    camera: Camera,
    scene: Scene,
    target: Arc<dyn RenderTarget>,
    events: EventChannel,
    queue: Arc<RenderQueue>,
}

impl Surface {
    /// Create a surface against the given host screen.
    ///
    /// Performs one offscreen render before returning: the display material
    /// starts out bound to live texture content.
    ///
    /// # Errors
    ///
    /// Returns an error if target allocation or the initial render fails.
    pub fn new(screen: Arc<dyn Screen>, desc: SurfaceDesc) -> Result<Self> {
        // Surfaces always start as the fixed centered square; callers resize
        // afterwards through the size setter.
        let mut rect_desc = desc.rect;
        rect_desc.position = DEFAULT_POSITION;
        rect_desc.size = DEFAULT_SIZE;
        let rect = Rect::new(rect_desc);

        let camera = desc.camera.unwrap_or_else(|| {
            let mut camera = Camera::perspective(
                DEFAULT_FOV_Y,
                rect.width() / rect.height(),
                DEFAULT_NEAR,
                DEFAULT_FAR,
            );
            camera.set_position(Vec3::new(0.0, 0.0, DEFAULT_CAMERA_Z));
            camera
        });

        let scene = desc.scene.unwrap_or_default();

        let target = Self::create_target(screen.as_ref(), rect.width(), rect.height())?;

        let surface = Self {
            screen,
            rect,
            camera,
            scene,
            target,
            events: EventChannel::new(),
            queue: Arc::new(RenderQueue::new()),
        };

        surface.draw()?;

        let material = ShaderMaterial::from_desc(ShaderMaterialDesc {
            vertex_shader: SURFACE_VERTEX_SHADER.to_string(),
            fragment_shader: SURFACE_FRAGMENT_SHADER.to_string(),
            uniforms: vec![(
                TEXTURE_UNIFORM.to_string(),
                UniformValue::Texture(surface.target.texture().clone()),
            )],
            side: Side::Double,
            depth_write: true,
            depth_test: true,
            transparent: true,
        })?;

        {
            let mut mesh = surface.lock_mesh()?;
            mesh.set_material(material);

            // Schedule a deferred redraw every time the outer renderer is
            // about to draw this mesh.
            let queue = Arc::clone(&surface.queue);
            mesh.set_before_render(Box::new(move || {
                queue.schedule();
            }));

            // The quad is exempt from culling.
            mesh.geometry_mut().compute_bounding_sphere();
            mesh.geometry_mut().compute_bounding_box();

            mesh.material_mut().set_needs_update(true);
        }

        vista_info!("vista3d::Surface",
            "Surface created ({}x{} layout, {}x{} target)",
            surface.rect.width(), surface.rect.height(),
            surface.target.info().width, surface.target.info().height);

        Ok(surface)
    }

    // ===== EVENTS =====

    /// Register a listener.
    ///
    /// The resize event attaches to the surface's own channel; every other
    /// event name is forwarded to the host screen's channel.
    pub fn on(&self, event: &str, callback: EventCallback) {
        if event == RESIZE_EVENT {
            self.events.on(event, callback);
        } else {
            self.screen.events().on(event, callback);
        }
    }

    /// The surface's own event channel.
    pub fn events(&self) -> &EventChannel {
        &self.events
    }

    // ===== SIZE =====

    /// Layout size.
    pub fn size(&self) -> Vec2 {
        self.rect.size()
    }

    /// Set the layout size.
    ///
    /// Replaces the render target with one sized to the new dimensions,
    /// renders once into it, rebinds the mesh's texture uniform, and emits a
    /// resize event. Pending deferred redraws are cancelled first.
    pub fn set_size(&mut self, size: Vec2) -> Result<()> {
        self.rect.set_size(size)?;
        self.reset()?;
        self.events.emit(RESIZE_EVENT, &SurfaceEvent::Resize {
            width: self.rect.width(),
            height: self.rect.height(),
        });
        Ok(())
    }

    /// Layout width.
    pub fn width(&self) -> f32 {
        self.rect.width()
    }

    /// Layout height.
    pub fn height(&self) -> f32 {
        self.rect.height()
    }

    /// Layout position.
    pub fn position(&self) -> Vec2 {
        self.rect.position()
    }

    // ===== DEFERRED RENDERING =====

    /// Run pending deferred redraws.
    ///
    /// Call once per host frame, after the outer draw. Drains the queue and,
    /// if at least one non-cancelled redraw was scheduled, renders the inner
    /// scene once into the current target. Returns whether a render happened.
    pub fn pump(&self) -> Result<bool> {
        let due = self
            .queue
            .take_pending()
            .iter()
            .any(|token| !token.is_cancelled());
        if !due {
            return Ok(false);
        }
        self.draw()?;
        Ok(true)
    }

    // ===== ACCESSORS =====

    /// The host's presentation canvas.
    pub fn canvas(&self) -> Arc<dyn Canvas> {
        self.screen.canvas()
    }

    /// The surface's own inner camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable access to the inner camera.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// The surface's own inner scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access to the inner scene.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// The host's renderer.
    pub fn renderer(&self) -> Arc<Mutex<dyn Renderer>> {
        self.screen.renderer()
    }

    /// The host's drawing context.
    pub fn context(&self) -> Arc<dyn RenderContext> {
        self.screen.context()
    }

    /// The host's document/window handle.
    pub fn window(&self) -> Arc<dyn WindowHandle> {
        self.screen.window()
    }

    /// The display mesh, shared for insertion into an outer scene.
    pub fn mesh(&self) -> &Arc<Mutex<Mesh>> {
        self.rect.mesh()
    }

    /// The current offscreen render target.
    pub fn target(&self) -> &Arc<dyn RenderTarget> {
        &self.target
    }

    /// Host window title.
    pub fn title(&self) -> String {
        self.screen.title()
    }

    /// Set the host window title.
    pub fn set_title(&self, title: &str) {
        self.screen.set_title(title);
    }

    /// Host camera field of view in degrees.
    pub fn fov(&self) -> f32 {
        self.screen.fov()
    }

    /// Set the host camera field of view in degrees.
    pub fn set_fov(&self, fov: f32) {
        self.screen.set_fov(fov);
    }

    // ===== INTERNALS =====

    /// Replace the render target, render once, and rebind the mesh.
    fn reset(&mut self) -> Result<()> {
        self.queue.cancel_pending();

        self.target =
            Self::create_target(self.screen.as_ref(), self.rect.width(), self.rect.height())?;
        self.draw()?;

        let texture = self.target.texture().clone();
        let mut mesh = self.lock_mesh()?;
        mesh.material_mut()
            .set_uniform(TEXTURE_UNIFORM, UniformValue::Texture(texture));

        vista_debug!("vista3d::Surface",
            "Target recreated ({}x{} layout, {}x{} target)",
            self.rect.width(), self.rect.height(),
            self.target.info().width, self.target.info().height);

        Ok(())
    }

    /// Render the inner scene with the inner camera into the current target.
    fn draw(&self) -> Result<()> {
        let renderer = self.screen.renderer();
        let mut renderer = renderer.lock().map_err(|_| {
            vista_err!("vista3d::Surface", "Renderer lock poisoned")
        })?;
        renderer.render(&self.scene, &self.camera, &self.target)
    }

    /// Allocate an offscreen color target for the given layout size.
    ///
    /// Allocation only: renders nothing, touches no mesh state.
    fn create_target(
        screen: &dyn Screen,
        width: f32,
        height: f32,
    ) -> Result<Arc<dyn RenderTarget>> {
        let desc = RenderTargetDesc {
            width: width as u32 * OVERSAMPLE,
            height: height as u32 * OVERSAMPLE,
            min_filter: FilterMode::Linear,
            mag_filter: FilterMode::Nearest,
            format: TextureFormat::R8G8B8A8_UNORM,
            usage: TargetUsage::SAMPLED | TargetUsage::COLOR_ATTACHMENT,
        };
        let renderer = screen.renderer();
        let mut renderer = renderer.lock().map_err(|_| {
            vista_err!("vista3d::Surface", "Renderer lock poisoned")
        })?;
        renderer.create_render_target(desc)
    }

    fn lock_mesh(&self) -> Result<std::sync::MutexGuard<'_, Mesh>> {
        self.rect.mesh().lock().map_err(|_| {
            vista_err!("vista3d::Surface", "Mesh lock poisoned")
        })
    }
}

impl Drop for Surface {
    fn drop(&mut self) {
        // Invalidate in-flight deferred redraws and detach the hook; the
        // mesh may outlive the surface inside an outer scene.
        self.queue.cancel_pending();
        if let Ok(mut mesh) = self.rect.mesh().lock() {
            mesh.clear_before_render();
        }
    }
}

#[cfg(test)]
#[path = "surface_tests.rs"]
mod tests;
