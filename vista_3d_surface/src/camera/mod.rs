//! Camera module — perspective camera owned by a surface.
//!
//! The crate does NOT store or manage cameras beyond the one each surface
//! owns — they are tools provided here, owned and driven by the caller.

mod camera;

pub use camera::Camera;
