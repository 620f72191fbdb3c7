//! Rectangle entity module — positioned, sized, textured quad.
//!
//! A Rect is the generic building block the surface composes: layout
//! position and size, a texture wrap mode, and a shared quad mesh.

mod rect;

pub use rect::{Rect, RectDesc};
