//! Geometry module — quad geometry and bounding volumes.
//!
//! Provides the UV-mapped quad the surface displays its render target on,
//! and the bounding volume types used for culling queries.

mod bounds;
mod quad;

pub use bounds::{BoundingBox, BoundingSphere};
pub use quad::{QuadGeometry, QuadVertex};
