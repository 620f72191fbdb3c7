//! Scene management module
//!
//! Provides the scene-graph container a surface renders: a flat collection
//! of nodes, each a shared mesh plus a world transform.

mod scene;
mod scene_node;

pub use scene::{Scene, SceneNodeKey};
pub use scene_node::SceneNode;
