//! Material module — shader materials with named uniform bindings.

mod shader_material;

pub use shader_material::{
    ShaderMaterial, ShaderMaterialDesc, Side, UniformValue,
};
