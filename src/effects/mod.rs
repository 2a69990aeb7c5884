pub mod cube_material;

pub use cube_material::{map_visual, shared_params, AnimationParams, CubeVisual, SharedParams};
