// src/views/mod.rs

pub mod cube_scene;
pub mod transform;

pub use cube_scene::{CameraRig, CubeScene, Lighting, MAX_FOV, MIN_FOV};
pub use transform::Transform3D;
