// src/draw/mod.rs
// Painter's-order drawing of the cube grid

pub mod cube_draw;

pub use cube_draw::{draw_cubes, project_faces, ProjectedFace};
