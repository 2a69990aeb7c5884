// src/draw/cube_draw.rs
// Projects the cube grid through the camera and draws it as shaded quads.
//
// nannou's Draw has no depth buffer, so faces are back-face culled and
// painted far to near.

use nannou::glam::{Vec2, Vec3};
use nannou::prelude::*;

use crate::effects::CubeVisual;
use crate::models::CellStates;
use crate::utilities::easing::lerp_color;
use crate::views::{CameraRig, CubeScene, Lighting};

struct CubeFace {
    normal: [f32; 3],
    corners: [usize; 4],
}

// Corner `i` of a unit cube: bit 0 = +x, bit 1 = +y, bit 2 = +z.
const FACES: [CubeFace; 6] = [
    CubeFace { normal: [1.0, 0.0, 0.0], corners: [1, 3, 7, 5] },
    CubeFace { normal: [-1.0, 0.0, 0.0], corners: [0, 2, 6, 4] },
    CubeFace { normal: [0.0, 1.0, 0.0], corners: [2, 3, 7, 6] },
    CubeFace { normal: [0.0, -1.0, 0.0], corners: [0, 1, 5, 4] },
    CubeFace { normal: [0.0, 0.0, 1.0], corners: [4, 5, 7, 6] },
    CubeFace { normal: [0.0, 0.0, -1.0], corners: [0, 1, 3, 2] },
];

fn corner(index: usize) -> Vec3 {
    let axis = |bit: usize| if index & bit != 0 { 0.5 } else { -0.5 };
    Vec3::new(axis(1), axis(2), axis(4))
}

#[derive(Debug, Clone)]
pub struct ProjectedFace {
    pub points: [Vec2; 4],
    pub color: Rgb<f32>,
    pub depth: f32, // distance from the camera to the face centre
}

/// Visible faces of every cube in window coordinates, sorted far to near.
pub fn project_faces(
    scene: &CubeScene,
    camera: &CameraRig,
    lighting: &Lighting,
    cells: &CellStates,
    window_size: Vec2,
) -> Vec<ProjectedFace> {
    let aspect = window_size.x / window_size.y;
    let view_projection = camera.view_projection(aspect);
    let half_window = window_size / 2.0;

    let mut faces = Vec::new();
    for (row, col, state) in cells.iter() {
        let visual = &state.visual;
        let centre = scene.position(row, col) + Vec3::new(0.0, visual.vertical_offset, 0.0);
        let size = scene.cube_size * visual.scale;

        for face in FACES.iter() {
            let normal = scene.transform.apply_to_direction(Vec3::from(face.normal));
            let world = face
                .corners
                .map(|index| scene.transform.apply_to_point(centre + corner(index) * size));
            let face_centre = (world[0] + world[1] + world[2] + world[3]) / 4.0;
            let to_camera = camera.position - face_centre;
            if normal.dot(to_camera) <= 0.0 {
                continue;
            }

            let ndc = world.map(|point| view_projection.project_point3(point));
            if ndc.iter().any(|point| point.z < 0.0 || point.z > 1.0) {
                continue;
            }

            faces.push(ProjectedFace {
                points: ndc.map(|point| Vec2::new(point.x, point.y) * half_window),
                color: shade(visual, normal, to_camera.normalize(), lighting),
                depth: to_camera.length(),
            });
        }
    }

    faces.sort_by(|a, b| b.depth.partial_cmp(&a.depth).unwrap_or(std::cmp::Ordering::Equal));
    faces
}

/// Blinn-Phong approximation of a metal/rough standard material.
pub fn shade(visual: &CubeVisual, normal: Vec3, to_eye: Vec3, lighting: &Lighting) -> Rgb<f32> {
    let n_dot_l = normal.dot(lighting.to_light).max(0.0);
    let diffuse = (lighting.ambient_intensity + lighting.directional_intensity * n_dot_l)
        * (1.0 - 0.5 * visual.metalness);

    let specular = if n_dot_l > 0.0 {
        let half = (lighting.to_light + to_eye).normalize();
        let shininess = 2.0 / (visual.roughness * visual.roughness).max(1e-4);
        normal.dot(half).max(0.0).powf(shininess)
            * lighting.directional_intensity
            * (1.0 - visual.roughness)
            * 0.25
    } else {
        0.0
    };
    let highlight = lerp_color(rgb(1.0, 1.0, 1.0), visual.color, visual.metalness);

    let channel = |base: f32, tint: f32, glow: f32| {
        (base * diffuse + tint * specular + glow * visual.emissive_intensity).clamp(0.0, 1.0)
    };
    rgb(
        channel(visual.color.red, highlight.red, visual.emissive.red),
        channel(visual.color.green, highlight.green, visual.emissive.green),
        channel(visual.color.blue, highlight.blue, visual.emissive.blue),
    )
}

pub fn draw_faces(draw: &Draw, faces: &[ProjectedFace]) {
    for face in faces {
        let [a, b, c, d] = face.points;
        draw.quad().points(a, b, c, d).color(face.color);
    }
}

pub fn draw_cubes(
    draw: &Draw,
    scene: &CubeScene,
    camera: &CameraRig,
    lighting: &Lighting,
    cells: &CellStates,
    window_size: Vec2,
) {
    let faces = project_faces(scene, camera, lighting, cells, window_size);
    draw_faces(draw, &faces);
}
