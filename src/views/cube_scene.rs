// src/views/cube_scene.rs
//
// The 3D scene the host renders: cube layout, the group transform,
// the camera and the lights. The animation state lives in CellStates.

use nannou::glam::{Mat4, Vec3};

use crate::config::{CameraConfig, SceneConfig};
use crate::models::{GRID_COLS, GRID_ROWS};
use crate::views::Transform3D;

pub const MIN_FOV: f32 = 1.0;
pub const MAX_FOV: f32 = 120.0;

#[derive(Debug, Clone)]
pub struct CubeScene {
    /// Rest position of each cube, `[row][col]`, in group space.
    positions: [[Vec3; GRID_COLS]; GRID_ROWS],
    pub cube_size: f32,
    pub spacing: f32,
    pub transform: Transform3D,
}

impl CubeScene {
    /// Columns run along X, rows along Z, centred on the origin.
    pub fn new(cube_size: f32, spacing: f32) -> Self {
        let half_x = (GRID_COLS - 1) as f32 / 2.0;
        let half_z = (GRID_ROWS - 1) as f32 / 2.0;

        let mut positions = [[Vec3::ZERO; GRID_COLS]; GRID_ROWS];
        for (row, row_positions) in positions.iter_mut().enumerate() {
            for (col, position) in row_positions.iter_mut().enumerate() {
                *position = Vec3::new(
                    (col as f32 - half_x) * spacing,
                    0.0,
                    (row as f32 - half_z) * spacing,
                );
            }
        }

        Self {
            positions,
            cube_size,
            spacing,
            transform: Transform3D::default(),
        }
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(config.cube_size, config.cube_size * config.spacing_factor)
    }

    pub fn position(&self, row: usize, col: usize) -> Vec3 {
        self.positions[row][col]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    pub fov: f32, // vertical, degrees
    pub near: f32,
    pub far: f32,
}

impl CameraRig {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            position: Vec3::from(config.position),
            fov: config.fov.clamp(MIN_FOV, MAX_FOV),
            near: config.near,
            far: config.far,
        }
    }

    /// Out-of-range values are ignored, matching the debug panel's bounds.
    pub fn set_fov(&mut self, fov: f32) -> bool {
        if (MIN_FOV..=MAX_FOV).contains(&fov) {
            self.fov = fov;
            true
        } else {
            false
        }
    }

    /// The camera always looks at the origin.
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), aspect, self.near, self.far)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view()
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    /// Unit vector pointing from the scene towards the directional light.
    pub to_light: Vec3,
    pub directional_intensity: f32,
    pub ambient_intensity: f32,
}

impl Lighting {
    pub fn from_config(config: &SceneConfig) -> Self {
        let position = Vec3::from(config.light_position);
        let to_light = if position.length_squared() > 0.0 {
            position.normalize()
        } else {
            Vec3::Y
        };
        Self {
            to_light,
            directional_intensity: config.directional_intensity,
            ambient_intensity: config.ambient_intensity,
        }
    }
}

impl Default for Lighting {
    fn default() -> Self {
        Self::from_config(&SceneConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_centred() {
        let scene = CubeScene::new(0.1, 0.2);
        let first = scene.position(0, 0);
        let last = scene.position(GRID_ROWS - 1, GRID_COLS - 1);
        assert!((first + last).length() < 1e-6);
        assert!((scene.position(3, 8)).length() < 1e-6);
        assert!((scene.position(0, 1).x - first.x - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_default_spacing() {
        let scene = CubeScene::from_config(&SceneConfig::default());
        assert!((scene.spacing - 0.0625 * 2.6565).abs() < 1e-5);
    }

    #[test]
    fn test_fov_bounds() {
        let mut camera = CameraRig::default();
        assert!(camera.set_fov(60.0));
        assert!(!camera.set_fov(0.5));
        assert!(!camera.set_fov(150.0));
        assert_eq!(camera.fov, 60.0);
    }

    #[test]
    fn test_origin_projects_to_centre() {
        let camera = CameraRig::default();
        let ndc = camera.view_projection(16.0 / 9.0).project_point3(Vec3::ZERO);
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn test_light_points_up() {
        let lighting = Lighting::default();
        assert!((lighting.to_light - Vec3::Y).length() < 1e-6);
    }
}
