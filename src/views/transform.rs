// src/views/transform.rs
//
// Rigid transform of the cube group. Rotation is applied X after Y,
// the same order as a three.js "XYZ" Euler with no Z component.

use nannou::glam::{Mat4, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3D {
    pub translation: Vec3,
    pub rotation_x: f32, // radians
    pub rotation_y: f32, // radians
    pub scale: f32,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation_x: 0.0,
            rotation_y: 0.0,
            scale: 1.0,
        }
    }
}

impl Transform3D {
    pub fn rotate(&mut self, delta_x: f32, delta_y: f32) {
        self.rotation_x += delta_x;
        self.rotation_y += delta_y;
    }

    pub fn rotation_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.rotation_x) * Mat4::from_rotation_y(self.rotation_y)
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translation)
            * self.rotation_matrix()
            * Mat4::from_scale(Vec3::splat(self.scale))
    }

    pub fn apply_to_point(&self, point: Vec3) -> Vec3 {
        self.matrix().transform_point3(point)
    }

    /// Rotates a direction (normals); ignores translation and scale.
    pub fn apply_to_direction(&self, direction: Vec3) -> Vec3 {
        self.rotation_matrix().transform_vector3(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_default_transform() {
        let transform = Transform3D::default();
        assert_eq!(transform.translation, Vec3::ZERO);
        assert_eq!(transform.scale, 1.0);
        assert_eq!(transform.rotation_x, 0.0);
        assert_eq!(transform.rotation_y, 0.0);
    }

    #[test]
    fn test_point_transformation() {
        // Translation only
        let transform = Transform3D {
            translation: Vec3::new(1.0, 1.0, 1.0),
            ..Transform3D::default()
        };
        assert_close(transform.apply_to_point(Vec3::ONE), Vec3::splat(2.0));

        // Scale only
        let transform = Transform3D {
            scale: 2.0,
            ..Transform3D::default()
        };
        assert_close(transform.apply_to_point(Vec3::ONE), Vec3::splat(2.0));

        // Yaw of 90 degrees turns +X into -Z
        let transform = Transform3D {
            rotation_y: PI / 2.0,
            ..Transform3D::default()
        };
        assert_close(transform.apply_to_point(Vec3::X), Vec3::new(0.0, 0.0, -1.0));

        // Pitch of 90 degrees turns +Y into +Z
        let transform = Transform3D {
            rotation_x: PI / 2.0,
            ..Transform3D::default()
        };
        assert_close(transform.apply_to_point(Vec3::Y), Vec3::Z);
    }

    #[test]
    fn test_direction_ignores_translation() {
        let transform = Transform3D {
            translation: Vec3::new(5.0, 5.0, 5.0),
            scale: 3.0,
            ..Transform3D::default()
        };
        assert_close(transform.apply_to_direction(Vec3::Y), Vec3::Y);
    }
}
