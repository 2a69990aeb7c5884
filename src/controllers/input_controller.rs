// src/controllers/input_controller.rs
//
// Keyboard and mouse-wheel rotation of the cube group.
// A/D and Left/Right turn around Y, W/S and Up/Down tilt around X.

use nannou::prelude::*;
use std::collections::HashSet;

use crate::config::InputConfig;
use crate::views::Transform3D;

/// Pixels reported per wheel notch when the platform only gives lines.
const PIXELS_PER_LINE: f32 = 100.0;

pub struct InputController {
    held: HashSet<Key>,
    key_rotation_speed: f32,
    wheel_sensitivity: f32,
}

impl InputController {
    pub fn new(config: &InputConfig) -> Self {
        Self {
            held: HashSet::new(),
            key_rotation_speed: config.key_rotation_speed,
            wheel_sensitivity: config.rotation_sensitivity,
        }
    }

    /// Keys without a rotation axis are ignored.
    pub fn key_pressed(&mut self, key: Key) {
        if axis_direction(key).is_some() {
            self.held.insert(key);
        }
    }

    pub fn key_released(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Applies the rotation from held keys over `dt` seconds.
    pub fn update(&self, transform: &mut Transform3D, dt: f32) {
        let step = self.key_rotation_speed * dt;
        for key in &self.held {
            match axis_direction(*key) {
                Some(RotationAxis::X(sign)) => transform.rotate(sign * step, 0.0),
                Some(RotationAxis::Y(sign)) => transform.rotate(0.0, sign * step),
                None => (),
            }
        }
    }

    /// Scrolling down (positive pixel delta) tilts the grid back.
    pub fn mouse_wheel(&self, transform: &mut Transform3D, delta: MouseScrollDelta) {
        transform.rotate(-wheel_pixels(delta) * self.wheel_sensitivity, 0.0);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum RotationAxis {
    X(f32),
    Y(f32),
}

fn axis_direction(key: Key) -> Option<RotationAxis> {
    match key {
        Key::A | Key::Left => Some(RotationAxis::Y(1.0)),
        Key::D | Key::Right => Some(RotationAxis::Y(-1.0)),
        Key::W | Key::Up => Some(RotationAxis::X(1.0)),
        Key::S | Key::Down => Some(RotationAxis::X(-1.0)),
        _ => None,
    }
}

/// Vertical wheel travel in pixels, positive when scrolling down.
pub fn wheel_pixels(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * PIXELS_PER_LINE,
        MouseScrollDelta::PixelDelta(position) => -position.y as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> InputController {
        InputController::new(&InputConfig::default())
    }

    #[test]
    fn test_held_key_rotates_over_time() {
        let mut input = controller();
        let mut transform = Transform3D::default();

        input.key_pressed(Key::A);
        input.update(&mut transform, 0.5);
        assert!((transform.rotation_y - 0.6).abs() < 1e-6);

        input.key_released(Key::A);
        input.update(&mut transform, 0.5);
        assert!((transform.rotation_y - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut input = controller();
        let mut transform = Transform3D::default();

        input.key_pressed(Key::W);
        input.key_pressed(Key::Down);
        input.update(&mut transform, 1.0);
        assert!(transform.rotation_x.abs() < 1e-6);
    }

    #[test]
    fn test_unhandled_keys_are_ignored() {
        let mut input = controller();
        let mut transform = Transform3D::default();

        input.key_pressed(Key::Q);
        input.update(&mut transform, 1.0);
        assert_eq!(transform, Transform3D::default());
    }

    #[test]
    fn test_wheel_tilts_group() {
        let input = controller();
        let mut transform = Transform3D::default();

        // one notch down = 100px = -0.2 rad
        input.mouse_wheel(&mut transform, MouseScrollDelta::LineDelta(0.0, -1.0));
        assert!((transform.rotation_x + 0.2).abs() < 1e-6);
        assert_eq!(transform.rotation_y, 0.0);
    }
}
