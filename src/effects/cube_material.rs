// src/effects/cube_material.rs
//
// Maps a cube's tween progress onto its render attributes.

use nannou::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::utilities::easing::{lerp, lerp_color, rgb_from_hex};

pub const DIM_COLOR_HEX: u32 = 0x606060;
pub const DEFAULT_PEAK_COLOR_HEX: u32 = 0xe9d826;

const REST_METALNESS: f32 = 0.9;
const PEAK_METALNESS: f32 = 0.85;
const REST_ROUGHNESS: f32 = 0.25;
const PEAK_ROUGHNESS: f32 = 0.06;
const EMISSIVE_GAIN: f32 = 0.53;

/// Live-tunable look of a raised cube.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationParams {
    pub peak_y: f32,
    pub peak_scale: f32,
    pub peak_color: Rgb<f32>,
    pub brightness: f32,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            peak_y: 0.0,
            peak_scale: 1.56,
            peak_color: rgb_from_hex(DEFAULT_PEAK_COLOR_HEX),
            brightness: 1.5,
        }
    }
}

/// Handle shared between the animator (reader) and the debug panel / OSC
/// handlers (writers). All of them run on nannou's main thread; a host that
/// renders and handles input on separate threads needs `Arc<Mutex<_>>` instead.
pub type SharedParams = Rc<RefCell<AnimationParams>>;

pub fn shared_params(params: AnimationParams) -> SharedParams {
    Rc::new(RefCell::new(params))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeVisual {
    pub vertical_offset: f32,
    pub scale: f32,
    pub color_blend: f32,
    pub color: Rgb<f32>,
    pub metalness: f32,
    pub roughness: f32,
    pub emissive: Rgb<f32>,
    pub emissive_intensity: f32,
}

impl CubeVisual {
    /// The dim, non-emissive look of an inactive cube.
    pub fn resting() -> Self {
        Self {
            vertical_offset: 0.0,
            scale: 1.0,
            color_blend: 0.0,
            color: rgb_from_hex(DIM_COLOR_HEX),
            metalness: REST_METALNESS,
            roughness: REST_ROUGHNESS,
            emissive: rgb(0.0, 0.0, 0.0),
            emissive_intensity: 0.0,
        }
    }
}

impl Default for CubeVisual {
    fn default() -> Self {
        Self::resting()
    }
}

pub fn map_visual(progress: f32, params: &AnimationParams) -> CubeVisual {
    CubeVisual {
        vertical_offset: params.peak_y * progress,
        scale: 1.0 + (params.peak_scale - 1.0) * progress,
        color_blend: progress,
        color: lerp_color(rgb_from_hex(DIM_COLOR_HEX), params.peak_color, progress),
        metalness: lerp(REST_METALNESS, PEAK_METALNESS, progress),
        roughness: lerp(REST_ROUGHNESS, PEAK_ROUGHNESS, progress),
        emissive: params.peak_color,
        emissive_intensity: progress * EMISSIVE_GAIN * params.brightness,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_zero_progress_matches_rest() {
        let params = AnimationParams::default();
        let visual = map_visual(0.0, &params);
        let rest = CubeVisual::resting();

        assert_eq!(visual.vertical_offset, 0.0);
        assert_eq!(visual.scale, 1.0);
        assert_eq!(visual.color, rest.color);
        assert!(approx(visual.metalness, 0.9));
        assert!(approx(visual.roughness, 0.25));
        assert_eq!(visual.emissive_intensity, 0.0);
    }

    #[test]
    fn test_full_progress_reaches_peak() {
        let params = AnimationParams {
            peak_y: 0.4,
            peak_scale: 2.0,
            peak_color: rgb(1.0, 0.4, 0.0),
            brightness: 2.0,
        };
        let visual = map_visual(1.0, &params);

        assert!(approx(visual.vertical_offset, 0.4));
        assert!(approx(visual.scale, 2.0));
        assert_eq!(visual.color, params.peak_color);
        assert!(approx(visual.metalness, 0.85));
        assert!(approx(visual.roughness, 0.06));
        assert!(approx(visual.emissive_intensity, 0.53 * 2.0));
        assert_eq!(visual.emissive, params.peak_color);
    }

    #[test]
    fn test_half_progress_is_linear() {
        let params = AnimationParams::default();
        let visual = map_visual(0.5, &params);

        assert!(approx(visual.scale, 1.28));
        assert!(approx(visual.metalness, 0.875));
        assert!(approx(visual.roughness, 0.155));
        assert!(approx(visual.emissive_intensity, 0.5 * 0.53 * 1.5));
        assert_eq!(visual.color_blend, 0.5);
    }

    #[test]
    fn test_negative_brightness_is_passed_through() {
        let params = AnimationParams {
            brightness: -1.0,
            ..AnimationParams::default()
        };
        assert!(map_visual(1.0, &params).emissive_intensity < 0.0);
    }

    #[test]
    fn test_shared_params_see_writes() {
        let shared = shared_params(AnimationParams::default());
        let reader = Rc::clone(&shared);
        shared.borrow_mut().peak_y = 0.3;
        assert_eq!(reader.borrow().peak_y, 0.3);
    }
}
