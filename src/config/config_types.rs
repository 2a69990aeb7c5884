// src/config/config_types.rs
//
// Config types for the app. Every table falls back to its Default.

use nannou::prelude::*;
use serde::Deserialize;

use super::ConfigError;
use crate::effects::cube_material::DEFAULT_PEAK_COLOR_HEX;
use crate::utilities::easing::{parse_hex_color, rgb_from_hex};

const DEFAULT_BACKGROUND_HEX: u32 = 0x5a8cc4;

/// A `#rrggbb` color, checked while the document is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct HexColor(Rgb<f32>);

impl HexColor {
    pub fn from_hex(hex: u32) -> Self {
        Self(rgb_from_hex(hex))
    }

    pub fn rgb(&self) -> Rgb<f32> {
        self.0
    }
}

impl TryFrom<String> for HexColor {
    type Error = ConfigError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        match parse_hex_color(&text) {
            Some(color) => Ok(Self(color)),
            None => Err(ConfigError::InvalidColor(text)),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "cubeclock".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TimezoneOption {
    pub value: String,
    pub label: String,
}

impl TimezoneOption {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ClockConfig {
    pub default_timezone: String,
    pub timezones: Vec<TimezoneOption>,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            default_timezone: "Asia/Ho_Chi_Minh".to_string(),
            timezones: vec![
                TimezoneOption::new("Asia/Ho_Chi_Minh", "Hanoi / Vietnam"),
                TimezoneOption::new("Asia/Singapore", "Singapore"),
                TimezoneOption::new("Asia/Tokyo", "Tokyo / Japan"),
                TimezoneOption::new("Asia/Shanghai", "Shanghai / China"),
                TimezoneOption::new("Australia/Sydney", "Sydney / Australia"),
                TimezoneOption::new("Europe/London", "London / UK"),
                TimezoneOption::new("Europe/Paris", "Paris / France"),
                TimezoneOption::new("America/New_York", "New York / USA"),
                TimezoneOption::new("America/Los_Angeles", "Los Angeles / USA"),
            ],
        }
    }
}

/************************* Animation Configs ********************/
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AnimationConfig {
    pub fall_duration: f32, // seconds one column takes to drop
    pub rise_duration: f32, // seconds one column takes to rise
    pub fall_stagger: f32,  // delay between neighbouring columns
    pub rise_stagger: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            fall_duration: 0.5,
            rise_duration: 0.5,
            fall_stagger: 0.05,
            rise_stagger: 0.05,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CubeConfig {
    pub peak_y: f32,
    pub peak_scale: f32,
    pub peak_color: HexColor,
    pub brightness: f32,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            peak_y: 0.0,
            peak_scale: 1.56,
            peak_color: HexColor::from_hex(DEFAULT_PEAK_COLOR_HEX),
            brightness: 1.5,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SceneConfig {
    pub background: HexColor,
    pub cube_size: f32,
    pub spacing_factor: f32, // centre-to-centre distance in cube sizes
    pub directional_intensity: f32,
    pub ambient_intensity: f32,
    pub light_position: [f32; 3],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            background: HexColor::from_hex(DEFAULT_BACKGROUND_HEX),
            cube_size: 0.5 / 8.0,
            spacing_factor: 2.0 * 1.15 * 2.0 * 0.75 * 0.77,
            directional_intensity: 2.6,
            ambient_intensity: 0.78,
            light_position: [0.0, 10.0, 0.0],
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub fov: f32, // vertical, degrees
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.32, 2.25, 1.2],
            fov: 45.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct InputConfig {
    pub rotation_sensitivity: f32, // radians per wheel pixel
    pub key_rotation_speed: f32,   // radians per second
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            rotation_sensitivity: 0.002,
            key_rotation_speed: 1.2,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct OscConfig {
    pub enabled: bool,
    pub rx_port: u16,
}

impl Default for OscConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rx_port: 9000,
        }
    }
}
