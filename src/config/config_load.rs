// src/config/config_load.rs
//
// loading of config.toml

use log::info;
use nannou::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::config_types::*;
use crate::effects::AnimationParams;

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid color '{0}', expected #rrggbb")]
    InvalidColor(String),
    #[error("no config.toml next to the executable or in the working directory")]
    NotFound,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub clock: ClockConfig,
    pub animation: AnimationConfig,
    pub cube: CubeConfig,
    pub scene: SceneConfig,
    pub camera: CameraConfig,
    pub input: InputConfig,
    pub osc: OscConfig,
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::config_path_in_exe_dir() {
            return Self::load_from_path(&exe_config);
        }

        // Fallback to loading from the current working directory
        let cwd_config = PathBuf::from(CONFIG_FILE_NAME);
        if cwd_config.exists() {
            return Self::load_from_path(&cwd_config);
        }

        Err(Box::new(ConfigError::NotFound))
    }

    pub fn load_from_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses a config document; malformed colors are rejected here.
    pub fn from_toml(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(toml::from_str(content)?)
    }

    fn config_path_in_exe_dir() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        let config_path = exe_path.parent()?.join(CONFIG_FILE_NAME);
        config_path.exists().then_some(config_path)
    }

    pub fn background_color(&self) -> Rgb<f32> {
        self.scene.background.rgb()
    }

    pub fn animation_params(&self) -> AnimationParams {
        AnimationParams {
            peak_y: self.cube.peak_y,
            peak_scale: self.cube.peak_scale,
            peak_color: self.cube.peak_color.rgb(),
            brightness: self.cube.brightness,
        }
    }

    /// Label for a timezone identifier, or the identifier itself if unlisted.
    pub fn timezone_label<'a>(&'a self, value: &'a str) -> &'a str {
        self.clock
            .timezones
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.as_str())
            .unwrap_or(value)
    }
}
