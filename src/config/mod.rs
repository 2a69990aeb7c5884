pub mod config_load;
pub mod config_types;

pub use config_load::{Config, ConfigError, CONFIG_FILE_NAME};
pub use config_types::{
    AnimationConfig, CameraConfig, ClockConfig, CubeConfig, HexColor, InputConfig, OscConfig,
    SceneConfig, TimezoneOption, WindowConfig,
};
