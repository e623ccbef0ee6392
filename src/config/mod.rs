//! Configuration management for serein.
//!
//! This module handles loading and saving configuration from `~/.serein/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{
    BreathingConfig, ColorSetting, Config, GeneralConfig, MixerConfig, PomodoroConfig,
};
