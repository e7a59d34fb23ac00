//! Configuration system for the galaxy backdrop.
//!
//! Runtime-configurable settings persisted to disk as RON, with
//! load-or-create semantics, hot-reload detection, and forward/backward
//! compatible serialization via serde defaults.

mod config;
mod error;

pub use config::{
    CameraConfig, Config, DebugConfig, DustConfig, NebulaColorsConfig, SceneConfig,
};
pub use error::ConfigError;
