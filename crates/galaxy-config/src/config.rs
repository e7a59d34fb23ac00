//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level backdrop configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Particle field settings.
    pub scene: SceneConfig,
    /// Nebula shading palette.
    pub nebula: NebulaColorsConfig,
    /// Stellar dust settings.
    pub dust: DustConfig,
    /// Camera auto-orbit settings.
    pub camera: CameraConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Particle field configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Number of glyph particles.
    pub particle_count: u32,
    /// Half-extent of the cubic spawn volume.
    pub spawn_radius: f32,
    /// Lower bound of the per-particle angular speed draw.
    pub speed_min: f32,
    /// Upper bound of the per-particle angular speed draw.
    pub speed_max: f32,
}

/// Nebula shading palette: the two colors blended per surface point.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NebulaColorsConfig {
    /// Blend origin color in sRGB.
    pub color_primary: [f32; 3],
    /// Blend target color in sRGB.
    pub color_secondary: [f32; 3],
}

/// Stellar dust configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DustConfig {
    /// Number of dust motes.
    pub count: u32,
    /// Inner radius of the dust shell.
    pub radius: f32,
    /// Radial depth of the shell.
    pub depth: f32,
    /// Twinkle rate.
    pub twinkle_speed: f32,
}

/// Camera auto-orbit configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Auto-rotation rate (host-controls units; 2.0 = one orbit / 60 s).
    pub auto_rotate_speed: f32,
    /// Manual-override damping factor in (0, 1].
    pub damping: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log per-frame timing statistics from the demo driver.
    pub show_frame_stats: bool,
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_count: 80,
            spawn_radius: 30.0,
            speed_min: 0.01,
            speed_max: 0.03,
        }
    }
}

impl Default for NebulaColorsConfig {
    fn default() -> Self {
        Self {
            // #dc5692 and #351b5a
            color_primary: [0.863, 0.337, 0.573],
            color_secondary: [0.208, 0.106, 0.353],
        }
    }
}

impl Default for DustConfig {
    fn default() -> Self {
        Self {
            count: 3000,
            radius: 100.0,
            depth: 50.0,
            twinkle_speed: 0.5,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            auto_rotate_speed: 0.3,
            damping: 0.05,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_frame_stats: false,
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
