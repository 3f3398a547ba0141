//! Game tunables and their on-disk YAML form.
//!
//! Every dimension is a fraction of the field edge and every rate is per
//! second, so a config is valid for any window size or frame rate. Configs
//! load from YAML; keys missing from the file fall back to their defaults.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

// =============================================================================
// Errors
// =============================================================================

/// Errors that can occur when loading or saving a config file.
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(serde_yaml::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "config io error: {}", e),
            ConfigError::ParseError(e) => write!(f, "config parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::ParseError(e)
    }
}

// =============================================================================
// Config
// =============================================================================

/// Tunable game constants.
///
/// Callers are expected to keep values sensible: positive sizes and speeds,
/// a paddle that fits the field, a max angle below 90 degrees. The
/// simulation does not re-validate them on every step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Serve speed of the ball, in field edges per second.
    pub ball_speed: f64,
    /// Along-path acceleration of the ball, per second squared.
    pub ball_acceleration: f64,
    /// Ball radius.
    pub ball_radius: f64,
    /// Paddle travel speed toward its target.
    pub paddle_speed: f64,
    /// Paddle length along the y axis.
    pub paddle_size: f64,
    /// Paddle width along the x axis.
    pub paddle_thickness: f64,
    /// Steepest return angle off a paddle, in degrees from horizontal.
    pub max_angle: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            ball_speed: 0.5,
            ball_acceleration: 0.01,
            ball_radius: 0.01,
            paddle_speed: 1.0,
            paddle_size: 0.2,
            paddle_thickness: 0.02,
            max_angle: 60.0,
        }
    }
}

impl GameConfig {
    /// Load a config from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load a config from a YAML file, or fall back to the defaults when
    /// the file does not exist. A file that exists but fails to parse is
    /// still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        Self::load(path)
    }

    /// Write the config out as YAML.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// The steepest return angle, converted to radians.
    pub fn max_angle_rad(&self) -> f64 {
        self.max_angle.to_radians()
    }
}

// =============================================================================
// Tests
// =============================================================================
