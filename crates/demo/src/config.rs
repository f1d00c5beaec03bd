//! Demo configuration: motion tuning plus the starting layout of the stage.
//!
//! Everything has a default. A JSON file can override any subset of fields;
//! its path is read from the `GLIDE_CONFIG` environment variable. A
//! top-level `"preset"` (`default`, `snappy` or `gentle`) picks the motion
//! tuning that the `"motion"` fields then override.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_6};
use std::path::{Path, PathBuf};

use glam::Vec3;
use glide_motion::{MotionConfig, MotionPreset};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "GLIDE_CONFIG";

/// Errors that can occur while loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Start transforms of every node on the stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageLayout {
    /// Primary character, the default controlled node.
    pub character_position: Vec3,
    pub character_scale: f32,

    /// Second character, turned by the look-at interpolator only.
    pub solo_position: Vec3,
    pub solo_scale: f32,

    /// Small sphere, also the smoothing showcase.
    pub sphere_one_position: Vec3,
    pub sphere_one_radius: f32,

    /// Big sphere.
    pub sphere_two_position: Vec3,
    pub sphere_two_radius: f32,

    /// Camera start position; it starts looking at the origin.
    pub camera_position: Vec3,

    /// Ship indicator offset from the camera while attached.
    pub ship_offset: Vec3,

    /// Ship local rotations about X, then Y, then Z (radians).
    pub ship_rotation: Vec3,
}

impl Default for StageLayout {
    fn default() -> Self {
        Self {
            character_position: Vec3::ZERO,
            character_scale: 0.3,
            solo_position: Vec3::new(-5.0, 4.0, 3.0),
            solo_scale: 0.6,
            sphere_one_position: Vec3::new(-10.0, 4.0, 10.0),
            sphere_one_radius: 1.0,
            sphere_two_position: Vec3::new(0.0, 4.0, 10.0),
            sphere_two_radius: 2.0,
            camera_position: Vec3::new(15.0, 4.0, -2.0),
            ship_offset: Vec3::new(0.0, -1.0, -4.0),
            ship_rotation: Vec3::new(-0.1, FRAC_PI_2, FRAC_PI_6),
        }
    }
}

/// Top-level demo configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Preset the motion tuning was built from, if one was named.
    pub preset: Option<MotionPreset>,
    pub motion: MotionConfig,
    pub stage: StageLayout,
}

impl DemoConfig {
    /// Parse a JSON document. Missing fields keep their defaults, or the
    /// preset's values when one is named.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let mut value: serde_json::Value = serde_json::from_str(text)?;

        if let Some(preset) = value.get("preset").filter(|p| !p.is_null()) {
            let preset: MotionPreset = serde_json::from_value(preset.clone())?;
            let mut motion = serde_json::to_value(preset.config())?;

            if let (Some(base), Some(overrides)) = (
                motion.as_object_mut(),
                value.get("motion").and_then(|m| m.as_object()),
            ) {
                for (key, field) in overrides {
                    base.insert(key.clone(), field.clone());
                }
            }
            value["motion"] = motion;
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Read and parse a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Load the file named by `GLIDE_CONFIG`, or the defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                log::info!("loading config from {}", Path::new(&path).display());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }
}
