//! Motion tuning constants.
//!
//! All increments and ramp rates are grouped here for easy tuning.
//! Linear values are world units per frame, angular values are radians per
//! frame, unless otherwise noted.

use std::f32::consts::PI;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::basis::BasisMode;

/// Named starting points for [`MotionConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionPreset {
    #[default]
    Default,
    Snappy,
    Gentle,
}

impl MotionPreset {
    /// The config this preset stands for.
    pub fn config(self) -> MotionConfig {
        match self {
            Self::Default => MotionConfig::default(),
            Self::Snappy => MotionConfig::snappy(),
            Self::Gentle => MotionConfig::gentle(),
        }
    }
}

/// Configuration for keyboard-driven motion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    // ========================================================================
    // Translate Mode
    // ========================================================================
    /// Velocity change per key press (units/frame).
    pub linear_increment: f32,

    /// Rotation rate change per key press while translating (radians/frame).
    pub rotation_increment_translate: f32,

    /// Velocity multiplier for the accelerate key. Its inverse decelerates.
    pub acceleration: f32,

    // ========================================================================
    // Fly Mode
    // ========================================================================
    /// Rotation goal change per key press while flying (radians/frame).
    pub rotation_increment_fly: f32,

    /// The camera turns this many times slower than the character.
    pub camera_rotation_divisor: f32,

    /// Size of the one-shot rotation goal jump (radians/frame).
    pub rotation_jump: f32,

    /// Rotation ramps at `delta_time / rotation_ramp_divisor` per frame.
    pub rotation_ramp_divisor: f32,

    /// How thrust axes are derived from the flying node's orientation.
    pub basis: BasisMode,

    // ========================================================================
    // Smoothing Showcase
    // ========================================================================
    /// Goal speed for the sphere that demonstrates a smoothed ramp.
    pub smoothed_goal: f32,

    // ========================================================================
    // Look-At
    // ========================================================================
    /// Number of SLERP ticks to reach the look-at orientation.
    pub slerp_steps: u32,

    /// Time between SLERP ticks (milliseconds).
    pub slerp_tick_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            // Translate
            linear_increment: 0.005,
            rotation_increment_translate: 0.02,
            acceleration: 2.0,

            // Fly
            rotation_increment_fly: 0.004,
            camera_rotation_divisor: 3.0,
            rotation_jump: PI / 8.0,
            rotation_ramp_divisor: 5.0,
            basis: BasisMode::Legacy,

            // Showcase
            smoothed_goal: 0.2,

            // Look-at
            slerp_steps: 30,
            slerp_tick_ms: 34, // ~30 Hz
        }
    }
}

impl MotionConfig {
    /// Create a "snappy" config: faster ramps and a quicker look-at.
    pub fn snappy() -> Self {
        Self {
            linear_increment: 0.01,
            acceleration: 3.0,
            rotation_ramp_divisor: 2.0,
            slerp_steps: 15,
            ..Default::default()
        }
    }

    /// Create a "gentle" config: slow ramps and a long, smooth look-at.
    pub fn gentle() -> Self {
        Self {
            linear_increment: 0.0025,
            rotation_increment_translate: 0.01,
            rotation_increment_fly: 0.002,
            rotation_ramp_divisor: 10.0,
            slerp_steps: 60,
            slerp_tick_ms: 17,
            ..Default::default()
        }
    }

    /// Time between SLERP ticks.
    pub fn slerp_interval(&self) -> Duration {
        Duration::from_millis(self.slerp_tick_ms)
    }

    /// Per-frame ramp step for rotation, given the frame time in seconds.
    pub fn rotation_ramp(&self, delta_time: f32) -> f32 {
        delta_time / self.rotation_ramp_divisor
    }

    /// Fly-mode rotation increment for the character or the camera.
    pub fn fly_rotation_increment(&self, camera: bool) -> f32 {
        if camera {
            self.rotation_increment_fly / self.camera_rotation_divisor
        } else {
            self.rotation_increment_fly
        }
    }
}
