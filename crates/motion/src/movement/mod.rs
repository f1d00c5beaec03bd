//! Keyboard-driven movement.
//!
//! This module implements the smooth-motion model of the demo:
//!
//! - Goal vectors that key presses nudge by fixed increments
//! - Current vectors that ramp toward their goals a bounded step per frame
//! - Pause snapshots per axis group
//! - Forward/right/up thrust axes for free flight
//!
//! # Design
//!
//! [`MotionState`] holds every goal/current pair. Each frame the owner calls
//! the smoothing helpers with the frame time, then projects the smoothed
//! movement through a [`ThrustBasis`] when flying.

mod approach;
mod basis;
mod config;
mod state;

pub use approach::{approach, approach_vec3};
pub use basis::{euler_xyz, BasisMode, ThrustBasis};
pub use config::{MotionConfig, MotionPreset};
pub use state::{Axis, MotionState, MovementMode, PauseFlags};
