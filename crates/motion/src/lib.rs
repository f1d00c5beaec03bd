//! Glide Motion
//!
//! The motion core of the glide demo: everything that turns key impulses
//! into smooth movement, expressed purely over `glam` vectors and
//! quaternions. Nothing in here knows about windows, meshes or scene nodes.
//!
//! # Architecture
//!
//! - **Movement**: goal/current vectors, the approach smoother that ramps one
//!   toward the other, and the thrust basis used for free flight
//! - **Orientation**: look-at rotations and the stepped SLERP job that turns
//!   an object toward a point at a constant angular rate
//!
//! ```text
//!  key impulse ──► goal vectors ──approach()──► current vectors
//!                                                   │
//!                       world rotation ──► ThrustBasis ──► velocity
//! ```
//!
//! # Design Principles
//!
//! 1. **Per-axis smoothing**: every scalar axis ramps on its own, no coupling
//! 2. **Bounded steps**: one update never moves a value by more than its step
//! 3. **Pure state**: every operation is an in-memory mutation that cannot fail

pub mod movement;
pub mod orientation;

// Re-export commonly used types
pub use movement::{
    approach, approach_vec3, Axis, BasisMode, MotionConfig, MotionPreset, MotionState,
    MovementMode, PauseFlags, ThrustBasis,
};
pub use orientation::{camera_look_at, look_rotation, SlerpJob};
