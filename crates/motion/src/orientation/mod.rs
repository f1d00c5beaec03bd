//! Orientation helpers: look-at rotations and stepped SLERP.
//!
//! Node convention: a node faces along its local +Z. Cameras look down
//! their local -Z, so [`camera_look_at`] builds the rotation that points +Z
//! away from the target.

mod look;
mod slerp;

pub use look::{camera_look_at, look_rotation};
pub use slerp::SlerpJob;
