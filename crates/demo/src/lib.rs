//! Glide Demo
//!
//! Everything around the motion core that the interactive demo needs:
//!
//! - A small scene graph and the fixed stage of nodes it is played on
//! - Key mapping from presses to motion commands
//! - The look-at interpolator that turns a node on its own ticker thread
//! - Status reporting and JSON configuration
//!
//! # Architecture
//!
//! The demo is headless. A host window feeds key presses and frame times in
//! and reads node transforms back out for drawing.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          Demo                               │
//! │  ┌──────────┐    ┌─────────────┐    ┌───────────────────┐   │
//! │  │ KeyEvent │───►│ InputMapper │───►│ MotionState goals │   │
//! │  └──────────┘    └─────────────┘    └─────────┬─────────┘   │
//! │                                        update(dt)           │
//! │  ┌──────────────────────┐           ┌─────────▼─────────┐   │
//! │  │ OrientationInterp.   │──────────►│ Stage (SceneGraph)│   │
//! │  │ (ticker thread)      │  solo rot └───────────────────┘   │
//! │  └──────────────────────┘                                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod demo;
pub mod input;
pub mod interpolator;
pub mod scene;
pub mod stage;
pub mod status;
pub mod targets;

// Re-export main types
pub use config::{ConfigError, DemoConfig, StageLayout};
pub use demo::{Demo, HostRequest};
pub use input::{Command, InputMapper, Key, KeyEvent, Modifiers};
pub use interpolator::{OrientationInterpolator, SharedOrientation, SlerpHandle};
pub use scene::{Node, NodeId, SceneGraph};
pub use stage::Stage;
pub use status::{CloserSphere, StatusReport};
pub use targets::{ActiveTarget, LookAtChoice, LookAtTargets};

// Re-export motion types for convenience
pub use glide_motion::{BasisMode, MotionConfig, MotionState, MovementMode, ThrustBasis};
