//! Glide Renderer
//!
//! Small rendering helpers shared by the demo window: a view camera that
//! follows a scene node, and the flat colours and shapes used to preview
//! each node.
//!
//! # Usage
//!
//! Each frame, sync the [`ViewCamera`] with the camera node's world
//! transform and draw each node with its [`Shape`].

pub mod camera;
pub mod shape;

pub use camera::ViewCamera;
pub use shape::{Shape, ShapeKind};
