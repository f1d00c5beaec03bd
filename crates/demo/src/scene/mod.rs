//! Minimal scene graph.
//!
//! Nodes live in an arena owned by [`SceneGraph`] and refer to each other
//! through [`NodeId`]s. Each node carries a local transform and an optional
//! parent; world-space queries walk the parent chain.
//!
//! # Conventions
//!
//! - A node faces along its local +Z ([`SceneGraph::world_direction`])
//! - [`SceneGraph::look_at`] uses the camera convention (local -Z toward
//!   the point), matching what a camera node needs
//! - `rotate_x/y/z` compose a rotation about the node's own local axis

mod graph;
mod node;

pub use graph::SceneGraph;
pub use node::{Node, NodeId};
