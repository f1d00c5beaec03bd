//! Scene node and its local transform.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Handle to a node in a [`SceneGraph`](super::SceneGraph).
///
/// Ids are only handed out by the graph that owns the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Index of the node in its graph's arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named node with a transform relative to its parent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub name: String,

    /// Position relative to the parent (world space for root nodes).
    pub position: Vec3,

    /// Rotation relative to the parent.
    pub rotation: Quat,

    pub scale: Vec3,

    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            parent: None,
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Local transform matrix (scale, then rotation, then translation).
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Rotate about the node's own X axis.
    pub fn rotate_x(&mut self, angle: f32) {
        self.rotation = (self.rotation * Quat::from_rotation_x(angle)).normalize();
    }

    /// Rotate about the node's own Y axis.
    pub fn rotate_y(&mut self, angle: f32) {
        self.rotation = (self.rotation * Quat::from_rotation_y(angle)).normalize();
    }

    /// Rotate about the node's own Z axis.
    pub fn rotate_z(&mut self, angle: f32) {
        self.rotation = (self.rotation * Quat::from_rotation_z(angle)).normalize();
    }

    /// Apply `rotate_x`, `rotate_y`, `rotate_z` in that order.
    pub fn rotate_xyz(&mut self, angles: Vec3) {
        self.rotate_x(angles.x);
        self.rotate_y(angles.y);
        self.rotate_z(angles.z);
    }

    /// Move by `offset` in the parent's space.
    #[inline]
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }
}
