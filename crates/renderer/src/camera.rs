//! View camera driven by a scene node's transform.

use glam::{Quat, Vec3};

/// Camera state for rendering.
///
/// Follows the usual camera convention: the view looks down the local -Z
/// axis with local +Y up.
#[derive(Debug, Clone)]
pub struct ViewCamera {
    /// Eye position in world space.
    pub position: Vec3,

    /// World rotation of the camera node.
    pub rotation: Quat,

    /// Vertical field of view in degrees.
    pub fov: f32,

    /// Near clipping plane.
    pub near: f32,

    /// Far clipping plane.
    pub far: f32,

    /// Aspect ratio (width / height).
    pub aspect: f32,
}

impl Default for ViewCamera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            fov: 65.0,
            near: 0.1,
            far: 1000.0,
            aspect: 16.0 / 9.0,
        }
    }
}

impl ViewCamera {
    /// Create a camera at a node's world position and rotation.
    pub fn from_node(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Follow the node again.
    pub fn sync(&mut self, position: Vec3, rotation: Quat) {
        self.position = position;
        self.rotation = rotation;
    }

    /// Get the view direction.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// A point one unit ahead of the eye.
    pub fn target(&self) -> Vec3 {
        self.position + self.forward()
    }
}
