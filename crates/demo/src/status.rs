//! On-screen status: nearest sphere, backstab alerts and speed.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::stage::Stage;
use crate::targets::ActiveTarget;

/// A sphere counts as behind the node when the cosine between the node's
/// forward axis and the direction to the sphere is below this.
pub const BACKSTAB_COSINE: f32 = -0.8;

/// Which sphere is nearer the active target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CloserSphere {
    Small,
    Big,
}

/// Snapshot of what the status overlay shows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    pub closer: CloserSphere,
    pub backstab_small: bool,
    pub backstab_big: bool,
    /// Magnitude of the velocity applied this frame.
    pub speed: f32,
}

impl StatusReport {
    /// Measure the stage from the point of view of `target`.
    pub fn capture(stage: &Stage, target: ActiveTarget, velocity: Vec3) -> Self {
        let graph = &stage.graph;
        let node = stage.node_for(target);
        let position = graph.world_position(node);

        let to_small = graph.world_position(stage.sphere_one) - position;
        let to_big = graph.world_position(stage.sphere_two) - position;

        // Ties go to the big sphere
        let closer = if to_small.length_squared() >= to_big.length_squared() {
            CloserSphere::Big
        } else {
            CloserSphere::Small
        };

        // The camera's visual forward is its -Z
        let mut forward = graph.world_direction(node);
        if target.is_camera() {
            forward = -forward;
        }
        let behind = |to: Vec3| forward.dot(to.normalize_or_zero()) < BACKSTAB_COSINE;

        Self {
            closer,
            backstab_small: behind(to_small),
            backstab_big: behind(to_big),
            speed: velocity.length(),
        }
    }

    /// Check if the closer sphere and both alerts match `other`.
    pub fn same_alerts(&self, other: &Self) -> bool {
        self.closer == other.closer
            && self.backstab_small == other.backstab_small
            && self.backstab_big == other.backstab_big
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.closer {
            CloserSphere::Small => writeln!(f, "small sphere closer")?,
            CloserSphere::Big => writeln!(f, "big sphere closer")?,
        }
        if self.backstab_small {
            writeln!(f, "small sphere backstab!")?;
        }
        if self.backstab_big {
            writeln!(f, "big sphere backstab!")?;
        }
        write!(f, "vel: {:.4}", self.speed)
    }
}
