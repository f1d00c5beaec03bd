//! Motion state: goal and current vectors with pause snapshots.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::approach::{approach, approach_vec3};

/// Which movement model drives the controlled node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementMode {
    /// Velocity along world axes plus a constant spin.
    #[default]
    Translate,
    /// Smoothed thrust along the node's own forward/right/up axes.
    Fly,
}

impl MovementMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Translate => Self::Fly,
            Self::Fly => Self::Translate,
        }
    }
}

/// A single world or local axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector along this axis.
    pub fn unit(self) -> Vec3 {
        match self {
            Self::X => Vec3::X,
            Self::Y => Vec3::Y,
            Self::Z => Vec3::Z,
        }
    }

    /// Add `delta` to this axis' component of `v`.
    #[inline]
    pub fn add_to(self, v: &mut Vec3, delta: f32) {
        match self {
            Self::X => v.x += delta,
            Self::Y => v.y += delta,
            Self::Z => v.z += delta,
        }
    }
}

/// Axis groups that are currently paused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseFlags(pub u8);

impl PauseFlags {
    /// Linear velocity is held in its snapshot.
    pub const VELOCITY: u8 = 1 << 0;

    /// Rotation (current in translate mode, goal in fly mode) is held.
    pub const ROTATION: u8 = 1 << 1;

    /// Fly-mode movement goal is held.
    pub const MOVEMENT: u8 = 1 << 2;

    /// Check if a flag is set.
    #[inline]
    pub fn has(self, flag: u8) -> bool {
        (self.0 & flag) != 0
    }

    /// Set or clear a flag.
    #[inline]
    pub fn set(&mut self, flag: u8, value: bool) {
        if value {
            self.0 |= flag;
        } else {
            self.0 &= !flag;
        }
    }

    /// Check if nothing is paused.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Every goal/current vector the demo tracks.
///
/// Key handlers write goals (or, in translate mode, velocity and rotation
/// directly); the per-frame update ramps currents toward their goals.
/// The `*_paused` fields hold the value captured when a group was paused.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionState {
    /// Position change applied each frame.
    pub velocity: Vec3,
    pub velocity_paused: Vec3,

    /// Smoothed fly-mode thrust: x = strafe, y = heave, z = surge.
    pub movement: Vec3,
    pub movement_goal: Vec3,
    pub movement_paused: Vec3,

    /// Local rotation applied each frame, per axis (radians/frame).
    pub rotation: Vec3,
    pub rotation_goal: Vec3,
    pub rotation_paused: Vec3,

    /// Velocity of the smoothing showcase sphere.
    pub app_velocity: Vec3,
    pub app_velocity_goal: Vec3,

    /// Groups currently held by a pause.
    pub paused: PauseFlags,
}

impl MotionState {
    /// Create a state at rest.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Nudge velocity along one axis.
    ///
    /// Input on a paused group releases it: the held snapshot is dropped
    /// and the new motion is live, so the next toggle pauses it.
    pub fn add_velocity(&mut self, axis: Axis, delta: f32) {
        self.release(PauseFlags::VELOCITY);
        axis.add_to(&mut self.velocity, delta);
    }

    /// Multiply velocity by `factor` (accelerate above 1, brake below).
    pub fn scale_velocity(&mut self, factor: f32) {
        self.velocity *= factor;
    }

    /// Nudge the rotation rate directly, bypassing smoothing.
    pub fn add_rotation(&mut self, axis: Axis, delta: f32) {
        self.release(PauseFlags::ROTATION);
        axis.add_to(&mut self.rotation, delta);
    }

    /// Nudge the rotation goal that the rotation rate ramps toward.
    pub fn add_rotation_goal(&mut self, axis: Axis, delta: f32) {
        self.release(PauseFlags::ROTATION);
        axis.add_to(&mut self.rotation_goal, delta);
    }

    /// Nudge the thrust goal that movement ramps toward.
    pub fn add_movement_goal(&mut self, axis: Axis, delta: f32) {
        self.release(PauseFlags::MOVEMENT);
        axis.add_to(&mut self.movement_goal, delta);
    }

    /// Flip the surge goal, used when control passes between nodes whose
    /// forward axes point opposite ways.
    pub fn negate_movement_goal_z(&mut self) {
        self.movement_goal.z = -self.movement_goal.z;
    }

    /// Set the showcase sphere's goal speed along Z.
    pub fn set_app_velocity_goal(&mut self, z: f32) {
        self.app_velocity_goal.z = z;
    }

    // ========================================================================
    // Smoothing
    // ========================================================================

    /// Ramp the showcase velocity toward its goal.
    pub fn smooth_app_velocity(&mut self, step: f32) {
        self.app_velocity.z = approach(self.app_velocity_goal.z, self.app_velocity.z, step);
    }

    /// Ramp fly-mode rotation and movement toward their goals.
    pub fn smooth_fly(&mut self, rotation_step: f32, movement_step: f32) {
        self.rotation = approach_vec3(self.rotation_goal, self.rotation, rotation_step);
        self.movement = approach_vec3(self.movement_goal, self.movement, movement_step);
    }

    // ========================================================================
    // Pause / Stop
    // ========================================================================

    /// Check if any group of the given mode is paused.
    pub fn is_paused(&self, mode: MovementMode) -> bool {
        Self::groups(mode).iter().any(|&flag| self.paused.has(flag))
    }

    /// Pause each group of `mode` that is running, resume each that is held.
    pub fn toggle_pause(&mut self, mode: MovementMode) {
        for &flag in Self::groups(mode) {
            let held = self.paused.has(flag);
            self.set_group_paused(mode, flag, !held);
        }
        log::debug!("pause toggled ({:?}): {:?}", mode, self.paused);
    }

    /// Hold every running group of `mode`.
    pub fn pause(&mut self, mode: MovementMode) {
        for &flag in Self::groups(mode) {
            self.set_group_paused(mode, flag, true);
        }
    }

    /// Release every held group of `mode`.
    pub fn resume(&mut self, mode: MovementMode) {
        for &flag in Self::groups(mode) {
            self.set_group_paused(mode, flag, false);
        }
    }

    /// Zero rotation and its goal and snapshot, leaving translation alone.
    pub fn stop_rotation(&mut self) {
        self.rotation = Vec3::ZERO;
        self.rotation_goal = Vec3::ZERO;
        self.rotation_paused = Vec3::ZERO;
        self.paused.set(PauseFlags::ROTATION, false);
    }

    /// Full halt. New input starts motion again from rest.
    pub fn stop(&mut self) {
        self.stop_rotation();

        self.velocity = Vec3::ZERO;
        self.velocity_paused = Vec3::ZERO;

        self.app_velocity = Vec3::ZERO;
        self.app_velocity_goal = Vec3::ZERO;

        self.movement = Vec3::ZERO;
        self.movement_goal = Vec3::ZERO;
        self.movement_paused = Vec3::ZERO;

        self.paused = PauseFlags::default();
    }

    /// Check if nothing is moving or about to move.
    pub fn is_at_rest(&self) -> bool {
        self.velocity == Vec3::ZERO
            && self.rotation == Vec3::ZERO
            && self.movement == Vec3::ZERO
            && self.rotation_goal == Vec3::ZERO
            && self.movement_goal == Vec3::ZERO
    }

    fn groups(mode: MovementMode) -> &'static [u8] {
        match mode {
            MovementMode::Translate => &[PauseFlags::VELOCITY, PauseFlags::ROTATION],
            MovementMode::Fly => &[
                PauseFlags::VELOCITY,
                PauseFlags::MOVEMENT,
                PauseFlags::ROTATION,
            ],
        }
    }

    /// Drop a group's pause without restoring its snapshot.
    fn release(&mut self, flag: u8) {
        if !self.paused.has(flag) {
            return;
        }
        match flag {
            PauseFlags::VELOCITY => self.velocity_paused = Vec3::ZERO,
            PauseFlags::MOVEMENT => self.movement_paused = Vec3::ZERO,
            _ => self.rotation_paused = Vec3::ZERO,
        }
        self.paused.set(flag, false);
        log::debug!("pause released by input: {:?}", self.paused);
    }

    fn set_group_paused(&mut self, mode: MovementMode, flag: u8, pause: bool) {
        if self.paused.has(flag) == pause {
            return;
        }

        let (live, snapshot) = match (flag, mode) {
            (PauseFlags::VELOCITY, _) => (&mut self.velocity, &mut self.velocity_paused),
            (PauseFlags::MOVEMENT, _) => (&mut self.movement_goal, &mut self.movement_paused),
            (_, MovementMode::Translate) => (&mut self.rotation, &mut self.rotation_paused),
            (_, MovementMode::Fly) => (&mut self.rotation_goal, &mut self.rotation_paused),
        };

        if pause {
            *snapshot = *live;
            *live = Vec3::ZERO;
        } else {
            *live = *snapshot;
        }
        self.paused.set(flag, pause);
    }
}
