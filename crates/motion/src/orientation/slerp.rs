//! Constant-rate spherical interpolation.
//!
//! Slerping repeatedly toward a fixed target by a constant fraction slows
//! down as the remaining arc shrinks (an ease-out). Dividing by the number
//! of remaining steps instead makes every step cover the same angle, so the
//! rotation looks linear and lands exactly on the target.

use std::time::Duration;

use glam::Quat;

/// A stepped rotation from a start orientation to a target orientation.
///
/// Pure state: something else decides when to call [`SlerpJob::step`]. It
/// also iterates, yielding each intermediate orientation.
///
/// # Example
///
/// ```
/// use glam::Quat;
/// use glide_motion::SlerpJob;
/// use std::time::Duration;
///
/// let target = Quat::from_rotation_y(1.0);
/// let job = SlerpJob::new(Quat::IDENTITY, target, 4, Duration::from_millis(34));
/// let last = job.last().unwrap();
/// assert!(last.dot(target).abs() > 1.0 - 1e-5);
/// ```
#[derive(Debug, Clone)]
pub struct SlerpJob {
    current: Quat,
    target: Quat,
    remaining_steps: f32,
    interval: Duration,
}

impl SlerpJob {
    /// Create a job that reaches `to` after `steps` ticks of `interval`.
    /// Both orientations are normalized.
    pub fn new(from: Quat, to: Quat, steps: u32, interval: Duration) -> Self {
        Self {
            current: from.normalize(),
            target: to.normalize(),
            remaining_steps: steps as f32,
            interval,
        }
    }

    /// Advance one tick, returning the orientation to apply, or `None` once
    /// the job has finished.
    pub fn step(&mut self) -> Option<Quat> {
        if self.is_finished() {
            return None;
        }

        self.current = self.current.slerp(self.target, 1.0 / self.remaining_steps);
        self.remaining_steps -= 1.0;
        Some(self.current)
    }

    /// Check if every step has been taken.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_steps <= 0.0
    }

    #[inline]
    pub fn remaining_steps(&self) -> f32 {
        self.remaining_steps
    }

    #[inline]
    pub fn current(&self) -> Quat {
        self.current
    }

    #[inline]
    pub fn target(&self) -> Quat {
        self.target
    }

    /// Time between ticks.
    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Iterator for SlerpJob {
    type Item = Quat;

    fn next(&mut self) -> Option<Quat> {
        self.step()
    }
}
