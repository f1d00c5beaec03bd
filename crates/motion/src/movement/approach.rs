//! Bounded-step ramp toward a goal value.

use glam::Vec3;

/// Move `current` toward `goal` by at most `step`.
///
/// Once the remaining distance fits inside one step the result snaps to
/// `goal`, so a fixed goal is reached exactly in a finite number of calls
/// and never overshot. Use the frame time as `step` for a ramp of one unit
/// per second; divide it for a slower ramp, multiply it for a faster one.
///
/// A `step` of zero makes no progress.
#[inline]
pub fn approach(goal: f32, current: f32, step: f32) -> f32 {
    let difference = goal - current;

    if difference > step {
        return current + step;
    }
    if difference < -step {
        return current - step;
    }
    goal
}

/// [`approach`] applied to each component on its own.
#[inline]
pub fn approach_vec3(goal: Vec3, current: Vec3, step: f32) -> Vec3 {
    Vec3::new(
        approach(goal.x, current.x, step),
        approach(goal.y, current.y, step),
        approach(goal.z, current.z, step),
    )
}
