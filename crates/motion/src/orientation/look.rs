//! Look-at rotation construction.

use glam::{Mat3, Quat, Vec3};

/// Rotation that turns local +Z toward `direction`, keeping local +Y as
/// close to `up` as possible.
///
/// Returns `None` when `direction` is zero or parallel to `up`, where no
/// unique rotation exists.
pub fn look_rotation(direction: Vec3, up: Vec3) -> Option<Quat> {
    let z = direction.try_normalize()?;
    let x = up.cross(z).try_normalize()?;
    let y = z.cross(x);

    Some(Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize())
}

/// Rotation for a camera at `eye` looking at `target` (local -Z toward it).
pub fn camera_look_at(eye: Vec3, target: Vec3, up: Vec3) -> Option<Quat> {
    look_rotation(eye - target, up)
}
