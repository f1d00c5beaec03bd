//! Forward/right/up thrust axes for free flight.
//!
//! Flying needs the two axes at right angles to the direction of travel so
//! strafe and heave thrust can be applied along them. Two derivations are
//! available:
//!
//! - [`BasisMode::Legacy`]: the empirical trigonometric formula the demo was
//!   tuned against. It builds an auxiliary vector from the world Euler
//!   angles and crosses it with the forward direction. It degenerates (and
//!   flips sign on either side) wherever that auxiliary vector lines up with
//!   forward, e.g. a pure yaw of π/4.
//! - [`BasisMode::Matrix`]: the columns of the rotation matrix, signed so
//!   that both modes agree for the identity rotation. Always orthonormal.

use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Below this length the legacy up vector is considered degenerate.
const DEGENERATE_LENGTH: f32 = 1e-4;

/// How thrust axes are derived from an orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BasisMode {
    #[default]
    Legacy,
    Matrix,
}

/// World-space unit axes used to project thrust input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThrustBasis {
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Default for ThrustBasis {
    fn default() -> Self {
        Self::from_rotation(Quat::IDENTITY)
    }
}

impl ThrustBasis {
    /// Derive the basis for a world rotation using `mode`.
    pub fn compute(mode: BasisMode, rotation: Quat) -> Self {
        match mode {
            BasisMode::Legacy => Self::legacy(rotation * Vec3::Z, euler_xyz(rotation)),
            BasisMode::Matrix => Self::from_rotation(rotation),
        }
    }

    /// The empirical formula, from a world forward direction and world
    /// XYZ Euler angles.
    ///
    /// The auxiliary vector is not a general Euler-to-direction conversion;
    /// it is reproduced as-is because the demo's key bindings are tuned to
    /// the axes it yields. At identity it gives `right = -X`, `up = -Y`.
    pub fn legacy(world_forward: Vec3, world_euler: Vec3) -> Self {
        let forward = world_forward.normalize_or_zero();
        let aux = Self::legacy_aux(world_euler).normalize_or_zero();

        let up = aux.cross(forward).normalize_or_zero();
        let right = up.cross(forward).normalize_or_zero();

        Self { forward, right, up }
    }

    /// Check whether the legacy formula loses its up axis for this input.
    pub fn legacy_is_degenerate(world_forward: Vec3, world_euler: Vec3) -> bool {
        let forward = world_forward.normalize_or_zero();
        let aux = Self::legacy_aux(world_euler).normalize_or_zero();
        aux.cross(forward).length() < DEGENERATE_LENGTH
    }

    /// Read the axes straight from the rotation matrix.
    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            forward: rotation * Vec3::Z,
            right: rotation * Vec3::NEG_X,
            up: rotation * Vec3::NEG_Y,
        }
    }

    /// Combine per-axis thrust (x = strafe, y = heave, z = surge) into a
    /// world-space displacement.
    pub fn thrust(&self, movement: Vec3) -> Vec3 {
        self.forward * movement.z + self.right * movement.x + self.up * movement.y
    }

    /// Check that all three axes are unit length and mutually perpendicular.
    pub fn is_orthonormal(&self, tolerance: f32) -> bool {
        let unit = |v: Vec3| (v.length() - 1.0).abs() <= tolerance;
        unit(self.forward)
            && unit(self.right)
            && unit(self.up)
            && self.forward.dot(self.right).abs() <= tolerance
            && self.forward.dot(self.up).abs() <= tolerance
            && self.right.dot(self.up).abs() <= tolerance
    }

    fn legacy_aux(euler: Vec3) -> Vec3 {
        let c = euler.x.cos() * euler.z.cos();
        Vec3::new(euler.y.cos() * c, euler.z.sin(), euler.y.sin() * c)
    }
}

/// World rotation as XYZ Euler angles.
pub fn euler_xyz(rotation: Quat) -> Vec3 {
    let (x, y, z) = rotation.to_euler(EulerRot::XYZ);
    Vec3::new(x, y, z)
}
