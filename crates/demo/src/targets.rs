//! Which node the keys drive, and what the look-at key aims at next.

use serde::{Deserialize, Serialize};

/// The node currently driven by movement keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActiveTarget {
    #[default]
    Character,
    Camera,
}

impl ActiveTarget {
    /// The other target.
    pub fn toggled(self) -> Self {
        match self {
            Self::Character => Self::Camera,
            Self::Camera => Self::Character,
        }
    }

    #[inline]
    pub fn is_camera(self) -> bool {
        self == Self::Camera
    }
}

/// A point the look-at key can aim at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LookAtChoice {
    SphereOne,
    SphereTwo,
    /// Whichever node is the active target at the time of the look-at.
    ActiveTarget,
}

/// Cycles through [`LookAtChoice`]s, one per look-at.
///
/// The counter survives resets so the rotation keeps its place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookAtTargets {
    counter: i64,
}

impl Default for LookAtTargets {
    fn default() -> Self {
        Self { counter: -1 }
    }
}

impl LookAtTargets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to the next choice and return it.
    pub fn advance(&mut self) -> LookAtChoice {
        self.counter += 1;
        match self.counter.rem_euclid(3) {
            0 => LookAtChoice::SphereOne,
            1 => LookAtChoice::SphereTwo,
            _ => LookAtChoice::ActiveTarget,
        }
    }

    /// Number of look-ats requested so far.
    pub fn count(&self) -> i64 {
        self.counter + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_target() {
        assert_eq!(ActiveTarget::default(), ActiveTarget::Character);
        assert_eq!(ActiveTarget::Character.toggled(), ActiveTarget::Camera);
        assert_eq!(ActiveTarget::Camera.toggled(), ActiveTarget::Character);
        assert!(ActiveTarget::Camera.is_camera());
    }

    #[test]
    fn test_look_at_cycle_starts_with_sphere_one() {
        let mut targets = LookAtTargets::new();
        assert_eq!(targets.count(), 0);

        let picks: Vec<_> = (0..4).map(|_| targets.advance()).collect();
        assert_eq!(
            picks,
            vec![
                LookAtChoice::SphereOne,
                LookAtChoice::SphereTwo,
                LookAtChoice::ActiveTarget,
                LookAtChoice::SphereOne,
            ]
        );
        assert_eq!(targets.count(), 4);
    }
}
