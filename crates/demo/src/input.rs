//! Keyboard input handling.
//!
//! This module converts key presses into [`Command`]s. Mapping is pure:
//! the same event, mode and target always produce the same command, and
//! nothing is mutated until the command is applied by the demo.

use glide_motion::{Axis, MotionConfig, MovementMode};
use serde::{Deserialize, Serialize};

use crate::targets::ActiveTarget;

/// Keys the demo reacts to, independent of the windowing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    A,
    B,
    D,
    E,
    F,
    H,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    V,
    W,
    X,
    Y,
    Z,
    Num0,
    Keypad0,
}

/// Modifier keys held during a key press (bitfield).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers(pub u16);

impl Modifiers {
    pub const NONE: Self = Self(0);
    pub const SHIFT: Self = Self(1 << 0);
    pub const CTRL: Self = Self(1 << 1);
    pub const ALT: Self = Self(1 << 2);
    pub const SUPER: Self = Self(1 << 3);

    /// Check if every bit of `other` is held.
    #[inline]
    pub fn contains(self, other: Self) -> bool {
        other.0 != 0 && (self.0 & other.0) == other.0
    }

    /// Check if exactly `other` is held, nothing more.
    #[inline]
    pub fn is_exactly(self, other: Self) -> bool {
        self == other
    }

    /// Add `other` to the held set.
    #[inline]
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// A single key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// A press without modifiers.
    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }
}

/// What a key press asks the demo to do.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Nudge velocity directly (translate mode).
    AddVelocity { axis: Axis, delta: f32 },
    /// Multiply velocity.
    ScaleVelocity(f32),
    /// Nudge the rotation rate directly (translate mode).
    AddRotation { axis: Axis, delta: f32 },
    /// Nudge the rotation goal (fly mode).
    AddRotationGoal { axis: Axis, delta: f32 },
    /// Nudge the thrust goal (fly mode).
    AddMovementGoal { axis: Axis, delta: f32 },
    StopRotation,
    /// Set the showcase sphere's goal speed.
    SetSmoothedGoal(f32),
    /// Turn the solo character toward the next look-at point.
    LookAt { immediate: bool },
    ToggleMode,
    SwitchTarget,
    Reset,
    Stop,
    TogglePause,
    /// Handled by the host window.
    ToggleFullscreen,
    /// Handled by the host window.
    Quit,
}

/// Maps key events to commands using the increments of a [`MotionConfig`].
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    config: MotionConfig,
}

impl InputMapper {
    pub fn new(config: MotionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Translate a key press into a command for the current mode and target.
    ///
    /// Mode-specific bindings are tried first; keys they don't use fall
    /// through to the bindings shared by both modes.
    pub fn map(&self, event: &KeyEvent, mode: MovementMode, target: ActiveTarget) -> Option<Command> {
        let specific = match mode {
            MovementMode::Translate => self.map_translate(event),
            MovementMode::Fly => self.map_fly(event, target),
        };
        specific.or_else(|| self.map_common(event))
    }

    fn map_translate(&self, event: &KeyEvent) -> Option<Command> {
        let mods = event.modifiers;

        if mods.contains(Modifiers::SHIFT) {
            let mut delta = self.config.rotation_increment_translate;
            if mods.contains(Modifiers::CTRL) {
                delta = -delta;
            }
            return axis_key(event.key).map(|axis| Command::AddRotation { axis, delta });
        }

        let mut delta = self.config.linear_increment;
        let mut factor = self.config.acceleration;
        if mods.is_exactly(Modifiers::CTRL) {
            delta = -delta;
            factor = factor.recip();
        }

        match event.key {
            Key::W => Some(Command::ScaleVelocity(factor)),
            key => axis_key(key).map(|axis| Command::AddVelocity { axis, delta }),
        }
    }

    fn map_fly(&self, event: &KeyEvent, target: ActiveTarget) -> Option<Command> {
        let camera = target.is_camera();

        // The camera looks down its -Z, so its thrust runs the other way
        let mut linear = if camera {
            self.config.linear_increment
        } else {
            -self.config.linear_increment
        };
        let mut rotation = self.config.fly_rotation_increment(camera);
        let mut factor = self.config.acceleration;

        if event.modifiers.is_exactly(Modifiers::CTRL) {
            linear = -linear;
            rotation = -rotation;
            factor = factor.recip();
        }

        let rotation_goal = |axis, delta| Some(Command::AddRotationGoal { axis, delta });
        let movement_goal = |axis, delta| Some(Command::AddMovementGoal { axis, delta });

        match event.key {
            Key::A => {
                let jump = self.config.rotation_jump;
                rotation_goal(Axis::X, if rotation < 0.0 { jump } else { -jump })
            }
            Key::W => Some(Command::ScaleVelocity(factor)),
            Key::P => rotation_goal(Axis::X, rotation),
            Key::Y => rotation_goal(Axis::Y, rotation),
            Key::R => rotation_goal(Axis::Z, rotation),
            Key::Z => movement_goal(Axis::Z, -linear),
            Key::H if camera => movement_goal(Axis::Y, -linear),
            Key::H => movement_goal(Axis::X, linear),
            Key::V if camera => movement_goal(Axis::X, -linear),
            Key::V => movement_goal(Axis::Y, linear),
            _ => None,
        }
    }

    fn map_common(&self, event: &KeyEvent) -> Option<Command> {
        let command = match event.key {
            Key::B => Command::StopRotation,
            Key::D => Command::SetSmoothedGoal(self.config.smoothed_goal),
            Key::E => Command::SetSmoothedGoal(-self.config.smoothed_goal),
            Key::L => Command::LookAt {
                immediate: event.modifiers.contains(Modifiers::CTRL),
            },
            Key::M => Command::ToggleMode,
            Key::N => Command::SwitchTarget,
            Key::Num0 | Key::Keypad0 | Key::O => Command::Reset,
            Key::S => Command::Stop,
            Key::T => Command::TogglePause,
            Key::F => Command::ToggleFullscreen,
            Key::Q => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}

fn axis_key(key: Key) -> Option<Axis> {
    match key {
        Key::X => Some(Axis::X),
        Key::Y => Some(Axis::Y),
        Key::Z => Some(Axis::Z),
        _ => None,
    }
}
