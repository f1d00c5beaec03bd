//! The demo loop: apply key commands, then advance motion once per frame.

use glam::{Quat, Vec3};
use glide_motion::{look_rotation, MotionConfig, MotionState, MovementMode, SlerpJob, ThrustBasis};

use crate::config::DemoConfig;
use crate::input::{Command, InputMapper, KeyEvent};
use crate::interpolator::OrientationInterpolator;
use crate::stage::Stage;
use crate::status::StatusReport;
use crate::targets::{ActiveTarget, LookAtChoice, LookAtTargets};

/// Requests the demo cannot satisfy itself and hands to the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostRequest {
    ToggleFullscreen,
    Quit,
}

/// Owns all mutable demo state.
///
/// The host calls [`Demo::handle_key`] for each key press and
/// [`Demo::update`] once per rendered frame.
#[derive(Debug)]
pub struct Demo {
    config: MotionConfig,
    mapper: InputMapper,
    state: MotionState,
    mode: MovementMode,
    target: ActiveTarget,
    stage: Stage,
    look_targets: LookAtTargets,
    interpolator: OrientationInterpolator,

    /// Thrust axes from the last fly-mode frame.
    basis: ThrustBasis,

    frame: u64,
}

impl Demo {
    pub fn new(config: DemoConfig) -> Self {
        let stage = Stage::new(config.stage);
        let solo_rotation = stage.graph.node(stage.solo).rotation;

        Self {
            mapper: InputMapper::new(config.motion.clone()),
            config: config.motion,
            state: MotionState::new(),
            mode: MovementMode::default(),
            target: ActiveTarget::default(),
            stage,
            look_targets: LookAtTargets::new(),
            interpolator: OrientationInterpolator::new(solo_rotation),
            basis: ThrustBasis::default(),
            frame: 0,
        }
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Map and apply a key press.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Option<HostRequest> {
        let command = self.mapper.map(event, self.mode, self.target)?;
        self.apply(command)
    }

    /// Apply a command. Window-level commands are returned to the caller.
    pub fn apply(&mut self, command: Command) -> Option<HostRequest> {
        match command {
            Command::AddVelocity { axis, delta } => self.state.add_velocity(axis, delta),
            Command::ScaleVelocity(factor) => self.state.scale_velocity(factor),
            Command::AddRotation { axis, delta } => self.state.add_rotation(axis, delta),
            Command::AddRotationGoal { axis, delta } => self.state.add_rotation_goal(axis, delta),
            Command::AddMovementGoal { axis, delta } => self.state.add_movement_goal(axis, delta),
            Command::StopRotation => self.state.stop_rotation(),
            Command::SetSmoothedGoal(z) => self.state.set_app_velocity_goal(z),
            Command::LookAt { immediate } => self.look_at(immediate),
            Command::ToggleMode => self.toggle_mode(),
            Command::SwitchTarget => self.switch_target(),
            Command::Reset => self.reset(),
            Command::Stop => self.stop(),
            Command::TogglePause => self.state.toggle_pause(self.mode),
            Command::ToggleFullscreen => return Some(HostRequest::ToggleFullscreen),
            Command::Quit => return Some(HostRequest::Quit),
        }
        None
    }

    // ========================================================================
    // Frame Update
    // ========================================================================

    /// Advance one frame. `delta_time` is in seconds.
    pub fn update(&mut self, delta_time: f32) {
        self.frame += 1;

        let solo = self.stage.solo;
        self.stage.graph.node_mut(solo).rotation = self.interpolator.orientation();

        self.state.smooth_app_velocity(delta_time);
        let sphere = self.stage.sphere_one;
        self.stage.graph.node_mut(sphere).translate(self.state.app_velocity);

        match self.mode {
            MovementMode::Translate => self.translate_step(),
            MovementMode::Fly => self.fly_step(delta_time),
        }
    }

    /// Constant velocity along world axes plus a constant local spin.
    fn translate_step(&mut self) {
        let node = self.stage.graph.node_mut(self.stage.node_for(self.target));
        node.translate(self.state.velocity);
        node.rotate_xyz(self.state.rotation);
    }

    /// Ramp rotation and thrust toward their goals, then thrust along the
    /// node's own axes.
    fn fly_step(&mut self, delta_time: f32) {
        let id = self.stage.node_for(self.target);

        self.state
            .smooth_fly(self.config.rotation_ramp(delta_time), delta_time);
        self.stage.graph.node_mut(id).rotate_xyz(self.state.rotation);

        let rotation = self.stage.graph.world_rotation(id);
        self.basis = ThrustBasis::compute(self.config.basis, rotation);

        self.state.velocity = self.basis.thrust(self.state.movement);
        self.stage.graph.node_mut(id).translate(self.state.velocity);
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Halt all motion. A look-at already in progress keeps going.
    pub fn stop(&mut self) {
        self.state.stop();
        log::debug!("stopped");
    }

    /// Return everything to the start: motion at rest, nodes at their start
    /// transforms, character controlled, translate mode.
    pub fn reset(&mut self) {
        self.state.stop();
        self.interpolator.snap(Quat::IDENTITY);
        self.stage.reset();
        self.target = ActiveTarget::Character;
        self.mode = MovementMode::Translate;
        log::info!("reset");
    }

    /// Reset, then switch to the other movement mode.
    pub fn toggle_mode(&mut self) {
        let next = self.mode.toggled();
        self.reset();
        self.mode = next;
        log::info!("movement mode: {:?}", self.mode);
    }

    /// Hand the movement keys to the other node.
    pub fn switch_target(&mut self) {
        self.target = self.target.toggled();

        match self.target {
            ActiveTarget::Camera => self.stage.attach_ship(),
            ActiveTarget::Character => self.stage.detach_ship(),
        }

        // Camera and character surge along opposite local axes
        if self.mode == MovementMode::Fly {
            self.state.negate_movement_goal_z();
        }

        log::info!("controlling {:?}", self.target);
    }

    /// Turn the solo character toward the next look-at point, either at
    /// once or over the configured number of ticks.
    pub fn look_at(&mut self, immediate: bool) {
        let choice = self.look_targets.advance();
        let graph = &self.stage.graph;

        let point = match choice {
            LookAtChoice::SphereOne => graph.world_position(self.stage.sphere_one),
            LookAtChoice::SphereTwo => graph.world_position(self.stage.sphere_two),
            LookAtChoice::ActiveTarget => graph.world_position(self.stage.node_for(self.target)),
        };
        let looker = graph.world_position(self.stage.solo);

        let Some(target) = look_rotation(point - looker, Vec3::Y) else {
            log::debug!("look-at at {:?} skipped: degenerate direction", choice);
            return;
        };

        if immediate {
            self.interpolator.snap(target);
            let solo = self.stage.solo;
            self.stage.graph.node_mut(solo).rotation = target;
            log::debug!("look-at {:?} (immediate)", choice);
        } else {
            // Freeze any running job first so the new one starts where it stopped
            self.interpolator.cancel();
            let from = self.interpolator.orientation();
            self.interpolator.start(SlerpJob::new(
                from,
                target,
                self.config.slerp_steps,
                self.config.slerp_interval(),
            ));
            log::debug!("look-at {:?} over {} steps", choice, self.config.slerp_steps);
        }
    }

    /// Block until the running look-at finishes. Returns its step count.
    pub fn wait_for_look_at(&mut self) -> u32 {
        self.interpolator.wait()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn status(&self) -> StatusReport {
        StatusReport::capture(&self.stage, self.target, self.state.velocity)
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn mode(&self) -> MovementMode {
        self.mode
    }

    pub fn target(&self) -> ActiveTarget {
        self.target
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Thrust axes used by the last fly-mode frame.
    pub fn basis(&self) -> &ThrustBasis {
        &self.basis
    }

    pub fn is_looking(&self) -> bool {
        self.interpolator.is_running()
    }

    /// Frames advanced since creation.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl Default for Demo {
    fn default() -> Self {
        Self::new(DemoConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, Modifiers};

    const EPS: f32 = 1e-5;

    fn press(demo: &mut Demo, key: Key) -> Option<HostRequest> {
        demo.handle_key(&KeyEvent::plain(key))
    }

    fn fast_config() -> DemoConfig {
        let mut config = DemoConfig::default();
        config.motion.slerp_tick_ms = 1;
        config.motion.slerp_steps = 8;
        config
    }

    fn assert_start_state(demo: &Demo) {
        let stage = demo.stage();
        let graph = &stage.graph;

        assert_eq!(graph.world_position(stage.character), Vec3::ZERO);
        assert_eq!(graph.node(stage.character).rotation, Quat::IDENTITY);

        let camera = Vec3::new(15.0, 4.0, -2.0);
        assert_eq!(graph.world_position(stage.camera), camera);
        let view = graph.world_rotation(stage.camera) * Vec3::NEG_Z;
        assert!((view - (-camera).normalize()).length() < EPS);

        assert_eq!(demo.mode(), MovementMode::Translate);
        assert_eq!(demo.target(), ActiveTarget::Character);
        assert!(!stage.ship_attached());
        assert!(demo.state().is_at_rest());
    }

    #[test]
    fn test_starts_at_rest() {
        let demo = Demo::default();
        assert_start_state(&demo);
        assert_eq!(demo.frame(), 0);
    }

    #[test]
    fn test_translate_moves_and_spins() {
        let mut demo = Demo::default();
        press(&mut demo, Key::X);
        press(&mut demo, Key::X);
        demo.handle_key(&KeyEvent::new(Key::Y, Modifiers::SHIFT));

        demo.update(0.016);
        demo.update(0.016);

        let stage = demo.stage();
        let position = stage.graph.node(stage.character).position;
        assert!((position - Vec3::new(0.02, 0.0, 0.0)).length() < EPS);

        let expected = Quat::from_rotation_y(0.04);
        assert!(stage.graph.node(stage.character).rotation.dot(expected).abs() > 1.0 - 1e-6);
    }

    #[test]
    fn test_accelerate_and_brake() {
        let mut demo = Demo::default();
        press(&mut demo, Key::Z);
        press(&mut demo, Key::W);
        assert!((demo.state().velocity.z - 0.01).abs() < EPS);

        demo.handle_key(&KeyEvent::new(Key::W, Modifiers::CTRL));
        assert!((demo.state().velocity.z - 0.005).abs() < EPS);
    }

    #[test]
    fn test_reset_restores_start() {
        let mut demo = Demo::default();
        press(&mut demo, Key::N);
        press(&mut demo, Key::X);
        press(&mut demo, Key::D);
        demo.handle_key(&KeyEvent::new(Key::L, Modifiers::CTRL));
        for _ in 0..10 {
            demo.update(0.016);
        }

        press(&mut demo, Key::O);
        assert_start_state(&demo);

        let solo = demo.stage().solo;
        demo.update(0.016);
        assert_eq!(demo.stage().graph.node(solo).rotation, Quat::IDENTITY);
    }

    #[test]
    fn test_mode_switch_zeroes_motion() {
        let mut demo = Demo::default();
        press(&mut demo, Key::X);
        demo.handle_key(&KeyEvent::new(Key::Z, Modifiers::SHIFT));
        demo.update(0.016);

        press(&mut demo, Key::M);
        assert_eq!(demo.mode(), MovementMode::Fly);
        assert_eq!(demo.state().velocity, Vec3::ZERO);
        assert_eq!(demo.state().rotation, Vec3::ZERO);
        assert_eq!(demo.state().movement, Vec3::ZERO);
        assert_eq!(
            demo.stage().graph.node(demo.stage().character).position,
            Vec3::ZERO
        );

        press(&mut demo, Key::M);
        assert_eq!(demo.mode(), MovementMode::Translate);
    }

    #[test]
    fn test_fly_thrusts_along_forward() {
        let mut demo = Demo::default();
        press(&mut demo, Key::M);
        press(&mut demo, Key::Z);
        assert!((demo.state().movement_goal.z - 0.005).abs() < EPS);

        // A full second of ramp covers the whole goal in one frame
        demo.update(1.0);

        let stage = demo.stage();
        let position = stage.graph.node(stage.character).position;
        assert!((position - Vec3::new(0.0, 0.0, 0.005)).length() < EPS);
        assert!((demo.state().velocity.length() - 0.005).abs() < EPS);
        assert!(demo.basis().is_orthonormal(1e-4));
    }

    #[test]
    fn test_fly_rotation_ramps() {
        let mut demo = Demo::default();
        press(&mut demo, Key::M);
        press(&mut demo, Key::A);

        let goal = demo.state().rotation_goal.x;
        assert!(goal < 0.0);

        // rotation moves by dt / 5 per frame
        demo.update(0.05);
        assert!((demo.state().rotation.x + 0.01).abs() < EPS);
    }

    #[test]
    fn test_switch_target_in_fly_negates_surge() {
        let mut demo = Demo::default();
        press(&mut demo, Key::M);
        press(&mut demo, Key::Z);
        let surge = demo.state().movement_goal.z;

        press(&mut demo, Key::N);
        assert_eq!(demo.target(), ActiveTarget::Camera);
        assert!(demo.stage().ship_attached());
        assert_eq!(demo.state().movement_goal.z, -surge);

        press(&mut demo, Key::N);
        assert_eq!(demo.target(), ActiveTarget::Character);
        assert!(!demo.stage().ship_attached());
        assert_eq!(demo.state().movement_goal.z, surge);
    }

    #[test]
    fn test_switch_target_in_translate_keeps_goals() {
        let mut demo = Demo::default();
        press(&mut demo, Key::Z);
        press(&mut demo, Key::N);
        assert!((demo.state().velocity.z - 0.005).abs() < EPS);

        // Velocity now drives the camera
        demo.update(0.016);
        let stage = demo.stage();
        let camera = stage.graph.node(stage.camera).position;
        assert!((camera - Vec3::new(15.0, 4.0, -1.995)).length() < EPS);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut demo = Demo::default();
        press(&mut demo, Key::X);
        press(&mut demo, Key::T);
        demo.update(0.016);

        let stage = demo.stage();
        assert_eq!(stage.graph.node(stage.character).position, Vec3::ZERO);

        press(&mut demo, Key::T);
        assert!((demo.state().velocity.x - 0.005).abs() < EPS);
    }

    #[test]
    fn test_input_during_pause_is_paused_by_next_toggle() {
        let mut demo = Demo::default();
        press(&mut demo, Key::X);
        press(&mut demo, Key::T);
        press(&mut demo, Key::Z);
        demo.update(0.016);

        let character = demo.stage().character;
        let moved = demo.stage().graph.node(character).position;
        assert!((moved - Vec3::new(0.0, 0.0, 0.005)).length() < EPS);

        press(&mut demo, Key::T);
        assert_eq!(demo.state().velocity, Vec3::ZERO);
        demo.update(0.016);
        assert_eq!(demo.stage().graph.node(character).position, moved);
    }

    #[test]
    fn test_smoothed_sphere() {
        let mut demo = Demo::default();
        press(&mut demo, Key::D);

        demo.update(0.1);
        demo.update(0.1);
        demo.update(0.1);

        let stage = demo.stage();
        let z = stage.graph.node(stage.sphere_one).position.z;
        // 0.1 + 0.2 + 0.2
        assert!((z - 10.5).abs() < EPS, "{}", z);
    }

    #[test]
    fn test_immediate_look_at_faces_sphere_one() {
        let mut demo = Demo::default();
        demo.handle_key(&KeyEvent::new(Key::L, Modifiers::CTRL));
        demo.update(0.016);

        let stage = demo.stage();
        let facing = stage.graph.world_direction(stage.solo);
        let expected = (stage.layout().sphere_one_position - stage.layout().solo_position).normalize();
        assert!((facing - expected).length() < EPS);
    }

    #[test]
    fn test_slerp_look_at_cycles_targets() {
        let mut demo = Demo::new(fast_config());

        press(&mut demo, Key::L);
        assert_eq!(demo.wait_for_look_at(), 8);
        demo.update(0.016);

        let layout = demo.stage().layout().clone();
        let facing = demo.stage().graph.world_direction(demo.stage().solo);
        let to_one = (layout.sphere_one_position - layout.solo_position).normalize();
        assert!((facing - to_one).length() < 1e-3);

        press(&mut demo, Key::L);
        demo.wait_for_look_at();
        demo.update(0.016);

        let facing = demo.stage().graph.world_direction(demo.stage().solo);
        let to_two = (layout.sphere_two_position - layout.solo_position).normalize();
        assert!((facing - to_two).length() < 1e-3);
    }

    #[test]
    fn test_third_look_at_faces_active_target() {
        let mut demo = Demo::default();
        press(&mut demo, Key::N);
        for _ in 0..3 {
            demo.handle_key(&KeyEvent::new(Key::L, Modifiers::CTRL));
        }
        demo.update(0.016);

        let stage = demo.stage();
        let facing = stage.graph.world_direction(stage.solo);
        let to_camera = (stage.graph.world_position(stage.camera)
            - stage.graph.world_position(stage.solo))
        .normalize();
        assert!((facing - to_camera).length() < EPS);
    }

    #[test]
    fn test_degenerate_look_at_is_skipped_but_counted() {
        let mut config = DemoConfig::default();
        // Sphere one straight above the solo character
        config.stage.sphere_one_position = config.stage.solo_position + Vec3::new(0.0, 5.0, 0.0);
        let mut demo = Demo::new(config);

        demo.handle_key(&KeyEvent::new(Key::L, Modifiers::CTRL));
        demo.update(0.016);
        let solo = demo.stage().solo;
        assert_eq!(demo.stage().graph.node(solo).rotation, Quat::IDENTITY);

        // The next look-at moves on to sphere two
        demo.handle_key(&KeyEvent::new(Key::L, Modifiers::CTRL));
        demo.update(0.016);
        let stage = demo.stage();
        let facing = stage.graph.world_direction(solo);
        let to_two = (stage.layout().sphere_two_position - stage.layout().solo_position).normalize();
        assert!((facing - to_two).length() < EPS);
    }

    #[test]
    fn test_fly_camera_frame() {
        let mut demo = Demo::default();
        press(&mut demo, Key::M);
        press(&mut demo, Key::N);
        press(&mut demo, Key::Z);
        // Camera surge runs the other way from the character's
        assert!((demo.state().movement_goal.z + 0.005).abs() < EPS);

        let stage = demo.stage();
        let start = stage.graph.world_position(stage.camera);
        let view = stage.graph.world_rotation(stage.camera) * Vec3::NEG_Z;
        let character = stage.graph.node(stage.character).position;

        demo.update(1.0);

        // Thrust moves the camera along its view direction
        let stage = demo.stage();
        let moved = stage.graph.world_position(stage.camera) - start;
        assert!((moved.length() - 0.005).abs() < EPS);
        assert!(moved.normalize().dot(view) > 0.999, "{:?} vs {:?}", moved, view);
        assert_eq!(stage.graph.node(stage.character).position, character);
        assert!(demo.basis().is_orthonormal(1e-3));
    }

    #[test]
    fn test_host_requests() {
        let mut demo = Demo::default();
        assert_eq!(press(&mut demo, Key::Q), Some(HostRequest::Quit));
        assert_eq!(press(&mut demo, Key::F), Some(HostRequest::ToggleFullscreen));
        assert_eq!(press(&mut demo, Key::X), None);
    }

    #[test]
    fn test_status_reflects_velocity() {
        let mut demo = Demo::default();
        press(&mut demo, Key::X);
        assert!((demo.status().speed - 0.005).abs() < EPS);
    }
}
