//! Continuous movement controller.
//!
//! Ties the binding state machine, walk/rotation integrators, gravity and capsule
//! tracking, and the dependency gate together. The host drives it from two clocks:
//!
//! - frame clock: [`ContinuousMovement::on_activation_pressed`],
//!   [`ContinuousMovement::on_activation_released`],
//!   [`ContinuousMovement::on_axis_sample`] and [`ContinuousMovement::update`]
//! - fixed clock: [`ContinuousMovement::fixed_update`]
//!
//! Axis samples should only be delivered while
//! [`ContinuousMovement::axis_source_enabled`] is `true`.

use crate::{
    binding::{AxisBinding, InputBindings, LocomotionMode},
    capsule::follow_head,
    config::LocomotionConfig,
    error::ConfigResult,
    gate::DependencyGate,
    gravity::GravityController,
    math::InputSample,
    motion::{WalkParams, walk_translation},
    rotation::snap_turn_degrees,
    scene::LocomotionScene,
};

/// What a single axis sample did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SampleOutcome {
    /// Walk listener engaged and the body was moved.
    pub walked: bool,
    /// Snap turn fired with this many degrees (possibly zero).
    pub turned: Option<f32>,
}

#[derive(Clone, Debug)]
pub struct ContinuousMovement {
    config: LocomotionConfig,
    bindings: InputBindings,
    gravity: GravityController,
    gate: DependencyGate,
}

impl ContinuousMovement {
    pub fn new(config: LocomotionConfig) -> Self {
        Self {
            bindings: InputBindings::new(&config),
            config,
            gravity: GravityController::default(),
            gate: DependencyGate::default(),
        }
    }

    /// Validate the configuration and bind the activation source.
    ///
    /// On error the controller stays uninitialized: input edges are ignored, while
    /// capsule tracking and gravity keep running on the fixed clock.
    pub fn start(&mut self) -> ConfigResult<()> {
        self.bindings.start(&self.config)
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    pub fn bindings(&self) -> &InputBindings {
        &self.bindings
    }

    pub fn is_initialized(&self) -> bool {
        self.bindings.is_initialized()
    }

    pub fn axis_source_enabled(&self) -> bool {
        self.bindings.axis_source_enabled()
    }

    pub fn falling_speed(&self) -> f32 {
        self.gravity.falling_speed()
    }

    pub fn gravity_enabled(&self) -> bool {
        self.gravity.is_enabled()
    }

    pub fn pending_reactivations(&self) -> usize {
        self.gate.pending()
    }

    pub fn on_activation_pressed(&mut self) -> AxisBinding {
        self.bindings.on_activation_pressed()
    }

    /// Release edge. Schedules dependency reactivation when the deactivation handler
    /// ran and a dependency set is configured.
    pub fn on_activation_released(&mut self, scene: &mut dyn LocomotionScene) {
        if !self.bindings.on_activation_released() {
            return;
        }
        if scene.dependencies().is_some() {
            self.gate.schedule_enable(self.config.reactivation_delay);
        }
    }

    /// Route one axis sample to every attached listener, walk first.
    pub fn on_axis_sample(
        &mut self,
        sample: InputSample,
        dt: f32,
        scene: &mut dyn LocomotionScene,
    ) -> SampleOutcome {
        let mut outcome = SampleOutcome::default();
        let axis = self.bindings.axis();

        if axis.walk() {
            outcome.walked = self.walk(sample, dt, scene);
        }
        if axis.rotation() {
            outcome.turned = self.rotate(sample, scene);
        }
        outcome
    }

    fn walk(&mut self, sample: InputSample, dt: f32, scene: &mut dyn LocomotionScene) -> bool {
        let head = scene.rig().head_pose();
        let params = WalkParams {
            walk_speed: self.config.walk_speed,
            axis_x_limit: self.config.axis_x_limit,
            dt_seconds: dt,
        };
        let Some(translation) = walk_translation(sample, head.yaw_degrees, params) else {
            return false;
        };

        if let Some(dependencies) = scene.dependencies() {
            self.gate.disable(dependencies);
        }
        log::trace!("walk {sample:?} at yaw {} -> {translation:?}", head.yaw_degrees);
        if let Some(body) = scene.body() {
            body.move_and_collide(translation);
        }
        true
    }

    fn rotate(&mut self, sample: InputSample, scene: &mut dyn LocomotionScene) -> Option<f32> {
        let degrees = snap_turn_degrees(
            sample,
            self.config.axis_y_limit,
            self.config.rotation_sensitivity,
        )?;

        scene.rig().rotate_around_head(degrees);
        self.bindings.detach(LocomotionMode::Rotation);
        log::debug!("snap turn {degrees} degrees");
        Some(degrees)
    }

    /// Frame clock tick: advances reactivation timers.
    pub fn update(&mut self, dt: f32, scene: &mut dyn LocomotionScene) -> usize {
        self.gate.advance(dt, scene.dependencies())
    }

    /// Fixed clock tick: capsule tracking, then gravity. Both are skipped without a
    /// body. Returns whether the body is grounded when gravity ran.
    pub fn fixed_update(&mut self, fixed_dt: f32, scene: &mut dyn LocomotionScene) -> Option<bool> {
        let head_local = scene.rig().head_in_rig_space();
        let body = scene.body()?;
        let capsule = follow_head(body.capsule(), head_local, self.config.additional_height);
        body.set_capsule(capsule);

        self.gravity
            .tick(scene, self.config.ground_layer, self.config.gravity, fixed_dt)
    }

    pub fn enable_continuous_walk(&mut self) -> ConfigResult<()> {
        self.bindings.enable(LocomotionMode::Walk, &self.config)
    }

    pub fn disable_continuous_walk(&mut self) {
        self.bindings.disable(LocomotionMode::Walk);
    }

    pub fn enable_continuous_rotation(&mut self) -> ConfigResult<()> {
        self.bindings.enable(LocomotionMode::Rotation, &self.config)
    }

    pub fn disable_continuous_rotation(&mut self) {
        self.bindings.disable(LocomotionMode::Rotation);
    }

    /// Suspend or resume gravity without touching the configured value.
    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity.set_enabled(enabled);
        log::debug!("gravity {}", if enabled { "enabled" } else { "disabled" });
    }
}
