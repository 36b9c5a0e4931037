//! Input binding state machine.
//!
//! Tracks which axis listeners are attached to the 2D axis source and reacts to the
//! activation button's press/release edges. Attachment is recorded as an explicit
//! [`AxisBinding`] state, so attaching an already attached listener is a no-op and a
//! single axis sample can never reach the same handler twice.
//!
//! Lifecycle
//! - [`InputBindings::start`] validates the config. On failure nothing is ever bound.
//! - Press: every enabled mode attaches its listener, the axis source is enabled, and
//!   the one-shot deactivation handler is armed on the release edge.
//! - Release: the walk listener is detached and the deactivation handler disarms
//!   itself. The rotation listener is only removed by its own qualifying sample.

use crate::{config::LocomotionConfig, error::ConfigResult};

/// A locomotion feature that owns an axis listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocomotionMode {
    Walk,
    Rotation,
}

/// Which axis listeners are currently attached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AxisBinding {
    #[default]
    Idle,
    WalkActive,
    RotateActive,
    BothActive,
}

impl AxisBinding {
    fn from_parts(walk: bool, rotation: bool) -> Self {
        match (walk, rotation) {
            (false, false) => AxisBinding::Idle,
            (true, false) => AxisBinding::WalkActive,
            (false, true) => AxisBinding::RotateActive,
            (true, true) => AxisBinding::BothActive,
        }
    }

    pub fn walk(self) -> bool {
        matches!(self, AxisBinding::WalkActive | AxisBinding::BothActive)
    }

    pub fn rotation(self) -> bool {
        matches!(self, AxisBinding::RotateActive | AxisBinding::BothActive)
    }

    pub fn has(self, mode: LocomotionMode) -> bool {
        match mode {
            LocomotionMode::Walk => self.walk(),
            LocomotionMode::Rotation => self.rotation(),
        }
    }

    /// State after attaching `mode`'s listener.
    pub fn attach(self, mode: LocomotionMode) -> Self {
        match mode {
            LocomotionMode::Walk => Self::from_parts(true, self.rotation()),
            LocomotionMode::Rotation => Self::from_parts(self.walk(), true),
        }
    }

    /// State after detaching `mode`'s listener.
    pub fn detach(self, mode: LocomotionMode) -> Self {
        match mode {
            LocomotionMode::Walk => Self::from_parts(false, self.rotation()),
            LocomotionMode::Rotation => Self::from_parts(self.walk(), false),
        }
    }
}

/// Input-side state of the continuous movement controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputBindings {
    initialized: bool,
    walk_enabled: bool,
    rotation_enabled: bool,
    axis: AxisBinding,
    deactivation_armed: bool,
    activation_source_enabled: bool,
    axis_source_enabled: bool,
}

impl InputBindings {
    /// Unstarted bindings with mode flags taken from `config`.
    pub fn new(config: &LocomotionConfig) -> Self {
        Self {
            walk_enabled: config.has_continuous_walk,
            rotation_enabled: config.has_continuous_rotation,
            ..Self::default()
        }
    }

    /// Validate `config` and enable the activation source.
    ///
    /// A configuration error is logged and returned; the bindings then stay
    /// uninitialized and every input edge is ignored for the rest of the session.
    pub fn start(&mut self, config: &LocomotionConfig) -> ConfigResult<()> {
        if let Err(err) = config.validate() {
            log::error!("continuous movement disabled: {err}");
            return Err(err);
        }

        self.initialized = true;
        self.activation_source_enabled = true;
        log::info!(
            "continuous movement bound (walk: {}, rotation: {})",
            self.walk_enabled,
            self.rotation_enabled
        );
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_enabled(&self, mode: LocomotionMode) -> bool {
        match mode {
            LocomotionMode::Walk => self.walk_enabled,
            LocomotionMode::Rotation => self.rotation_enabled,
        }
    }

    pub fn axis(&self) -> AxisBinding {
        self.axis
    }

    pub fn deactivation_armed(&self) -> bool {
        self.deactivation_armed
    }

    pub fn activation_source_enabled(&self) -> bool {
        self.activation_source_enabled
    }

    /// Whether the host should deliver axis samples at all.
    pub fn axis_source_enabled(&self) -> bool {
        self.axis_source_enabled
    }

    /// Activation press edge. Returns the resulting listener state.
    pub fn on_activation_pressed(&mut self) -> AxisBinding {
        if !self.activation_source_enabled {
            return self.axis;
        }

        for mode in [LocomotionMode::Walk, LocomotionMode::Rotation] {
            if !self.is_enabled(mode) {
                continue;
            }
            self.attach(mode);
            self.axis_source_enabled = true;
            if !self.deactivation_armed {
                self.deactivation_armed = true;
                log::debug!("deactivation armed on activation release");
            }
        }
        self.axis
    }

    /// Activation release edge.
    ///
    /// Returns `true` if the deactivation handler ran (it was armed by a press), which
    /// is the caller's cue to schedule dependency re-enable.
    pub fn on_activation_released(&mut self) -> bool {
        if !self.activation_source_enabled || !self.deactivation_armed {
            return false;
        }

        self.detach(LocomotionMode::Walk);
        self.deactivation_armed = false;
        log::debug!("deactivation handler ran and disarmed");
        true
    }

    /// Enable a mode; takes effect on the next activation press.
    ///
    /// The walk/rotation band invariant is re-checked against the resulting mode pair.
    /// A refused enable logs an error and leaves the mode disabled.
    pub fn enable(&mut self, mode: LocomotionMode, config: &LocomotionConfig) -> ConfigResult<()> {
        if self.is_enabled(mode) {
            return Ok(());
        }

        let (walk, rotation) = match mode {
            LocomotionMode::Walk => (true, self.rotation_enabled),
            LocomotionMode::Rotation => (self.walk_enabled, true),
        };
        if let Err(err) = config.check_modes(walk, rotation) {
            log::error!("refusing to enable {mode:?}: {err}");
            return Err(err);
        }

        self.set_enabled(mode, true);
        log::debug!("{mode:?} enabled");
        Ok(())
    }

    /// Disable a mode and detach its listener if attached. Idempotent.
    pub fn disable(&mut self, mode: LocomotionMode) {
        if self.axis.has(mode) {
            self.detach(mode);
        }
        if self.is_enabled(mode) {
            self.set_enabled(mode, false);
            log::debug!("{mode:?} disabled");
        }
    }

    /// Attach `mode`'s axis listener. No-op when already attached.
    pub fn attach(&mut self, mode: LocomotionMode) -> bool {
        if self.axis.has(mode) {
            return false;
        }
        self.axis = self.axis.attach(mode);
        log::debug!("{mode:?} listener attached ({:?})", self.axis);
        true
    }

    /// Detach `mode`'s axis listener. No-op when not attached.
    pub fn detach(&mut self, mode: LocomotionMode) -> bool {
        if !self.axis.has(mode) {
            return false;
        }
        self.axis = self.axis.detach(mode);
        log::debug!("{mode:?} listener detached ({:?})", self.axis);
        true
    }

    fn set_enabled(&mut self, mode: LocomotionMode, enabled: bool) {
        match mode {
            LocomotionMode::Walk => self.walk_enabled = enabled,
            LocomotionMode::Rotation => self.rotation_enabled = enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(config: &LocomotionConfig) -> InputBindings {
        let mut bindings = InputBindings::new(config);
        bindings.start(config).expect("valid config");
        bindings
    }

    fn both_modes() -> LocomotionConfig {
        LocomotionConfig::default()
            .with_walk(true)
            .with_rotation(true)
            .with_axis_limits(0.3, 0.3)
    }

    #[test]
    fn axis_binding_transitions() {
        let state = AxisBinding::Idle;
        assert_eq!(state.attach(LocomotionMode::Walk), AxisBinding::WalkActive);
        assert_eq!(
            state
                .attach(LocomotionMode::Walk)
                .attach(LocomotionMode::Rotation),
            AxisBinding::BothActive
        );
        assert_eq!(
            AxisBinding::BothActive.detach(LocomotionMode::Walk),
            AxisBinding::RotateActive
        );
        assert_eq!(
            AxisBinding::RotateActive.detach(LocomotionMode::Rotation),
            AxisBinding::Idle
        );
        // Attaching twice lands in the same state.
        assert_eq!(
            AxisBinding::WalkActive.attach(LocomotionMode::Walk),
            AxisBinding::WalkActive
        );
    }

    #[test]
    fn conflicting_config_never_binds() {
        let config = LocomotionConfig::default()
            .with_walk(true)
            .with_rotation(true)
            .with_axis_limits(0.5, 0.6);
        let mut bindings = InputBindings::new(&config);

        assert!(bindings.start(&config).is_err());
        assert!(!bindings.is_initialized());
        assert!(!bindings.activation_source_enabled());

        assert_eq!(bindings.on_activation_pressed(), AxisBinding::Idle);
        assert!(!bindings.axis_source_enabled());
        assert!(!bindings.deactivation_armed());
        assert!(!bindings.on_activation_released());
    }

    #[test]
    fn press_attaches_every_enabled_mode_and_arms_release() {
        let mut bindings = started(&both_modes());

        assert_eq!(bindings.on_activation_pressed(), AxisBinding::BothActive);
        assert!(bindings.axis_source_enabled());
        assert!(bindings.deactivation_armed());
    }

    #[test]
    fn press_with_no_modes_arms_nothing() {
        let mut bindings = started(&LocomotionConfig::default());

        assert_eq!(bindings.on_activation_pressed(), AxisBinding::Idle);
        assert!(!bindings.deactivation_armed());
        assert!(!bindings.on_activation_released());
    }

    #[test]
    fn release_detaches_walk_but_keeps_rotation() {
        let mut bindings = started(&both_modes());
        bindings.on_activation_pressed();

        assert!(bindings.on_activation_released());
        assert_eq!(bindings.axis(), AxisBinding::RotateActive);
        assert!(!bindings.deactivation_armed());

        // One-shot: a second release without a press does nothing.
        assert!(!bindings.on_activation_released());
    }

    #[test]
    fn repeated_press_does_not_double_attach() {
        let mut bindings = started(&both_modes());
        bindings.on_activation_pressed();
        let before = bindings.clone();

        bindings.on_activation_pressed();
        assert_eq!(bindings, before);
    }

    #[test]
    fn enable_is_idempotent() {
        let config = LocomotionConfig::default().with_walk(true);
        let mut bindings = started(&config);

        assert_eq!(bindings.enable(LocomotionMode::Walk, &config), Ok(()));
        assert_eq!(bindings.enable(LocomotionMode::Walk, &config), Ok(()));
        assert_eq!(bindings.on_activation_pressed(), AxisBinding::WalkActive);
    }

    #[test]
    fn enable_waits_for_next_press() {
        let config = LocomotionConfig::default().with_axis_limits(0.3, 0.3);
        let mut bindings = started(&config);
        bindings.on_activation_pressed();

        bindings
            .enable(LocomotionMode::Rotation, &config)
            .expect("bands do not overlap");
        assert_eq!(bindings.axis(), AxisBinding::Idle);

        assert_eq!(bindings.on_activation_pressed(), AxisBinding::RotateActive);
    }

    #[test]
    fn enable_rechecks_band_invariant() {
        let config = LocomotionConfig::default()
            .with_walk(true)
            .with_axis_limits(0.8, 0.8);
        let mut bindings = started(&config);

        assert!(bindings.enable(LocomotionMode::Rotation, &config).is_err());
        assert!(!bindings.is_enabled(LocomotionMode::Rotation));
        assert_eq!(bindings.on_activation_pressed(), AxisBinding::WalkActive);
    }

    #[test]
    fn disable_detaches_attached_listener() {
        let mut bindings = started(&both_modes());
        bindings.on_activation_pressed();

        bindings.disable(LocomotionMode::Walk);
        assert_eq!(bindings.axis(), AxisBinding::RotateActive);
        assert!(!bindings.is_enabled(LocomotionMode::Walk));

        // Idempotent.
        bindings.disable(LocomotionMode::Walk);
        assert_eq!(bindings.axis(), AxisBinding::RotateActive);

        // Disabled modes are skipped by later presses.
        bindings.disable(LocomotionMode::Rotation);
        assert_eq!(bindings.on_activation_pressed(), AxisBinding::Idle);
    }

    #[test]
    fn toggles_on_uninitialized_bindings_only_flip_flags() {
        let config = LocomotionConfig::default()
            .with_walk(true)
            .with_rotation(true)
            .with_axis_limits(0.9, 0.9);
        let mut bindings = InputBindings::new(&config);
        assert!(bindings.start(&config).is_err());

        bindings.disable(LocomotionMode::Rotation);
        assert!(!bindings.is_enabled(LocomotionMode::Rotation));
        assert_eq!(bindings.on_activation_pressed(), AxisBinding::Idle);
    }
}
