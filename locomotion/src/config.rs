use std::time::Duration;

use crate::{
    constants::{
        ADDITIONAL_HEIGHT, DEFAULT_AXIS_X_LIMIT, DEFAULT_AXIS_Y_LIMIT, DEFAULT_GRAVITY,
        DEFAULT_ROTATION_SENSITIVITY, DEFAULT_WALK_SPEED, DEPENDENCY_REACTIVATION_DELAY,
    },
    error::{Axis, ConfigError, ConfigResult},
    layers::{CollisionLayer, LayerMask},
};

/// Operator-set locomotion parameters, fixed for a session.
///
/// Invariant: when both walk and rotation are enabled, `axis_x_limit + axis_y_limit`
/// must not exceed 1. See [`LocomotionConfig::validate`].
#[derive(Clone, Debug, PartialEq)]
pub struct LocomotionConfig {
    /// Meters per second at full forward deflection.
    pub walk_speed: f32,
    /// Degrees per whole unit of horizontal deflection.
    pub rotation_sensitivity: f32,
    /// Walking engagement band on the x axis.
    pub axis_x_limit: f32,
    /// Snap-turn engagement band on the y axis.
    pub axis_y_limit: f32,
    /// Signed gravity; `0.0` disables the gravity controller.
    pub gravity: f32,
    pub has_continuous_walk: bool,
    pub has_continuous_rotation: bool,
    /// Layers the ground probe may hit.
    pub ground_layer: LayerMask,
    /// Capsule height above the tracked head height.
    pub additional_height: f32,
    /// Delay before dependencies come back after activation release.
    pub reactivation_delay: Duration,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            walk_speed: DEFAULT_WALK_SPEED,
            rotation_sensitivity: DEFAULT_ROTATION_SENSITIVITY,
            axis_x_limit: DEFAULT_AXIS_X_LIMIT,
            axis_y_limit: DEFAULT_AXIS_Y_LIMIT,
            gravity: DEFAULT_GRAVITY,
            has_continuous_walk: false,
            has_continuous_rotation: false,
            ground_layer: LayerMask::from(CollisionLayer::Ground),
            additional_height: ADDITIONAL_HEIGHT,
            reactivation_delay: DEPENDENCY_REACTIVATION_DELAY,
        }
    }
}

impl LocomotionConfig {
    pub fn with_walk(mut self, enabled: bool) -> Self {
        self.has_continuous_walk = enabled;
        self
    }

    pub fn with_rotation(mut self, enabled: bool) -> Self {
        self.has_continuous_rotation = enabled;
        self
    }

    pub fn with_axis_limits(mut self, axis_x_limit: f32, axis_y_limit: f32) -> Self {
        self.axis_x_limit = axis_x_limit;
        self.axis_y_limit = axis_y_limit;
        self
    }

    pub fn with_walk_speed(mut self, walk_speed: f32) -> Self {
        self.walk_speed = walk_speed;
        self
    }

    pub fn with_rotation_sensitivity(mut self, rotation_sensitivity: f32) -> Self {
        self.rotation_sensitivity = rotation_sensitivity;
        self
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_ground_layer(mut self, ground_layer: LayerMask) -> Self {
        self.ground_layer = ground_layer;
        self
    }

    /// Validate value domains and the walk/rotation band invariant.
    ///
    /// Checks, in order:
    /// - both axis limits lie in [0, 1]
    /// - `walk_speed` and `rotation_sensitivity` are positive
    /// - if both modes are enabled, the bands do not overlap (`x + y <= 1`)
    pub fn validate(&self) -> ConfigResult<()> {
        check_axis_limit(Axis::X, self.axis_x_limit)?;
        check_axis_limit(Axis::Y, self.axis_y_limit)?;
        check_positive("walk_speed", self.walk_speed)?;
        check_positive("rotation_sensitivity", self.rotation_sensitivity)?;
        self.check_modes(self.has_continuous_walk, self.has_continuous_rotation)
    }

    /// Band invariant for a given pair of mode flags.
    ///
    /// Used both at startup and when a mode is enabled at runtime.
    pub fn check_modes(&self, walk: bool, rotation: bool) -> ConfigResult<()> {
        if walk && rotation && self.axis_x_limit + self.axis_y_limit > 1.0 {
            return Err(ConfigError::AxisLimitConflict {
                axis_x_limit: self.axis_x_limit,
                axis_y_limit: self.axis_y_limit,
            });
        }
        Ok(())
    }
}

fn check_axis_limit(axis: Axis, value: f32) -> ConfigResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::AxisLimitOutOfRange { axis, value });
    }
    Ok(())
}

fn check_positive(field: &'static str, value: f32) -> ConfigResult<()> {
    // `!(value > 0.0)` also rejects NaN.
    if !(value > 0.0) {
        return Err(ConfigError::NonPositive { field, value });
    }
    Ok(())
}
