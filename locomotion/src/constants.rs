/*!
Locomotion defaults and tolerances.

These constants centralize the tuning values used by the continuous movement
controller. `LocomotionConfig::default()` is built from them; hosts override
per-session values through the config, not by editing these.

Notes
- Distances are in meters, time in seconds, angles in degrees.
- Axis limits are fractions of full stick/trackpad deflection in [0, 1].
*/

use std::time::Duration;

/// Default walking speed (meters per second at full deflection).
pub const DEFAULT_WALK_SPEED: f32 = 25.0;

/// Default snap-turn step (degrees per whole unit of horizontal deflection).
pub const DEFAULT_ROTATION_SENSITIVITY: f32 = 25.0;

/// Default horizontal engagement band for walking.
///
/// A sample walks only while `-limit < x < limit`; larger sideways deflection is
/// left to rotation.
pub const DEFAULT_AXIS_X_LIMIT: f32 = 0.5;

/// Default vertical engagement band for snap turns.
pub const DEFAULT_AXIS_Y_LIMIT: f32 = 0.5;

/// Default gravity (meters per second squared, signed; negative pulls down).
///
/// `0.0` disables the gravity controller entirely.
pub const DEFAULT_GRAVITY: f32 = -9.81;

/// Margin added on top of the tracked head height to get the capsule height (meters).
pub const ADDITIONAL_HEIGHT: f32 = 0.2;

/// Delay between releasing the activation button and re-enabling dependencies.
pub const DEPENDENCY_REACTIVATION_DELAY: Duration = Duration::from_millis(700);

/// Default capsule radius for a standing player (meters).
pub const DEFAULT_CAPSULE_RADIUS: f32 = 0.3;

/// Default capsule skin width (meters).
pub const DEFAULT_SKIN_WIDTH: f32 = 0.08;

/// Default capsule height before the first tracked head sample (meters).
pub const DEFAULT_CAPSULE_HEIGHT: f32 = 1.8;

/// Gap the character controller keeps between the capsule and static geometry (meters).
pub const CONTROLLER_OFFSET: f32 = 0.01;

/// Tallest ledge the character controller steps onto without a jump (meters).
pub const AUTOSTEP_MAX_HEIGHT: f32 = 0.3;
