use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Which engagement band a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => f.write_str("axis_x_limit"),
            Axis::Y => f.write_str("axis_y_limit"),
        }
    }
}

/// Startup configuration errors.
///
/// These are reported once, leave the controller without input bindings, and are
/// never retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error(
        "walk and rotation both enabled but axis_x_limit ({axis_x_limit}) + axis_y_limit ({axis_y_limit}) > 1"
    )]
    AxisLimitConflict { axis_x_limit: f32, axis_y_limit: f32 },

    #[error("{axis} must be within [0, 1], got {value}")]
    AxisLimitOutOfRange { axis: Axis, value: f32 },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
}
