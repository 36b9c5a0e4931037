use crate::math::{InputSample, Vec3, rotate_by_yaw, within_band};

/// Parameters of a single walk step.
#[derive(Clone, Copy, Debug)]
pub struct WalkParams {
    /// Meters per second at full deflection.
    pub walk_speed: f32,
    /// Walking engagement band on the x axis.
    pub axis_x_limit: f32,
    /// Frame delta time in seconds.
    pub dt_seconds: f32,
}

/// Translation produced by one axis sample.
///
/// Returns `None` when `sample.x` is outside `(-axis_x_limit, axis_x_limit)`. Large
/// sideways deflection is reserved for rotation and suppresses walking entirely.
///
/// Otherwise the sample is read as `(right, forward)`, turned by the head yaw and
/// scaled by `dt * walk_speed`. This does not apply any collision; feed the result
/// to the body's collision-aware move.
#[inline]
pub fn walk_translation(sample: InputSample, head_yaw_degrees: f32, params: WalkParams) -> Option<Vec3> {
    if !within_band(sample.x, params.axis_x_limit) {
        return None;
    }

    let direction = rotate_by_yaw(sample.x, sample.y, head_yaw_degrees);
    Some(direction * params.dt_seconds * params.walk_speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1.0e-5;

    fn params(dt: f32) -> WalkParams {
        WalkParams {
            walk_speed: 2.0,
            axis_x_limit: 0.3,
            dt_seconds: dt,
        }
    }

    #[test]
    fn forward_sample_moves_along_head_yaw() {
        let t = walk_translation(InputSample::new(0.0, 1.0), 90.0, params(0.5))
            .expect("x inside band");
        assert!((t - Vec3::new(1.0, 0.0, 0.0)).norm() < EPS);
    }

    #[test]
    fn translation_matches_rotated_sample_scaled() {
        for (x, y, yaw, dt) in [
            (0.1, 0.2, 0.0, 0.016),
            (-0.25, 0.9, 45.0, 0.011),
            (0.0, -1.0, -120.0, 0.033),
            (0.29, 0.0, 200.0, 0.02),
        ] {
            let t = walk_translation(InputSample::new(x, y), yaw, params(dt)).expect("inside band");
            let expected = rotate_by_yaw(x, y, yaw) * dt * 2.0;
            assert!((t - expected).norm() < EPS);
            assert_eq!(t.y, 0.0);
        }
    }

    #[test]
    fn x_at_or_beyond_limit_does_not_walk() {
        for x in [0.3, -0.3, 0.31, -0.9, 1.0] {
            assert_eq!(walk_translation(InputSample::new(x, 1.0), 0.0, params(0.016)), None);
        }
    }

    #[test]
    fn centered_sample_walks_zero_distance() {
        let t = walk_translation(InputSample::ZERO, 30.0, params(0.016)).expect("inside band");
        assert_eq!(t, Vec3::zeros());
    }
}
