use nalgebra as na;

pub type Vec3 = na::Vector3<f32>;
pub type Point3 = na::Point3<f32>;

/// A 2D sample from a directional input device (stick or trackpad).
///
/// Conventionally each axis lies in [-1, 1]: `x` is right, `y` is forward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSample {
    pub x: f32,
    pub y: f32,
}

impl InputSample {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl From<[f32; 2]> for InputSample {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

/// Tracked viewpoint pose in world space.
///
/// Yaw is in degrees, positive turning from +Z toward +X (clockwise seen from above).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadPose {
    pub position: Point3,
    pub yaw_degrees: f32,
}

/// Strict engagement band test: `-limit < value < limit`.
///
/// A limit of 0 rejects every value, including 0.
#[inline]
pub fn within_band(value: f32, limit: f32) -> bool {
    value > -limit && value < limit
}

/// Rotate the planar vector `(x, 0, z)` about +Y by `yaw_degrees`.
///
/// Convention: +Z is forward, +X is right, and a positive yaw turns forward toward
/// right. `rotate_by_yaw(0, 1, 90)` is `(1, 0, 0)`.
#[inline]
pub fn rotate_by_yaw(x: f32, z: f32, yaw_degrees: f32) -> Vec3 {
    let rotation = na::Rotation3::from_axis_angle(&na::Vector3::y_axis(), yaw_degrees.to_radians());
    rotation * Vec3::new(x, 0.0, z)
}

/// Yaw (degrees) of a forward vector under the [`rotate_by_yaw`] convention.
///
/// Only the planar part is used; a vertical or zero vector yields 0.
#[inline]
pub fn yaw_from_forward(forward: Vec3) -> f32 {
    if forward.x == 0.0 && forward.z == 0.0 {
        return 0.0;
    }
    forward.x.atan2(forward.z).to_degrees()
}

/// Whole snap-turn steps for a horizontal deflection.
///
/// Fractional deflection is quantized to the nearest integer with ties going to the
/// even neighbour, so `0.5` and `-0.5` are both zero steps while `1.0` is one.
#[inline]
pub fn snap_steps(x: f32) -> i32 {
    x.round_ties_even() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1.0e-5;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).norm() < EPS
    }

    #[test]
    fn band_is_strict_on_both_sides() {
        assert!(within_band(0.0, 0.3));
        assert!(within_band(0.29, 0.3));
        assert!(within_band(-0.29, 0.3));
        assert!(!within_band(0.3, 0.3));
        assert!(!within_band(-0.3, 0.3));
        assert!(!within_band(0.0, 0.0));
    }

    #[test]
    fn zero_yaw_keeps_sample_axes() {
        assert!(approx(rotate_by_yaw(0.2, 0.7, 0.0), Vec3::new(0.2, 0.0, 0.7)));
    }

    #[test]
    fn quarter_turn_maps_forward_to_right() {
        assert!(approx(rotate_by_yaw(0.0, 1.0, 90.0), Vec3::new(1.0, 0.0, 0.0)));
        assert!(approx(rotate_by_yaw(1.0, 0.0, 90.0), Vec3::new(0.0, 0.0, -1.0)));
        assert!(approx(rotate_by_yaw(0.0, 1.0, 180.0), Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn yaw_from_forward_inverts_rotate_by_yaw() {
        for yaw in [-135.0_f32, -45.0, 0.0, 30.0, 90.0, 170.0] {
            let forward = rotate_by_yaw(0.0, 1.0, yaw);
            assert!((yaw_from_forward(forward) - yaw).abs() < 1.0e-3);
        }
        assert_eq!(yaw_from_forward(Vec3::new(0.0, 1.0, 0.0)), 0.0);
    }

    #[test]
    fn snap_steps_round_half_to_even() {
        assert_eq!(snap_steps(0.0), 0);
        assert_eq!(snap_steps(0.49), 0);
        assert_eq!(snap_steps(0.5), 0);
        assert_eq!(snap_steps(-0.5), 0);
        assert_eq!(snap_steps(0.51), 1);
        assert_eq!(snap_steps(1.0), 1);
        assert_eq!(snap_steps(-0.8), -1);
        assert_eq!(snap_steps(1.5), 2);
    }
}
