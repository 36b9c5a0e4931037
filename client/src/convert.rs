//! Axis conversion between Bevy and the locomotion core.
//!
//! Bevy looks down -Z; the core treats +Z as forward. X and Y agree, so converting in
//! either direction flips Z.

use bevy::prelude::*;
use nalgebra as na;

pub fn to_core(v: Vec3) -> na::Vector3<f32> {
    na::Vector3::new(v.x, v.y, -v.z)
}

pub fn to_core_point(v: Vec3) -> na::Point3<f32> {
    na::Point3::from(to_core(v))
}

pub fn from_core(v: na::Vector3<f32>) -> Vec3 {
    Vec3::new(v.x, v.y, -v.z)
}

pub fn from_core_point(p: na::Point3<f32>) -> Vec3 {
    from_core(p.coords)
}

/// Bevy rotation for a core yaw (degrees, forward turning toward right).
pub fn yaw_to_quat(yaw_degrees: f32) -> Quat {
    Quat::from_rotation_y(-yaw_degrees.to_radians())
}
