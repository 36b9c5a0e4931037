//! Scene boundary of the locomotion core.
//!
//! The controller never owns scene objects. A host implements these traits over its
//! own representation (an ECS, an engine binding, test fakes) and hands a
//! [`LocomotionScene`] to each controller call. Every trait method is synchronous and
//! infallible; a missing collaborator is expressed as `None`, not as an error.
//!
//! All vectors use the core convention: +Y up, +Z forward, +X right, yaw in degrees
//! turning forward toward right.

use crate::{
    capsule::CapsuleShape,
    layers::LayerMask,
    math::{HeadPose, Point3, Vec3},
};

/// Tracked head and the rig it is parented to.
pub trait XrRig {
    /// World-space head pose; only the yaw steers walking.
    fn head_pose(&self) -> HeadPose;

    /// Head position in rig-local space (`y` is the height above the rig floor).
    fn head_in_rig_space(&self) -> Vec3;

    /// Rotate the rig about the vertical axis through the head.
    fn rotate_around_head(&mut self, yaw_degrees: f32);
}

/// Collision capsule attached to the rig root.
pub trait CharacterBody {
    /// Current capsule dimensions, `center` in rig-local space.
    fn capsule(&self) -> CapsuleShape;

    fn set_capsule(&mut self, capsule: CapsuleShape);

    /// Map a rig-local point to world space.
    fn local_to_world(&self, local: Point3) -> Point3;

    /// Move the body by `delta`, respecting collision geometry.
    fn move_and_collide(&mut self, delta: Vec3);
}

/// Ground-test primitive.
pub trait GroundQuery {
    /// Sweep a sphere straight down from `origin` for up to `max_distance`.
    ///
    /// Returns `true` if any collider on a layer in `mask` is hit.
    fn sphere_cast_down(&self, origin: Point3, radius: f32, max_distance: f32, mask: LayerMask)
    -> bool;
}

/// Externally owned objects that locomotion hides while it is engaged.
pub trait DependencySet {
    fn set_active(&mut self, active: bool);
}

/// Everything a controller call may touch.
///
/// Each accessor borrows the scene on its own, so an implementation may return the
/// same underlying object from `rig()` and `body()`.
pub trait LocomotionScene {
    fn rig(&mut self) -> &mut dyn XrRig;

    /// `None` when the rig has no collision body; capsule tracking and gravity are
    /// skipped in that case.
    fn body(&mut self) -> Option<&mut dyn CharacterBody>;

    fn ground(&self) -> &dyn GroundQuery;

    /// `None` when no dependency set is configured.
    fn dependencies(&mut self) -> Option<&mut dyn DependencySet>;
}

impl<T: DependencySet> DependencySet for Vec<T> {
    fn set_active(&mut self, active: bool) {
        for dependency in self.iter_mut() {
            dependency.set_active(active);
        }
    }
}

impl<T: DependencySet> DependencySet for [T] {
    fn set_active(&mut self, active: bool) {
        for dependency in self.iter_mut() {
            dependency.set_active(active);
        }
    }
}
