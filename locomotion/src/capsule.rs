use crate::{
    constants::{DEFAULT_CAPSULE_HEIGHT, DEFAULT_CAPSULE_RADIUS, DEFAULT_SKIN_WIDTH},
    math::Vec3,
};

/// Collision capsule dimensions.
///
/// `height` includes both caps. `center` is in rig-local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CapsuleShape {
    pub height: f32,
    pub center: Vec3,
    pub radius: f32,
    pub skin_width: f32,
}

impl Default for CapsuleShape {
    fn default() -> Self {
        Self {
            height: DEFAULT_CAPSULE_HEIGHT,
            center: Vec3::new(0.0, DEFAULT_CAPSULE_HEIGHT * 0.5 + DEFAULT_SKIN_WIDTH, 0.0),
            radius: DEFAULT_CAPSULE_RADIUS,
            skin_width: DEFAULT_SKIN_WIDTH,
        }
    }
}

impl CapsuleShape {
    /// Half length of the capsule's inner segment, the value Rapier/parry expect.
    ///
    /// Clamped at zero for capsules shorter than their diameter.
    pub fn half_segment(&self) -> f32 {
        (self.height * 0.5 - self.radius).max(0.0)
    }
}

/// Capsule that follows the tracked head.
///
/// The height tracks the head height above the rig floor plus `additional_height`.
/// The center keeps the head's horizontal offset and sits half the height (plus the
/// skin width) above the floor.
#[inline]
pub fn follow_head(capsule: CapsuleShape, head_local: Vec3, additional_height: f32) -> CapsuleShape {
    let height = head_local.y + additional_height;
    let center = Vec3::new(head_local.x, height * 0.5 + capsule.skin_width, head_local.z);

    CapsuleShape {
        height,
        center,
        ..capsule
    }
}
