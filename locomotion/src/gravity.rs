use crate::{
    capsule::CapsuleShape,
    layers::LayerMask,
    math::{Point3, Vec3},
    scene::{CharacterBody, GroundQuery, LocomotionScene},
};

/// Falling state of the rig.
///
/// `falling_speed` is reset to zero on ground contact and otherwise accumulates
/// `gravity * dt` every airborne tick (more negative for negative gravity).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GravityController {
    falling_speed: f32,
    enabled: bool,
}

impl Default for GravityController {
    fn default() -> Self {
        Self {
            falling_speed: 0.0,
            enabled: true,
        }
    }
}

impl GravityController {
    pub fn falling_speed(&self) -> f32 {
        self.falling_speed
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Suspend or resume gravity, e.g. while a teleport is in flight.
    ///
    /// The accumulated falling speed is kept while suspended.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the controller runs this tick at all.
    pub fn is_active(&self, gravity: f32) -> bool {
        gravity != 0.0 && self.enabled
    }

    /// Advance one fixed tick and return the vertical displacement to apply.
    ///
    /// The displacement is returned even when zero.
    pub fn step(&mut self, grounded: bool, gravity: f32, dt: f32) -> f32 {
        if grounded {
            self.falling_speed = 0.0;
        } else {
            self.falling_speed += gravity * dt;
        }
        self.falling_speed * dt
    }

    /// Full fixed tick: probe ground under the body, integrate, move.
    ///
    /// Returns whether the body was grounded, or `None` when the controller is inactive
    /// or the scene has no body.
    pub fn tick(
        &mut self,
        scene: &mut dyn LocomotionScene,
        mask: LayerMask,
        gravity: f32,
        dt: f32,
    ) -> Option<bool> {
        if !self.is_active(gravity) {
            return None;
        }

        let probe = GroundProbe::under(scene.body()?);
        let grounded = probe.cast(scene.ground(), mask);
        let dy = self.step(grounded, gravity, dt);
        log::trace!("gravity tick: grounded={grounded} falling_speed={}", self.falling_speed);

        if let Some(body) = scene.body() {
            body.move_and_collide(Vec3::new(0.0, dy, 0.0));
        }
        Some(grounded)
    }
}

/// Downward sphere cast used as the ground test.
///
/// Starts at the capsule's world-space center with the capsule radius and reaches
/// half the local center height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundProbe {
    pub origin: Point3,
    pub radius: f32,
    pub max_distance: f32,
}

impl GroundProbe {
    pub fn under(body: &dyn CharacterBody) -> Self {
        let CapsuleShape { center, radius, .. } = body.capsule();
        Self {
            origin: body.local_to_world(Point3::from(center)),
            radius,
            max_distance: center.y * 0.5,
        }
    }

    pub fn cast(&self, ground: &dyn GroundQuery, mask: LayerMask) -> bool {
        ground.sphere_cast_down(self.origin, self.radius, self.max_distance, mask)
    }
}
