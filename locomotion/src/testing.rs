//! In-memory scene used by unit tests.

use std::cell::Cell;

use crate::{
    capsule::CapsuleShape,
    layers::LayerMask,
    math::{HeadPose, Point3, Vec3},
    scene::{CharacterBody, DependencySet, GroundQuery, LocomotionScene, XrRig},
};

/// Rig with a fixed head; records every rotation request.
#[derive(Clone, Debug)]
pub struct FakeRig {
    pub head: HeadPose,
    pub head_local: Vec3,
    pub rotations: Vec<f32>,
}

impl Default for FakeRig {
    fn default() -> Self {
        Self {
            head: HeadPose {
                position: Point3::new(0.0, 1.7, 0.0),
                yaw_degrees: 0.0,
            },
            head_local: Vec3::new(0.0, 1.7, 0.0),
            rotations: Vec::new(),
        }
    }
}

impl XrRig for FakeRig {
    fn head_pose(&self) -> HeadPose {
        self.head
    }

    fn head_in_rig_space(&self) -> Vec3 {
        self.head_local
    }

    fn rotate_around_head(&mut self, yaw_degrees: f32) {
        self.rotations.push(yaw_degrees);
        self.head.yaw_degrees += yaw_degrees;
    }
}

/// Body translated by `position` with no rotation and no collision.
#[derive(Clone, Debug)]
pub struct FakeBody {
    pub position: Point3,
    pub capsule: CapsuleShape,
    pub moves: Vec<Vec3>,
}

impl Default for FakeBody {
    fn default() -> Self {
        Self {
            position: Point3::origin(),
            capsule: CapsuleShape::default(),
            moves: Vec::new(),
        }
    }
}

impl CharacterBody for FakeBody {
    fn capsule(&self) -> CapsuleShape {
        self.capsule
    }

    fn set_capsule(&mut self, capsule: CapsuleShape) {
        self.capsule = capsule;
    }

    fn local_to_world(&self, local: Point3) -> Point3 {
        local + self.position.coords
    }

    fn move_and_collide(&mut self, delta: Vec3) {
        self.position += delta;
        self.moves.push(delta);
    }
}

/// Arguments of one ground probe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cast {
    pub origin: Point3,
    pub radius: f32,
    pub max_distance: f32,
    pub mask: LayerMask,
}

/// Ground that answers every probe the same way.
#[derive(Debug, Default)]
pub struct FakeGround {
    pub hit: Cell<bool>,
    last: Cell<Option<Cast>>,
    casts: Cell<usize>,
}

impl FakeGround {
    pub fn grounded() -> Self {
        Self {
            hit: Cell::new(true),
            ..Self::default()
        }
    }

    pub fn airborne() -> Self {
        Self::default()
    }

    pub fn last_cast(&self) -> Option<Cast> {
        self.last.get()
    }

    pub fn cast_count(&self) -> usize {
        self.casts.get()
    }
}

impl GroundQuery for FakeGround {
    fn sphere_cast_down(&self, origin: Point3, radius: f32, max_distance: f32, mask: LayerMask) -> bool {
        self.last.set(Some(Cast {
            origin,
            radius,
            max_distance,
            mask,
        }));
        self.casts.set(self.casts.get() + 1);
        self.hit.get()
    }
}

/// Dependency that counts its activation edges.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Toggle {
    pub active: bool,
    pub activations: usize,
    pub deactivations: usize,
}

impl Toggle {
    pub fn active() -> Self {
        Self {
            active: true,
            ..Self::default()
        }
    }

    pub fn inactive() -> Self {
        Self::default()
    }
}

impl DependencySet for Toggle {
    fn set_active(&mut self, active: bool) {
        if active {
            self.activations += 1;
        } else {
            self.deactivations += 1;
        }
        self.active = active;
    }
}

/// Scene assembled from the fakes above.
#[derive(Debug, Default)]
pub struct FakeScene {
    pub rig: FakeRig,
    pub body: Option<FakeBody>,
    pub ground: FakeGround,
    pub dependencies: Option<Vec<Toggle>>,
}

impl FakeScene {
    /// Grounded rig with a body and two active dependencies.
    pub fn standing() -> Self {
        Self {
            rig: FakeRig::default(),
            body: Some(FakeBody::default()),
            ground: FakeGround::grounded(),
            dependencies: Some(vec![Toggle::active(), Toggle::active()]),
        }
    }

    pub fn deps_active(&self) -> Option<bool> {
        self.dependencies
            .as_ref()
            .map(|deps| deps.iter().all(|d| d.active))
    }

    pub fn body_position(&self) -> Point3 {
        self.body.as_ref().map(|b| b.position).unwrap_or_else(Point3::origin)
    }
}

impl LocomotionScene for FakeScene {
    fn rig(&mut self) -> &mut dyn XrRig {
        &mut self.rig
    }

    fn body(&mut self) -> Option<&mut dyn CharacterBody> {
        self.body.as_mut().map(|b| b as &mut dyn CharacterBody)
    }

    fn ground(&self) -> &dyn GroundQuery {
        &self.ground
    }

    fn dependencies(&mut self) -> Option<&mut dyn DependencySet> {
        self.dependencies
            .as_mut()
            .map(|d| d as &mut dyn DependencySet)
    }
}
