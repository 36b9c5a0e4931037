//! Rapier-backed scene primitives for a static world.
//!
//! [`StaticWorld`] holds immutable level geometry and provides the two physics calls
//! the controller needs from a host: the downward sphere cast used as the ground test
//! and a collision-aware capsule move through Rapier's `KinematicCharacterController`.
//!
//! Conventions
//! - Units are meters, axes follow the core convention (+Y up).
//! - Every collider carries its [`LayerMask`] bits in `user_data`; queries filter on
//!   them with a predicate.
//! - Vectors cross the boundary component-wise so the core's `nalgebra` types never
//!   have to match Rapier's re-export.

pub use rapier3d::na::UnitQuaternion;
use rapier3d::{
    control::{CharacterAutostep, CharacterLength, KinematicCharacterController},
    na::Translation3,
    parry::query::ShapeCastOptions,
    prelude::*,
};

use crate::{
    capsule::CapsuleShape,
    constants::{AUTOSTEP_MAX_HEIGHT, CONTROLLER_OFFSET},
    layers::LayerMask,
    math::{Point3, Vec3},
    scene::GroundQuery,
};

/// Definition of one immutable world collider.
#[derive(Clone, Debug)]
pub struct StaticColliderDef {
    /// Stable identifier; insertion order is sorted by it.
    pub id: u32,
    pub translation: Vec3,
    pub rotation: UnitQuaternion<f32>,
    pub shape: ColliderShapeDef,
    pub layers: LayerMask,
}

/// Supported static shapes.
#[derive(Clone, Debug)]
pub enum ColliderShapeDef {
    /// Infinite half-space whose normal is the pose's +Y.
    Plane,
    Cuboid { half_extents: Vec3 },
    Sphere { radius: f32 },
    CapsuleY { radius: f32, half_height: f32 },
    CylinderY { radius: f32, half_height: f32 },
}

/// Immutable Rapier query world.
pub struct StaticWorld {
    bodies: RigidBodySet,
    colliders: ColliderSet,
    broad_phase: BroadPhaseBvh,
    narrow_phase: NarrowPhase,
    kcc: KinematicCharacterController,
}

impl StaticWorld {
    /// Build the world from `defs`, sorted by id for deterministic insertion.
    pub fn build(mut defs: Vec<StaticColliderDef>) -> Self {
        defs.sort_by_key(|d| d.id);

        let mut bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();

        for def in defs.iter() {
            let t = def.translation;
            let iso = Isometry::from_parts(Translation3::new(t.x, t.y, t.z), def.rotation);
            let body = bodies.insert(RigidBodyBuilder::fixed().pose(iso).build());

            let collider = collider_builder(&def.shape)
                .user_data(u128::from(def.layers.bits))
                .build();
            colliders.insert_with_parent(collider, body, &mut bodies);
        }

        // Collision detection only: fills the broad-phase BVH so queries can run.
        let mut broad_phase = BroadPhaseBvh::new();
        let mut narrow_phase = NarrowPhase::new();
        CollisionPipeline::new().step(
            0.0,
            &mut broad_phase,
            &mut narrow_phase,
            &mut bodies,
            &mut colliders,
            &(),
            &(),
        );
        log::debug!("static world built with {} colliders", colliders.len());

        Self {
            bodies,
            colliders,
            broad_phase,
            narrow_phase,
            kcc: KinematicCharacterController {
                offset: CharacterLength::Absolute(CONTROLLER_OFFSET),
                autostep: Some(CharacterAutostep {
                    include_dynamic_bodies: false,
                    max_height: CharacterLength::Absolute(AUTOSTEP_MAX_HEIGHT),
                    ..CharacterAutostep::default()
                }),
                snap_to_ground: None,
                ..KinematicCharacterController::default()
            },
        }
    }

    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    /// Borrowed query pipeline over the statics.
    pub fn query_pipeline<'a>(&'a self, filter: QueryFilter<'a>) -> QueryPipeline<'a> {
        self.broad_phase.as_query_pipeline(
            self.narrow_phase.query_dispatcher(),
            &self.bodies,
            &self.colliders,
            filter,
        )
    }

    /// Move a capsule centered at `world_center` by `delta`, sliding along geometry.
    ///
    /// Returns the effective translation.
    pub fn move_capsule(
        &self,
        capsule: &CapsuleShape,
        world_center: Point3,
        delta: Vec3,
        dt: f32,
    ) -> Vec3 {
        let pipeline = self.query_pipeline(QueryFilter::only_fixed());
        let shape = Capsule::new_y(capsule.half_segment(), capsule.radius);
        let pose = Isometry::translation(world_center.x, world_center.y, world_center.z);

        let movement = self.kcc.move_shape(
            dt,
            &pipeline,
            &shape,
            &pose,
            vector![delta.x, delta.y, delta.z],
            |_| {},
        );
        let t = movement.translation;
        Vec3::new(t.x, t.y, t.z)
    }
}

impl GroundQuery for StaticWorld {
    fn sphere_cast_down(&self, origin: Point3, radius: f32, max_distance: f32, mask: LayerMask) -> bool {
        if mask.is_empty() || max_distance <= 0.0 {
            return false;
        }

        let on_mask = |_: ColliderHandle, collider: &Collider| {
            LayerMask::from_bits(collider.user_data as u32).intersects(mask)
        };
        let pipeline = self.query_pipeline(QueryFilter::default().predicate(&on_mask));

        let ball = Ball::new(radius);
        let pose = Isometry::translation(origin.x, origin.y, origin.z);
        let options = ShapeCastOptions::with_max_time_of_impact(max_distance);

        pipeline
            .cast_shape(&pose, &vector![0.0, -1.0, 0.0], &ball, options)
            .is_some()
    }
}

fn collider_builder(shape: &ColliderShapeDef) -> ColliderBuilder {
    match shape {
        ColliderShapeDef::Plane => ColliderBuilder::halfspace(Vector::y_axis()),
        ColliderShapeDef::Cuboid { half_extents } => {
            ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
        }
        ColliderShapeDef::Sphere { radius } => ColliderBuilder::ball(*radius),
        ColliderShapeDef::CapsuleY {
            radius,
            half_height,
        } => ColliderBuilder::capsule_y(*half_height, *radius),
        ColliderShapeDef::CylinderY {
            radius,
            half_height,
        } => ColliderBuilder::cylinder(*half_height, *radius),
    }
}
