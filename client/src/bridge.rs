//! Drives the locomotion core from Bevy.
//!
//! Frame systems feed activation edges, trackpad samples and the reactivation timers
//! in `Update`; capsule tracking and gravity run in `FixedUpdate`. Each call builds a
//! short-lived [`RigScene`] over the rig's components.

use bevy::prelude::*;
use leafwing_input_manager::prelude::*;
use locomotion::{
    CapsuleShape, CharacterBody, ContinuousMovement, DependencySet, GroundQuery, HeadPose,
    InputSample, LocomotionConfig, LocomotionMode, LocomotionScene, StaticWorld, XrRig,
    yaw_from_forward,
};

use crate::{
    convert::{from_core, from_core_point, to_core, to_core_point, yaw_to_quat},
    dependencies::{DependencyQuery, Dependent},
    input::{HeadAction, LocomotionAction},
    rig::{RigCapsule, RigRoot, XrHead},
    world::LevelColliders,
};

pub(super) fn plugin(app: &mut App) {
    app.insert_resource(Locomotion(ContinuousMovement::new(desktop_config())));
    app.add_systems(Startup, start_locomotion);
    app.add_systems(Update, (runtime_toggles, drive_locomotion).chain());
    app.add_systems(FixedUpdate, fixed_tick);
}

#[derive(Resource, Deref, DerefMut)]
pub struct Locomotion(pub ContinuousMovement);

/// Walk and snap turn share the trackpad: |x| < 0.3 walks, |y| < 0.3 turns.
fn desktop_config() -> LocomotionConfig {
    LocomotionConfig::default()
        .with_walk(true)
        .with_rotation(true)
        .with_axis_limits(0.3, 0.3)
        .with_walk_speed(2.5)
        .with_rotation_sensitivity(45.0)
}

fn start_locomotion(mut locomotion: ResMut<Locomotion>) {
    if locomotion.start().is_err() {
        tracing::warn!("locomotion input is disabled for this session");
    }
}

fn drive_locomotion(
    actions: Res<ActionState<LocomotionAction>>,
    mut locomotion: ResMut<Locomotion>,
    rig: Single<(&mut Transform, Option<&mut RigCapsule>), (With<RigRoot>, Without<XrHead>)>,
    head: Single<&Transform, (With<XrHead>, Without<RigRoot>)>,
    mut dependencies: DependencyQuery,
    level: Res<LevelColliders>,
    time: Res<Time>,
) {
    let dt = time.delta_secs();
    let (mut root, mut capsule) = rig.into_inner();
    let mut scene = RigScene::new(
        &mut root,
        **head,
        capsule.as_deref_mut().map(|c| &mut c.0),
        &level.0,
        &mut dependencies,
        dt,
    );

    if actions.just_pressed(&LocomotionAction::Activate) {
        let axis = locomotion.on_activation_pressed();
        tracing::debug!("activation pressed: {axis:?}");
    }

    if locomotion.axis_source_enabled() {
        let value = actions.clamped_axis_pair(&LocomotionAction::Trackpad);
        let sample = InputSample::new(value.x, value.y);
        if !sample.is_zero() {
            locomotion.on_axis_sample(sample, dt, &mut scene);
        }
    }

    if actions.just_released(&LocomotionAction::Activate) {
        locomotion.on_activation_released(&mut scene);
    }

    locomotion.update(dt, &mut scene);
}

fn fixed_tick(
    mut locomotion: ResMut<Locomotion>,
    rig: Single<(&mut Transform, Option<&mut RigCapsule>), (With<RigRoot>, Without<XrHead>)>,
    head: Single<&Transform, (With<XrHead>, Without<RigRoot>)>,
    mut dependencies: DependencyQuery,
    level: Res<LevelColliders>,
    time: Res<Time>,
) {
    let dt = time.delta_secs();
    let (mut root, mut capsule) = rig.into_inner();
    let mut scene = RigScene::new(
        &mut root,
        **head,
        capsule.as_deref_mut().map(|c| &mut c.0),
        &level.0,
        &mut dependencies,
        dt,
    );

    locomotion.fixed_update(dt, &mut scene);
}

/// G toggles gravity, 1 and 2 toggle walking and snap turning.
fn runtime_toggles(actions: Res<ActionState<HeadAction>>, mut locomotion: ResMut<Locomotion>) {
    if actions.just_pressed(&HeadAction::ToggleGravity) {
        let enabled = !locomotion.gravity_enabled();
        locomotion.set_gravity_enabled(enabled);
        tracing::info!("gravity {}", if enabled { "on" } else { "off" });
    }

    for (action, mode) in [
        (HeadAction::ToggleWalk, LocomotionMode::Walk),
        (HeadAction::ToggleRotation, LocomotionMode::Rotation),
    ] {
        if !actions.just_pressed(&action) {
            continue;
        }
        if locomotion.bindings().is_enabled(mode) {
            match mode {
                LocomotionMode::Walk => locomotion.disable_continuous_walk(),
                LocomotionMode::Rotation => locomotion.disable_continuous_rotation(),
            }
            tracing::info!("{mode:?} off");
            continue;
        }
        let enabled = match mode {
            LocomotionMode::Walk => locomotion.enable_continuous_walk(),
            LocomotionMode::Rotation => locomotion.enable_continuous_rotation(),
        };
        match enabled {
            Ok(()) => tracing::info!("{mode:?} on"),
            Err(err) => tracing::warn!("{mode:?} stays off: {err}"),
        }
    }
}

/// Rig root and head as the core's rig and character body.
struct RigBody<'a> {
    root: &'a mut Transform,
    head_local: Transform,
    capsule: Option<&'a mut CapsuleShape>,
    world: &'a StaticWorld,
    dt: f32,
}

impl XrRig for RigBody<'_> {
    fn head_pose(&self) -> HeadPose {
        let head = self.root.mul_transform(self.head_local);
        HeadPose {
            position: to_core_point(head.translation),
            yaw_degrees: yaw_from_forward(to_core(*head.forward())),
        }
    }

    fn head_in_rig_space(&self) -> locomotion::Vec3 {
        to_core(self.head_local.translation)
    }

    fn rotate_around_head(&mut self, yaw_degrees: f32) {
        let pivot = self.root.transform_point(self.head_local.translation);
        self.root.rotate_around(pivot, yaw_to_quat(yaw_degrees));
    }
}

impl CharacterBody for RigBody<'_> {
    fn capsule(&self) -> CapsuleShape {
        self.capsule.as_deref().copied().unwrap_or_default()
    }

    fn set_capsule(&mut self, capsule: CapsuleShape) {
        if let Some(current) = self.capsule.as_deref_mut() {
            *current = capsule;
        }
    }

    fn local_to_world(&self, local: locomotion::Point3) -> locomotion::Point3 {
        to_core_point(self.root.transform_point(from_core_point(local)))
    }

    fn move_and_collide(&mut self, delta: locomotion::Vec3) {
        let Some(capsule) = self.capsule.as_deref().copied() else {
            return;
        };
        let center = self.local_to_world(capsule.center.into());
        let moved = self.world.move_capsule(&capsule, center, delta, self.dt);
        self.root.translation += from_core(moved);
    }
}

/// One controller call's view of the ECS.
struct RigScene<'a> {
    body: RigBody<'a>,
    dependencies: Option<Vec<Dependent<'a>>>,
}

impl<'a> RigScene<'a> {
    fn new(
        root: &'a mut Transform,
        head_local: Transform,
        capsule: Option<&'a mut CapsuleShape>,
        world: &'a StaticWorld,
        dependencies: &'a mut DependencyQuery,
        dt: f32,
    ) -> Self {
        let dependents: Vec<_> = dependencies.iter_mut().map(Dependent).collect();
        Self {
            body: RigBody {
                root,
                head_local,
                capsule,
                world,
                dt,
            },
            dependencies: (!dependents.is_empty()).then_some(dependents),
        }
    }
}

impl LocomotionScene for RigScene<'_> {
    fn rig(&mut self) -> &mut dyn XrRig {
        &mut self.body
    }

    fn body(&mut self) -> Option<&mut dyn CharacterBody> {
        if self.body.capsule.is_none() {
            return None;
        }
        Some(&mut self.body)
    }

    fn ground(&self) -> &dyn GroundQuery {
        self.body.world
    }

    fn dependencies(&mut self) -> Option<&mut dyn DependencySet> {
        self.dependencies
            .as_mut()
            .map(|d| d as &mut dyn DependencySet)
    }
}
