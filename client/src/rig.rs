//! XR rig stand-in.
//!
//! The rig root carries the collision capsule; its child head carries the camera.
//! Without an XR runtime the head pose is driven from the keyboard and mouse.

use bevy::prelude::*;
use leafwing_input_manager::prelude::*;
use locomotion::CapsuleShape;

use crate::input::HeadAction;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_rig);
    app.add_systems(Update, simulate_head);
}

/// Rig root; movement and snap turns are applied to its transform.
#[derive(Component)]
pub struct RigRoot;

/// Tracked head, a child of [`RigRoot`].
#[derive(Component)]
pub struct XrHead;

/// Collision capsule of the rig, `center` in rig-local core coordinates.
#[derive(Component, Deref, DerefMut)]
pub struct RigCapsule(pub CapsuleShape);

const STANDING_HEAD_HEIGHT: f32 = 1.7;
const MIN_HEAD_HEIGHT: f32 = 0.4;
const MAX_HEAD_HEIGHT: f32 = 2.2;
const HEAD_HEIGHT_RATE: f32 = 0.8;
const MOUSE_YAW_DEGREES_PER_PIXEL: f32 = 0.15;
const KEY_YAW_DEGREES_PER_SEC: f32 = 90.0;

fn spawn_rig(mut commands: Commands) {
    commands
        .spawn((
            Name::new("XR rig"),
            RigRoot,
            RigCapsule(CapsuleShape::default()),
            Transform::from_xyz(0.0, 0.0, 8.0),
            Visibility::default(),
        ))
        .with_children(|rig| {
            rig.spawn((
                Name::new("XR head"),
                XrHead,
                Camera3d::default(),
                Transform::from_xyz(0.0, STANDING_HEAD_HEIGHT, 0.0),
                Visibility::default(),
            ));
        });
}

/// Yaw the head with the mouse or arrow keys and raise/lower it with E/Q.
fn simulate_head(
    actions: Res<ActionState<HeadAction>>,
    mut head: Single<&mut Transform, With<XrHead>>,
    time: Res<Time>,
) {
    let dt = time.delta_secs();

    let yaw_degrees = actions.axis_pair(&HeadAction::Look).x * MOUSE_YAW_DEGREES_PER_PIXEL
        + actions.axis_pair(&HeadAction::TurnKeys).x * KEY_YAW_DEGREES_PER_SEC * dt;
    if yaw_degrees != 0.0 {
        head.rotate_y(-yaw_degrees.to_radians());
    }

    let mut lift = 0.0;
    if actions.pressed(&HeadAction::Raise) {
        lift += HEAD_HEIGHT_RATE * dt;
    }
    if actions.pressed(&HeadAction::Lower) {
        lift -= HEAD_HEIGHT_RATE * dt;
    }
    if lift != 0.0 {
        head.translation.y = (head.translation.y + lift).clamp(MIN_HEAD_HEIGHT, MAX_HEAD_HEIGHT);
    }
}
