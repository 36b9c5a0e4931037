use bevy::prelude::*;
use locomotion::{
    CollisionLayer, LayerMask, StaticColliderDef, StaticWorld,
    physics::{ColliderShapeDef, UnitQuaternion},
};

use crate::convert::to_core;

pub(super) fn plugin(app: &mut App) {
    app.insert_resource(LevelColliders(StaticWorld::build(
        LEVEL.iter().map(LevelBlock::collider_def).collect(),
    )));
    app.add_systems(Startup, setup);
}

/// Collision geometry of the level, queried by the locomotion bridge.
#[derive(Resource)]
pub struct LevelColliders(pub StaticWorld);

/// Axis-aligned level block, in Bevy coordinates.
struct LevelBlock {
    id: u32,
    center: Vec3,
    half_extents: Vec3,
    color: Color,
}

impl LevelBlock {
    fn collider_def(&self) -> StaticColliderDef {
        let h = self.half_extents;
        StaticColliderDef {
            id: self.id,
            translation: to_core(self.center),
            rotation: UnitQuaternion::identity(),
            shape: ColliderShapeDef::Cuboid {
                half_extents: locomotion::Vec3::new(h.x, h.y, h.z),
            },
            layers: LayerMask::from(CollisionLayer::Ground),
        }
    }
}

const GRASS: Color = Color::linear_rgb(0.2, 0.3, 0.25);
const STONE: Color = Color::srgb(0.49, 0.56, 1.0);
const PIT: Color = Color::linear_rgb(0.08, 0.06, 0.05);

/// Ground slab with a 4x4 m pit cut into it at x 6..10, z -2..2, plus a low step
/// the capsule can climb and a platform it cannot.
const LEVEL: &[LevelBlock] = &[
    LevelBlock {
        id: 1,
        center: Vec3::new(-7.0, -0.5, 0.0),
        half_extents: Vec3::new(13.0, 0.5, 20.0),
        color: GRASS,
    },
    LevelBlock {
        id: 2,
        center: Vec3::new(15.0, -0.5, 0.0),
        half_extents: Vec3::new(5.0, 0.5, 20.0),
        color: GRASS,
    },
    LevelBlock {
        id: 3,
        center: Vec3::new(8.0, -0.5, -11.0),
        half_extents: Vec3::new(2.0, 0.5, 9.0),
        color: GRASS,
    },
    LevelBlock {
        id: 4,
        center: Vec3::new(8.0, -0.5, 11.0),
        half_extents: Vec3::new(2.0, 0.5, 9.0),
        color: GRASS,
    },
    LevelBlock {
        id: 5,
        center: Vec3::new(8.0, -3.5, 0.0),
        half_extents: Vec3::new(2.0, 0.5, 2.0),
        color: PIT,
    },
    LevelBlock {
        id: 6,
        center: Vec3::new(-5.0, 0.1, -6.0),
        half_extents: Vec3::new(2.0, 0.1, 2.0),
        color: STONE,
    },
    LevelBlock {
        id: 7,
        center: Vec3::new(-5.0, 0.6, -12.0),
        half_extents: Vec3::new(2.0, 0.6, 2.0),
        color: STONE,
    },
];

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    level: Res<LevelColliders>,
) {
    tracing::info!(
        "level ready: {} blocks, {} colliders",
        LEVEL.len(),
        level.0.collider_count()
    );

    for block in LEVEL {
        commands.spawn((
            Name::new(format!("Level block {}", block.id)),
            Transform::from_translation(block.center),
            Mesh3d(meshes.add(Cuboid::from_size(block.half_extents * 2.0))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: block.color,
                perceptual_roughness: 1.0,
                metallic: 0.0,
                ..default()
            })),
        ));
    }

    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
