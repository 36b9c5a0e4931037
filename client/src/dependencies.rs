//! Objects hidden while the player walks: a teleport target and a menu panel.

use bevy::prelude::*;
use locomotion::DependencySet;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_dependencies);
}

/// Marks an entity whose visibility follows the locomotion dependency gate.
#[derive(Component)]
pub struct TrackpadDependency;

pub type DependencyQuery<'w, 's> = Query<'w, 's, &'static mut Visibility, With<TrackpadDependency>>;

/// Visibility of one dependency as seen by the locomotion core.
pub struct Dependent<'a>(pub Mut<'a, Visibility>);

impl DependencySet for Dependent<'_> {
    fn set_active(&mut self, active: bool) {
        let visibility = if active {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        self.0.set_if_neq(visibility);
    }
}

fn spawn_dependencies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Name::new("Teleport marker"),
        TrackpadDependency,
        Mesh3d(meshes.add(Torus::new(0.35, 0.45))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.2, 0.8, 1.0),
            unlit: true,
            ..default()
        })),
        Transform::from_xyz(0.0, 0.02, 4.0),
        Visibility::Inherited,
    ));

    commands.spawn((
        Name::new("Menu panel"),
        TrackpadDependency,
        Mesh3d(meshes.add(Cuboid::new(1.2, 0.7, 0.02))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(0.1, 0.1, 0.15, 0.85),
            alpha_mode: AlphaMode::Blend,
            ..default()
        })),
        Transform::from_xyz(1.5, 1.5, 5.5).looking_at(Vec3::new(0.0, 1.5, 8.0), Vec3::Y),
        Visibility::Inherited,
    ));
}
