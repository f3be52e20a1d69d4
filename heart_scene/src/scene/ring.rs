//! The thin decorative ring circling the heart.

use bevy::prelude::*;

use crate::config::SceneSettings;
use crate::scene::materials;

/// Marker for the ring entity.
#[derive(Component)]
pub struct Ring;

pub fn spawn_ring(
    mut commands: Commands,
    settings: Res<SceneSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials_res: ResMut<Assets<StandardMaterial>>,
) {
    // Bevy's torus is generated flat in the XZ plane, which is exactly
    // where the ring sits.
    commands.spawn((
        Ring,
        Mesh3d(meshes.add(Torus {
            minor_radius: settings.ring_tube_radius,
            major_radius: settings.ring_radius,
        })),
        MeshMaterial3d(materials::ring_material(&mut materials_res)),
        Transform::default(),
    ));
}
