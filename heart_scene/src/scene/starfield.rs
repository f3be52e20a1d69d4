//! The slowly turning field of background stars.

use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SceneSettings;
use crate::scene::animation::Spin;
use crate::scene::materials;

/// Marker for the starfield entity.
#[derive(Component)]
pub struct Starfield;

pub const STAR_SPIN_RATE: f32 = 0.0005;

/// Uniformly random positions in the `[-extent, extent)` cube.
pub fn star_positions(count: usize, extent: f32, rng: &mut impl Rng) -> Vec<[f32; 3]> {
    (0..count)
        .map(|_| {
            [
                rng.gen_range(-extent..extent),
                rng.gen_range(-extent..extent),
                rng.gen_range(-extent..extent),
            ]
        })
        .collect()
}

/// One point primitive per star; the whole field is a single mesh so it
/// rotates rigidly.
pub fn build_star_mesh(positions: Vec<[f32; 3]>) -> Mesh {
    let mut mesh = Mesh::new(
        PrimitiveTopology::PointList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh
}

pub fn spawn_starfield(
    mut commands: Commands,
    settings: Res<SceneSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials_res: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let positions = star_positions(settings.star_count, settings.star_extent, &mut rng);

    commands.spawn((
        Starfield,
        Mesh3d(meshes.add(build_star_mesh(positions))),
        MeshMaterial3d(materials::star_material(&mut materials_res)),
        Transform::default(),
        Spin::about_y(STAR_SPIN_RATE),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_has_exactly_the_configured_stars_in_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let positions = star_positions(2000, 50.0, &mut rng);

        assert_eq!(positions.len(), 2000);
        for p in &positions {
            for axis in p {
                assert!((-50.0..=50.0).contains(axis));
            }
        }
    }

    #[test]
    fn seeded_fields_are_reproducible() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);

        assert_eq!(
            star_positions(64, 50.0, &mut a),
            star_positions(64, 50.0, &mut b)
        );
    }

    #[test]
    fn star_mesh_keeps_every_point() {
        let mut rng = StdRng::seed_from_u64(5);
        let mesh = build_star_mesh(star_positions(2000, 50.0, &mut rng));

        assert_eq!(mesh.primitive_topology(), PrimitiveTopology::PointList);
        assert_eq!(mesh.count_vertices(), 2000);
    }

    #[test]
    fn spawned_field_spins_slowly_about_y() {
        let mut settings = SceneSettings::default();
        settings.seed = Some(7);

        let mut app = App::new();
        app.insert_resource(settings);
        app.insert_resource(Assets::<Mesh>::default());
        app.insert_resource(Assets::<StandardMaterial>::default());
        app.add_systems(Startup, spawn_starfield);

        app.update();

        let world = app.world_mut();
        let mut query = world.query::<(&Starfield, &Spin)>();
        let (_, spin) = query.single(world);

        assert_eq!(spin.rate, STAR_SPIN_RATE);
        assert_eq!(spin.phase, 0.0);
    }
}
