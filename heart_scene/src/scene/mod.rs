pub(crate) mod animation;
pub(crate) mod heart;
pub(crate) mod labels;
pub(crate) mod materials;
pub(crate) mod ring;
pub(crate) mod screenshot;
pub(crate) mod starfield;

use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;

pub use animation::{
    animation_plugin, beat_envelope, BeatClock, HeartPulse, Spin, BEAT_TICK,
};
pub use heart::{build_heart_mesh, spawn_heart, ExtrudeSettings, Heart, HEART_BASE_SCALE};
pub use labels::{billboard_words_system, spawn_word_ring, WordLabel, WordRing};
pub use ring::{spawn_ring, Ring};
pub use screenshot::{still_capture_plugin, StillCapture};
pub use starfield::{build_star_mesh, spawn_starfield, star_positions, Starfield};

const BACKDROP: Color = Color::srgb(0.02, 0.02, 0.02);

/// Camera, fog, and the two-tone lighting. Everything else hangs off the
/// per-object spawn systems.
pub fn setup_scene(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 0.0, 30.0).looking_at(Vec3::ZERO, Vec3::Y),
        DistanceFog {
            color: BACKDROP,
            falloff: FogFalloff::Exponential { density: 0.002 },
            ..default()
        },
    ));

    // Warm key light and a cool fill from the opposite corner.
    commands.spawn((
        PointLight {
            color: Color::srgb(1.0, 0.2, 0.4),
            intensity: 2_000_000.0,
            range: 100.0,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 10.0),
    ));
    commands.spawn((
        PointLight {
            color: Color::srgb(0.2, 0.4, 1.0),
            intensity: 1_000_000.0,
            range: 100.0,
            ..default()
        },
        Transform::from_xyz(-10.0, -10.0, 10.0),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 80.0,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_scene_places_camera_and_lights() {
        let mut app = App::new();
        app.add_systems(Startup, setup_scene);

        app.update();

        assert!(app.world().get_resource::<AmbientLight>().is_some());

        let world = app.world_mut();
        let camera: Vec<Vec3> = world
            .query_filtered::<&Transform, With<Camera3d>>()
            .iter(world)
            .map(|tf| tf.translation)
            .collect();
        assert_eq!(camera, vec![Vec3::new(0.0, 0.0, 30.0)]);

        let lights = world.query::<&PointLight>().iter(world).count();
        assert_eq!(lights, 2);
    }
}
