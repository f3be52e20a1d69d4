//! Headless run of the whole scene: construction, the one-shot reveal gate,
//! and the animation that follows.

use std::time::Duration;

use bevy::prelude::*;
use heart_scene::config::SceneSettings;
use heart_scene::{
    animation_plugin, beat_envelope, reveal_transition_system, setup_scene, spawn_heart,
    spawn_ring, spawn_starfield, spawn_word_ring, BeatClock, Heart, RevealState, Spin,
    Starfield, WordLabel, WordRing, HEART_BASE_SCALE,
};

fn scene_app() -> App {
    let mut app = App::new();
    app.insert_resource(Time::<()>::default());
    app.insert_resource(Assets::<Mesh>::default());
    app.insert_resource(Assets::<StandardMaterial>::default());
    app.insert_resource(
        SceneSettings {
            seed: Some(11),
            ..default()
        }
        .normalized(),
    );
    app.init_resource::<RevealState>();
    app.add_plugins(animation_plugin);
    app.add_systems(
        Startup,
        (
            setup_scene,
            spawn_heart,
            spawn_ring,
            spawn_word_ring,
            spawn_starfield,
        ),
    );
    app.add_systems(Update, reveal_transition_system);
    app
}

fn step(app: &mut App, millis: u64) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_millis(millis));
    app.update();
}

#[test]
fn scene_builds_every_object_up_front() {
    let mut app = scene_app();
    app.update();

    let world = app.world_mut();

    let hearts = world.query::<&Heart>().iter(world).count();
    assert_eq!(hearts, 1);

    let words = world.query::<&WordLabel>().iter(world).count();
    assert_eq!(words, 8);

    let rings = world.query::<&WordRing>().iter(world).count();
    assert_eq!(rings, 1);

    let mut star_query = world.query_filtered::<&Mesh3d, With<Starfield>>();
    let handle = star_query.single(world).0.clone();
    let mesh = world.resource::<Assets<Mesh>>().get(&handle).unwrap();
    assert_eq!(mesh.count_vertices(), 2000);
}

#[test]
fn scene_is_static_behind_the_curtain() {
    let mut app = scene_app();

    for _ in 0..30 {
        step(&mut app, 16);
    }

    assert_eq!(app.world().resource::<BeatClock>().ticks, 0);

    let world = app.world_mut();
    let mut heart_query = world.query_filtered::<&Transform, With<Heart>>();
    let tf = heart_query.single(world);
    assert_eq!(tf.scale, Vec3::splat(HEART_BASE_SCALE));
}

#[test]
fn opening_waits_a_full_second_before_going_live() {
    let mut app = scene_app();
    app.update();

    app.world_mut().resource_mut::<RevealState>().open();

    step(&mut app, 500);
    assert!(!app.world().resource::<RevealState>().is_live());
    assert_eq!(app.world().resource::<BeatClock>().ticks, 0);

    step(&mut app, 499);
    assert!(!app.world().resource::<RevealState>().is_live());

    step(&mut app, 2);
    assert!(app.world().resource::<RevealState>().is_live());

    step(&mut app, 16);
    assert!(app.world().resource::<BeatClock>().ticks > 0);
}

#[test]
fn animation_tracks_the_beat_clock_exactly() {
    let mut app = scene_app();
    app.world_mut().resource_mut::<RevealState>().skip_to_live();

    let frames = 200u64;
    for _ in 0..frames {
        step(&mut app, 16);
    }

    let clock = app.world().resource::<BeatClock>();
    assert_eq!(clock.ticks, frames);
    let t = clock.t;
    assert!((t - 0.01 * frames as f32).abs() < 1e-4);

    let world = app.world_mut();

    let mut heart_query = world.query_filtered::<(&Transform, &Spin), With<Heart>>();
    let (tf, spin) = heart_query.single(world);
    let expected_scale = HEART_BASE_SCALE * beat_envelope(t);
    assert!((tf.scale.x - expected_scale).abs() < 1e-4);
    assert_eq!(tf.scale.x, tf.scale.y);
    assert_eq!(tf.scale.y, tf.scale.z);
    assert!((spin.phase - 0.005 * frames as f32).abs() < 1e-4);

    let mut star_query = world.query_filtered::<&Spin, With<Starfield>>();
    let star_spin = star_query.single(world);
    assert!((star_spin.phase - 0.0005 * frames as f32).abs() < 1e-4);

    let mut word_query = world.query_filtered::<&Spin, With<WordRing>>();
    let word_spin = word_query.single(world);
    let expected = (-0.005f32 * frames as f32).rem_euclid(std::f32::consts::TAU);
    assert!((word_spin.phase - expected).abs() < 1e-3);
}
