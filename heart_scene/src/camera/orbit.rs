//! Damped orbit camera circling the scene origin.
//!
//! Mouse drag steers target yaw/pitch, the wheel zooms, and an idle drift
//! keeps the scene slowly turning. Current angles ease toward the targets
//! a fixed fraction per frame.

use std::f32::consts::{FRAC_PI_2, TAU};

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

use crate::config::SceneSettings;
use crate::ui::scene_is_live;

const ROTATE_SENSITIVITY: f32 = 0.005;
const ZOOM_SENSITIVITY: f32 = 0.05;
const DAMPING: f32 = 0.05;
const MIN_DISTANCE: f32 = 5.0;
const MAX_DISTANCE: f32 = 100.0;
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.05;

#[derive(Component)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub target_yaw: f32,
    pub target_pitch: f32,
    pub target_distance: f32,
    /// Idle drift: speed 1 is one full turn per 3600 frames.
    pub auto_rotate_speed: f32,
}

impl OrbitCamera {
    pub fn new(distance: f32, auto_rotate_speed: f32) -> Self {
        Self {
            focus: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            distance,
            target_yaw: 0.0,
            target_pitch: 0.0,
            target_distance: distance,
            auto_rotate_speed,
        }
    }

    fn drift_per_frame(&self) -> f32 {
        TAU / 3600.0 * self.auto_rotate_speed
    }

    fn position(&self) -> Vec3 {
        let offset = Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        );
        self.focus + offset * self.distance
    }
}

pub fn orbit_camera_plugin(app: &mut App) {
    app.add_systems(PostStartup, attach_orbit_camera).add_systems(
        Update,
        (orbit_input_system, orbit_update_system)
            .chain()
            .run_if(scene_is_live),
    );
}

/// Hangs the controller off whatever camera the scene set up.
fn attach_orbit_camera(
    mut commands: Commands,
    settings: Res<SceneSettings>,
    cameras: Query<(Entity, &Transform), With<Camera3d>>,
) {
    let Ok((entity, tf)) = cameras.get_single() else {
        warn!("corazon: no camera to orbit");
        return;
    };
    let distance = tf.translation.distance(Vec3::ZERO).max(MIN_DISTANCE);
    commands
        .entity(entity)
        .insert(OrbitCamera::new(distance, settings.auto_rotate_speed));
}

fn orbit_input_system(
    mouse: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    mut wheel: EventReader<MouseWheel>,
    mut cameras: Query<&mut OrbitCamera>,
) {
    let Ok(mut orbit) = cameras.get_single_mut() else {
        motion.clear();
        wheel.clear();
        return;
    };

    if mouse.pressed(MouseButton::Left) {
        for event in motion.read() {
            orbit.target_yaw -= event.delta.x * ROTATE_SENSITIVITY;
            orbit.target_pitch = (orbit.target_pitch + event.delta.y * ROTATE_SENSITIVITY)
                .clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
    } else {
        motion.clear();
    }

    for event in wheel.read() {
        orbit.target_distance = (orbit.target_distance * (1.0 - event.y * ZOOM_SENSITIVITY))
            .clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

fn orbit_update_system(mut cameras: Query<(&mut OrbitCamera, &mut Transform)>) {
    for (mut orbit, mut tf) in &mut cameras {
        orbit.target_yaw += orbit.drift_per_frame();

        orbit.yaw += (orbit.target_yaw - orbit.yaw) * DAMPING;
        orbit.pitch += (orbit.target_pitch - orbit.pitch) * DAMPING;
        orbit.distance += (orbit.target_distance - orbit.distance) * DAMPING;

        let focus = orbit.focus;
        tf.translation = orbit.position();
        tf.look_at(focus, Vec3::Y);
    }
}
