//! The ring of greeting words orbiting the heart.

use std::f32::consts::{FRAC_PI_8, TAU};

use bevy::prelude::*;

use crate::config::{SceneSettings, WORD_COUNT};
use crate::scene::animation::Spin;

/// Marker for the rotating group that owns all the word labels.
#[derive(Component)]
pub struct WordRing;

/// Marker for one camera-facing word.
#[derive(Component)]
pub struct WordLabel;

pub const WORD_SPIN_RATE: f32 = -0.005;
pub const LABEL_FONT_SIZE: f32 = 60.0;

/// A full 512 px rasterized line spans 8 world units.
const LABEL_SCALE: f32 = 8.0 / 512.0;

/// The two fixed 22.5° tilts that pull the word circle out of the
/// horizontal plane.
const RING_TILT: f32 = FRAC_PI_8;

/// Spawns the tilted word ring: one label every 45° on a circle of the
/// configured radius, parented to a single rigid group.
pub fn spawn_word_ring(mut commands: Commands, settings: Res<SceneSettings>) {
    let words = settings.greeting_words();
    let radius = settings.word_radius;

    commands
        .spawn((
            WordRing,
            Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, RING_TILT, 0.0, RING_TILT)),
            Visibility::default(),
            Spin::about_y(WORD_SPIN_RATE)
                .with_pre(Quat::from_rotation_x(RING_TILT))
                .with_post(Quat::from_rotation_z(RING_TILT)),
        ))
        .with_children(|builder| {
            for (i, word) in words.iter().enumerate() {
                let angle = i as f32 / WORD_COUNT as f32 * TAU;
                builder.spawn((
                    WordLabel,
                    Text2d::new(word.clone()),
                    TextFont {
                        font_size: LABEL_FONT_SIZE,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    TextLayout::new_with_justify(JustifyText::Center),
                    Transform::from_xyz(angle.cos() * radius, 0.0, angle.sin() * radius)
                        .with_scale(Vec3::splat(LABEL_SCALE)),
                ));
            }
        });
}

/// Rotates every word to face the camera each frame. Skips the frame when
/// there is no camera to face.
pub fn billboard_words_system(
    camera_query: Query<&Transform, With<Camera3d>>,
    mut labels: Query<&mut Transform, (With<WordLabel>, Without<Camera3d>)>,
) {
    let Ok(cam_tf) = camera_query.get_single() else {
        return;
    };
    let cam_pos = cam_tf.translation;
    for mut tf in &mut labels {
        tf.look_at(cam_pos, Vec3::Y);
    }
}
