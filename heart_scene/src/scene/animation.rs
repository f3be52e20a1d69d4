//! The per-frame pulse and spin, all driven by one logical clock.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::ui::scene_is_live;

/// Clock increment per update tick. The clock counts frames, not wall time,
/// so playback speed follows the display refresh rate.
pub const BEAT_TICK: f32 = 0.01;

/// The single driver of every per-frame mutation.
#[derive(Resource, Default)]
pub struct BeatClock {
    pub t: f32,
    pub ticks: u64,
}

impl BeatClock {
    pub fn advance(&mut self) {
        self.t += BEAT_TICK;
        self.ticks += 1;
    }
}

/// Heartbeat envelope: two superposed sinusoids approximating the
/// double-pulse of a beat.
pub fn beat_envelope(t: f32) -> f32 {
    1.0 + 0.05 * (5.0 * t).sin() + 0.05 * (10.0 * t).sin()
}

/// Uniform pulsing scale around a base scale.
#[derive(Component)]
pub struct HeartPulse {
    pub base_scale: f32,
}

/// Rigid yaw at a fixed rate per tick, composed with a fixed orientation.
/// The phase stays wrapped in [0, 2π).
#[derive(Component)]
pub struct Spin {
    pub rate: f32,
    pub phase: f32,
    pub pre: Quat,
    pub post: Quat,
}

impl Spin {
    pub fn about_y(rate: f32) -> Self {
        Self {
            rate,
            phase: 0.0,
            pre: Quat::IDENTITY,
            post: Quat::IDENTITY,
        }
    }

    /// Fixed orientation applied outside the yaw (world side).
    pub fn with_pre(mut self, pre: Quat) -> Self {
        self.pre = pre;
        self
    }

    /// Fixed orientation applied inside the yaw (object side).
    pub fn with_post(mut self, post: Quat) -> Self {
        self.post = post;
        self
    }

    pub fn rotation(&self) -> Quat {
        self.pre * Quat::from_rotation_y(self.phase) * self.post
    }
}

pub fn animation_plugin(app: &mut App) {
    app.init_resource::<BeatClock>().add_systems(
        Update,
        (advance_clock_system, pulse_system, spin_system)
            .chain()
            .run_if(scene_is_live),
    );
}

fn advance_clock_system(mut clock: ResMut<BeatClock>) {
    clock.advance();
}

fn pulse_system(clock: Res<BeatClock>, mut hearts: Query<(&HeartPulse, &mut Transform)>) {
    let beat = beat_envelope(clock.t);
    for (pulse, mut tf) in &mut hearts {
        tf.scale = Vec3::splat(pulse.base_scale * beat);
    }
}

fn spin_system(mut spinners: Query<(&mut Spin, &mut Transform)>) {
    for (mut spin, mut tf) in &mut spinners {
        spin.phase = (spin.phase + spin.rate).rem_euclid(TAU);
        tf.rotation = spin.rotation();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::RevealState;

    fn live_app() -> App {
        let mut app = App::new();
        let mut reveal = RevealState::default();
        reveal.skip_to_live();
        app.insert_resource(reveal);
        app.add_plugins(animation_plugin);
        app
    }

    #[test]
    fn envelope_superposes_both_sinusoids() {
        let t: f32 = 0.37;
        let expected = 1.0 + 0.05 * (5.0 * t).sin() + 0.05 * (10.0 * t).sin();
        assert!((beat_envelope(t) - expected).abs() < 1e-6);
        assert!((beat_envelope(0.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn clock_counts_ticks_of_a_hundredth() {
        let mut app = live_app();
        for _ in 0..25 {
            app.update();
        }

        let clock = app.world().resource::<BeatClock>();
        assert_eq!(clock.ticks, 25);
        assert!((clock.t - 0.25).abs() < 1e-5);
    }

    #[test]
    fn pulse_scales_all_axes_identically() {
        let mut app = live_app();
        let entity = app
            .world_mut()
            .spawn((HeartPulse { base_scale: 0.5 }, Transform::default()))
            .id();

        for _ in 0..10 {
            app.update();
        }

        let t = app.world().resource::<BeatClock>().t;
        let scale = app.world().get::<Transform>(entity).unwrap().scale;
        let expected = 0.5 * beat_envelope(t);
        assert!((scale.x - expected).abs() < 1e-5);
        assert_eq!(scale.x, scale.y);
        assert_eq!(scale.y, scale.z);
    }

    #[test]
    fn spin_accumulates_rate_per_tick() {
        let mut app = live_app();
        let entity = app
            .world_mut()
            .spawn((Spin::about_y(0.005), Transform::default()))
            .id();

        for _ in 0..100 {
            app.update();
        }

        let spin = app.world().get::<Spin>(entity).unwrap();
        assert!((spin.phase - 0.5).abs() < 1e-5);

        let rotation = app.world().get::<Transform>(entity).unwrap().rotation;
        let expected = Quat::from_rotation_y(0.5);
        assert!(rotation.dot(expected).abs() > 1.0 - 1e-5);
    }

    #[test]
    fn negative_rates_stay_wrapped() {
        let mut app = live_app();
        let entity = app
            .world_mut()
            .spawn((Spin::about_y(-0.005), Transform::default()))
            .id();

        for _ in 0..3 {
            app.update();
        }

        let spin = app.world().get::<Spin>(entity).unwrap();
        assert!(spin.phase >= 0.0 && spin.phase < TAU);
        assert!((spin.phase - (TAU - 0.015)).abs() < 1e-4);
    }

    #[test]
    fn spin_composes_fixed_tilts_around_the_yaw() {
        let pre = Quat::from_rotation_x(0.3);
        let post = Quat::from_rotation_z(0.7);
        let spin = Spin {
            rate: 0.0,
            phase: 1.1,
            pre,
            post,
        };

        let expected = pre * Quat::from_rotation_y(1.1) * post;
        assert!(spin.rotation().dot(expected).abs() > 1.0 - 1e-6);
    }

    #[test]
    fn nothing_advances_before_the_reveal() {
        let mut app = App::new();
        app.insert_resource(RevealState::default());
        app.add_plugins(animation_plugin);
        let entity = app
            .world_mut()
            .spawn((Spin::about_y(0.005), Transform::default()))
            .id();

        for _ in 0..10 {
            app.update();
        }

        assert_eq!(app.world().resource::<BeatClock>().ticks, 0);
        assert_eq!(app.world().get::<Spin>(entity).unwrap().phase, 0.0);
    }
}
