//! One-shot reveal lifecycle: curtain, timed transition, live scene.
//!
//! `Curtain → (open) → Revealing → Live`, never backward. The scene is
//! fully built while the curtain is up but nothing animates until `Live`.

use std::time::Duration;

use bevy::prelude::*;

/// How long the curtain takes to clear after the open click.
pub const REVEAL_SECONDS: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Curtain,
    Revealing,
    Live,
}

#[derive(Resource)]
pub struct RevealState {
    phase: RevealPhase,
    timer: Timer,
}

impl Default for RevealState {
    fn default() -> Self {
        Self {
            phase: RevealPhase::Curtain,
            timer: Timer::from_seconds(REVEAL_SECONDS, TimerMode::Once),
        }
    }
}

impl RevealState {
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_live(&self) -> bool {
        self.phase == RevealPhase::Live
    }

    /// The open click. Only meaningful while the curtain is up; the
    /// transition cannot be re-armed.
    pub fn open(&mut self) {
        if self.phase == RevealPhase::Curtain {
            self.phase = RevealPhase::Revealing;
        }
    }

    /// Jumps straight to the live scene (capture mode).
    pub fn skip_to_live(&mut self) {
        self.phase = RevealPhase::Live;
    }

    pub fn tick(&mut self, delta: Duration) {
        if self.phase != RevealPhase::Revealing {
            return;
        }
        self.timer.tick(delta);
        if self.timer.finished() {
            self.phase = RevealPhase::Live;
        }
    }

    /// Curtain opacity: opaque while closed, fading through the reveal,
    /// gone once live.
    pub fn curtain_opacity(&self) -> f32 {
        match self.phase {
            RevealPhase::Curtain => 1.0,
            RevealPhase::Revealing => 1.0 - self.timer.fraction(),
            RevealPhase::Live => 0.0,
        }
    }
}

/// Run condition for everything that only moves once the scene is revealed.
pub fn scene_is_live(reveal: Res<RevealState>) -> bool {
    reveal.is_live()
}

pub fn reveal_transition_system(time: Res<Time>, mut reveal: ResMut<RevealState>) {
    reveal.tick(time.delta());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_behind_the_curtain() {
        let reveal = RevealState::default();
        assert_eq!(reveal.phase(), RevealPhase::Curtain);
        assert!(!reveal.is_live());
        assert_eq!(reveal.curtain_opacity(), 1.0);
    }

    #[test]
    fn ticking_the_curtain_does_nothing() {
        let mut reveal = RevealState::default();
        reveal.tick(Duration::from_secs(10));
        assert_eq!(reveal.phase(), RevealPhase::Curtain);
    }

    #[test]
    fn open_then_a_full_second_goes_live() {
        let mut reveal = RevealState::default();
        reveal.open();
        assert_eq!(reveal.phase(), RevealPhase::Revealing);

        reveal.tick(Duration::from_millis(999));
        assert_eq!(reveal.phase(), RevealPhase::Revealing);

        reveal.tick(Duration::from_millis(2));
        assert_eq!(reveal.phase(), RevealPhase::Live);
    }

    #[test]
    fn curtain_fades_monotonically_through_the_reveal() {
        let mut reveal = RevealState::default();
        reveal.open();

        let mut last = reveal.curtain_opacity();
        for _ in 0..10 {
            reveal.tick(Duration::from_millis(100));
            let opacity = reveal.curtain_opacity();
            assert!(opacity <= last);
            last = opacity;
        }
        assert_eq!(reveal.curtain_opacity(), 0.0);
    }

    #[test]
    fn no_transition_runs_backward() {
        let mut reveal = RevealState::default();
        reveal.open();
        reveal.tick(Duration::from_secs(2));
        assert!(reveal.is_live());

        reveal.open();
        reveal.tick(Duration::from_secs(2));
        assert!(reveal.is_live());
    }

    #[test]
    fn skip_to_live_is_immediate() {
        let mut reveal = RevealState::default();
        reveal.skip_to_live();
        assert!(reveal.is_live());
        assert_eq!(reveal.curtain_opacity(), 0.0);
    }
}
