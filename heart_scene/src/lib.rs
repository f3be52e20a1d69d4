//! Corazón — an animated 3D greeting scene.
//!
//! A beating extruded heart, a counter-rotating ring of words, a thin halo,
//! and a slow starfield, revealed behind a one-shot curtain and circled by
//! a damped orbit camera. Library root: scene, camera, UI, config, and the
//! SDK builder.

pub mod camera;
pub mod config;
mod scene;
mod ui;

pub mod prelude;
pub mod sdk;

pub use scene::{
    animation_plugin, beat_envelope, billboard_words_system, build_heart_mesh, build_star_mesh,
    setup_scene, spawn_heart, spawn_ring, spawn_starfield, spawn_word_ring, star_positions,
    still_capture_plugin, BeatClock, ExtrudeSettings, Heart, HeartPulse, Ring, Spin, Starfield,
    StillCapture, WordLabel, WordRing, BEAT_TICK, HEART_BASE_SCALE,
};
pub use ui::{
    reveal_plugin, reveal_transition_system, scene_is_live, stats_plugin, RevealPhase,
    RevealState, REVEAL_SECONDS,
};
