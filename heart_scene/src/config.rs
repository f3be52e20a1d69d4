//! Env parsing, JSON settings file, and scene constants.

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// The word ring always carries exactly this many labels, one every 45°.
pub const WORD_COUNT: usize = 8;

const DEFAULT_WORDS: [&str; WORD_COUNT] = [
    "Te Amo",
    "Mi Vida",
    "Siempre Juntos",
    "Mi Luz",
    "Mi Universo",
    "Mi Todo",
    "Amor Eterno",
    "Mi Princesa",
];

const DEFAULT_FINAL_MESSAGE: &str = "Para ti, con todo mi corazón";

/// Everything about the scene a host may want to tune. Loadable from a JSON
/// file (`CORAZON_CONFIG`), with individual env overrides on top.
#[derive(Clone, Debug, Resource, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    pub words: Vec<String>,
    pub final_message: String,
    pub star_count: usize,
    pub star_extent: f32,
    pub word_radius: f32,
    pub ring_radius: f32,
    pub ring_tube_radius: f32,
    pub auto_rotate_speed: f32,
    pub seed: Option<u64>,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
            final_message: DEFAULT_FINAL_MESSAGE.to_string(),
            star_count: 2000,
            star_extent: 50.0,
            word_radius: 12.0,
            ring_radius: 12.0,
            ring_tube_radius: 0.1,
            auto_rotate_speed: 0.5,
            seed: None,
        }
    }
}

impl SceneSettings {
    /// The word list cycled or truncated to exactly [`WORD_COUNT`] entries,
    /// so the 45° spacing always holds. An empty list falls back to the
    /// default words.
    pub fn greeting_words(&self) -> Vec<String> {
        let base: Vec<String> = if self.words.is_empty() {
            DEFAULT_WORDS.iter().map(|w| w.to_string()).collect()
        } else {
            self.words.clone()
        };
        (0..WORD_COUNT).map(|i| base[i % base.len()].clone()).collect()
    }

    /// Settings with the word list pinned to its final 8-entry form.
    pub fn normalized(mut self) -> Self {
        self.words = self.greeting_words();
        self
    }
}

/// Settings from the environment: a JSON file via `CORAZON_CONFIG` when set,
/// then `CORAZON_WORDS` / `CORAZON_SEED` overrides on top.
pub fn scene_settings() -> SceneSettings {
    let mut settings = match std::env::var("CORAZON_CONFIG") {
        Ok(path) => load_settings(Path::new(&path)),
        Err(_) => SceneSettings::default(),
    };

    if let Ok(raw) = std::env::var("CORAZON_WORDS") {
        let words: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(String::from)
            .collect();
        if words.is_empty() {
            eprintln!("corazon: CORAZON_WORDS has no usable entries, keeping current words");
        } else {
            settings.words = words;
        }
    }

    if let Ok(raw) = std::env::var("CORAZON_SEED") {
        match raw.parse::<u64>() {
            Ok(seed) => settings.seed = Some(seed),
            Err(_) => eprintln!("corazon: invalid CORAZON_SEED {raw:?}, using entropy"),
        }
    }

    settings
}

/// Reads a JSON settings file. A missing or malformed file is fatal: the
/// scene has no degraded mode worth starting into.
pub fn load_settings(path: &Path) -> SceneSettings {
    let json = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("corazon: failed to read settings {}: {e}", path.display()));
    serde_json::from_str(&json)
        .unwrap_or_else(|e| panic!("corazon: failed to parse settings {}: {e}", path.display()))
}

/// `CORAZON_STATS=1` (or `true`) shows the corner stats readout.
pub fn stats_enabled() -> bool {
    matches!(
        std::env::var("CORAZON_STATS").as_deref(),
        Ok("1") | Ok("true")
    )
}

/// `CORAZON_SCREENSHOT=<path>` captures a frame to the path and exits.
pub fn screenshot_path() -> Option<PathBuf> {
    std::env::var("CORAZON_SCREENSHOT").ok().map(PathBuf::from)
}
