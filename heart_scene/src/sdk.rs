//! SDK entry points and builder for composing the greeting-scene app.

use std::path::PathBuf;

use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::camera::orbit_camera_plugin;
use crate::config::SceneSettings;
use crate::scene::{
    animation_plugin, billboard_words_system, setup_scene, spawn_heart, spawn_ring,
    spawn_starfield, spawn_word_ring, still_capture_plugin, StillCapture,
};
use crate::ui::{reveal_plugin, stats_plugin};

const DEFAULT_CLEAR: Color = Color::srgb(0.02, 0.02, 0.02);

/// Builder for constructing a Corazón app with customizable pieces.
pub struct GreetingSceneBuilder {
    settings: SceneSettings,
    window_title: String,
    window_resolution: (f32, f32),
    clear_color: Color,
    enable_orbit_camera: bool,
    enable_ring: bool,
    enable_starfield: bool,
    enable_word_ring: bool,
    enable_stats: bool,
    still_capture: Option<(PathBuf, u32)>,
}

impl Default for GreetingSceneBuilder {
    fn default() -> Self {
        Self {
            settings: SceneSettings::default(),
            window_title: "Corazón".to_string(),
            window_resolution: (1280.0, 720.0),
            clear_color: DEFAULT_CLEAR,
            enable_orbit_camera: true,
            enable_ring: true,
            enable_starfield: true,
            enable_word_ring: true,
            enable_stats: false,
            still_capture: None,
        }
    }
}

impl GreetingSceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use explicit scene settings (words, counts, radii, seed).
    pub fn settings(mut self, settings: SceneSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Replace just the word list.
    pub fn words(mut self, words: Vec<String>) -> Self {
        self.settings.words = words;
        self
    }

    pub fn final_message(mut self, message: impl Into<String>) -> Self {
        self.settings.final_message = message.into();
        self
    }

    pub fn window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn window_resolution(mut self, width: f32, height: f32) -> Self {
        self.window_resolution = (width, height);
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn disable_orbit_camera(mut self) -> Self {
        self.enable_orbit_camera = false;
        self
    }

    pub fn disable_ring(mut self) -> Self {
        self.enable_ring = false;
        self
    }

    pub fn disable_starfield(mut self) -> Self {
        self.enable_starfield = false;
        self
    }

    pub fn disable_word_ring(mut self) -> Self {
        self.enable_word_ring = false;
        self
    }

    pub fn enable_stats(mut self) -> Self {
        self.enable_stats = true;
        self
    }

    /// Capture one frame to `path` after `delay_frames` and exit.
    pub fn capture_still(mut self, path: PathBuf, delay_frames: u32) -> Self {
        self.still_capture = Some((path, delay_frames));
        self
    }

    /// Build the Bevy app with the selected configuration.
    pub fn build(self) -> App {
        let settings = self.settings.normalized();

        let mut app = App::new();
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: self.window_title,
                resolution: self.window_resolution.into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(self.clear_color))
        .insert_resource(settings)
        .add_plugins((reveal_plugin, animation_plugin))
        .add_systems(Startup, (setup_scene, spawn_heart))
        .add_systems(Update, (billboard_words_system, log_window_resizes));

        if self.enable_ring {
            app.add_systems(Startup, spawn_ring);
        }
        if self.enable_starfield {
            app.add_systems(Startup, spawn_starfield);
        }
        if self.enable_word_ring {
            app.add_systems(Startup, spawn_word_ring);
        }
        if self.enable_orbit_camera {
            app.add_plugins(orbit_camera_plugin);
        }
        if self.enable_stats {
            app.add_plugins(stats_plugin);
        }
        if let Some((path, delay_frames)) = self.still_capture {
            app.insert_resource(StillCapture::new(path, delay_frames));
            app.add_plugins(still_capture_plugin);
        }

        app
    }
}

/// The aspect-ratio and surface updates on resize are owned by the window
/// and render plumbing; the scene only notes the event.
fn log_window_resizes(mut events: EventReader<WindowResized>) {
    for event in events.read() {
        debug!("corazon: viewport resized to {}x{}", event.width, event.height);
    }
}
