//! Corazón — animated greeting scene. Runs the heart_scene app.

use bevy::app::AppExit;
use heart_scene::config;
use heart_scene::prelude::*;

fn main() {
    let _ = dotenvy::dotenv();

    let mut builder = GreetingSceneBuilder::new().settings(config::scene_settings());
    if config::stats_enabled() {
        builder = builder.enable_stats();
    }
    if let Some(path) = config::screenshot_path() {
        builder = builder.capture_still(path, 120);
    }

    match builder.build().run() {
        AppExit::Success => {}
        AppExit::Error(code) => std::process::exit(code.get() as i32),
    }
}
