//! Capture-a-still-and-exit mode for scripted runs.
//!
//! Skips the reveal, waits a few frames for the scene to settle, writes one
//! frame to disk, then exits.

use std::path::PathBuf;

use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};

use crate::ui::RevealState;

#[derive(Resource)]
pub struct StillCapture {
    pub path: PathBuf,
    pub frames_remaining: u32,
    captured: bool,
}

impl StillCapture {
    pub fn new(path: PathBuf, delay_frames: u32) -> Self {
        Self {
            path,
            frames_remaining: delay_frames,
            captured: false,
        }
    }
}

pub fn still_capture_plugin(app: &mut App) {
    app.add_systems(Startup, skip_reveal_for_capture)
        .add_systems(Update, still_capture_system);
}

fn skip_reveal_for_capture(mut reveal: ResMut<RevealState>) {
    reveal.skip_to_live();
}

fn still_capture_system(
    mut commands: Commands,
    mut capture: ResMut<StillCapture>,
    mut exit: EventWriter<AppExit>,
) {
    if capture.captured {
        exit.send(AppExit::Success);
        return;
    }

    if capture.frames_remaining > 0 {
        capture.frames_remaining -= 1;
        return;
    }

    info!("corazon: capturing still to {}", capture.path.display());
    let path = capture.path.clone();
    commands
        .spawn(Screenshot::primary_window())
        .observe(save_to_disk(path));
    capture.captured = true;
}
