//! Optional corner readout: beat clock and FPS.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::scene::BeatClock;
use crate::ui::reveal::{RevealPhase, RevealState};

pub fn stats_plugin(app: &mut App) {
    app.add_plugins(FrameTimeDiagnosticsPlugin)
        .add_systems(Update, stats_overlay_system);
}

fn stats_overlay_system(
    mut contexts: EguiContexts,
    clock: Res<BeatClock>,
    reveal: Res<RevealState>,
    diagnostics: Res<DiagnosticsStore>,
) {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|d| d.smoothed())
        .unwrap_or(0.0);

    let phase = match reveal.phase() {
        RevealPhase::Curtain => "curtain",
        RevealPhase::Revealing => "revealing",
        RevealPhase::Live => "live",
    };

    egui::Window::new("Corazón")
        .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(false)
        .frame(
            egui::Frame::default()
                .fill(egui::Color32::from_rgba_premultiplied(15, 15, 25, 210))
                .inner_margin(egui::Margin::same(12))
                .corner_radius(egui::CornerRadius::same(6)),
        )
        .show(contexts.ctx_mut(), |ui| {
            ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
            ui.visuals_mut().override_text_color = Some(egui::Color32::from_rgb(200, 220, 240));

            ui.label(format!("Phase {phase}"));
            ui.label(format!("Beat  {:.2}", clock.t));
            ui.label(format!("Ticks {}", clock.ticks));
            ui.label(format!("FPS   {fps:.0}"));
        });
}
