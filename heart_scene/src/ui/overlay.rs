//! The curtain overlay and the final message, drawn with egui.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};

use crate::config::SceneSettings;
use crate::scene::BeatClock;
use crate::ui::reveal::{reveal_transition_system, RevealPhase, RevealState};

const CURTAIN_RGB: (u8, u8, u8) = (5, 5, 8);

pub fn reveal_plugin(app: &mut App) {
    app.add_plugins(EguiPlugin)
        .init_resource::<RevealState>()
        .add_systems(Update, (overlay_ui_system, reveal_transition_system));
}

fn overlay_ui_system(
    mut contexts: EguiContexts,
    mut reveal: ResMut<RevealState>,
    clock: Res<BeatClock>,
    settings: Res<SceneSettings>,
) {
    let ctx = contexts.ctx_mut();
    match reveal.phase() {
        RevealPhase::Curtain => draw_curtain(ctx, &mut reveal),
        RevealPhase::Revealing => draw_fading_curtain(ctx, reveal.curtain_opacity()),
        RevealPhase::Live => draw_final_message(ctx, &settings.final_message, clock.t),
    }
}

fn draw_curtain(ctx: &mut egui::Context, reveal: &mut RevealState) {
    let (r, g, b) = CURTAIN_RGB;
    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(egui::Color32::from_rgb(r, g, b)))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.38);
                ui.label(
                    egui::RichText::new("Tengo algo para ti…")
                        .size(30.0)
                        .color(egui::Color32::from_rgb(255, 120, 160)),
                );
                ui.add_space(16.0);
                let button = egui::Button::new(
                    egui::RichText::new("Abrir").size(20.0).color(egui::Color32::WHITE),
                )
                .fill(egui::Color32::from_rgb(180, 30, 70))
                .corner_radius(egui::CornerRadius::same(8));
                if ui.add(button).clicked() {
                    info!("corazon: opening");
                    reveal.open();
                }
            });
        });
}

fn draw_fading_curtain(ctx: &mut egui::Context, opacity: f32) {
    let (r, g, b) = CURTAIN_RGB;
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0) as u8;
    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(egui::Color32::from_rgba_unmultiplied(r, g, b, alpha)))
        .show(ctx, |_ui| {});
}

/// The final message eases in over the first seconds of the beat clock and
/// then stays.
fn draw_final_message(ctx: &mut egui::Context, message: &str, t: f32) {
    let alpha = ((t * 2.0).min(1.0) * 255.0) as u8;
    egui::Area::new(egui::Id::new("final_message"))
        .anchor(egui::Align2::CENTER_TOP, [0.0, 48.0])
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(message)
                    .size(34.0)
                    .color(egui::Color32::from_rgba_unmultiplied(255, 170, 200, alpha)),
            );
        });
}
