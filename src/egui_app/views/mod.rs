use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::threads::SubscriptionStatus;

pub mod board_view;
pub mod name_view;
pub mod thread_item;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("🧵 Threadify").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut change_name = false;

                    if let Some(session) = state.session.as_ref() {
                        ui.add_space(16.0);
                        if ui.button("Change name").clicked() {
                            change_name = true;
                        }
                        ui.colored_label(colors::TEXT_LIGHT, format!("@{}", session.user_name()));
                        ui.add_space(16.0);

                        let (color, label) = status_label(session.status());
                        ui.colored_label(color, label);
                    }

                    if change_name {
                        state.change_name();
                    }
                });
            });
        });
}

fn status_label(status: &SubscriptionStatus) -> (egui::Color32, String) {
    match status {
        SubscriptionStatus::Connected => (colors::STATUS_ONLINE, "🟢 Live".to_string()),
        SubscriptionStatus::Connecting => (colors::WARNING, "🔄 Connecting".to_string()),
        SubscriptionStatus::Retrying => (colors::WARNING, "🔄 Reconnecting".to_string()),
        SubscriptionStatus::Error(e) => (colors::ERROR, format!("🔴 {}", e)),
        SubscriptionStatus::Disconnected => (colors::STATUS_OFFLINE, "⚪ Offline".to_string()),
    }
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(0));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.session.as_mut() {
            Some(session) => board_view::render(ui, session),
            None => name_view::render(ui, state),
        });
}
