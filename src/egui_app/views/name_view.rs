use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::BG_DARK);

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let top_space = (available_rect.height() - 220.0).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(
                egui::RichText::new("🧵 Threadify")
                    .size(32.0)
                    .strong()
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(12.0);
            ui.label(
                egui::RichText::new("What should we call you?")
                    .size(18.0)
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(16.0);

            if let Some(ref error) = state.name_error {
                ui.label(egui::RichText::new(error).color(colors::ERROR));
                ui.add_space(8.0);
            }

            let response = ui.add_sized(
                [280.0, 28.0],
                egui::TextEdit::singleline(&mut state.name_input).hint_text("Your name"),
            );
            let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
            if response.lost_focus() && enter_pressed {
                state.submit_name();
            }

            ui.add_space(16.0);
            let button = egui::Button::new(egui::RichText::new("Continue").color(colors::TEXT_LIGHT))
                .fill(colors::ACCENT);
            if ui.add_sized([120.0, 32.0], button).clicked() {
                state.submit_name();
            }
        });
    });
}
