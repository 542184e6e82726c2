//! Thread board
//!
//! Composer on top, then every root thread with its replies.

use eframe::egui;

use crate::egui_app::theme::{colors, styles};
use crate::egui_app::threads::{ComposeTarget, ThreadsSession};
use crate::egui_app::views::thread_item;

pub fn render(ui: &mut egui::Ui, session: &mut ThreadsSession) {
    styles::board_frame().show(ui, |ui| {
        ui.set_min_size(ui.available_size());

        render_composer(ui, session);
        ui.add_space(12.0);
        render_load_state(ui, session);

        let tree = session.tree();
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if tree.is_empty() && !session.is_loading() {
                    ui.colored_label(colors::TEXT_SECONDARY, "No threads yet. Start one above.");
                }
                for (at, row) in tree.rows().iter().enumerate() {
                    if row.depth == 0 && at > 0 {
                        ui.add_space(10.0);
                    }
                    thread_item::render(ui, session, row);
                }
                if tree.orphan_count() > 0 {
                    ui.colored_label(
                        colors::TEXT_SECONDARY,
                        format!("{} reply(ies) waiting for their parent post", tree.orphan_count()),
                    );
                }
            });
    });
}

fn render_load_state(ui: &mut egui::Ui, session: &mut ThreadsSession) {
    if session.is_loading() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.colored_label(colors::TEXT_SECONDARY, "Loading threads...");
        });
    }

    let mut reload = false;
    if let Some(error) = session.fetch_error() {
        ui.horizontal(|ui| {
            ui.colored_label(colors::ERROR, format!("Could not load threads: {}", error));
            if ui.button("Reload").clicked() {
                reload = true;
            }
        });
    }
    if reload {
        session.request_snapshot();
    }
}

fn render_composer(ui: &mut egui::Ui, session: &mut ThreadsSession) {
    let submitting = session.is_submitting(ComposeTarget::Root);

    styles::composer_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.colored_label(colors::TEXT_DARK, egui::RichText::new("Start a thread").strong());
        ui.add_space(6.0);

        ui.add(
            egui::TextEdit::singleline(&mut session.composer.title)
                .hint_text("Title")
                .desired_width(f32::INFINITY),
        );
        ui.add(
            egui::TextEdit::multiline(&mut session.composer.text)
                .hint_text("What's on your mind?")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut session.composer.image_url)
                    .hint_text("Image URL (optional)")
                    .desired_width(ui.available_width() * 0.5),
            );
            ui.add(
                egui::TextEdit::singleline(&mut session.composer.tags)
                    .hint_text("Tags, comma separated")
                    .desired_width(ui.available_width()),
            );
        });

        ui.add_space(6.0);
        let mut submit = false;
        ui.horizontal(|ui| {
            let can_post = !submitting && !session.composer.text.trim().is_empty();
            let button = egui::Button::new(egui::RichText::new("Post").color(colors::TEXT_LIGHT))
                .fill(colors::ACCENT);
            if ui.add_enabled(can_post, button).clicked() {
                submit = true;
            }
            if submitting {
                ui.spinner();
            }

            let can_retry = session.can_retry(ComposeTarget::Root);
            if let Some(error) = session.composer_error() {
                ui.colored_label(colors::ERROR, error);
                if can_retry && ui.add_enabled(!submitting, egui::Button::new("Retry")).clicked() {
                    submit = true;
                }
            }
        });

        if submit {
            session.submit_root();
        }
    });
}
