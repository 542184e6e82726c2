//! One row of the thread board: a post indented to its reply depth.

use eframe::egui;

use crate::egui_app::theme::{colors, styles};
use crate::egui_app::threads::tree::is_truncatable;
use crate::egui_app::threads::{display_text, ComposeTarget, ThreadRow, ThreadsSession};
use crate::shared::Post;

/// Horizontal offset per reply level
const INDENT: f32 = 24.0;

/// Deeper levels keep the last offset so long chains stay on screen
const MAX_INDENT_LEVELS: usize = 10;

const MAX_IMAGE_WIDTH: f32 = 480.0;
const MAX_IMAGE_HEIGHT: f32 = 320.0;

pub fn render(ui: &mut egui::Ui, session: &mut ThreadsSession, row: &ThreadRow) {
    ui.horizontal(|ui| {
        if row.depth > 0 {
            let indent = row.depth.min(MAX_INDENT_LEVELS) as f32 * INDENT;
            let (rect, _) = ui.allocate_exact_size(egui::vec2(indent, 1.0), egui::Sense::hover());
            let x = rect.right() - INDENT / 2.0;
            ui.painter().vline(
                x,
                rect.top()..=rect.top() + 18.0,
                egui::Stroke::new(1.5, colors::THREAD_LINE),
            );
        }
        ui.vertical(|ui| {
            styles::post_frame(row.post.is_root()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                render_post(ui, session, &row.post);
            });
        });
    });
    ui.add_space(4.0);
}

fn render_post(ui: &mut egui::Ui, session: &mut ThreadsSession, post: &Post) {
    if let Some(title) = &post.title {
        ui.colored_label(colors::TEXT_DARK, egui::RichText::new(title).size(16.0).strong());
    }

    ui.horizontal(|ui| {
        ui.colored_label(colors::TEXT_SECONDARY, egui::RichText::new(post.author_display()).strong());
        ui.colored_label(
            colors::TEXT_SECONDARY,
            post.created_at.format("%Y-%m-%d %H:%M").to_string(),
        );
        for tag in &post.tags {
            egui::Frame::new()
                .fill(colors::TAG_BG)
                .corner_radius(egui::CornerRadius::same(4))
                .inner_margin(egui::Margin::symmetric(6, 1))
                .show(ui, |ui| {
                    ui.colored_label(colors::TEXT_DARK, format!("#{}", tag));
                });
        }
    });

    let expanded = session.is_expanded(&post.id);
    ui.colored_label(colors::TEXT_DARK, display_text(&post.text, expanded).as_ref());

    if let Some(image_url) = &post.image_url {
        ui.add(post_image(image_url));
    }

    ui.horizontal(|ui| {
        if is_truncatable(&post.text) {
            let label = if expanded { "Show Less" } else { "Show More" };
            if ui.small_button(label).clicked() {
                session.toggle_expanded(post.id);
            }
        }
        let label = if session.is_reply_open(&post.id) { "Cancel" } else { "Reply" };
        if ui.small_button(label).clicked() {
            session.toggle_reply(post.id);
        }
    });

    if session.is_reply_open(&post.id) {
        render_reply_box(ui, session, post);
    }
}

/// Inline image for a post, fetched by the installed egui loaders
fn post_image(url: &str) -> egui::Image<'_> {
    egui::Image::from_uri(url)
        .max_width(MAX_IMAGE_WIDTH)
        .max_height(MAX_IMAGE_HEIGHT)
        .corner_radius(egui::CornerRadius::same(4))
}

fn render_reply_box(ui: &mut egui::Ui, session: &mut ThreadsSession, post: &Post) {
    let target = ComposeTarget::Reply(post.id);
    let submitting = session.is_submitting(target);
    let mut submit = false;

    ui.add_space(4.0);
    let draft = session.reply_draft_mut(post.id);
    ui.add(
        egui::TextEdit::multiline(draft)
            .hint_text(format!("Reply to {}", post.author_display()))
            .desired_rows(2)
            .desired_width(f32::INFINITY),
    );
    let has_text = !draft.trim().is_empty();

    ui.horizontal(|ui| {
        let button = egui::Button::new(egui::RichText::new("Send").color(colors::TEXT_LIGHT))
            .fill(colors::ACCENT);
        if ui.add_enabled(has_text && !submitting, button).clicked() {
            submit = true;
        }
        if submitting {
            ui.spinner();
        }
        let can_retry = session.can_retry(target);
        if let Some(error) = session.reply_error(&post.id) {
            ui.colored_label(colors::ERROR, error);
            if can_retry && ui.add_enabled(!submitting, egui::Button::new("Retry")).clicked() {
                submit = true;
            }
        }
    });

    if submit {
        session.submit_reply(post.id);
    }
}
