//! Theme Styling Functions
//!
//! Helpers that apply the board colors consistently.

use eframe::egui::{self, CornerRadius, Stroke};

use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.window_fill = colors::BOARD_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::CARD_BORDER);
    style.visuals.panel_fill = colors::BG_DARK;

    style.visuals.widgets.inactive.bg_fill = colors::INPUT_BG;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_DARK);
    style.visuals.widgets.hovered.bg_fill = colors::TAG_BG;
    style.visuals.widgets.active.bg_fill = colors::ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.extreme_bg_color = colors::INPUT_BG;
    style.visuals.override_text_color = None;

    ctx.set_style(style);
}

/// Create a frame style for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame style for the board area
pub fn board_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::BOARD_BG)
        .inner_margin(egui::Margin::symmetric(16, 12))
}

/// Create a frame style for the composer
pub fn composer_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::INPUT_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::same(12))
}

/// Create a frame style for a post card
pub fn post_frame(is_root: bool) -> egui::Frame {
    egui::Frame::new()
        .fill(if is_root { colors::CARD_ROOT } else { colors::CARD_REPLY })
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(12, 8))
}
