//! Theme Module
//!
//! Color constants and frame builders for the board UI.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::post_frame(true).show(ui, |ui| {
//!     ui.colored_label(colors::TEXT_DARK, "Hello");
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
