//! Color Constants for the Board Theme
//!
//! Warm brown/tan scheme: dark chrome around light post cards.

use eframe::egui::Color32;

/// Window background - Deep brown
pub const BG_DARK: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Top bar background - Dark brown
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x3E, 0x2A, 0x24);

/// Board background - Off-white
pub const BOARD_BG: Color32 = Color32::from_rgb(0xF7, 0xF2, 0xEC);

/// Root post card - Light tan
pub const CARD_ROOT: Color32 = Color32::from_rgb(0xEA, 0xDB, 0xC8);

/// Reply card - Paler tan
pub const CARD_REPLY: Color32 = Color32::from_rgb(0xF1, 0xE7, 0xDA);

/// Card border - Muted brown
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xC7, 0xB2, 0x9A);

/// Reply indentation guide
pub const THREAD_LINE: Color32 = Color32::from_rgb(0xC3, 0xA9, 0x90);

/// Composer background - Light tan
pub const INPUT_BG: Color32 = Color32::from_rgb(0xE6, 0xD7, 0xC7);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF0, 0xE0, 0xD6);

/// Text on light backgrounds
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Secondary text (author, timestamps)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8D, 0x6E, 0x63);

/// Accent for primary buttons
pub const ACCENT: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);

/// Tag chip background
pub const TAG_BG: Color32 = Color32::from_rgb(0xD8, 0xC0, 0xA8);

/// Online status indicator - Green
pub const STATUS_ONLINE: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Offline status indicator - Gray
pub const STATUS_OFFLINE: Color32 = Color32::from_rgb(0x9E, 0x9E, 0x9E);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Warning color - Orange
pub const WARNING: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);
