//! Theme system for the rollcall TUI
//!
//! Two built-in themes: the purple default and one that follows the
//! terminal's own palette.

use ratatui::style::Color;

pub mod definitions;
mod registry;

use once_cell::sync::Lazy;
pub use registry::ThemeRegistry;

/// Global theme registry with all built-in themes
pub static THEME_REGISTRY: Lazy<ThemeRegistry> = Lazy::new(ThemeRegistry::new);

/// A complete theme definition
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub display_name: String,

    // Core colors
    pub bg_color: Color,
    pub panel_bg_color: Color,
    pub border_color: Color,
    pub title_color: Color,
    pub accent_color: Color,
    pub text_color: Color,
    pub success_color: Color,
    pub dim_color: Color,

    // Special colors
    pub warning_color: Color,
    pub error_color: Color,

    // Input & Form Colors
    pub input_placeholder_color: Color,
    pub input_border_color: Color,

    // Participant badges
    pub badge_bg_color: Color,
    pub badge_fg_color: Color,
    pub name_color: Color,

    // Animation & Effects
    pub animation_color: Color,
    pub highlight_color: Color,
}
