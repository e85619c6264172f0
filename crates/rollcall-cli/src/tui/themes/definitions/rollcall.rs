use super::super::Theme;
use ratatui::style::Color;

/// Default theme - purple to indigo, like a headset launch screen
pub fn rollcall() -> Theme {
    Theme {
        name: "rollcall".to_string(),
        display_name: "Rollcall Purple".to_string(),
        // Core colors
        bg_color: Color::Rgb(30, 27, 75),        // Deep indigo background
        panel_bg_color: Color::Rgb(245, 243, 255), // Near-white card
        border_color: Color::Rgb(139, 92, 246),  // Violet border
        title_color: Color::Rgb(91, 33, 182),    // Dark purple headings
        accent_color: Color::Rgb(124, 58, 237),  // Purple accent
        text_color: Color::Rgb(46, 16, 101),     // Purple-black text
        success_color: Color::Rgb(22, 163, 74),  // Green
        dim_color: Color::Rgb(148, 140, 180),    // Muted lavender
        // Special colors
        warning_color: Color::Rgb(217, 119, 6), // Amber
        error_color: Color::Rgb(220, 38, 38),   // Red for errors
        // Input & Form Colors
        input_placeholder_color: Color::Rgb(160, 160, 185),
        input_border_color: Color::Rgb(167, 139, 250),
        // Participant badges
        badge_bg_color: Color::Rgb(124, 58, 237), // Purple circle
        badge_fg_color: Color::Rgb(255, 255, 255),
        name_color: Color::Rgb(76, 29, 149),
        // Animation & Effects
        animation_color: Color::Rgb(167, 139, 250), // Light violet pulse
        highlight_color: Color::Rgb(196, 181, 253),
    }
}
