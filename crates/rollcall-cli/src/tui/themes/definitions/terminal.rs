use super::super::Theme;
use ratatui::style::Color;

/// Terminal theme - uses native terminal colors (ANSI 0-15)
/// This theme inherits your terminal's colorscheme.
///
/// ANSI color mapping:
/// 0: Black, 1: Red, 2: Green, 3: Yellow, 4: Blue, 5: Magenta, 6: Cyan, 7: White
/// 8-15: Bright variants of the above
pub fn terminal() -> Theme {
    let red = Color::Indexed(1);
    let green = Color::Indexed(2);
    let yellow = Color::Indexed(3);
    let magenta = Color::Indexed(5);
    let white = Color::Indexed(7);
    let bright_black = Color::Indexed(8); // Gray
    let bright_magenta = Color::Indexed(13);
    let bright_cyan = Color::Indexed(14);
    let bright_white = Color::Indexed(15);

    // Reset = terminal's default background
    let bg = Color::Reset;

    Theme {
        name: "terminal".to_string(),
        display_name: "Terminal".to_string(),

        bg_color: bg,
        panel_bg_color: bg,
        border_color: bright_black,
        title_color: bright_cyan,
        accent_color: bright_magenta,
        text_color: white,
        success_color: green,
        dim_color: bright_black,

        warning_color: yellow,
        error_color: red,

        input_placeholder_color: bright_black,
        input_border_color: bright_black,

        badge_bg_color: magenta,
        badge_fg_color: bright_white,
        name_color: white,

        animation_color: bright_cyan,
        highlight_color: yellow,
    }
}
