//! Spinner and pulse effects shown while a selection is animating

use palette::{Hsv, IntoColor, Srgb};
use ratatui::style::{Color, Modifier, Style};
use std::time::{Duration, Instant};

use crate::tui::themes::Theme;

/// Spinner frames for the trigger icon
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Icon shown on the trigger when idle
pub const SHUFFLE_ICON: char = '⇄';

/// Rotating glyph, advanced on wall time like the menu animations
#[derive(Debug, Clone)]
pub struct Spinner {
    frame: usize,
    interval: Duration,
    last_update: Instant,
}

impl Spinner {
    pub fn new(interval: Duration) -> Self {
        Self {
            frame: 0,
            interval,
            last_update: Instant::now(),
        }
    }

    /// Advance if enough time has passed
    pub fn update(&mut self) {
        if self.last_update.elapsed() >= self.interval {
            self.step();
            self.last_update = Instant::now();
        }
    }

    fn step(&mut self) {
        self.frame = (self.frame + 1) % SPINNER_FRAMES.len();
    }

    pub fn glyph(&self) -> char {
        SPINNER_FRAMES[self.frame]
    }

    pub fn reset(&mut self) {
        self.frame = 0;
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new(Duration::from_millis(120))
    }
}

/// Darken an RGB color by scaling its HSV value
fn dim_rgb(rgb: (u8, u8, u8), factor: f32) -> Color {
    let base = Srgb::new(
        rgb.0 as f32 / 255.0,
        rgb.1 as f32 / 255.0,
        rgb.2 as f32 / 255.0,
    );
    let mut hsv: Hsv = base.into_color();
    hsv.value = (hsv.value * factor).clamp(0.0, 1.0);
    let out: Srgb = hsv.into_color();

    Color::Rgb(
        (out.red * 255.0) as u8,
        (out.green * 255.0) as u8,
        (out.blue * 255.0) as u8,
    )
}

/// Style for participant names
///
/// While animating, names alternate between the theme's name color and a
/// dimmed variant on every shuffle tick. Palette colors that are not true
/// color fall back to the DIM modifier.
pub fn pulse_style(theme: &Theme, animating: bool, pulse: bool) -> Style {
    let base = Style::default().fg(theme.name_color);
    if !animating || !pulse {
        return base;
    }

    match theme.name_color {
        Color::Rgb(r, g, b) => base.fg(dim_rgb((r, g, b), 0.6)),
        _ => base.add_modifier(Modifier::DIM),
    }
}
