//! Animation helpers for the selector TUI
//!
//! The shuffle itself is driven by the core selector; this module only
//! turns its state into visuals (spinner glyph, pulsing name colors).

pub mod pulse;

pub use pulse::{pulse_style, Spinner};
