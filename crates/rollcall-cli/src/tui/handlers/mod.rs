//! Event handlers for the TUI
//!
//! All event handling logic split out of app.rs.

pub mod event_loop;
pub mod keyboard;
pub mod rendering;
