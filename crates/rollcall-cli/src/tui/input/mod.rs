//! Input handling for the roster editor
//!
//! - Multi-line editor with cursor management and soft wrapping
//! - Bracketed and clipboard paste

pub mod multi_line;

pub use multi_line::{InputAction, MultiLineInput};
