//! Built-in theme definitions

mod rollcall;
mod terminal;

pub use rollcall::rollcall;
pub use terminal::terminal;
