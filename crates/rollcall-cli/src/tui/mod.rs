//! Terminal UI for rollcall
//!
//! - `app`: application state wrapping the core selector
//! - `handlers`: keyboard, event loop and rendering
//! - `input`: roster editor
//! - `themes`, `animation`: presentation

pub mod animation;
pub mod app;
pub mod handlers;
pub mod input;
pub mod themes;

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub use app::App;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run the interactive selector until the user quits
pub async fn run(mut app: App) -> Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = app.run_loop(&mut terminal).await;

    restore_terminal().context("Failed to restore terminal")?;
    terminal.show_cursor().ok();
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("Failed to create terminal")
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen)?;
    Ok(())
}

/// Leave raw mode before the default hook prints the panic
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
}
