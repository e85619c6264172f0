//! Application state
//!
//! The selector holds all selection state; the app adds the editor,
//! theme and quit flag around it.

use rollcall_core::{SelectOutcome, Selector};

use crate::tui::animation::Spinner;
use crate::tui::input::MultiLineInput;
use crate::tui::themes::{Theme, THEME_REGISTRY};

/// Editor height before the first render knows the real area
const DEFAULT_EDITOR_LINES: u16 = 8;

pub struct App {
    pub selector: Selector,
    pub input: MultiLineInput,
    pub theme: Theme,
    pub theme_name: String,
    pub spinner: Spinner,
    pub should_quit: bool,
}

impl App {
    pub fn new(selector: Selector, theme_name: &str) -> Self {
        let theme = THEME_REGISTRY.get_or_default(theme_name);
        let theme_name = theme.name.clone();
        Self {
            selector,
            input: MultiLineInput::new(DEFAULT_EDITOR_LINES),
            theme,
            theme_name,
            spinner: Spinner::default(),
            should_quit: false,
        }
    }

    /// Preload the editor with a roster
    pub fn with_roster(mut self, text: &str) -> Self {
        self.input.set_content(text);
        self.sync_input();
        self
    }

    /// Push editor content into the selector (recomputes candidates, clears error)
    pub fn sync_input(&mut self) {
        self.selector.set_input(self.input.content());
    }

    /// Handle the "select participants" trigger
    pub fn trigger_selection(&mut self) {
        // Errors stay on the selector and are rendered from there
        if let Ok(SelectOutcome::Started) = self.selector.request_selection() {
            self.spinner.reset();
        }
    }

    pub fn cycle_theme(&mut self) {
        let next = THEME_REGISTRY.next_name(&self.theme_name);
        self.theme = THEME_REGISTRY.get_or_default(&next);
        tracing::info!(theme = %next, "Switched theme");
        self.theme_name = next;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Release the animation before the app goes away
    pub fn shutdown(&mut self) {
        if self.selector.teardown() {
            tracing::info!("Quit during selection; animation cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall_core::{Phase, Sampler};

    fn roster(n: usize) -> String {
        (1..=n)
            .map(|i| format!("Student {}", i))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        App::new(Selector::with_system_clock(Sampler::seeded(1)), "rollcall")
    }

    #[test]
    fn test_with_roster_syncs_candidates() {
        let app = app().with_roster("  a \n\n b");
        assert_eq!(app.selector.candidates(), ["a", "b"]);
    }

    #[test]
    fn test_trigger_with_too_few_sets_error() {
        let mut app = app().with_roster(&roster(39));
        app.trigger_selection();
        assert_eq!(app.selector.error().map(|e| e.actual()), Some(39));
        assert_eq!(app.selector.phase(), Phase::Idle);
    }

    #[test]
    fn test_trigger_starts_animation() {
        let mut app = app().with_roster(&roster(40));
        app.trigger_selection();
        assert_eq!(app.selector.phase(), Phase::Animating);
        app.shutdown();
        assert_eq!(app.selector.phase(), Phase::Idle);
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let app = App::new(Selector::with_system_clock(Sampler::seeded(1)), "nope");
        assert_eq!(app.theme_name, "rollcall");
    }

    #[test]
    fn test_cycle_theme() {
        let mut app = app();
        app.cycle_theme();
        assert_eq!(app.theme_name, "terminal");
        assert_eq!(app.theme.name, "terminal");
    }
}
