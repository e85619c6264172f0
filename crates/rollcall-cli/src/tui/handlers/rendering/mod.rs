//! UI rendering coordinator
//!
//! Splits the screen into its sections and dispatches to the view renderers.

mod views;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::tui::app::App;

impl App {
    /// Main UI rendering entry point
    pub fn ui(&mut self, f: &mut Frame) {
        let bg = Block::default().style(Style::default().bg(self.theme.bg_color));
        f.render_widget(bg, f.area());

        let error_height = if self.selector.error().is_some() { 4 } else { 0 };
        let show_results = !self.selector.visible().is_empty();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Title
                Constraint::Min(6),               // Roster editor
                Constraint::Length(3),            // Trigger
                Constraint::Length(error_height), // Error banner
                if show_results {
                    Constraint::Percentage(55) // Selected participants
                } else {
                    Constraint::Length(0)
                },
                Constraint::Length(1), // Key hints
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        self.render_editor(f, chunks[1]);
        self.render_trigger(f, chunks[2]);
        if error_height > 0 {
            self.render_error(f, chunks[3]);
        }
        if show_results {
            self.render_results(f, chunks[4]);
        }
        self.render_footer(f, chunks[5]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use ratatui::{backend::TestBackend, Terminal};
    use rollcall_core::{AnimationTiming, Sampler, Selector, SystemClock};

    fn screen(app: &mut App) -> String {
        let backend = TestBackend::new(100, 50);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.ui(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn roster(n: usize) -> String {
        (1..=n)
            .map(|i| format!("Student {}", i))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_empty_screen_shows_placeholder() {
        let mut app = App::new(Selector::with_system_clock(Sampler::seeded(1)), "rollcall");
        let text = screen(&mut app);
        assert!(text.contains("VR Experience Participant Selector"));
        assert!(text.contains("Enter student names"));
        assert!(text.contains("Select 40 VR Participants"));
        assert!(!text.contains("Selected VR Participants"));
    }

    #[test]
    fn test_error_banner() {
        let mut app = App::new(Selector::with_system_clock(Sampler::seeded(1)), "rollcall")
            .with_roster(&roster(39));
        app.trigger_selection();
        let text = screen(&mut app);
        assert!(text.contains("Not enough participants"));
        assert!(text.contains("at least 40"));
        assert!(text.contains("(39 names)"));
    }

    #[test]
    fn test_animating_heading() {
        let mut app = App::new(Selector::with_system_clock(Sampler::seeded(1)), "rollcall")
            .with_roster(&roster(40));
        app.trigger_selection();
        let text = screen(&mut app);
        assert!(text.contains("Initializing VR Headsets..."));
        assert!(text.contains("Launching VR..."));
        app.shutdown();
    }

    #[test]
    fn test_final_selection_is_numbered() {
        let timing = AnimationTiming {
            tick: Duration::from_millis(100),
            duration: Duration::ZERO,
        };
        let selector = Selector::new(SystemClock, Sampler::seeded(1), timing);
        let mut app = App::new(selector, "terminal").with_roster(&roster(40));
        app.trigger_selection();
        app.tick();

        assert_eq!(app.selector.sampled().len(), 40);
        let text = screen(&mut app);
        assert!(text.contains("Selected VR Participants"));
        assert!(text.contains(" 1 "));
        assert!(text.contains("40 "));
    }
}
