//! Keyboard and paste handling

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::tui::app::App;
use crate::tui::input::InputAction;

impl App {
    /// Dispatch one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key),
            Event::Paste(text) => {
                self.input.insert_text(&text);
                self.sync_input();
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Char('q') if ctrl => self.quit(),
            KeyCode::Char('s') if ctrl => self.trigger_selection(),
            KeyCode::F(5) => self.trigger_selection(),
            KeyCode::Char('t') if ctrl => self.cycle_theme(),
            _ => {
                if self.input.handle_key(key.code, key.modifiers) == InputAction::ContentChanged {
                    self.sync_input();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall_core::{Phase, Sampler, Selector};

    fn app() -> App {
        App::new(Selector::with_system_clock(Sampler::seeded(3)), "rollcall")
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_typing_updates_candidates() {
        let mut app = app();
        for ch in "Ada".chars() {
            app.handle_event(key(KeyCode::Char(ch), KeyModifiers::empty()));
        }
        app.handle_event(key(KeyCode::Enter, KeyModifiers::empty()));
        app.handle_event(key(KeyCode::Char('B'), KeyModifiers::SHIFT));
        assert_eq!(app.selector.candidates(), ["Ada", "B"]);
    }

    #[test]
    fn test_paste_then_select() {
        let mut app = app();
        let roster: Vec<String> = (1..=45).map(|i| format!("Student {}", i)).collect();
        app.handle_event(Event::Paste(roster.join("\r\n")));
        assert_eq!(app.selector.candidates().len(), 45);

        app.handle_event(key(KeyCode::F(5), KeyModifiers::empty()));
        assert_eq!(app.selector.phase(), Phase::Animating);
    }

    #[test]
    fn test_edit_clears_error() {
        let mut app = app();
        app.handle_event(Event::Paste("one\ntwo".to_string()));
        app.handle_event(key(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert!(app.selector.error().is_some());

        app.handle_event(key(KeyCode::Char('x'), KeyModifiers::empty()));
        assert!(app.selector.error().is_none());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        app.handle_event(key(KeyCode::Esc, KeyModifiers::empty()));
        assert!(app.should_quit);

        let mut app2 = self::app();
        app2.handle_event(key(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(app2.should_quit);
    }

    #[test]
    fn test_control_chords_do_not_type() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('t'), KeyModifiers::CONTROL));
        assert!(app.input.is_empty());
        assert_eq!(app.theme_name, "terminal");
    }
}
