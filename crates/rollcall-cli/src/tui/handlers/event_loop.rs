//! Event loop and animation ticks
//!
//! Terminal events and a fixed frame interval are multiplexed with
//! `tokio::select!`; every frame advances the selector against its clock.

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::EventStream;
use futures::StreamExt;
use rollcall_core::PollOutcome;
use tokio::time::MissedTickBehavior;

use crate::tui::app::App;
use crate::tui::Tui;

/// Redraw cadence; finer than the shuffle period so ticks are not late
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

impl App {
    pub(crate) async fn run_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut events = EventStream::new();
        let mut frames = tokio::time::interval(FRAME_INTERVAL);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        terminal.draw(|f| self.ui(f)).context("Failed to draw")?;

        let result = loop {
            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_event(event),
                    Some(Err(e)) => break Err(e).context("Failed to read terminal event"),
                    None => break Ok(()),
                },
                _ = frames.tick() => {
                    self.tick();
                }
            }

            if self.should_quit {
                break Ok(());
            }

            if let Err(e) = terminal.draw(|f| self.ui(f)) {
                break Err(e).context("Failed to draw");
            }
        };

        self.shutdown();
        result
    }

    /// Advance animations. Returns true if a selection is still animating.
    pub(crate) fn tick(&mut self) -> bool {
        match self.selector.poll() {
            PollOutcome::Finished => {
                tracing::info!(
                    completed = self.selector.completed(),
                    "Participants revealed"
                );
            }
            PollOutcome::Shuffled { ticks } if ticks > 1 => {
                tracing::debug!(ticks, "Frame fell behind shuffle period");
            }
            _ => {}
        }

        let animating = self.selector.is_animating();
        if animating {
            self.spinner.update();
        }
        animating
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall_core::{Sampler, Selector};

    #[test]
    fn test_tick_reports_animation_state() {
        let roster: Vec<String> = (1..=40).map(|i| format!("S{}", i)).collect();
        let mut app = App::new(Selector::with_system_clock(Sampler::seeded(9)), "rollcall")
            .with_roster(&roster.join("\n"));
        assert!(!app.tick());

        app.trigger_selection();
        assert!(app.tick());

        app.shutdown();
        assert!(!app.tick());
    }
}
