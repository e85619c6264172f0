//! Selection state machine
//!
//! Owns every piece of mutable selector state (input text, candidates,
//! sampled set, transient display list, error) and drives the
//! Idle -> Animating -> Idle cycle against an injected [`Clock`].
//!
//! The UI calls [`Selector::poll`] on every frame. While animating, each
//! elapsed tick period redraws the display list from the candidates captured
//! when the selection started; once the duration elapses the final sample is
//! drawn exactly once and the shuffle timer is released.

use std::time::{Duration, Instant};

use crate::clock::{Clock, SystemClock};
use crate::error::SelectionError;
use crate::roster;
use crate::sampler::{self, Sampler, SELECTION_THRESHOLD};
use crate::timer::{OneShot, RepeatingTimer};

/// Default shuffle period
pub const DEFAULT_TICK: Duration = Duration::from_millis(100);
/// Default time from trigger to reveal
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

/// Animation timing parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTiming {
    /// Period between display reshuffles
    pub tick: Duration,
    /// Time from entering `Animating` until the final sample is revealed
    pub duration: Duration,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            tick: DEFAULT_TICK,
            duration: DEFAULT_DURATION,
        }
    }
}

/// Externally visible state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Animating,
}

/// Result of a selection request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Animation started
    Started,
    /// Trigger is disabled (blank input or already animating)
    Ignored,
}

/// Result of advancing the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Nothing is running
    Idle,
    /// Animating, but no tick was due
    Waiting,
    /// Display list was redrawn; `ticks` counts the periods that elapsed
    Shuffled { ticks: u32 },
    /// Final sample was drawn and the selector went back to idle
    Finished,
}

/// In-flight animation
#[derive(Debug)]
struct Animation {
    /// Candidates captured at trigger time
    pool: Vec<String>,
    shuffle: RepeatingTimer,
    finish: OneShot,
    started: Instant,
}

/// The participant selector
pub struct Selector<C: Clock = SystemClock> {
    clock: C,
    sampler: Sampler,
    timing: AnimationTiming,

    input: String,
    candidates: Vec<String>,
    sampled: Vec<String>,
    display: Vec<String>,
    error: Option<SelectionError>,

    animation: Option<Animation>,
    pulse: bool,
    completed: u64,
}

impl Selector<SystemClock> {
    /// Selector on the wall clock with default timing
    pub fn with_system_clock(sampler: Sampler) -> Self {
        Self::new(SystemClock, sampler, AnimationTiming::default())
    }
}

impl<C: Clock> Selector<C> {
    pub fn new(clock: C, sampler: Sampler, timing: AnimationTiming) -> Self {
        Self {
            clock,
            sampler,
            timing,
            input: String::new(),
            candidates: Vec::new(),
            sampled: Vec::new(),
            display: Vec::new(),
            error: None,
            animation: None,
            pulse: false,
            completed: 0,
        }
    }

    /// Replace the raw input; recomputes candidates and clears any error
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.candidates = roster::normalize(&self.input);
        self.error = None;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Final sample from the last completed selection
    pub fn sampled(&self) -> &[String] {
        &self.sampled
    }

    /// Transient list, only populated while animating
    pub fn display(&self) -> &[String] {
        &self.display
    }

    /// The list the UI should show right now
    pub fn visible(&self) -> &[String] {
        if self.is_animating() {
            &self.display
        } else {
            &self.sampled
        }
    }

    pub fn error(&self) -> Option<&SelectionError> {
        self.error.as_ref()
    }

    pub fn timing(&self) -> AnimationTiming {
        self.timing
    }

    pub fn phase(&self) -> Phase {
        if self.animation.is_some() {
            Phase::Animating
        } else {
            Phase::Idle
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Pulse parity, flips on every shuffle tick
    pub fn pulse(&self) -> bool {
        self.pulse
    }

    /// Number of selections that ran to completion
    pub fn completed(&self) -> u64 {
        self.completed
    }

    /// Fraction of the animation elapsed, `None` when idle
    pub fn progress(&self) -> Option<f64> {
        let anim = self.animation.as_ref()?;
        if self.timing.duration.is_zero() {
            return Some(1.0);
        }
        let elapsed = self.clock.now().saturating_duration_since(anim.started);
        Some((elapsed.as_secs_f64() / self.timing.duration.as_secs_f64()).min(1.0))
    }

    /// Whether the select trigger is enabled
    pub fn can_select(&self) -> bool {
        !self.input.trim().is_empty() && !self.is_animating()
    }

    /// Ask for a new selection
    ///
    /// On insufficient candidates the error is also kept as the selector's
    /// error state until the input changes.
    pub fn request_selection(&mut self) -> Result<SelectOutcome, SelectionError> {
        if !self.can_select() {
            tracing::debug!(
                animating = self.is_animating(),
                "Selection trigger ignored"
            );
            return Ok(SelectOutcome::Ignored);
        }

        if let Err(e) = sampler::ensure_enough(&self.candidates) {
            tracing::warn!(
                actual = e.actual(),
                required = e.required(),
                "Not enough candidates to select"
            );
            self.error = Some(e.clone());
            return Err(e);
        }

        let now = self.clock.now();
        let pool = self.candidates.clone();
        self.display = self.sampler.draw(&pool, SELECTION_THRESHOLD);
        self.error = None;
        self.pulse = false;
        self.animation = Some(Animation {
            pool,
            shuffle: RepeatingTimer::start(now, self.timing.tick),
            finish: OneShot::start(now, self.timing.duration),
            started: now,
        });

        tracing::info!(
            candidates = self.candidates.len(),
            duration_ms = self.timing.duration.as_millis() as u64,
            "Selection animation started"
        );
        Ok(SelectOutcome::Started)
    }

    /// Advance the animation to the clock's current time
    pub fn poll(&mut self) -> PollOutcome {
        let now = self.clock.now();
        let Some(anim) = self.animation.as_mut() else {
            return PollOutcome::Idle;
        };

        if anim.finish.expired(now) {
            return self.finish();
        }

        let ticks = anim.shuffle.due(now);
        if ticks == 0 {
            return PollOutcome::Waiting;
        }

        self.display = self.sampler.draw(&anim.pool, SELECTION_THRESHOLD);
        self.pulse = !self.pulse;
        tracing::debug!(ticks, fired = anim.shuffle.fired(), "Shuffle tick");
        PollOutcome::Shuffled { ticks }
    }

    fn finish(&mut self) -> PollOutcome {
        let Some(mut anim) = self.animation.take() else {
            return PollOutcome::Idle;
        };
        anim.shuffle.cancel();

        match self.sampler.select(&anim.pool) {
            Ok(sample) => self.sampled = sample,
            // Unreachable in practice: the pool was validated on entry
            Err(e) => self.error = Some(e),
        }
        self.display.clear();
        self.pulse = false;
        self.completed += 1;

        tracing::info!(
            selected = self.sampled.len(),
            ticks = anim.shuffle.fired(),
            "Selection finished"
        );
        PollOutcome::Finished
    }

    /// Cancel an in-flight animation
    ///
    /// Returns true if an animation was running. The previous sampled set is
    /// left untouched.
    pub fn teardown(&mut self) -> bool {
        let Some(mut anim) = self.animation.take() else {
            return false;
        };
        let released = anim.shuffle.cancel();
        self.display.clear();
        self.pulse = false;
        tracing::info!(
            released,
            ticks = anim.shuffle.fired(),
            "Selection animation torn down"
        );
        true
    }
}

impl<C: Clock> Drop for Selector<C> {
    fn drop(&mut self) {
        self.teardown();
    }
}
