//! Core library for rollcall
//!
//! Everything the selector needs that is not terminal rendering:
//! - Roster normalization (raw text to candidate list)
//! - Uniform sampling of participants
//! - The Idle/Animating selection state machine, driven by an injected clock
//! - Configuration loading

pub mod clock;
pub mod config;
pub mod error;
pub mod roster;
pub mod sampler;
pub mod selector;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{AnimationConfig, Config};
pub use error::{ConfigError, SelectionError};
pub use roster::normalize;
pub use sampler::{Sampler, SELECTION_THRESHOLD};
pub use selector::{AnimationTiming, Phase, PollOutcome, SelectOutcome, Selector};
