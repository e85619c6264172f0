//! Participant sampling
//!
//! Uniform selection without replacement. The shuffle is a truncated
//! Fisher-Yates (`SliceRandom::partial_shuffle`), so every candidate is
//! equally likely to land in any of the selected positions.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::SelectionError;

/// Minimum roster size, and the number of participants selected
pub const SELECTION_THRESHOLD: usize = 40;

/// Check the selection precondition without drawing anything
pub fn ensure_enough(candidates: &[String]) -> Result<(), SelectionError> {
    if candidates.len() < SELECTION_THRESHOLD {
        return Err(SelectionError::InsufficientCandidates {
            required: SELECTION_THRESHOLD,
            actual: candidates.len(),
        });
    }
    Ok(())
}

/// Random sampler owning its RNG
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    /// Sampler seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic sampler for reproducible draws
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Select exactly `SELECTION_THRESHOLD` participants
    ///
    /// Fails when the candidate list is shorter than the threshold. The
    /// candidate list itself is never reordered.
    pub fn select(&mut self, candidates: &[String]) -> Result<Vec<String>, SelectionError> {
        ensure_enough(candidates)?;
        Ok(self.draw(candidates, SELECTION_THRESHOLD))
    }

    /// Draw up to `count` entries uniformly, no threshold check
    pub fn draw(&mut self, candidates: &[String], count: usize) -> Vec<String> {
        let mut pool = candidates.to_vec();
        let amount = count.min(pool.len());
        let (picked, _) = pool.partial_shuffle(&mut self.rng, amount);
        picked.to_vec()
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}
