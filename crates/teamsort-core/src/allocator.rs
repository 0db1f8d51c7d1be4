//! Balanced team allocation.
//!
//! [`allocate`] always picks one of the least-populated teams. Starting from
//! an empty store this keeps `max(counts) - min(counts) <= 1` after every
//! allocation: before each step the spread is at most one, and only a
//! minimum bucket is incremented.
//!
//! Ties are broken by an injectable [`TieBreak`] so that production runs
//! use uniform randomness while tests stay deterministic.

use std::sync::Mutex;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::teams::TeamIndex;

/// Chooses one team among equally populated candidates.
///
/// `candidates` is never empty and is sorted by index.
pub trait TieBreak: Send + Sync {
    fn choose(&self, candidates: &[TeamIndex]) -> TeamIndex;
}

impl<F> TieBreak for F
where
    F: Fn(&[TeamIndex]) -> TeamIndex + Send + Sync,
{
    fn choose(&self, candidates: &[TeamIndex]) -> TeamIndex {
        self(candidates)
    }
}

/// Uniform choice using the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTieBreak;

impl TieBreak for RandomTieBreak {
    fn choose(&self, candidates: &[TeamIndex]) -> TeamIndex {
        candidates
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or_default()
    }
}

/// Uniform choice from a seeded generator. Same seed, same sequence.
#[derive(Debug)]
pub struct SeededTieBreak {
    rng: Mutex<StdRng>,
}

impl SeededTieBreak {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl TieBreak for SeededTieBreak {
    fn choose(&self, candidates: &[TeamIndex]) -> TeamIndex {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        candidates.choose(&mut *rng).copied().unwrap_or_default()
    }
}

/// Always the lowest index.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidate;

impl TieBreak for FirstCandidate {
    fn choose(&self, candidates: &[TeamIndex]) -> TeamIndex {
        candidates.first().copied().unwrap_or_default()
    }
}

/// Indices of every team whose count equals the minimum.
pub fn least_populated(counts: &[usize]) -> Vec<TeamIndex> {
    let Some(&min) = counts.iter().min() else {
        return Vec::new();
    };
    counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count == min)
        .map(|(i, _)| TeamIndex::new(i))
        .collect()
}

/// Pick the team for a new member given current per-team counts.
///
/// `counts` must be non-empty; the roster guarantees this at startup. An
/// empty slice yields index 0 rather than panicking.
pub fn allocate<T: TieBreak + ?Sized>(counts: &[usize], tie_break: &T) -> TeamIndex {
    match least_populated(counts).as_slice() {
        [] => TeamIndex::default(),
        [only] => *only,
        candidates => tie_break.choose(candidates),
    }
}
