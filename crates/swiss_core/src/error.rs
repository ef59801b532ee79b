//! Pairing invariant violations

use thiserror::Error;

/// Fatal pairing faults.
///
/// Every variant means the round's inputs or selection bookkeeping are broken
/// upstream. They are never retried; the round that raised them produces no
/// matchups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairingError {
    /// The nearest-unselected search was started outside the selection bitmap.
    #[error("starting point ({start}) out of range for {len} positions")]
    StartOutOfRange { start: usize, len: usize },

    /// Every position in the selection bitmap is already taken.
    #[error("unable to find unselected position near {start} (selected={selected:?})")]
    Exhausted { start: usize, selected: Vec<bool> },

    /// `scores` and `seeds` describe different numbers of players.
    #[error("scores and seeds differ in length ({scores} vs {seeds})")]
    LengthMismatch { scores: usize, seeds: usize },
}

/// A win model name that matches no known model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown win model '{0}' (expected strength_difference or strongest_always_wins)")]
pub struct UnknownWinModel(pub String);
