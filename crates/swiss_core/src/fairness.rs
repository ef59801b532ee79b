//! Fairness evaluation of final standings
//!
//! A tournament is judged by how far each player's final position (by score)
//! lies from its true position (by strength). This is a statistical check,
//! meant to be repeated over many simulated tournaments.

use serde::Serialize;

use crate::seeding::{rank_positions, strength_order};

/// Largest rank displacement an accepted tournament may contain
pub const DEFAULT_FAIRNESS_THRESHOLD: usize = 4;

/// Player indices sorted by score descending.
///
/// Stable, so equal scores keep their original index order.
pub fn score_rank_order(scores: &[u32]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].cmp(&scores[a]));
    order
}

/// Per-player distance between score rank and strength rank.
pub fn rank_distances(scores: &[u32], strengths: &[f64]) -> Vec<usize> {
    let by_score = rank_positions(&score_rank_order(scores));
    let by_strength = rank_positions(&strength_order(strengths));
    by_score
        .iter()
        .zip(&by_strength)
        .map(|(&a, &b)| a.abs_diff(b))
        .collect()
}

/// Rank distances and the accept/reject verdict for one tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FairnessReport {
    pub distances: Vec<usize>,
    pub max_distance: usize,
    pub threshold: usize,
    pub accepted: bool,
}

impl FairnessReport {
    /// Evaluate final scores against strengths.
    ///
    /// An empty field has nobody to misrank and is always accepted.
    pub fn evaluate(scores: &[u32], strengths: &[f64], threshold: usize) -> Self {
        let distances = rank_distances(scores, strengths);
        let max_distance = distances.iter().copied().max().unwrap_or(0);
        Self {
            distances,
            max_distance,
            threshold,
            accepted: max_distance <= threshold,
        }
    }
}

#[cfg(test)]
#[path = "fairness_tests.rs"]
mod fairness_tests;
