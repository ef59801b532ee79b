//! Players and the index-stable player collection

use std::ops::Index;

use crate::seeding::assign_seeds;

/// A single tournament participant.
///
/// A player has no identity of its own: its index in [`Players`] is what the
/// pairing engine, the match engine and the fairness evaluator refer to.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Latent strength, fixed for the whole tournament
    pub strength: f64,
    /// Number of rounds won so far
    pub score: u32,
    /// Rank by strength at tournament start (0 = strongest)
    pub seed: usize,
    /// Encounters against each opponent, indexed by opponent
    pub games_vs_player: Vec<u32>,
}

/// Index-stable sequence of players.
///
/// Never reordered after construction. Everything that needs a different
/// order works on permutations of indices instead.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Players(Vec<Player>);

impl Players {
    /// Create players from strengths, assigning seeds once and zeroing
    /// scores and encounter counters.
    pub fn from_strengths(strengths: &[f64]) -> Self {
        let n = strengths.len();
        let seeds = assign_seeds(strengths);
        Self(
            strengths
                .iter()
                .zip(seeds)
                .map(|(&strength, seed)| Player {
                    strength,
                    score: 0,
                    seed,
                    games_vs_player: vec![0; n],
                })
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.0.iter()
    }

    pub fn scores(&self) -> Vec<u32> {
        self.0.iter().map(|p| p.score).collect()
    }

    pub fn seeds(&self) -> Vec<usize> {
        self.0.iter().map(|p| p.seed).collect()
    }

    pub fn strengths(&self) -> Vec<f64> {
        self.0.iter().map(|p| p.strength).collect()
    }

    /// How many times players `i` and `j` have met.
    ///
    /// Tracked for every match but not consulted when pairing.
    pub fn encounters(&self, i: usize, j: usize) -> u32 {
        self.0[i].games_vs_player[j]
    }

    pub(crate) fn record_encounter(&mut self, i: usize, j: usize) {
        self.0[i].games_vs_player[j] += 1;
        self.0[j].games_vs_player[i] += 1;
    }

    pub(crate) fn award_win(&mut self, winner: usize) {
        self.0[winner].score += 1;
    }
}

impl Index<usize> for Players {
    type Output = Player;

    fn index(&self, index: usize) -> &Player {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Players {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
#[path = "player_tests.rs"]
mod player_tests;
