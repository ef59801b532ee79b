//! Round driver for a single tournament
//!
//! A [`Tournament`] owns its players, its win model and its RNG. Running it
//! plays every round (pair, then play each match in matchup order) and then
//! evaluates fairness, consuming the tournament and returning a
//! [`TournamentOutcome`]. There is no partial or resumable run.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PairingError;
use crate::fairness::{DEFAULT_FAIRNESS_THRESHOLD, FairnessReport};
use crate::match_engine::{MatchOutcome, play_round};
use crate::pairing::pairings;
use crate::player::Players;
use crate::win_model::{WinModel, WinProbability};

/// Default number of rounds per tournament
pub const DEFAULT_ROUNDS: u32 = 40;

/// Tournament configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Number of rounds to play
    pub rounds: u32,
    /// Match outcome model
    pub win_model: WinModel,
    /// Largest rank distance an accepted tournament may contain
    pub fairness_threshold: usize,
    /// Keep every round's matchups and results in the outcome
    pub record_rounds: bool,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            win_model: WinModel::default(),
            fairness_threshold: DEFAULT_FAIRNESS_THRESHOLD,
            record_rounds: false,
        }
    }
}

/// A single tournament, ready to run
pub struct Tournament<R: Rng> {
    players: Players,
    config: TournamentConfig,
    model: Box<dyn WinProbability>,
    rng: R,
}

impl<R: Rng> Tournament<R> {
    /// Create a tournament using the model selected in `config`.
    pub fn new(strengths: &[f64], config: TournamentConfig, rng: R) -> Self {
        let model = config.win_model.build();
        Self::with_model(strengths, config, model, rng)
    }

    /// Create a tournament with a custom win model.
    ///
    /// `model` takes the place of `config.win_model`.
    pub fn with_model(
        strengths: &[f64],
        config: TournamentConfig,
        model: Box<dyn WinProbability>,
        rng: R,
    ) -> Self {
        Self {
            players: Players::from_strengths(strengths),
            config,
            model,
            rng,
        }
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    /// Play all rounds, then evaluate the final standings.
    ///
    /// Fails only if pairing breaks its invariants, which an odd number of
    /// players will do.
    pub fn run(mut self) -> Result<TournamentOutcome, PairingError> {
        let seeds = self.players.seeds();
        let mut rounds = Vec::new();

        debug!(
            players = self.players.len(),
            rounds = self.config.rounds,
            model = self.model.name(),
            "starting tournament"
        );

        for round in 1..=self.config.rounds {
            let matchups = pairings(&self.players.scores(), &seeds)?;
            debug!(round, scores = ?self.players.scores(), matchups = ?matchups, "paired round");

            let results = play_round(
                &mut self.players,
                &matchups,
                self.model.as_ref(),
                &mut self.rng,
            );
            if self.config.record_rounds {
                rounds.push(RoundRecord { matchups, results });
            }
        }

        let fairness = FairnessReport::evaluate(
            &self.players.scores(),
            &self.players.strengths(),
            self.config.fairness_threshold,
        );
        debug!(
            scores = ?self.players.scores(),
            distances = ?fairness.distances,
            accepted = fairness.accepted,
            "tournament finished"
        );

        Ok(TournamentOutcome {
            players: self.players,
            rounds,
            fairness,
        })
    }
}

/// One played round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    /// Entries `2i` and `2i + 1` played each other
    pub matchups: Vec<usize>,
    /// Match results in matchup order
    pub results: Vec<MatchOutcome>,
}

/// Final state of a completed tournament
#[derive(Debug, Clone)]
pub struct TournamentOutcome {
    pub players: Players,
    /// Every round, in play order. Empty unless `record_rounds` was set.
    pub rounds: Vec<RoundRecord>,
    pub fairness: FairnessReport,
}

impl TournamentOutcome {
    pub fn scores(&self) -> Vec<u32> {
        self.players.scores()
    }

    pub fn seeds(&self) -> Vec<usize> {
        self.players.seeds()
    }

    pub fn distances(&self) -> &[usize] {
        &self.fairness.distances
    }

    pub fn max_distance(&self) -> usize {
        self.fairness.max_distance
    }

    pub fn accepted(&self) -> bool {
        self.fairness.accepted
    }

    pub fn encounters(&self, i: usize, j: usize) -> u32 {
        self.players.encounters(i, j)
    }
}

#[cfg(test)]
#[path = "tournament_tests.rs"]
mod tournament_tests;
