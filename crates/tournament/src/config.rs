//! Simulation configuration: TOML file plus command-line overrides

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};
use swiss_core::{TournamentConfig, WinModel};

use crate::error::SimError;

/// Default number of tournaments per batch
pub const DEFAULT_SIMULATIONS: u32 = 100;

/// Default field size
pub const DEFAULT_PLAYERS: usize = 16;

/// Estimate how often Swiss pairing ranks players by true strength
#[derive(Parser, Debug, Default)]
#[command(name = "swiss-sim", version, about)]
pub struct CliArgs {
    /// Path to TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    // --- Overrides ---
    /// Number of independent tournaments
    #[arg(short = 'n', long)]
    pub simulations: Option<u32>,

    /// Players per tournament (must be even)
    #[arg(short, long)]
    pub players: Option<usize>,

    /// Rounds per tournament
    #[arg(short, long)]
    pub rounds: Option<u32>,

    /// Largest accepted rank distance
    #[arg(short, long)]
    pub threshold: Option<usize>,

    /// strength_difference or strongest_always_wins
    #[arg(short, long)]
    pub model: Option<WinModel>,

    /// RNG seed (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print scores and matchups of every round
    #[arg(long)]
    pub show_rounds: bool,

    /// Print results as JSON instead of the summary line
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Settings for one batch of simulated tournaments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub simulations: u32,
    pub players: usize,
    pub seed: Option<u64>,
    pub tournament: TournamentConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            simulations: DEFAULT_SIMULATIONS,
            players: DEFAULT_PLAYERS,
            seed: None,
            tournament: TournamentConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Load config from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, SimError> {
        let contents = fs::read_to_string(path).map_err(|source| SimError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| SimError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build the effective config: file (or defaults), then CLI overrides.
    pub fn from_args(args: &CliArgs) -> Result<Self, SimError> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_overrides(args);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&mut self, args: &CliArgs) {
        if let Some(simulations) = args.simulations {
            self.simulations = simulations;
        }
        if let Some(players) = args.players {
            self.players = players;
        }
        if let Some(rounds) = args.rounds {
            self.tournament.rounds = rounds;
        }
        if let Some(threshold) = args.threshold {
            self.tournament.fairness_threshold = threshold;
        }
        if let Some(model) = args.model {
            self.tournament.win_model = model;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        if args.show_rounds {
            self.tournament.record_rounds = true;
        }
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.simulations == 0 {
            return Err(SimError::InvalidConfig(
                "simulations must be at least 1".to_string(),
            ));
        }
        if !self.players.is_multiple_of(2) {
            return Err(SimError::InvalidConfig(format!(
                "players must be even, got {}",
                self.players
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
