//! Swiss-system pairing core
//!
//! This crate provides:
//! - Seeding players from their latent strength
//! - Score-group pairing with a rotated first-choice rule
//! - Stochastic and deterministic match outcome models
//! - A round driver that plays a full tournament with an owned RNG
//! - A rank-distance fairness check of final standings against true strength
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use swiss_core::{Tournament, TournamentConfig, WinModel};
//!
//! let strengths: Vec<f64> = (0..16).map(f64::from).collect();
//! let config = TournamentConfig {
//!     rounds: 1000,
//!     win_model: WinModel::StrongestAlwaysWins,
//!     ..Default::default()
//! };
//! let outcome = Tournament::new(&strengths, config, StdRng::seed_from_u64(0))
//!     .run()
//!     .unwrap();
//! assert!(outcome.accepted());
//! ```

pub mod error;
pub mod fairness;
pub mod match_engine;
pub mod pairing;
pub mod player;
pub mod search;
pub mod seeding;
pub mod strength;
pub mod tournament;
pub mod win_model;

pub use error::{PairingError, UnknownWinModel};
pub use fairness::{DEFAULT_FAIRNESS_THRESHOLD, FairnessReport, rank_distances, score_rank_order};
pub use match_engine::{MatchOutcome, play_match, play_round};
pub use pairing::{find_opponents_for_group, pairings, score_groups, score_order};
pub use player::{Player, Players};
pub use search::find_nearest_unselected;
pub use seeding::{assign_seeds, rank_positions, strength_order};
pub use strength::random_strengths;
pub use tournament::{DEFAULT_ROUNDS, RoundRecord, Tournament, TournamentConfig, TournamentOutcome};
pub use win_model::{StrengthDifferenceModel, StrongestAlwaysWinsModel, WinModel, WinProbability};
