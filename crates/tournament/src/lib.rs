//! Batch simulation runner for swiss-sim
//!
//! This crate provides infrastructure for:
//! - Running many independent tournaments from one RNG stream
//! - Aggregating how often final standings pass the fairness check
//! - Loading simulation settings from TOML with CLI overrides
//! - Rendering per-round scores and matchups for inspection
//!
//! # Usage
//!
//! ```bash
//! # 100 tournaments of 16 players, 40 rounds each
//! cargo run -p tournament --bin swiss-sim
//!
//! # Deterministic outcomes, reproducible stream, round-by-round dump
//! cargo run -p tournament --bin swiss-sim -- --model strongest_always_wins --seed 7 --show-rounds
//! ```

mod batch;
mod config;
mod error;
mod report;
mod results;

pub use batch::*;
pub use config::*;
pub use error::*;
pub use report::*;
pub use results::*;
