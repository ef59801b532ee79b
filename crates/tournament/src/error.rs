//! Errors raised by the simulation runner

use std::path::PathBuf;

use swiss_core::PairingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("failed to read config {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("simulation {simulation} failed to pair: {source}")]
    Pairing {
        simulation: u32,
        #[source]
        source: PairingError,
    },
}
