//! Batch runner: many independent tournaments from one RNG stream

use rand::SeedableRng;
use rand::rngs::StdRng;
use swiss_core::{Tournament, TournamentOutcome, random_strengths};
use tracing::{debug, info};

use crate::config::SimulationConfig;
use crate::error::SimError;
use crate::results::BatchResults;

/// Runs batches of simulated tournaments
pub struct BatchRunner {
    config: SimulationConfig,
}

impl BatchRunner {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run every simulation and aggregate the verdicts
    pub fn run(&self) -> Result<BatchResults, SimError> {
        self.run_with(|_, _| {})
    }

    /// Run every simulation, handing each finished tournament and its index
    /// to `observe`.
    ///
    /// All simulations share one RNG stream: each draws its strengths, then
    /// plays its matches, before the next one starts. A fixed seed therefore
    /// reproduces the whole batch.
    pub fn run_with<F>(&self, mut observe: F) -> Result<BatchResults, SimError>
    where
        F: FnMut(u32, &TournamentOutcome),
    {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut results = BatchResults::new(self.config.clone(), seed);

        info!(
            seed,
            simulations = self.config.simulations,
            players = self.config.players,
            rounds = self.config.tournament.rounds,
            model = %self.config.tournament.win_model,
            "starting batch"
        );

        for simulation in 0..self.config.simulations {
            let strengths = random_strengths(self.config.players, &mut rng);
            let outcome = Tournament::new(&strengths, self.config.tournament.clone(), &mut rng)
                .run()
                .map_err(|source| SimError::Pairing { simulation, source })?;

            debug!(
                simulation,
                max_distance = outcome.max_distance(),
                accepted = outcome.accepted(),
                "simulation finished"
            );

            observe(simulation, &outcome);
            results.record(&outcome.fairness);
        }

        info!(
            accepted = results.accepted,
            simulations = results.simulations,
            pass_rate = results.pass_rate(),
            "batch finished"
        );

        Ok(results)
    }
}

/// Quick utility to run a single batch
pub fn quick_batch(config: SimulationConfig) -> Result<BatchResults, SimError> {
    config.validate()?;
    BatchRunner::new(config).run()
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod batch_tests;
