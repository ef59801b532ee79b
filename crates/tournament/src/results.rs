//! Batch results and reporting

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use swiss_core::FairnessReport;

use crate::config::SimulationConfig;

/// Aggregated verdicts of one batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResults {
    /// Configuration used
    pub config: SimulationConfig,
    /// Seed of the RNG stream (drawn from entropy if not configured)
    pub seed: u64,
    /// Number of tournaments run
    pub simulations: u32,
    /// Number of tournaments whose standings passed the fairness check
    pub accepted: u32,
    /// Largest rank distance of each tournament, in run order
    pub max_distances: Vec<usize>,
}

impl BatchResults {
    pub fn new(config: SimulationConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            simulations: 0,
            accepted: 0,
            max_distances: Vec::new(),
        }
    }

    /// Add one tournament's verdict
    pub fn record(&mut self, report: &FairnessReport) {
        self.simulations += 1;
        if report.accepted {
            self.accepted += 1;
        }
        self.max_distances.push(report.max_distance);
    }

    /// Fraction of accepted tournaments (0 for an empty batch)
    pub fn pass_rate(&self) -> f64 {
        if self.simulations == 0 {
            return 0.0;
        }
        self.accepted as f64 / self.simulations as f64
    }

    /// Number of tournaments per largest rank distance
    pub fn distance_histogram(&self) -> BTreeMap<usize, u32> {
        let mut histogram = BTreeMap::new();
        for &d in &self.max_distances {
            *histogram.entry(d).or_insert(0) += 1;
        }
        histogram
    }

    /// One-line summary, e.g. `win probability = 87/100 (0.87)`
    pub fn summary_line(&self) -> String {
        format!(
            "win probability = {}/{} ({})",
            self.accepted,
            self.simulations,
            self.pass_rate()
        )
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let tournament = &self.config.tournament;
        let mut report = String::new();
        report.push_str("=== Swiss Pairing Simulation ===\n\n");
        report.push_str(&format!(
            "Config: {} players, {} rounds, model {}, threshold {}, seed {}\n\n",
            self.config.players,
            tournament.rounds,
            tournament.win_model,
            tournament.fairness_threshold,
            self.seed
        ));

        report.push_str(&format!("{:>12} {:>8}\n", "Max distance", "Count"));
        report.push_str(&"-".repeat(21));
        report.push('\n');
        for (distance, count) in self.distance_histogram() {
            let marker = if distance <= tournament.fairness_threshold {
                ""
            } else {
                " *"
            };
            report.push_str(&format!("{:>12} {:>8}{}\n", distance, count, marker));
        }
        report.push('\n');
        report.push_str(&self.summary_line());
        report.push('\n');

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
