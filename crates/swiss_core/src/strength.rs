//! Latent strength generation

use rand::Rng;
use rand_distr::StandardNormal;

/// Draw `n` strengths from a standard normal distribution, rounded to three
/// decimal places.
pub fn random_strengths<R: Rng>(n: usize, rng: &mut R) -> Vec<f64> {
    (0..n)
        .map(|_| {
            let z: f64 = rng.sample(StandardNormal);
            (z * 1000.0).round_ties_even() / 1000.0
        })
        .collect()
}
