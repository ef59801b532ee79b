//! End-to-end tournament tests
//!
//! These run whole tournaments with the deterministic model, where final
//! standings depend only on the pairing policy, and check that they converge
//! to the strength order.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

use swiss_core::{
    FairnessReport, Tournament, TournamentConfig, WinModel, pairings, random_strengths,
};

fn deterministic(rounds: u32) -> TournamentConfig {
    TournamentConfig {
        rounds,
        win_model: WinModel::StrongestAlwaysWins,
        record_rounds: true,
        ..Default::default()
    }
}

// =============================================================================
// Acceptance with the deterministic model
// =============================================================================

#[test]
fn test_deterministic_tournaments_are_accepted() {
    let cases: Vec<Vec<f64>> = vec![
        vec![0.0, 1.0],
        vec![0.0, 0.5, 1.0, 1.5],
        vec![-1.0, -0.75, -0.5, -0.25, 0.0, 0.5, 1.0, 1.5],
        vec![9.0, 7.0, 5.0, 3.0, 8.0, 6.0, 1.0, 0.0, 2.0, 4.0],
        vec![5.0, 1.0, 8.0, 11.0, 10.0, 2.0, 4.0, 6.0, 7.0, 9.0, 12.0, 3.0],
        vec![
            8.0, 5.0, 14.0, 13.0, 11.0, 3.0, 15.0, 7.0, 6.0, 10.0, 9.0, 1.0, 0.0, 2.0, 12.0, 4.0,
        ],
        (0..16).map(f64::from).collect(),
    ];

    for strengths in cases {
        let outcome = Tournament::new(&strengths, deterministic(1000), StdRng::seed_from_u64(0))
            .run()
            .expect("even field must pair every round");

        assert!(
            outcome.accepted(),
            "strengths {:?} gave distances {:?}",
            strengths,
            outcome.distances()
        );
    }
}

#[test]
fn test_sixteen_evenly_spaced_players() {
    let strengths: Vec<f64> = (0..16).map(f64::from).collect();
    let outcome = Tournament::new(&strengths, deterministic(1000), StdRng::seed_from_u64(1))
        .run()
        .unwrap();

    assert!(outcome.max_distance() <= 4);
    assert_eq!(outcome.seeds(), (0..16).rev().collect::<Vec<_>>());
    assert_eq!(outcome.scores()[15], 1000, "the strongest player never loses");
    assert_eq!(outcome.scores()[0], 0, "the weakest player never wins");
}

#[test]
fn test_outcome_matches_fairness_evaluator() {
    let strengths = [0.3, 2.1, -0.4, 1.0, -1.5, 0.8];
    let outcome = Tournament::new(&strengths, TournamentConfig::default(), StdRng::seed_from_u64(4))
        .run()
        .unwrap();

    let report = FairnessReport::evaluate(&outcome.scores(), &strengths, 4);
    assert_eq!(report, outcome.fairness);
}

// =============================================================================
// Randomized sweeps
// =============================================================================

#[test]
fn test_random_tournaments_keep_round_invariants() {
    let seeds: Vec<u64> = (0..64).collect();

    seeds.par_iter().for_each(|&seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let strengths = random_strengths(16, &mut rng);
        let config = TournamentConfig {
            record_rounds: true,
            ..Default::default()
        };
        let outcome = Tournament::new(&strengths, config, &mut rng)
            .run()
            .unwrap_or_else(|e| panic!("seed {}: {}", seed, e));

        assert_eq!(outcome.rounds.len(), 40);
        assert_eq!(outcome.scores().iter().sum::<u32>(), 40 * 8);
        for round in &outcome.rounds {
            assert_eq!(round.results.len(), 8);
            let mut sorted = round.matchups.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..16).collect::<Vec<_>>(), "seed {}", seed);
        }
    });
}

#[test]
fn test_pairing_standalone_matches_first_round() {
    let mut rng = StdRng::seed_from_u64(21);
    let strengths = random_strengths(12, &mut rng);
    let outcome = Tournament::new(&strengths, deterministic(1), rng).run().unwrap();

    let expected = pairings(&[0; 12], &outcome.seeds()).unwrap();
    assert_eq!(outcome.rounds[0].matchups, expected);
}
