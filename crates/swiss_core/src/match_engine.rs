//! Match simulation

use rand::Rng;

use crate::player::Players;
use crate::win_model::WinProbability;

/// Result of one simulated match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    pub winner: usize,
    pub loser: usize,
}

/// Play a single match between players `first` and `second`.
///
/// Draws one uniform value `u` in `[0, 1)`; `first` wins iff `u` is at most
/// the model's win probability for `first`. The winner's score goes up by one
/// and both encounter counters are bumped regardless of the result.
pub fn play_match<R: Rng>(
    players: &mut Players,
    first: usize,
    second: usize,
    model: &dyn WinProbability,
    rng: &mut R,
) -> MatchOutcome {
    players.record_encounter(first, second);

    let p = model.first_player_win_prob(players[first].strength, players[second].strength);
    let u: f64 = rng.gen_range(0.0..1.0);
    let outcome = if u <= p {
        MatchOutcome {
            winner: first,
            loser: second,
        }
    } else {
        MatchOutcome {
            winner: second,
            loser: first,
        }
    };

    players.award_win(outcome.winner);
    outcome
}

/// Play every match of a round in matchup-list order.
///
/// The order is fixed so a seeded RNG reproduces the same results.
pub fn play_round<R: Rng>(
    players: &mut Players,
    matchups: &[usize],
    model: &dyn WinProbability,
    rng: &mut R,
) -> Vec<MatchOutcome> {
    matchups
        .chunks_exact(2)
        .map(|pair| play_match(players, pair[0], pair[1], model, rng))
        .collect()
}

#[cfg(test)]
#[path = "match_engine_tests.rs"]
mod match_engine_tests;
