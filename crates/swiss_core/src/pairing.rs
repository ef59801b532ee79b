//! Score-group pairing
//!
//! One round of pairing works in three steps:
//! 1. Order players by score (best first), breaking ties by seed (best first).
//!    Players with equal scores end up contiguous and seed-sorted.
//! 2. Split that order into maximal runs of equal score.
//! 3. Within each run of `n` players, local position `p` aims for the player at
//!    `(p + n/2) mod n`, i.e. the top half plays the bottom half. If that
//!    player is already taken, the nearest free position is used instead
//!    (see [`find_nearest_unselected`]).
//!
//! The result is a permutation of player indices where entries `2i` and
//! `2i + 1` play each other.

use std::ops::Range;

use crate::error::PairingError;
use crate::search::find_nearest_unselected;

/// Player indices ordered by score descending, then seed ascending.
pub fn score_order(scores: &[u32], seeds: &[usize]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].cmp(&scores[a]).then(seeds[a].cmp(&seeds[b])));
    order
}

/// Maximal runs of equal score within `order`, as position ranges into it.
///
/// The ranges are contiguous and cover `0..order.len()` exactly.
pub fn score_groups(order: &[usize], scores: &[u32]) -> Vec<Range<usize>> {
    let mut groups = Vec::new();
    let mut start = 0;
    for chunk in order.chunk_by(|&a, &b| scores[a] == scores[b]) {
        groups.push(start..start + chunk.len());
        start += chunk.len();
    }
    groups
}

/// Pair every still-unselected position in `group`.
///
/// Positions refer to the score-ordered sequence, and `selected` is shared by
/// all groups of the round: positions taken by an earlier group are skipped,
/// and an opponent may be taken from a later group if this one runs out.
/// Returns the emitted pairs flattened as `[p0, o0, p1, o1, ...]`.
pub fn find_opponents_for_group(
    selected: &mut [bool],
    group: Range<usize>,
) -> Result<Vec<usize>, PairingError> {
    let n = group.len();
    let mut pairs = Vec::with_capacity(n + 1);

    for p in group.clone() {
        if selected[p] {
            continue;
        }
        selected[p] = true;

        // In a group of 4: 0 plays 2, 1 plays 3, 2 plays 0, 3 plays 1.
        let first_choice = (p - group.start + n / 2) % n + group.start;
        let opponent = find_nearest_unselected(selected, first_choice)?;
        selected[opponent] = true;

        pairs.push(p);
        pairs.push(opponent);
    }

    Ok(pairs)
}

/// Compute one round of matchups.
///
/// Returns a permutation `m` of `0..N` such that for even `i`, player `m[i]`
/// plays player `m[i + 1]`. An odd number of players leaves one player
/// without an opponent and fails with [`PairingError::Exhausted`]. Slices of
/// different lengths fail with [`PairingError::LengthMismatch`].
pub fn pairings(scores: &[u32], seeds: &[usize]) -> Result<Vec<usize>, PairingError> {
    if scores.len() != seeds.len() {
        return Err(PairingError::LengthMismatch {
            scores: scores.len(),
            seeds: seeds.len(),
        });
    }

    let order = score_order(scores, seeds);
    let mut selected = vec![false; order.len()];
    let mut matchups = Vec::with_capacity(order.len());

    for group in score_groups(&order, scores) {
        matchups.extend(find_opponents_for_group(&mut selected, group)?);
    }

    Ok(matchups.into_iter().map(|pos| order[pos]).collect())
}

#[cfg(test)]
#[path = "pairing_tests.rs"]
mod pairing_tests;
