//! Seeding players by strength

/// Player indices sorted strongest first.
///
/// The sort is stable, so equal strengths keep their original index order.
pub fn strength_order(strengths: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..strengths.len()).collect();
    order.sort_by(|&a, &b| strengths[b].total_cmp(&strengths[a]));
    order
}

/// Invert a permutation: `pos[order[k]] == k`.
///
/// `order` must be a permutation of `0..order.len()`.
pub fn rank_positions(order: &[usize]) -> Vec<usize> {
    let mut pos = vec![0; order.len()];
    for (k, &v) in order.iter().enumerate() {
        pos[v] = k;
    }
    pos
}

/// Returns `seed` such that `seed[i]` is the seed of player `i`, 0 being the
/// strongest player.
pub fn assign_seeds(strengths: &[f64]) -> Vec<usize> {
    rank_positions(&strength_order(strengths))
}

#[cfg(test)]
#[path = "seeding_tests.rs"]
mod seeding_tests;
