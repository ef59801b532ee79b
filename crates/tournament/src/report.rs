//! Text rendering of per-round scores and matchups
//!
//! Players are labelled by their strength, so a glance at a matchup line
//! shows whether the pairing put comparable players together.

use std::fmt::Write;

use swiss_core::TournamentOutcome;

fn label(strength: f64) -> String {
    format!("{:.2}", strength)
}

/// Render `strength:score` entries, best score first.
pub fn render_scores(strengths: &[f64], scores: &[u32]) -> String {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .cmp(&scores[a])
            .then(strengths[b].total_cmp(&strengths[a]))
    });

    let entries: Vec<String> = order
        .iter()
        .map(|&i| format!("{}:{}", label(strengths[i]), scores[i]))
        .collect();
    format!("score={}", entries.join(" "))
}

/// Render a round's matchup list as `AvB` pairs.
pub fn render_matchups(strengths: &[f64], matchups: &[usize]) -> String {
    let pairs: Vec<String> = matchups
        .chunks_exact(2)
        .map(|pair| format!("{}v{}", label(strengths[pair[0]]), label(strengths[pair[1]])))
        .collect();
    format!("matchups={}", pairs.join(" "))
}

/// Replay a finished tournament round by round: the standings going into
/// each round, that round's matchups, then the final standings and distances.
pub fn render_rounds(outcome: &TournamentOutcome) -> String {
    let strengths = outcome.players.strengths();
    let mut scores = vec![0u32; strengths.len()];
    let mut out = String::new();

    for (i, round) in outcome.rounds.iter().enumerate() {
        let _ = writeln!(out, "round {}", i + 1);
        let _ = writeln!(out, "  {}", render_scores(&strengths, &scores));
        let _ = writeln!(out, "  {}", render_matchups(&strengths, &round.matchups));
        for result in &round.results {
            scores[result.winner] += 1;
        }
    }

    let _ = writeln!(out, "final");
    let _ = writeln!(out, "  {}", render_scores(&strengths, &outcome.scores()));
    let _ = writeln!(out, "  distance={:?}", outcome.distances());
    out
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
