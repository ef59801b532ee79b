//! Nearest-unselected search over a round's selection bitmap

use crate::error::PairingError;

/// Find the free position nearest to `start`, probing rightward first.
///
/// Scans from `start` to the end of `selected`; only when the whole right side
/// is taken does it walk left from `start` one place at a time. The scan covers
/// the entire bitmap, not just the caller's score group, so an odd-sized group
/// spills its leftover player into a neighbouring group.
pub fn find_nearest_unselected(selected: &[bool], start: usize) -> Result<usize, PairingError> {
    if start >= selected.len() {
        return Err(PairingError::StartOutOfRange {
            start,
            len: selected.len(),
        });
    }

    (start..selected.len())
        .find(|&i| !selected[i])
        .or_else(|| (0..=start).rev().find(|&i| !selected[i]))
        .ok_or_else(|| PairingError::Exhausted {
            start,
            selected: selected.to_vec(),
        })
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
