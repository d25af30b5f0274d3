//! Scoring module - flat, additive match scoring
//!
//! A resolution pass is worth the sum of its run lengths. There is no cascade
//! multiplier and no combo bonus. Runs that cross share a cell, and that cell
//! counts once for each run.

use crate::types::Match;

/// Points for a single run
pub fn match_score(m: &Match) -> u32 {
    m.len as u32
}

/// Points for one resolution pass
pub fn pass_score(matches: &[Match]) -> u32 {
    matches
        .iter()
        .fold(0u32, |acc, m| acc.saturating_add(match_score(m)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Axis, Cell, PieceType};

    fn run(axis: Axis, len: u8) -> Match {
        Match {
            piece: PieceType::Red,
            axis,
            start: Cell::new(0, 0),
            len,
        }
    }

    #[test]
    fn test_pass_score_sums_lengths() {
        assert_eq!(pass_score(&[]), 0);
        assert_eq!(pass_score(&[run(Axis::Horizontal, 3)]), 3);
        assert_eq!(
            pass_score(&[run(Axis::Horizontal, 4), run(Axis::Vertical, 5)]),
            9
        );
    }

    #[test]
    fn test_crossing_cell_counts_twice() {
        // 3 + 3 for an L sharing its corner, although only 5 cells are destroyed.
        let l = [run(Axis::Horizontal, 3), run(Axis::Vertical, 3)];
        assert_eq!(pass_score(&l), 6);
    }
}
