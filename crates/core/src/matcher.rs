//! Match finder - detects runs of identical pieces
//!
//! A run starts at a cell when the next two cells along the axis (to the right
//! for rows, above for columns) hold the same piece. Only maximal runs are
//! reported: a cell whose predecessor on the same axis holds the same piece is
//! inside a run, not at its start.
//!
//! Horizontal and vertical runs are independent. A cell at the crossing of an
//! L, T or plus shape belongs to two matches and both are reported, so the
//! cell's piece is counted once per run when scoring.

use crate::grid::Grid;
use crate::types::{Axis, Cell, Match, PieceType, MIN_MATCH_LEN};

/// Length of the maximal run starting at `cell` along `axis`, or `None` if the
/// cell does not start a run of at least [`MIN_MATCH_LEN`].
#[inline]
fn run_from(grid: &Grid, cell: Cell, axis: Axis) -> Option<(PieceType, u8)> {
    let piece = grid.piece_at(cell)?;
    let (dx, dy) = axis.step();

    if grid.piece_at(cell.offset(-dx, -dy)) == Some(piece) {
        return None;
    }

    let mut len: u8 = 1;
    let mut next = cell.offset(dx, dy);
    while grid.piece_at(next) == Some(piece) {
        len += 1;
        next = next.offset(dx, dy);
    }

    (len >= MIN_MATCH_LEN).then_some((piece, len))
}

/// Whether a run of three starts at `cell` along `axis` (no extension, no
/// maximality check)
#[inline]
fn starts_triple(grid: &Grid, cell: Cell, axis: Axis) -> bool {
    let Some(piece) = grid.piece_at(cell) else {
        return false;
    };
    let (dx, dy) = axis.step();
    grid.piece_at(cell.offset(dx, dy)) == Some(piece)
        && grid.piece_at(cell.offset(2 * dx, 2 * dy)) == Some(piece)
}

/// Find every maximal run on the grid.
///
/// Order is row-major by start cell, horizontal before vertical at the same start.
pub fn find_matches(grid: &Grid) -> Vec<Match> {
    let mut out = Vec::new();
    find_matches_into(grid, &mut out);
    out
}

/// Like [`find_matches`], reusing the caller's buffer
pub fn find_matches_into(grid: &Grid, out: &mut Vec<Match>) {
    out.clear();
    for cell in grid.cells() {
        for axis in [Axis::Horizontal, Axis::Vertical] {
            if let Some((piece, len)) = run_from(grid, cell, axis) {
                out.push(Match {
                    piece,
                    axis,
                    start: cell,
                    len,
                });
            }
        }
    }
}

/// Whether any run exists. Stops at the first one found and does not allocate.
pub fn has_any_match(grid: &Grid) -> bool {
    grid.cells().any(|cell| {
        starts_triple(grid, cell, Axis::Horizontal) || starts_triple(grid, cell, Axis::Vertical)
    })
}
