//! Move discovery: which adjacent swaps would produce a match.

use crate::grid::Grid;
use crate::types::{Axis, Cell, PieceType, MIN_MATCH_LEN};

/// Piece at `c` as it would read with `a` and `b` exchanged
#[inline]
fn piece_after_swap(grid: &Grid, a: Cell, b: Cell, c: Cell) -> Option<PieceType> {
    if c == a {
        grid.piece_at(b)
    } else if c == b {
        grid.piece_at(a)
    } else {
        grid.piece_at(c)
    }
}

/// Whether `cell` would sit in a run after the exchange
fn run_through(grid: &Grid, a: Cell, b: Cell, cell: Cell) -> bool {
    let Some(piece) = piece_after_swap(grid, a, b, cell) else {
        return false;
    };
    [Axis::Horizontal, Axis::Vertical].into_iter().any(|axis| {
        let (dx, dy) = axis.step();
        let mut count: u8 = 1;
        for dir in [1i16, -1] {
            let mut c = cell.offset(dx * dir, dy * dir);
            while piece_after_swap(grid, a, b, c) == Some(piece) {
                count += 1;
                c = c.offset(dx * dir, dy * dir);
            }
        }
        count >= MIN_MATCH_LEN
    })
}

/// Whether swapping `a` and `b` creates a run through either cell.
///
/// Reads the grid as if the swap had happened; `grid` is never modified and
/// nothing is allocated.
pub fn swap_creates_match(grid: &Grid, a: Cell, b: Cell) -> bool {
    if !Grid::is_adjacent(a, b) || !grid.contains(a) || !grid.contains(b) {
        return false;
    }
    if grid.piece_at(a) == grid.piece_at(b) {
        return false;
    }
    run_through(grid, a, b, a) || run_through(grid, a, b, b)
}

/// Every swap (each unordered pair once, right and up neighbours) that would
/// create a run, in row-major order of the first cell.
pub fn find_valid_swaps(grid: &Grid) -> Vec<(Cell, Cell)> {
    let mut out = Vec::new();
    for cell in grid.cells() {
        for n in grid.neighbors(cell) {
            if n <= cell {
                continue;
            }
            if swap_creates_match(grid, cell, n) {
                out.push((cell, n));
            }
        }
    }
    out
}

/// Whether at least one productive swap exists.
pub fn has_valid_move(grid: &Grid) -> bool {
    grid.cells().any(|cell| {
        grid.neighbors(cell)
            .into_iter()
            .any(|n| n > cell && swap_creates_match(grid, cell, n))
    })
}
