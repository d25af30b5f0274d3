//! Initial board generation.
//!
//! Cells are filled in row-major order from the bottom row. A draw is rejected
//! when it would complete a run of three with the two cells already placed to
//! its left or the two already placed below it; those are the only placed
//! cells a new piece can line up with, so the finished board has no matches.

use crate::error::EngineError;
use crate::grid::Grid;
use crate::rng::PieceSource;
use crate::types::{Cell, PieceType};

/// Whether placing `piece` at `cell` would complete a run with the already
/// placed cells to the left or below.
fn completes_run(grid: &Grid, cell: Cell, piece: PieceType) -> bool {
    let pair =
        |a: Cell, b: Cell| grid.piece_at(a) == Some(piece) && grid.piece_at(b) == Some(piece);
    pair(cell.offset(-1, 0), cell.offset(-2, 0)) || pair(cell.offset(0, -1), cell.offset(0, -2))
}

/// Build a fully occupied `width x height` grid with no runs.
///
/// The palette is validated when the [`PieceSource`] is built, so at least
/// three types are available and at most two are ever excluded per cell.
pub fn generate(width: u8, height: u8, source: &mut PieceSource) -> Result<Grid, EngineError> {
    let mut grid = Grid::new(width, height)?;
    let cells: Vec<Cell> = grid.cells().collect();
    for cell in cells {
        let mut piece = source.draw();
        while completes_run(&grid, cell, piece) {
            piece = source.draw();
        }
        grid.set(cell, Some(piece))?;
    }
    Ok(grid)
}
