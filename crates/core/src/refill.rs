//! Refill policies - replace destroyed pieces after a resolution pass
//!
//! Both policies sit behind the [`Refill`] trait so the cascade loop never needs
//! to know which one is in use.

use crate::grid::Grid;
use crate::rng::PieceSource;
use crate::types::{Cell, RefillPolicy};

/// Strategy for filling empty slots
pub trait Refill {
    /// Fill every empty slot of `grid`. Returns true if anything changed.
    fn refill(&mut self, grid: &mut Grid, source: &mut PieceSource) -> bool;
}

impl Refill for RefillPolicy {
    fn refill(&mut self, grid: &mut Grid, source: &mut PieceSource) -> bool {
        match self {
            RefillPolicy::Respawn => respawn(grid, source),
            RefillPolicy::Gravity => collapse(grid, source),
        }
    }
}

/// Policy A: every empty slot gets a fresh draw where it is. No movement.
pub fn respawn(grid: &mut Grid, source: &mut PieceSource) -> bool {
    let mut modified = false;
    let (w, h) = (grid.width() as i16, grid.height() as i16);
    for y in 0..h {
        for x in 0..w {
            let cell = Cell::new(x, y);
            if grid.piece_at(cell).is_none() {
                // In bounds by construction of the loop.
                let _ = grid.set(cell, Some(source.draw()));
                modified = true;
            }
        }
    }
    modified
}

/// Policy B: per column, surviving pieces fall toward row 0 keeping their order,
/// then the vacated top slots are filled bottom-up with fresh draws.
///
/// Uses a two-pointer sweep: `write_y` trails `read_y` and receives each piece found.
pub fn collapse(grid: &mut Grid, source: &mut PieceSource) -> bool {
    let mut modified = false;
    let (w, h) = (grid.width() as i16, grid.height() as i16);
    for x in 0..w {
        let mut write_y = 0i16;
        for read_y in 0..h {
            let Some(piece) = grid.piece_at(Cell::new(x, read_y)) else {
                continue;
            };
            if write_y != read_y {
                let _ = grid.set(Cell::new(x, write_y), Some(piece));
                let _ = grid.set(Cell::new(x, read_y), None);
                modified = true;
            }
            write_y += 1;
        }
        for y in write_y..h {
            let _ = grid.set(Cell::new(x, y), Some(source.draw()));
            modified = true;
        }
    }
    modified
}
