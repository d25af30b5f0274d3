//! Grid module - the board's piece storage
//!
//! The grid is a `width x height` rectangle where each slot is empty or holds a
//! piece type. Storage is a flat vector in row-major order (`y * width + x`) so a
//! scan touches memory sequentially. Dimensions never change after construction.
//!
//! Coordinates: `x` runs 0..width left to right, `y` runs 0..height bottom to top.

use arrayvec::ArrayVec;

use crate::error::EngineError;
use crate::types::{Cell, PieceType};

/// A fixed-size board of optional pieces
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: u8,
    height: u8,
    /// Flat array of slots, row-major order (y * width + x)
    cells: Vec<Option<PieceType>>,
}

impl Grid {
    /// Create an empty grid. Both dimensions must be non-zero.
    pub fn new(width: u8, height: u8) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        })
    }

    /// Build a grid from rows of characters.
    ///
    /// `rows[0]` is the bottom row (`y = 0`). Each character is a piece code
    /// (see [`PieceType::from_char`]); anything else is an empty slot.
    ///
    /// ```
    /// use match3_core::Grid;
    /// use match3_core::types::{Cell, PieceType};
    ///
    /// let grid = Grid::from_rows(&["rgb", "r.b"]).unwrap();
    /// assert_eq!(grid.get(Cell::new(1, 0)).unwrap(), Some(PieceType::Green));
    /// assert_eq!(grid.get(Cell::new(1, 1)).unwrap(), None);
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, EngineError> {
        let height = u8::try_from(rows.len()).unwrap_or(0);
        let width = rows
            .first()
            .and_then(|r| u8::try_from(r.chars().count()).ok())
            .unwrap_or(0);

        let mut grid = Self::new(width, height)?;
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width as usize {
                return Err(EngineError::InvalidDimensions { width, height });
            }
            for (x, c) in row.chars().enumerate() {
                grid.cells[y * width as usize + x] = PieceType::from_char(c);
            }
        }
        Ok(grid)
    }

    /// Calculate flat index from a cell, `None` if out of bounds
    #[inline(always)]
    fn index(&self, cell: Cell) -> Option<usize> {
        if cell.x < 0 || cell.y < 0 || cell.x >= self.width as i16 || cell.y >= self.height as i16 {
            return None;
        }
        Some(cell.y as usize * self.width as usize + cell.x as usize)
    }

    #[inline]
    fn checked_index(&self, cell: Cell) -> Result<usize, EngineError> {
        self.index(cell).ok_or(EngineError::OutOfBounds {
            x: cell.x,
            y: cell.y,
            width: self.width,
            height: self.height,
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.index(cell).is_some()
    }

    /// Piece at `cell`
    pub fn get(&self, cell: Cell) -> Result<Option<PieceType>, EngineError> {
        self.checked_index(cell).map(|idx| self.cells[idx])
    }

    /// Piece at `cell`, treating off-board cells as empty
    #[inline]
    pub fn piece_at(&self, cell: Cell) -> Option<PieceType> {
        self.index(cell).and_then(|idx| self.cells[idx])
    }

    pub fn set(&mut self, cell: Cell, piece: Option<PieceType>) -> Result<(), EngineError> {
        let idx = self.checked_index(cell)?;
        self.cells[idx] = piece;
        Ok(())
    }

    /// Exchange the contents of two cells. No adjacency requirement.
    pub fn swap(&mut self, a: Cell, b: Cell) -> Result<(), EngineError> {
        let ia = self.checked_index(a)?;
        let ib = self.checked_index(b)?;
        self.cells.swap(ia, ib);
        Ok(())
    }

    /// Whether two cells share an edge (Manhattan distance 1)
    pub fn is_adjacent(a: Cell, b: Cell) -> bool {
        a.manhattan(b) == 1
    }

    /// In-bounds cells sharing an edge with `cell` (right, up, left, down)
    pub fn neighbors(&self, cell: Cell) -> ArrayVec<Cell, 4> {
        let mut out = ArrayVec::new();
        for (dx, dy) in [(1, 0), (0, 1), (-1, 0), (0, -1)] {
            let n = cell.offset(dx, dy);
            if self.contains(n) {
                out.push(n);
            }
        }
        out
    }

    /// All cells in row-major order (bottom row first)
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let (w, h) = (self.width as i16, self.height as i16);
        (0..h).flat_map(move |y| (0..w).map(move |x| Cell::new(x, y)))
    }

    /// Number of empty slots
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Write compact codes (0 = empty) row by row, top row first, for display.
    ///
    /// Reuses the rows already in `out`, so a warm buffer is refreshed without
    /// allocating.
    pub fn write_codes(&self, out: &mut Vec<Vec<u8>>) {
        let width = self.width as usize;
        out.resize_with(self.height as usize, Vec::new);
        for (row, y) in out.iter_mut().zip((0..self.height as usize).rev()) {
            let start = y * width;
            row.clear();
            row.extend(
                self.cells[start..start + width]
                    .iter()
                    .map(|c| c.map_or(0, |p| p.code())),
            );
        }
    }

    /// Render as rows of characters, bottom row first (inverse of [`Grid::from_rows`])
    pub fn to_rows(&self) -> Vec<String> {
        let width = self.width as usize;
        (0..self.height as usize)
            .map(|y| {
                let start = y * width;
                self.cells[start..start + width]
                    .iter()
                    .map(|c| c.map_or('.', |p| p.as_char()))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.index(Cell::new(0, 0)), Some(0));
        assert_eq!(grid.index(Cell::new(3, 0)), Some(3));
        assert_eq!(grid.index(Cell::new(0, 1)), Some(4));
        assert_eq!(grid.index(Cell::new(3, 2)), Some(11));
        assert_eq!(grid.index(Cell::new(-1, 0)), None);
        assert_eq!(grid.index(Cell::new(4, 0)), None);
        assert_eq!(grid.index(Cell::new(0, 3)), None);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(EngineError::InvalidDimensions { width: 0, height: 5 })
        );
        assert!(Grid::from_rows(&[]).is_err());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert!(Grid::from_rows(&["rgb", "rg"]).is_err());
    }

    #[test]
    fn test_flat_layout() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(Cell::new(2, 1), Some(PieceType::Blue)).unwrap();
        assert_eq!(grid.cells[5], Some(PieceType::Blue));
    }

    #[test]
    fn test_rows_roundtrip() {
        let rows = ["rgby", "p.ow", "cccr"];
        let grid = Grid::from_rows(&rows).unwrap();
        assert_eq!(grid.to_rows(), rows.to_vec());
        assert_eq!(grid.empty_count(), 1);
    }

    #[test]
    fn test_neighbors_at_corner_and_center() {
        let grid = Grid::new(3, 3).unwrap();
        assert_eq!(grid.neighbors(Cell::new(0, 0)).len(), 2);
        assert_eq!(grid.neighbors(Cell::new(1, 1)).len(), 4);
        assert_eq!(grid.neighbors(Cell::new(2, 1)).len(), 3);
    }

    #[test]
    fn test_write_codes_top_row_first() {
        let grid = Grid::from_rows(&["r.", "gb"]).unwrap();
        let mut out = Vec::new();
        grid.write_codes(&mut out);
        assert_eq!(out, vec![vec![2, 3], vec![1, 0]]);
    }
}
