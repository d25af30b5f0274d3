//! Error kinds surfaced by the board engine.

use thiserror::Error;

use crate::types::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Cell coordinates outside the grid.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i16,
        y: i16,
        width: u8,
        height: u8,
    },

    /// `attempt_swap` called with cells that do not share an edge.
    #[error("cells ({}, {}) and ({}, {}) are not adjacent", .a.x, .a.y, .b.x, .b.y)]
    NotAdjacent { a: Cell, b: Cell },

    #[error("palette of {size} piece types is too small; at least 3 are required")]
    InsufficientPaletteSize { size: u8 },

    #[error("palette of {size} piece types exceeds the {max} available")]
    PaletteTooLarge { size: u8, max: u8 },

    #[error("grid dimensions {width}x{height} are invalid")]
    InvalidDimensions { width: u8, height: u8 },

    /// The refill strategy left empty slots on the board.
    #[error("refill left {empty} empty slots after pass {pass}")]
    IncompleteRefill { pass: u32, empty: u32 },

    /// Cascade still produced matches after the configured number of passes.
    #[error("cascade did not settle after {passes} passes")]
    ResolutionDidNotConverge { passes: u32 },
}
