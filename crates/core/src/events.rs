//! Resolution events
//!
//! The engine resolves a swap synchronously. For presentation replay it records
//! what happened, in order, so a renderer can animate the same sequence at its
//! own pace.

use crate::grid::Grid;
use crate::types::{Cell, Match};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionEvent {
    /// Two cells were exchanged for validation
    Swapped { a: Cell, b: Cell },
    /// The swap produced no match and was undone
    Reverted { a: Cell, b: Cell },
    /// Matched cells were destroyed
    Cleared {
        pass: u32,
        matches: Vec<Match>,
        score_delta: u32,
    },
    /// Empty cells were refilled; `grid` is the board after the refill
    Refilled { pass: u32, filled: u32, grid: Grid },
}

impl ResolutionEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionEvent::Swapped { .. } => "swapped",
            ResolutionEvent::Reverted { .. } => "reverted",
            ResolutionEvent::Cleared { .. } => "cleared",
            ResolutionEvent::Refilled { .. } => "refilled",
        }
    }
}
