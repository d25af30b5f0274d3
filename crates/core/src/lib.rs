//! Core board logic - pure, deterministic, and testable
//!
//! This crate contains the match-3 rules: the grid, match detection, swap
//! validation, cascading removal and refill, and scoring. It has **no
//! dependencies** on rendering, input, timers or storage, making it:
//!
//! - **Deterministic**: the same seed produces the same board, refills and score
//! - **Synchronous**: a swap is fully resolved when the call returns
//! - **Portable**: usable from a terminal, a GUI, a headless simulator or tests
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size board of optional pieces with bounds-checked access
//! - [`matcher`]: finds maximal horizontal and vertical runs of three or more
//! - [`generate`]: fills a new board with no initial runs
//! - [`refill`]: respawn-in-place and gravity-collapse refill policies
//! - [`engine`]: selection state machine, optimistic swap, cascade loop
//! - [`moves`]: which swaps would produce a match
//! - [`scoring`]: flat additive scoring by run length
//! - [`events`]: ordered log of what a swap did, for presentation replay
//! - [`rng`]: seeded LCG and palette-bound piece source
//!
//! # Example
//!
//! ```
//! use match3_core::{BoardConfig, BoardEngine};
//! use match3_core::types::{Cell, SelectionOutcome};
//!
//! let mut engine = BoardEngine::new_round(&BoardConfig::default()).unwrap();
//!
//! // First selection is stored, second one (adjacent) triggers a swap.
//! assert_eq!(engine.select_cell(Cell::new(0, 0)).unwrap(), SelectionOutcome::Pending);
//! let outcome = engine.select_cell(Cell::new(1, 0)).unwrap();
//! assert!(outcome.is_swap());
//! ```

pub mod engine;
pub mod error;
pub mod events;
pub mod generate;
pub mod grid;
pub mod matcher;
pub mod moves;
pub mod refill;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use match3_types as types;

// Re-export commonly used types for convenience
pub use engine::{BoardConfig, BoardEngine};
pub use error::EngineError;
pub use events::ResolutionEvent;
pub use generate::generate;
pub use grid::Grid;
pub use matcher::{find_matches, has_any_match};
pub use moves::{find_valid_swaps, has_valid_move};
pub use refill::Refill;
pub use rng::{Palette, PieceSource, SimpleRng};
pub use scoring::pass_score;
pub use snapshot::BoardSnapshot;
