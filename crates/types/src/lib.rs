//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board engine, session clock, replay output).
//!
//! # Coordinates
//!
//! A [`Cell`] is an `(x, y)` pair. `x` grows to the right and `y` grows upward:
//! row `y = 0` is the bottom of the board, which is where pieces settle when the
//! gravity refill collapses a column.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 8 | Board columns |
//! | `DEFAULT_HEIGHT` | 8 | Board rows |
//! | `DEFAULT_PALETTE_SIZE` | 5 | Distinct piece types in play |
//! | `MIN_PALETTE_SIZE` | 3 | Smallest palette that can avoid initial matches |
//! | `MIN_MATCH_LEN` | 3 | Shortest run that counts as a match |
//! | `MAX_CASCADE_PASSES` | 1000 | Cascade iteration cap |
//! | `ROUND_MS` | 60000 | Round length |
//!
//! # Examples
//!
//! ```
//! use match3_types::{Cell, PieceType, SelectionOutcome};
//!
//! let piece = PieceType::from_str("g").unwrap();
//! assert_eq!(piece, PieceType::Green);
//! assert_eq!(piece.as_char(), 'g');
//!
//! let a = Cell::new(2, 0);
//! assert_eq!(a.manhattan(Cell::new(2, 1)), 1);
//!
//! assert!(SelectionOutcome::SwapAccepted { score_delta: 3 }.is_swap());
//! ```

/// Default board width in cells
pub const DEFAULT_WIDTH: u8 = 8;

/// Default board height in cells
pub const DEFAULT_HEIGHT: u8 = 8;

/// Default number of piece types in play
pub const DEFAULT_PALETTE_SIZE: u8 = 5;

/// Smallest palette for which initial generation is guaranteed to finish
pub const MIN_PALETTE_SIZE: u8 = 3;

/// Shortest run of identical pieces that counts as a match
pub const MIN_MATCH_LEN: u8 = 3;

/// Default cap on destroy/refill passes in a single cascade
pub const MAX_CASCADE_PASSES: u32 = 1000;

/// Round length in milliseconds (one minute)
pub const ROUND_MS: u32 = 60_000;

/// Store key under which the best score is kept
pub const HIGH_SCORE_KEY: &str = "HighScore";

/// The piece types a board can be filled with
///
/// A palette of size `n` uses the first `n` entries of [`PieceType::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceType {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
    White,
    Cyan,
}

impl PieceType {
    /// Every piece type, in palette order
    pub const ALL: [PieceType; 8] = [
        PieceType::Red,
        PieceType::Green,
        PieceType::Blue,
        PieceType::Yellow,
        PieceType::Purple,
        PieceType::Orange,
        PieceType::White,
        PieceType::Cyan,
    ];

    /// Parse piece type from its one-letter code or full name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use match3_types::PieceType;
    ///
    /// assert_eq!(PieceType::from_str("r"), Some(PieceType::Red));
    /// assert_eq!(PieceType::from_str("Purple"), Some(PieceType::Purple));
    /// assert_eq!(PieceType::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "r" | "red" => Some(PieceType::Red),
            "g" | "green" => Some(PieceType::Green),
            "b" | "blue" => Some(PieceType::Blue),
            "y" | "yellow" => Some(PieceType::Yellow),
            "p" | "purple" => Some(PieceType::Purple),
            "o" | "orange" => Some(PieceType::Orange),
            "w" | "white" => Some(PieceType::White),
            "c" | "cyan" => Some(PieceType::Cyan),
            _ => None,
        }
    }

    /// Parse a single board character; `'.'` is handled by callers as an empty cell
    pub fn from_char(c: char) -> Option<Self> {
        let mut buf = [0u8; 4];
        Self::from_str(c.encode_utf8(&mut buf))
    }

    /// One-letter lowercase code
    pub fn as_char(&self) -> char {
        match self {
            PieceType::Red => 'r',
            PieceType::Green => 'g',
            PieceType::Blue => 'b',
            PieceType::Yellow => 'y',
            PieceType::Purple => 'p',
            PieceType::Orange => 'o',
            PieceType::White => 'w',
            PieceType::Cyan => 'c',
        }
    }

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceType::Red => "red",
            PieceType::Green => "green",
            PieceType::Blue => "blue",
            PieceType::Yellow => "yellow",
            PieceType::Purple => "purple",
            PieceType::Orange => "orange",
            PieceType::White => "white",
            PieceType::Cyan => "cyan",
        }
    }

    /// Compact board code: 0 is reserved for an empty cell, pieces start at 1
    pub fn code(&self) -> u8 {
        match self {
            PieceType::Red => 1,
            PieceType::Green => 2,
            PieceType::Blue => 3,
            PieceType::Yellow => 4,
            PieceType::Purple => 5,
            PieceType::Orange => 6,
            PieceType::White => 7,
            PieceType::Cyan => 8,
        }
    }
}

/// A board coordinate
///
/// Signed so that neighbour arithmetic (`x - 1`) can step off the board and be
/// rejected by the grid's bounds check instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Cell shifted by `(dx, dy)`, clamped to the `i16` range
    pub const fn offset(self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Manhattan distance between two cells
    pub fn manhattan(self, other: Cell) -> u32 {
        let dx = (self.x as i32 - other.x as i32).unsigned_abs();
        let dy = (self.y as i32 - other.y as i32).unsigned_abs();
        dx + dy
    }
}

/// Direction of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right along a row
    Horizontal,
    /// Bottom to top along a column
    Vertical,
}

impl Axis {
    /// Unit step along the axis
    pub const fn step(&self) -> (i16, i16) {
        match self {
            Axis::Horizontal => (1, 0),
            Axis::Vertical => (0, 1),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }
}

/// A maximal run of at least [`MIN_MATCH_LEN`] identical pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    pub piece: PieceType,
    pub axis: Axis,
    /// Leftmost cell for horizontal runs, bottom cell for vertical runs
    pub start: Cell,
    pub len: u8,
}

impl Match {
    /// Cells covered by the run, starting at `start`
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let (dx, dy) = self.axis.step();
        let start = self.start;
        (0..self.len as i16).map(move |i| start.offset(dx * i, dy * i))
    }

    /// Whether `cell` lies on this run
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells().any(|c| c == cell)
    }
}

/// Board engine state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineState {
    /// Nothing selected, ready for input
    Idle,
    /// One cell is pending, waiting for its swap partner
    AwaitingSecondSelection,
    /// Two cells have been exchanged and are being validated
    Swapping,
    /// Matches are being destroyed
    Resolving,
    /// Destroyed cells are being refilled
    Refilling,
}

impl EngineState {
    /// Whether a swap or cascade is in flight
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            EngineState::Swapping | EngineState::Resolving | EngineState::Refilling
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EngineState::Idle => "idle",
            EngineState::AwaitingSecondSelection => "awaitingSecondSelection",
            EngineState::Swapping => "swapping",
            EngineState::Resolving => "resolving",
            EngineState::Refilling => "refilling",
        }
    }
}

/// Result of nominating a cell (or a pair of cells) for a swap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionOutcome {
    /// First cell stored, waiting for the second
    Pending,
    /// The swap produced at least one match and the cascade settled
    SwapAccepted { score_delta: u32 },
    /// The swap produced no match and was undone
    SwapReverted,
    /// Selection ignored (engine busy, cell off the board, or partner not adjacent)
    Rejected,
}

impl SelectionOutcome {
    /// Whether two cells were actually exchanged (even if later reverted)
    pub fn is_swap(&self) -> bool {
        matches!(
            self,
            SelectionOutcome::SwapAccepted { .. } | SelectionOutcome::SwapReverted
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionOutcome::Pending => "pending",
            SelectionOutcome::SwapAccepted { .. } => "swapAccepted",
            SelectionOutcome::SwapReverted => "swapReverted",
            SelectionOutcome::Rejected => "rejected",
        }
    }
}

/// How destroyed cells are replaced after a resolution pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RefillPolicy {
    /// Every empty cell gets a fresh random piece in place
    Respawn,
    /// Pieces fall toward row 0, fresh pieces enter at the top of each column
    #[default]
    Gravity,
}

impl RefillPolicy {
    /// Parse from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use match3_types::RefillPolicy;
    ///
    /// assert_eq!(RefillPolicy::from_str("gravity"), Some(RefillPolicy::Gravity));
    /// assert_eq!(RefillPolicy::from_str("Respawn"), Some(RefillPolicy::Respawn));
    /// assert_eq!(RefillPolicy::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "respawn" | "a" => Some(RefillPolicy::Respawn),
            "gravity" | "b" => Some(RefillPolicy::Gravity),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RefillPolicy::Respawn => "respawn",
            RefillPolicy::Gravity => "gravity",
        }
    }
}
