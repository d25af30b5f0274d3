use crate::types::{Cell, EngineState};

/// Owned, render-ready copy of a board
///
/// `rows` holds piece codes (0 = empty, see [`crate::types::PieceType::code`])
/// with the top row first, the order a renderer draws them in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    pub width: u8,
    pub height: u8,
    pub rows: Vec<Vec<u8>>,
    pub score: u32,
    pub state: EngineState,
    pub pending: Option<Cell>,
    pub has_valid_move: bool,
}

impl BoardSnapshot {
    /// Whether the board accepts input
    pub fn playable(&self) -> bool {
        !self.state.is_busy()
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            rows: Vec::new(),
            score: 0,
            state: EngineState::Idle,
            pending: None,
            has_valid_move: false,
        }
    }
}
