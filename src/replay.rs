//! Replay module - line-delimited JSON records of a round
//!
//! Every record is one JSON object per line with a `type` tag and a monotonic
//! `seq`, so a presentation layer (or a test) can replay the round at its own
//! pace. Boards are written as strings of piece codes, top row first, `.` for
//! an empty cell.

use serde::{Deserialize, Serialize};

use crate::core::{Grid, ResolutionEvent};
use crate::session::RoundSummary;
use crate::types::{Cell, Match, SelectionOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRecord {
    pub x: i16,
    pub y: i16,
}

impl From<Cell> for CellRecord {
    fn from(value: Cell) -> Self {
        Self {
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub piece: String,
    pub axis: String,
    pub start: CellRecord,
    pub len: u8,
}

impl From<&Match> for MatchRecord {
    fn from(value: &Match) -> Self {
        Self {
            piece: value.piece.as_str().to_string(),
            axis: value.axis.as_str().to_string(),
            start: value.start.into(),
            len: value.len,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplayRecord {
    RoundStart {
        round: u32,
        seed: u32,
        width: u8,
        height: u8,
        palette: u8,
        refill: String,
        high_score: u32,
        board: Vec<String>,
    },
    Select {
        round: u32,
        cell: CellRecord,
        outcome: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        score_delta: Option<u32>,
        score: u32,
    },
    Swapped {
        round: u32,
        a: CellRecord,
        b: CellRecord,
    },
    Reverted {
        round: u32,
        a: CellRecord,
        b: CellRecord,
    },
    Cleared {
        round: u32,
        pass: u32,
        matches: Vec<MatchRecord>,
        score_delta: u32,
    },
    Refilled {
        round: u32,
        pass: u32,
        filled: u32,
        board: Vec<String>,
    },
    RoundEnd {
        round: u32,
        final_score: u32,
        previous_high: u32,
        high_score: u32,
        new_record: bool,
        aborted: bool,
    },
}

impl ReplayRecord {
    pub fn from_event(round: u32, event: &ResolutionEvent) -> Self {
        match event {
            ResolutionEvent::Swapped { a, b } => ReplayRecord::Swapped {
                round,
                a: (*a).into(),
                b: (*b).into(),
            },
            ResolutionEvent::Reverted { a, b } => ReplayRecord::Reverted {
                round,
                a: (*a).into(),
                b: (*b).into(),
            },
            ResolutionEvent::Cleared {
                pass,
                matches,
                score_delta,
            } => ReplayRecord::Cleared {
                round,
                pass: *pass,
                matches: matches.iter().map(MatchRecord::from).collect(),
                score_delta: *score_delta,
            },
            ResolutionEvent::Refilled { pass, filled, grid } => ReplayRecord::Refilled {
                round,
                pass: *pass,
                filled: *filled,
                board: board_rows(grid),
            },
        }
    }

    pub fn select(round: u32, cell: Cell, outcome: SelectionOutcome, score: u32) -> Self {
        let score_delta = match outcome {
            SelectionOutcome::SwapAccepted { score_delta } => Some(score_delta),
            _ => None,
        };
        ReplayRecord::Select {
            round,
            cell: cell.into(),
            outcome: outcome.as_str().to_string(),
            score_delta,
            score,
        }
    }

    pub fn round_end(round: u32, summary: &RoundSummary) -> Self {
        ReplayRecord::RoundEnd {
            round,
            final_score: summary.final_score,
            previous_high: summary.previous_high,
            high_score: summary.high_score,
            new_record: summary.new_record,
            aborted: summary.aborted,
        }
    }
}

/// One output line: a sequence number plus the record fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayLine {
    pub seq: u64,
    #[serde(flatten)]
    pub record: ReplayRecord,
}

/// Numbers records and turns them into JSON lines
#[derive(Debug, Default)]
pub struct ReplayWriter {
    seq: u64,
}

impl ReplayWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, record: ReplayRecord) -> Result<String, serde_json::Error> {
        self.seq += 1;
        serde_json::to_string(&ReplayLine {
            seq: self.seq,
            record,
        })
    }
}

/// Board rows as piece-code strings, top row first
pub fn board_rows(grid: &Grid) -> Vec<String> {
    let mut rows = grid.to_rows();
    rows.reverse();
    rows
}

pub fn parse_line(json: &str) -> Result<ReplayLine, serde_json::Error> {
    serde_json::from_str(json)
}
