//! Session module - one timed round around a board engine
//!
//! The session owns the countdown and the high-score handoff. The board engine
//! knows nothing about either: the session stops forwarding selections once the
//! clock runs out, and reports the final score to the store at the end.

use crate::config::RoundConfig;
use crate::core::{BoardEngine, EngineError};
use crate::store::HighScoreStore;
use crate::types::{Cell, SelectionOutcome, HIGH_SCORE_KEY};

/// Outcome of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundSummary {
    pub final_score: u32,
    /// Best score read from the store when the round started
    pub previous_high: u32,
    /// Best score after this round
    pub high_score: u32,
    pub new_record: bool,
    /// The round ended because a cascade failed to settle
    pub aborted: bool,
}

/// A timed round
#[derive(Debug)]
pub struct Session<S: HighScoreStore> {
    engine: BoardEngine,
    store: S,
    round_ms: u32,
    remaining_ms: u32,
    previous_high: u32,
    summary: Option<RoundSummary>,
}

impl<S: HighScoreStore> Session<S> {
    /// Create the board and read the stored high score
    pub fn start(config: &RoundConfig, store: S) -> Result<Self, EngineError> {
        let engine = BoardEngine::new_round(&config.board)?;
        Ok(Self::with_engine(engine, config.round_ms, store))
    }

    /// Wrap an existing engine (prepared boards in tests and tools)
    pub fn with_engine(engine: BoardEngine, round_ms: u32, store: S) -> Self {
        let previous_high = store.load(HIGH_SCORE_KEY).unwrap_or(0);
        Self {
            engine,
            store,
            round_ms,
            remaining_ms: round_ms,
            previous_high,
            summary: None,
        }
    }

    /// Advance the clock. Returns whether the round is still running.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.summary.is_some() {
            return false;
        }
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        if self.remaining_ms == 0 {
            self.finish();
            return false;
        }
        true
    }

    /// Forward a selection to the board while the round runs.
    ///
    /// After the clock expires every selection is rejected. A cascade that fails
    /// (no convergence, or a refill that leaves holes) ends the round and the
    /// error is returned.
    pub fn select_cell(&mut self, cell: Cell) -> Result<SelectionOutcome, EngineError> {
        if self.summary.is_some() {
            return Ok(SelectionOutcome::Rejected);
        }
        match self.engine.select_cell(cell) {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                self.conclude(true);
                Err(err)
            }
        }
    }

    /// End the round now (idempotent) and settle the high score
    pub fn finish(&mut self) -> RoundSummary {
        self.conclude(false)
    }

    fn conclude(&mut self, aborted: bool) -> RoundSummary {
        if let Some(summary) = self.summary {
            return summary;
        }

        let final_score = self.engine.score();
        let new_record = final_score > self.previous_high;
        if new_record {
            self.store.save(HIGH_SCORE_KEY, final_score);
        }

        let summary = RoundSummary {
            final_score,
            previous_high: self.previous_high,
            high_score: self.previous_high.max(final_score),
            new_record,
            aborted,
        };
        self.summary = Some(summary);
        summary
    }

    pub fn is_running(&self) -> bool {
        self.summary.is_none()
    }

    pub fn summary(&self) -> Option<RoundSummary> {
        self.summary
    }

    pub fn score(&self) -> u32 {
        self.engine.score()
    }

    /// High score as read at round start
    pub fn previous_high(&self) -> u32 {
        self.previous_high
    }

    pub fn round_ms(&self) -> u32 {
        self.round_ms
    }

    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }

    /// Remaining time in whole seconds, rounded to nearest (HUD display)
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_ms.saturating_add(500) / 1000
    }

    pub fn engine(&self) -> &BoardEngine {
        &self.engine
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
