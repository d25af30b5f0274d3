//! Board engine - selection, swap validation, cascade resolution
//!
//! This module ties together the grid, match finder, refill policy and scoring.
//! It owns the board for one round and exposes the state machine the input
//! layer drives:
//!
//! ```text
//! Idle --select--> AwaitingSecondSelection --select adjacent--> Swapping
//!   ^                     |  ^                                    |
//!   |                     +--+ select non-adjacent (Rejected)     | no match: revert
//!   |                                                             v
//!   +------------------------ Resolving <--> Refilling <---- match found
//! ```
//!
//! Everything runs synchronously: a call to [`BoardEngine::select_cell`] returns
//! only once the board is stable again. The busy states are still tracked so a
//! request arriving mid-cascade (or after an aborted cascade) is rejected.

use crate::error::EngineError;
use crate::events::ResolutionEvent;
use crate::generate::generate;
use crate::grid::Grid;
use crate::matcher::{find_matches_into, has_any_match};
use crate::moves::has_valid_move;
use crate::refill::Refill;
use crate::rng::{Palette, PieceSource};
use crate::scoring::pass_score;
use crate::snapshot::BoardSnapshot;
use crate::types::*;

/// Parameters for a new round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub width: u8,
    pub height: u8,
    pub palette_size: u8,
    pub refill: RefillPolicy,
    pub seed: u32,
    /// Cap on destroy/refill passes per cascade
    pub max_passes: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            palette_size: DEFAULT_PALETTE_SIZE,
            refill: RefillPolicy::default(),
            seed: 1,
            max_passes: MAX_CASCADE_PASSES,
        }
    }
}

/// Board state for one round: grid, score, selection and engine state
#[derive(Debug, Clone)]
pub struct BoardEngine<R: Refill = RefillPolicy> {
    grid: Grid,
    source: PieceSource,
    refill: R,
    state: EngineState,
    pending: Option<Cell>,
    score: u32,
    max_passes: u32,
    /// Swaps that were kept (produced a match)
    swaps_accepted: u32,
    /// Swaps that were undone
    swaps_reverted: u32,
    /// Matches found during the most recent cascade, reused between passes
    scratch: Vec<Match>,
    record_events: bool,
    events: Vec<ResolutionEvent>,
}

impl BoardEngine<RefillPolicy> {
    /// Start a round: validate the palette and dimensions, then generate a
    /// full board with no runs.
    pub fn new_round(config: &BoardConfig) -> Result<Self, EngineError> {
        let palette = Palette::new(config.palette_size)?;
        let mut source = PieceSource::new(palette, config.seed);
        let grid = generate(config.width, config.height, &mut source)?;
        Ok(Self::assemble(grid, source, config.refill, config.max_passes))
    }
}

impl<R: Refill> BoardEngine<R> {
    /// Build an engine around an existing grid and a custom refill strategy.
    ///
    /// The grid is taken as-is: runs already on it are resolved by the first
    /// accepted swap or an explicit [`BoardEngine::resolve_cascade`].
    pub fn with_grid(grid: Grid, palette: Palette, refill: R, seed: u32) -> Self {
        Self::assemble(grid, PieceSource::new(palette, seed), refill, MAX_CASCADE_PASSES)
    }

    fn assemble(grid: Grid, source: PieceSource, refill: R, max_passes: u32) -> Self {
        Self {
            grid,
            source,
            refill,
            state: EngineState::Idle,
            pending: None,
            score: 0,
            max_passes,
            swaps_accepted: 0,
            swaps_reverted: 0,
            scratch: Vec::new(),
            record_events: true,
            events: Vec::new(),
        }
    }

    /// Replace the cascade pass cap
    pub fn with_max_passes(mut self, max_passes: u32) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Turn event recording on or off (on by default)
    pub fn set_record_events(&mut self, record: bool) {
        self.record_events = record;
        if !record {
            self.events.clear();
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn pending(&self) -> Option<Cell> {
        self.pending
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn palette(&self) -> Palette {
        self.source.palette()
    }

    pub fn swaps_accepted(&self) -> u32 {
        self.swaps_accepted
    }

    pub fn swaps_reverted(&self) -> u32 {
        self.swaps_reverted
    }

    /// Read-only view of the board
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Whether the current board offers at least one productive swap
    pub fn has_valid_move(&self) -> bool {
        has_valid_move(&self.grid)
    }

    /// Events recorded for the most recent swap
    pub fn events(&self) -> &[ResolutionEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the log empty
    pub fn take_events(&mut self) -> Vec<ResolutionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Owned copy of everything a presentation layer needs to draw the board
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut s = BoardSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        self.grid.write_codes(&mut out.rows);
        out.score = self.score;
        out.state = self.state;
        out.pending = self.pending;
        out.has_valid_move = self.has_valid_move();
    }

    fn record(&mut self, event: impl FnOnce() -> ResolutionEvent) {
        if self.record_events {
            self.events.push(event());
        }
    }

    /// Nominate a cell.
    ///
    /// Never returns the precondition errors: off-board cells and non-adjacent
    /// partners are answered with [`SelectionOutcome::Rejected`]. The only error
    /// is a cascade that does not converge, which aborts the round.
    pub fn select_cell(&mut self, cell: Cell) -> Result<SelectionOutcome, EngineError> {
        if self.state.is_busy() || !self.grid.contains(cell) {
            return Ok(SelectionOutcome::Rejected);
        }

        let Some(first) = self.pending else {
            self.pending = Some(cell);
            self.state = EngineState::AwaitingSecondSelection;
            return Ok(SelectionOutcome::Pending);
        };

        if !Grid::is_adjacent(first, cell) {
            // The new cell becomes the pending selection.
            self.pending = Some(cell);
            return Ok(SelectionOutcome::Rejected);
        }

        self.pending = None;
        self.attempt_swap(first, cell)
    }

    /// Optimistically swap two adjacent cells, keep the swap if it produces a
    /// match (and resolve the cascade), undo it otherwise.
    ///
    /// A reverted swap leaves the grid exactly as it was.
    pub fn attempt_swap(&mut self, a: Cell, b: Cell) -> Result<SelectionOutcome, EngineError> {
        if self.state.is_busy() {
            return Ok(SelectionOutcome::Rejected);
        }
        self.grid.get(a)?;
        self.grid.get(b)?;
        if !Grid::is_adjacent(a, b) {
            return Err(EngineError::NotAdjacent { a, b });
        }

        self.pending = None;
        self.events.clear();
        self.state = EngineState::Swapping;
        self.grid.swap(a, b)?;
        self.record(|| ResolutionEvent::Swapped { a, b });

        if !has_any_match(&self.grid) {
            self.grid.swap(a, b)?;
            self.record(|| ResolutionEvent::Reverted { a, b });
            self.swaps_reverted += 1;
            self.state = EngineState::Idle;
            return Ok(SelectionOutcome::SwapReverted);
        }

        self.swaps_accepted += 1;
        let score_delta = self.resolve_cascade()?;
        Ok(SelectionOutcome::SwapAccepted { score_delta })
    }

    /// Destroy, score and refill until no run remains. Returns the points gained.
    ///
    /// Fails with [`EngineError::ResolutionDidNotConverge`] once `max_passes`
    /// passes have run and matches remain, or with [`EngineError::IncompleteRefill`]
    /// when the refill leaves holes. The engine then stays busy, so every later
    /// selection is rejected.
    pub fn resolve_cascade(&mut self) -> Result<u32, EngineError> {
        // Called on its own, the cascade starts a fresh log.
        if self.state != EngineState::Swapping {
            self.events.clear();
        }
        self.state = EngineState::Resolving;
        let mut gained: u32 = 0;
        let mut pass: u32 = 0;
        let mut matches = std::mem::take(&mut self.scratch);

        loop {
            find_matches_into(&self.grid, &mut matches);
            if matches.is_empty() {
                break;
            }
            if pass >= self.max_passes {
                self.scratch = matches;
                return Err(EngineError::ResolutionDidNotConverge { passes: pass });
            }
            pass += 1;

            for m in &matches {
                for cell in m.cells() {
                    self.grid.set(cell, None)?;
                }
            }
            let score_delta = pass_score(&matches);
            self.score = self.score.saturating_add(score_delta);
            gained = gained.saturating_add(score_delta);
            self.record(|| ResolutionEvent::Cleared {
                pass,
                matches: matches.clone(),
                score_delta,
            });

            self.state = EngineState::Refilling;
            let filled = self.grid.empty_count() as u32;
            let changed = self.refill.refill(&mut self.grid, &mut self.source);
            let empty = self.grid.empty_count() as u32;
            if !changed || empty > 0 {
                self.scratch = matches;
                return Err(EngineError::IncompleteRefill { pass, empty });
            }
            if self.record_events {
                self.events.push(ResolutionEvent::Refilled {
                    pass,
                    filled,
                    grid: self.grid.clone(),
                });
            }
            self.state = EngineState::Resolving;
        }

        self.scratch = matches;
        self.state = EngineState::Idle;
        Ok(gained)
    }
}
