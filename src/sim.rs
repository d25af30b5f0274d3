//! Headless round simulator.
//!
//! Plays timed rounds with a seeded autoplayer standing in for the input layer:
//! each turn it nominates two cells through the session, exactly as a pointer
//! would, and charges a fixed amount of clock time per turn.

use std::io::Write;

use anyhow::{anyhow, Result};

use crate::core::{find_valid_swaps, SimpleRng};
use crate::replay::{board_rows, ReplayRecord, ReplayWriter};
use crate::session::{HighScoreStore, MemoryStore, RoundConfig, RoundSummary, Session};
use crate::types::{Cell, RefillPolicy};

/// Default clock time charged per turn (two selections)
pub const DEFAULT_TURN_MS: u32 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Quiet,
    Info,
    Debug,
}

impl LogLevel {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "quiet" | "off" | "0" => Some(LogLevel::Quiet),
            "info" | "1" => Some(LogLevel::Info),
            "debug" | "2" => Some(LogLevel::Debug),
            _ => None,
        }
    }

    /// From `MATCH3_LOG`, default `info`
    pub fn from_env() -> Self {
        std::env::var("MATCH3_LOG")
            .ok()
            .and_then(|s| Self::from_str(&s))
            .unwrap_or(LogLevel::Info)
    }
}

/// Tagged stderr diagnostics, filtered by level
macro_rules! sim_log {
    ($config:expr, $level:expr, $($arg:tt)*) => {
        if $config.log >= $level {
            eprintln!("[sim] {}", format_args!($($arg)*));
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub round: RoundConfig,
    pub rounds: u32,
    pub turn_ms: u32,
    /// Stop each round after this many turns even if time remains
    pub max_turns: Option<u32>,
    /// Emit the JSON replay stream on stdout
    pub json: bool,
    pub log: LogLevel,
}

impl SimConfig {
    pub fn new(round: RoundConfig) -> Self {
        Self {
            round,
            rounds: 1,
            turn_ms: DEFAULT_TURN_MS,
            max_turns: None,
            json: false,
            log: LogLevel::Info,
        }
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("sim: missing value for {}", flag))
}

fn number<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T> {
    let v = value(args, i, flag)?;
    v.parse::<T>()
        .map_err(|_| anyhow!("sim: invalid {} value: {}", flag, v))
}

/// Parse command-line flags on top of `base` (usually the environment config).
pub fn parse_sim_args(args: &[String], base: SimConfig) -> Result<SimConfig> {
    let mut config = base;
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--width" => {
                i += 1;
                config.round.board.width = number(args, i, flag)?;
            }
            "--height" => {
                i += 1;
                config.round.board.height = number(args, i, flag)?;
            }
            "--palette" => {
                i += 1;
                config.round.board.palette_size = number(args, i, flag)?;
            }
            "--refill" => {
                i += 1;
                let v = value(args, i, flag)?;
                config.round.board.refill = RefillPolicy::from_str(v)
                    .ok_or_else(|| anyhow!("sim: invalid --refill value: {}", v))?;
            }
            "--seed" => {
                i += 1;
                config.round.board.seed = number(args, i, flag)?;
            }
            "--round-ms" => {
                i += 1;
                config.round.round_ms = number(args, i, flag)?;
            }
            "--max-passes" => {
                i += 1;
                config.round.board.max_passes = number(args, i, flag)?;
            }
            "--rounds" => {
                i += 1;
                config.rounds = number(args, i, flag)?;
            }
            "--turn-ms" => {
                i += 1;
                config.turn_ms = number(args, i, flag)?;
                if config.turn_ms == 0 {
                    return Err(anyhow!("sim: --turn-ms must be positive"));
                }
            }
            "--max-turns" => {
                i += 1;
                config.max_turns = Some(number(args, i, flag)?);
            }
            "--json" => config.json = true,
            "--quiet" | "-q" => config.log = LogLevel::Quiet,
            "--verbose" | "-v" => config.log = LogLevel::Debug,
            other => {
                return Err(anyhow!("sim: unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(config)
}

/// Pick the next pair of cells: a productive swap when one exists, otherwise
/// a random in-bounds cell and one of its neighbours (which the engine will
/// revert). `None` when the board has no adjacent pair at all.
fn choose_turn(grid: &crate::core::Grid, rng: &mut SimpleRng) -> Option<(Cell, Cell)> {
    let mut swaps = find_valid_swaps(grid);
    if !swaps.is_empty() {
        rng.shuffle(&mut swaps);
        return Some(swaps[0]);
    }
    let x = rng.next_range(grid.width() as u32) as i16;
    let y = rng.next_range(grid.height() as u32) as i16;
    let cell = Cell::new(x, y);
    let neighbors = grid.neighbors(cell);
    if neighbors.is_empty() {
        return None;
    }
    let partner = neighbors[rng.next_range(neighbors.len() as u32) as usize];
    Some((cell, partner))
}

fn emit(
    out: &mut impl Write,
    writer: &mut ReplayWriter,
    json: bool,
    record: ReplayRecord,
) -> Result<()> {
    if json {
        let line = writer.line(record)?;
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Play one round against `store`, writing replay records to `out`.
pub fn play_round<S: HighScoreStore>(
    config: &SimConfig,
    round: u32,
    store: S,
    out: &mut impl Write,
    writer: &mut ReplayWriter,
) -> Result<RoundSummary> {
    let mut round_config = config.round;
    round_config.board.seed = config.round.board.seed.wrapping_add(round - 1);

    let mut session = Session::start(&round_config, store)
        .map_err(|e| anyhow!("sim: round {} cannot start: {}", round, e))?;
    let mut rng = SimpleRng::new(round_config.board.seed ^ 0x9e37_79b9);

    sim_log!(
        config,
        LogLevel::Info,
        "round {} start: {}x{} palette={} refill={} seed={} high={}",
        round,
        round_config.board.width,
        round_config.board.height,
        round_config.board.palette_size,
        round_config.board.refill.as_str(),
        round_config.board.seed,
        session.previous_high()
    );
    emit(
        out,
        writer,
        config.json,
        ReplayRecord::RoundStart {
            round,
            seed: round_config.board.seed,
            width: round_config.board.width,
            height: round_config.board.height,
            palette: round_config.board.palette_size,
            refill: round_config.board.refill.as_str().to_string(),
            high_score: session.previous_high(),
            board: board_rows(session.engine().grid()),
        },
    )?;

    let mut turns: u32 = 0;
    while session.is_running() {
        if config.max_turns.is_some_and(|max| turns >= max) {
            session.finish();
            break;
        }
        turns += 1;

        let Some((a, b)) = choose_turn(session.engine().grid(), &mut rng) else {
            session.tick(config.turn_ms);
            continue;
        };
        for cell in [a, b] {
            let outcome = match session.select_cell(cell) {
                Ok(outcome) => outcome,
                Err(e) => {
                    sim_log!(config, LogLevel::Info, "round {} aborted: {}", round, e);
                    break;
                }
            };
            emit(
                out,
                writer,
                config.json,
                ReplayRecord::select(round, cell, outcome, session.score()),
            )?;
            if outcome.is_swap() {
                sim_log!(
                    config,
                    LogLevel::Debug,
                    "turn {}: ({}, {}) <-> ({}, {}) {} score={}",
                    turns,
                    a.x,
                    a.y,
                    b.x,
                    b.y,
                    outcome.as_str(),
                    session.score()
                );
                for event in session.engine().events() {
                    emit(out, writer, config.json, ReplayRecord::from_event(round, event))?;
                }
            }
        }

        session.tick(config.turn_ms);
    }

    let summary = session.finish();
    sim_log!(
        config,
        LogLevel::Info,
        "round {} end: score={} high={}{} turns={}",
        round,
        summary.final_score,
        summary.high_score,
        if summary.new_record { " (new record)" } else { "" },
        turns
    );
    emit(out, writer, config.json, ReplayRecord::round_end(round, &summary))?;
    Ok(summary)
}

/// Play every configured round against one shared in-memory high-score store.
pub fn run_simulation(config: &SimConfig, out: &mut impl Write) -> Result<Vec<RoundSummary>> {
    let mut store = MemoryStore::new();
    let mut writer = ReplayWriter::new();
    let mut summaries = Vec::with_capacity(config.rounds as usize);
    for round in 1..=config.rounds {
        summaries.push(play_round(config, round, &mut store, out, &mut writer)?);
    }
    out.flush()?;
    Ok(summaries)
}
