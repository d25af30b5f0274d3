//! Integration tests - timed rounds, high score handoff, headless simulation

use match3::core::{find_valid_swaps, BoardConfig, BoardEngine, Grid, Palette};
use match3::session::{HighScoreStore, MemoryStore, RoundConfig, Session};
use match3::sim::{parse_sim_args, run_simulation, LogLevel, SimConfig};
use match3::types::{Cell, RefillPolicy, SelectionOutcome, HIGH_SCORE_KEY, ROUND_MS};

fn scenario_engine() -> BoardEngine {
    let grid = Grid::from_rows(&["rrgb", "gbrg", "bgbr", "gbgb"]).unwrap();
    BoardEngine::with_grid(grid, Palette::new(3).unwrap(), RefillPolicy::Gravity, 3)
}

fn quiet(round: RoundConfig) -> SimConfig {
    SimConfig {
        log: LogLevel::Quiet,
        ..SimConfig::new(round)
    }
}

#[test]
fn test_default_round_lasts_one_minute() {
    let session = Session::start(&RoundConfig::default(), MemoryStore::new()).unwrap();
    assert_eq!(session.round_ms(), ROUND_MS);
    assert_eq!(session.remaining_secs(), 60);
    assert!(session.is_running());
}

#[test]
fn test_session_lifecycle_sets_new_high_score() {
    let mut session = Session::with_engine(scenario_engine(), 10_000, MemoryStore::new());
    assert_eq!(session.previous_high(), 0);

    session.select_cell(Cell::new(2, 0)).unwrap();
    let outcome = session.select_cell(Cell::new(2, 1)).unwrap();
    assert!(matches!(outcome, SelectionOutcome::SwapAccepted { .. }));
    let score = session.score();
    assert!(score >= 3);

    assert!(session.tick(9_999));
    assert!(!session.tick(1));

    let summary = session.summary().unwrap();
    assert_eq!(summary.final_score, score);
    assert!(summary.new_record);
    assert!(!summary.aborted);
    assert_eq!(summary.high_score, score);
    assert_eq!(session.into_store().load(HIGH_SCORE_KEY), Some(score));
}

#[test]
fn test_lower_score_keeps_stored_high_score() {
    let store = MemoryStore::with_value(HIGH_SCORE_KEY, 500);
    let mut session = Session::with_engine(scenario_engine(), 10_000, store);
    assert_eq!(session.previous_high(), 500);

    session.select_cell(Cell::new(2, 0)).unwrap();
    session.select_cell(Cell::new(2, 1)).unwrap();
    let summary = session.finish();

    assert!(summary.final_score > 0);
    assert!(!summary.new_record);
    assert_eq!(summary.high_score, 500);
    assert_eq!(session.store().load(HIGH_SCORE_KEY), Some(500));
}

#[test]
fn test_selections_after_expiry_are_rejected() {
    let mut session = Session::with_engine(scenario_engine(), 1_000, MemoryStore::new());
    session.select_cell(Cell::new(2, 0)).unwrap();
    assert!(!session.tick(5_000));

    let before = session.engine().grid().clone();
    assert_eq!(session.select_cell(Cell::new(2, 1)), Ok(SelectionOutcome::Rejected));
    assert_eq!(session.engine().grid(), &before);
    assert_eq!(session.score(), 0);
}

#[test]
fn test_rounds_share_the_store() {
    fn play<S: HighScoreStore>(store: S, seed: u32) -> u32 {
        let config = RoundConfig {
            board: BoardConfig {
                seed,
                ..BoardConfig::default()
            },
            round_ms: 60_000,
        };
        let mut session = Session::start(&config, store).unwrap();
        for _ in 0..10 {
            let Some(&(a, b)) = find_valid_swaps(session.engine().grid()).first() else {
                break;
            };
            session.select_cell(a).unwrap();
            session.select_cell(b).unwrap();
        }
        session.finish().high_score
    }

    let mut store = MemoryStore::new();
    let first = play(&mut store, 1);
    let second = play(&mut store, 2);
    assert_eq!(store.load(HIGH_SCORE_KEY), Some(first.max(second)));
    assert!(second >= first);
}

#[test]
fn test_simulation_is_deterministic() {
    let config = SimConfig {
        rounds: 3,
        max_turns: Some(40),
        json: true,
        ..quiet(RoundConfig::default())
    };

    let mut out_a = Vec::new();
    let mut out_b = Vec::new();
    let a = run_simulation(&config, &mut out_a).unwrap();
    let b = run_simulation(&config, &mut out_b).unwrap();

    assert_eq!(a, b);
    assert_eq!(out_a, out_b);
    assert_eq!(a.len(), 3);

    // High score carries across rounds.
    let mut best = 0;
    for summary in &a {
        assert_eq!(summary.previous_high, best);
        best = best.max(summary.final_score);
        assert_eq!(summary.high_score, best);
    }
}

#[test]
fn test_simulation_rounds_end_on_the_clock() {
    let config = SimConfig {
        turn_ms: 1_000,
        ..quiet(RoundConfig {
            round_ms: 5_000,
            ..RoundConfig::default()
        })
    };
    let mut out = Vec::new();
    let summaries = run_simulation(&config, &mut out).unwrap();
    assert_eq!(summaries.len(), 1);
    assert!(!summaries[0].aborted);
    // No replay requested.
    assert!(out.is_empty());
}

#[test]
fn test_cli_args_layer_over_environment_config() {
    let args: Vec<String> = ["--refill", "respawn", "--rounds", "2", "--verbose"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let base = SimConfig::new(RoundConfig::from_lookup(|key| {
        (key == "MATCH3_WIDTH").then(|| "5".to_string())
    }));
    let config = parse_sim_args(&args, base).unwrap();
    assert_eq!(config.round.board.width, 5);
    assert_eq!(config.round.board.refill, RefillPolicy::Respawn);
    assert_eq!(config.rounds, 2);
    assert_eq!(config.log, LogLevel::Debug);
}
