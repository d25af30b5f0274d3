//! Round configuration from environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `MATCH3_WIDTH` | 8 | Board columns |
//! | `MATCH3_HEIGHT` | 8 | Board rows |
//! | `MATCH3_PALETTE` | 5 | Piece types in play |
//! | `MATCH3_REFILL` | gravity | `gravity` or `respawn` |
//! | `MATCH3_SEED` | 1 | RNG seed |
//! | `MATCH3_ROUND_MS` | 60000 | Round length |
//! | `MATCH3_MAX_PASSES` | 1000 | Cascade pass cap |
//!
//! Unparseable values fall back to the default.

use crate::core::BoardConfig;
use crate::types::{RefillPolicy, ROUND_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    pub board: BoardConfig,
    pub round_ms: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            round_ms: ROUND_MS,
        }
    }
}

impl RoundConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        use std::env;

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment, a map in tests)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let parse_u8 = |key: &str, default: u8| {
            lookup(key)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default)
        };
        let parse_u32 = |key: &str, default: u32| {
            lookup(key)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default)
        };

        let refill = lookup("MATCH3_REFILL")
            .and_then(|s| RefillPolicy::from_str(s.trim()))
            .unwrap_or(defaults.board.refill);

        Self {
            board: BoardConfig {
                width: parse_u8("MATCH3_WIDTH", defaults.board.width),
                height: parse_u8("MATCH3_HEIGHT", defaults.board.height),
                palette_size: parse_u8("MATCH3_PALETTE", defaults.board.palette_size),
                refill,
                seed: parse_u32("MATCH3_SEED", defaults.board.seed),
                max_passes: parse_u32("MATCH3_MAX_PASSES", defaults.board.max_passes),
            },
            round_ms: parse_u32("MATCH3_ROUND_MS", defaults.round_ms),
        }
    }
}
