//! Session layer - the round clock and high-score handoff around the board engine.
//!
//! The board engine is timeless and storage-free. This crate adds what a playable
//! round needs on top of it:
//!
//! - [`Session`]: a countdown (one minute by default) that stops forwarding
//!   selections when it expires, then settles the high score
//! - [`HighScoreStore`]: the injected capability the high score is read from at
//!   round start and written to when beaten
//! - [`RoundConfig`]: board and clock parameters, loadable from `MATCH3_*`
//!   environment variables
//!
//! # Example
//!
//! ```
//! use match3_session::{MemoryStore, RoundConfig, Session};
//!
//! let mut session = Session::start(&RoundConfig::default(), MemoryStore::new()).unwrap();
//! while session.tick(16) {}
//! let summary = session.summary().unwrap();
//! assert_eq!(summary.final_score, 0);
//! ```

pub mod config;
pub mod session;
pub mod store;

pub use match3_core as core;
pub use match3_types as types;

pub use config::RoundConfig;
pub use session::{RoundSummary, Session};
pub use store::{HighScoreStore, MemoryStore};
