//! Match-3 (workspace facade crate).
//!
//! The board engine lives in `crates/core`, the round clock and high-score
//! handoff in `crates/session`, shared types in `crates/types`. This package
//! re-exports them as `match3::{core, session, types}` and adds the JSON replay
//! stream and the headless simulator used by the `match3-sim` binary.

pub mod replay;
pub mod sim;

pub use match3_core as core;
pub use match3_session as session;
pub use match3_types as types;
