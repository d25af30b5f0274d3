//! Headless match-3 runner (default binary).
//!
//! Plays seeded rounds with an autoplayer, logs progress to stderr and, with
//! `--json`, writes the replay stream to stdout.
//!
//! ```text
//! match3-sim [--width N] [--height N] [--palette N] [--refill gravity|respawn]
//!            [--seed N] [--round-ms N] [--max-passes N] [--rounds N]
//!            [--turn-ms N] [--max-turns N] [--json] [--quiet|--verbose]
//! ```

use std::io::{self, BufWriter};

use anyhow::Result;

use match3::session::RoundConfig;
use match3::sim::{parse_sim_args, run_simulation, LogLevel, SimConfig};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut base = SimConfig::new(RoundConfig::from_env());
    base.log = LogLevel::from_env();
    let config = parse_sim_args(&args, base)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summaries = run_simulation(&config, &mut out)?;

    if config.log >= LogLevel::Info {
        let best = summaries.iter().map(|s| s.final_score).max().unwrap_or(0);
        let total: u64 = summaries.iter().map(|s| s.final_score as u64).sum();
        eprintln!(
            "[sim] {} round(s): best={} total={}",
            summaries.len(),
            best,
            total
        );
    }
    Ok(())
}
