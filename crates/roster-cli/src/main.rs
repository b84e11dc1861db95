//! roster-sync entry point
//!
//! Run with:
//! ```bash
//! cargo run -p roster-cli -- test
//! ```
//!
//! The single argument selects the target database (`prod` or `test`).
//! Configuration is read from `conf.json` (or `$ROSTER_CONFIG`) with
//! `ROSTER_`-prefixed environment overrides.

use std::process::ExitCode;

use roster_common::AppConfig;

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    ExitCode::from(roster_cli::run_with_args(&args, &AppConfig::default_path()).await)
}
