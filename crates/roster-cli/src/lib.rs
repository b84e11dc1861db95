//! # roster-cli
//!
//! Wiring for the `roster-sync` binary: builds the API clients from the
//! configuration and runs one reconciliation.

pub mod app;

pub use app::{create_context, run, run_with_args};
