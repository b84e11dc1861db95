//! Data transfer objects for sync results

pub mod report;

pub use report::{AbortReason, OperationKind, OperationResult, SyncOutcome, SyncReport};
