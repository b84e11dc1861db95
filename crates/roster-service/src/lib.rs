//! # roster-service
//!
//! Application layer: reconciles the clan member list with the roster
//! database, snapshotting the database before any change.

pub mod dto;
pub mod services;

pub use dto::{AbortReason, OperationKind, OperationResult, SyncOutcome, SyncReport};
pub use services::{
    Reconciler, ServiceError, ServiceResult, SnapshotWriter, SyncContext, SyncPlan,
    SNAPSHOT_NAME_FORMAT,
};
