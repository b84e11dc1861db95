//! Sync services
//!
//! The reconciler and the pieces it orchestrates: diffing, snapshot writing
//! and the dependency container.

pub mod context;
pub mod error;
pub mod plan;
pub mod reconciler;
pub mod snapshot;

pub use context::SyncContext;
pub use error::{ServiceError, ServiceResult};
pub use plan::SyncPlan;
pub use reconciler::Reconciler;
pub use snapshot::{SnapshotWriter, SNAPSHOT_NAME_FORMAT};
