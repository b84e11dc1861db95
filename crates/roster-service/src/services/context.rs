//! Sync context - dependency container for the reconciler

use std::sync::Arc;

use roster_core::{MemberSource, RosterStore};

use super::snapshot::SnapshotWriter;

/// Ports and local outputs used by a sync run
#[derive(Clone)]
pub struct SyncContext {
    member_source: Arc<dyn MemberSource>,
    roster_store: Arc<dyn RosterStore>,
    snapshots: SnapshotWriter,
}

impl SyncContext {
    pub fn new(
        member_source: Arc<dyn MemberSource>,
        roster_store: Arc<dyn RosterStore>,
        snapshots: SnapshotWriter,
    ) -> Self {
        Self {
            member_source,
            roster_store,
            snapshots,
        }
    }

    /// Get the member source
    pub fn member_source(&self) -> &dyn MemberSource {
        self.member_source.as_ref()
    }

    /// Get the roster store
    pub fn roster_store(&self) -> &dyn RosterStore {
        self.roster_store.as_ref()
    }

    /// Get the snapshot writer
    pub fn snapshots(&self) -> &SnapshotWriter {
        &self.snapshots
    }
}

impl std::fmt::Debug for SyncContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncContext")
            .field("snapshots", &self.snapshots)
            .finish_non_exhaustive()
    }
}
