//! Sync report types
//!
//! A `SyncReport` is serializable so it can be emitted as a structured log
//! record at the end of a run.

use std::path::PathBuf;

use roster_core::DomainError;
use serde::Serialize;

// ============================================================================
// Outcome
// ============================================================================

/// Why a run stopped before touching the database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AbortReason {
    /// The clan returned an empty member list
    EmptyRoster,
    /// The clan response carried no member list at all
    MemberListUnavailable,
    /// The member request itself failed
    MemberFetchFailed,
}

impl AbortReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmptyRoster => "empty_roster",
            Self::MemberListUnavailable => "member_list_unavailable",
            Self::MemberFetchFailed => "member_fetch_failed",
        }
    }
}

impl std::fmt::Display for AbortReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall result of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum SyncOutcome {
    Applied,
    Aborted(AbortReason),
}

// ============================================================================
// Per-operation results
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Remove,
    Add,
}

/// Result of one create or delete call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationResult {
    pub kind: OperationKind,
    /// Member tag the operation was about
    pub tag: String,
    pub name: String,
    /// Error code and message when the call failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OperationResult {
    pub fn succeeded(kind: OperationKind, tag: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind,
            tag: tag.into(),
            name: name.into(),
            error: None,
        }
    }

    pub fn failed(
        kind: OperationKind,
        tag: impl Into<String>,
        name: impl Into<String>,
        error: &DomainError,
    ) -> Self {
        Self {
            kind,
            tag: tag.into(),
            name: name.into(),
            error: Some(format!("{}: {error}", error.code())),
        }
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

// ============================================================================
// Report
// ============================================================================

/// Everything a run did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub outcome: SyncOutcome,
    /// Snapshot written before mutation, if the run got that far
    pub snapshot: Option<PathBuf>,
    pub removed: Vec<OperationResult>,
    pub added: Vec<OperationResult>,
}

impl SyncReport {
    /// Report for a run stopped at the guard
    pub fn aborted(reason: AbortReason) -> Self {
        Self {
            outcome: SyncOutcome::Aborted(reason),
            snapshot: None,
            removed: Vec::new(),
            added: Vec::new(),
        }
    }

    /// Report for a run that reached the apply phase
    pub fn applied(snapshot: PathBuf) -> Self {
        Self {
            outcome: SyncOutcome::Applied,
            snapshot: Some(snapshot),
            removed: Vec::new(),
            added: Vec::new(),
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self.outcome, SyncOutcome::Aborted(_))
    }

    /// Operations that failed, removals first
    pub fn failures(&self) -> impl Iterator<Item = &OperationResult> {
        self.removed
            .iter()
            .chain(self.added.iter())
            .filter(|op| !op.is_ok())
    }

    /// True when the run was applied and every operation succeeded
    pub fn is_clean(&self) -> bool {
        !self.is_aborted() && self.failures().next().is_none()
    }
}
