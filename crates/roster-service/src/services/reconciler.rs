//! Reconciler
//!
//! Mirrors the clan member list into the roster database: fetch both sides,
//! guard against an unusable member list, snapshot, then apply removals
//! followed by additions.

use roster_core::{Member, MemberFetch, RepoResult};
use tracing::{info, instrument, warn};

use crate::dto::{AbortReason, OperationKind, OperationResult, SyncReport};

use super::context::SyncContext;
use super::error::ServiceResult;
use super::plan::SyncPlan;

/// Reconciler
pub struct Reconciler<'a> {
    ctx: &'a SyncContext,
}

impl<'a> Reconciler<'a> {
    /// Create a new Reconciler
    pub fn new(ctx: &'a SyncContext) -> Self {
        Self { ctx }
    }

    /// Run one reconciliation
    ///
    /// A failed row query or snapshot write is returned as an error. A member
    /// list that is missing, empty or could not be fetched aborts the run
    /// without touching the database. Individual create/delete failures are
    /// recorded in the report and do not stop the batch.
    #[instrument(skip(self))]
    pub async fn run(&self) -> ServiceResult<SyncReport> {
        let (rows, fetch) = tokio::join!(
            self.ctx.roster_store().query_rows(),
            self.ctx.member_source().fetch_members()
        );
        let rows = rows?;

        let members = match Self::guard(fetch) {
            Ok(members) => members,
            Err(reason) => {
                warn!(reason = %reason, "Sync aborted, database left untouched");
                return Ok(SyncReport::aborted(reason));
            }
        };

        let snapshot = self.ctx.snapshots().write(&rows.rows).await?;
        info!(path = %snapshot.display(), rows = rows.len(), "Snapshot saved");

        let plan = SyncPlan::compute(&rows.rows, &members);
        let mut report = SyncReport::applied(snapshot);

        for row in plan.removals {
            info!("🔴 {}", row.name);
            let tag = row.member_tag.unwrap_or_default();
            let result = match self.ctx.roster_store().delete_row(&row.id).await {
                Ok(()) => OperationResult::succeeded(OperationKind::Remove, tag, row.name),
                Err(e) => {
                    warn!(row_id = %row.id, error = %e, "Failed to remove row");
                    OperationResult::failed(OperationKind::Remove, tag, row.name, &e)
                }
            };
            report.removed.push(result);
        }

        for member in plan.additions {
            info!("🟢 {}", member.name);
            let result = match self.ctx.roster_store().create_row(&member).await {
                Ok(()) => OperationResult::succeeded(OperationKind::Add, member.tag, member.name),
                Err(e) => {
                    warn!(tag = %member.tag, error = %e, "Failed to add member");
                    OperationResult::failed(OperationKind::Add, member.tag, member.name, &e)
                }
            };
            report.added.push(result);
        }

        info!(
            removed = report.removed.len(),
            added = report.added.len(),
            failures = report.failures().count(),
            "Sync applied"
        );
        Ok(report)
    }

    fn guard(fetch: RepoResult<MemberFetch>) -> Result<Vec<Member>, AbortReason> {
        match fetch {
            Ok(MemberFetch::Fetched(members)) if members.is_empty() => {
                warn!("Clan returned no members");
                Err(AbortReason::EmptyRoster)
            }
            Ok(MemberFetch::Fetched(members)) => Ok(members),
            Ok(MemberFetch::MissingMemberList) => Err(AbortReason::MemberListUnavailable),
            Err(e) => {
                warn!(error = %e, code = e.code(), "Failed to fetch clan members");
                Err(AbortReason::MemberFetchFailed)
            }
        }
    }
}
