//! Ports - the interfaces the reconciler needs from the outside world
//!
//! The domain layer defines what it needs, and the client layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Member, MemberFetch, RowSet};
use crate::error::DomainError;

/// Result type for port operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Member Source
// ============================================================================

/// Source of truth for the clan roster
#[async_trait]
pub trait MemberSource: Send + Sync {
    /// Fetch the current member list
    async fn fetch_members(&self) -> RepoResult<MemberFetch>;
}

// ============================================================================
// Roster Store
// ============================================================================

/// Mirror of the roster, bound to one database
#[async_trait]
pub trait RosterStore: Send + Sync {
    /// Read every row of the database
    async fn query_rows(&self) -> RepoResult<RowSet>;

    /// Create a row for a member
    async fn create_row(&self, member: &Member) -> RepoResult<()>;

    /// Delete a row by its id
    async fn delete_row(&self, row_id: &str) -> RepoResult<()>;
}

// ============================================================================
// Token Provider
// ============================================================================

/// Supplies bearer tokens for the game API
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Return a token valid for the next request
    async fn token(&self) -> RepoResult<String>;
}
