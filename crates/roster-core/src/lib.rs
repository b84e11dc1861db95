//! # roster-core
//!
//! Domain layer containing the roster entities, domain errors, and the port traits
//! the reconciler depends on.
//! This crate has zero dependencies on infrastructure (HTTP clients, file system, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{Member, MemberFetch, RosterRow, RowSet, SnapshotEntry};
pub use error::DomainError;
pub use traits::{MemberSource, RepoResult, RosterStore, TokenProvider};
