//! Domain entities - core business objects

mod member;
mod roster_row;
mod snapshot;

pub use member::{Member, MemberFetch};
pub use roster_row::{RosterRow, RowSet};
pub use snapshot::SnapshotEntry;
