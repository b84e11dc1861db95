//! Diffing between the clan member list and the roster rows

use std::collections::HashSet;

use roster_core::{Member, RosterRow};

/// Rows to delete and members to create
///
/// Both sets are computed from the same pre-mutation rows. Tags are compared
/// as exact strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPlan {
    /// Rows whose tag matches no current member, in row order
    pub removals: Vec<RosterRow>,
    /// Members with no row, in member order
    pub additions: Vec<Member>,
}

impl SyncPlan {
    /// Compute the plan
    ///
    /// Rows without a tag, or with an empty one, are never removed. Additions
    /// compare against the stored tag as is, so a member whose tag is empty
    /// matches a row with an empty tag.
    pub fn compute(rows: &[RosterRow], members: &[Member]) -> Self {
        let member_tags: HashSet<&str> = members.iter().map(|m| m.tag.as_str()).collect();
        let row_tags: HashSet<&str> = rows.iter().filter_map(RosterRow::stored_tag).collect();

        let removals = rows
            .iter()
            .filter(|row| row.tag().is_some_and(|tag| !member_tags.contains(tag)))
            .cloned()
            .collect();

        let additions = members
            .iter()
            .filter(|m| !row_tags.contains(m.tag.as_str()))
            .cloned()
            .collect();

        Self {
            removals,
            additions,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.removals.is_empty() && self.additions.is_empty()
    }
}
