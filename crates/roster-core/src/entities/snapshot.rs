//! Snapshot entry - the exported form of a roster row

use serde::{Deserialize, Serialize};

use super::RosterRow;

/// One record of a pre-sync snapshot file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub name: String,
    pub tags: Vec<String>,
    /// Status select value, empty string when unset
    #[serde(rename = "JDC")]
    pub status: String,
}

impl From<&RosterRow> for SnapshotEntry {
    fn from(row: &RosterRow) -> Self {
        Self {
            name: row.name.clone(),
            tags: row.tags.clone(),
            status: row.status.clone().unwrap_or_default(),
        }
    }
}
