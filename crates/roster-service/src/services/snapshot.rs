//! Pre-sync snapshot files

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use roster_core::{RosterRow, SnapshotEntry};
use tracing::{debug, instrument};

use super::error::{ServiceError, ServiceResult};

/// File name format for snapshots, local time
pub const SNAPSHOT_NAME_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Writes the roster rows to `{dir}/{DD-MM-YYYY HH:MM}.json`
///
/// Two runs within the same minute write to the same file; the later one wins.
#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    dir: PathBuf,
}

impl SnapshotWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Snapshot file name for the given time
    pub fn file_name_for(at: DateTime<Local>) -> String {
        format!("{}.json", at.format(SNAPSHOT_NAME_FORMAT))
    }

    /// Write a snapshot stamped with the current local time
    pub async fn write(&self, rows: &[RosterRow]) -> ServiceResult<PathBuf> {
        self.write_at(rows, Local::now()).await
    }

    /// Write a snapshot stamped with `at`
    ///
    /// The directory is created if needed. Output is compact UTF-8 JSON with
    /// non-ASCII characters left unescaped.
    #[instrument(skip(self, rows), fields(dir = %self.dir.display(), rows = rows.len()))]
    pub async fn write_at(
        &self,
        rows: &[RosterRow],
        at: DateTime<Local>,
    ) -> ServiceResult<PathBuf> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| ServiceError::snapshot(&self.dir, e))?;

        let entries: Vec<SnapshotEntry> = rows.iter().map(SnapshotEntry::from).collect();
        let body = serde_json::to_vec(&entries)
            .map_err(|e| ServiceError::internal(format!("snapshot encoding failed: {e}")))?;

        let path = self.dir.join(Self::file_name_for(at));
        tokio::fs::write(&path, body)
            .await
            .map_err(|e| ServiceError::snapshot(&path, e))?;

        debug!(path = %path.display(), "snapshot written");
        Ok(path)
    }
}
