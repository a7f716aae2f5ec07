use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::SnapshotId;

/// How a snapshot entered the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapshotSourceKind {
    Sync,
    Upload,
}

/// Listing entry for a snapshot (no download token).
/// 快照列表条目（不含下载令牌）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotSummary {
    pub id: SnapshotId,
    pub timestamp: DateTime<Utc>,
    pub source_kind: SnapshotSourceKind,
    #[serde(default)]
    pub note: Option<String>,
}

/// One page of the snapshot listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotPage {
    pub number_of_snapshots: u64,
    pub number_of_pages: u64,
    pub snapshots: Vec<SnapshotSummary>,
}
