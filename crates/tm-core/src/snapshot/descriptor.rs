use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

use crate::ids::SnapshotId;

/// Opaque token used to download a snapshot's content.
/// 用于下载快照内容的不透明令牌。
///
/// The backend decides whether a token is single-use; callers must not assume either.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DownloadToken(String);

impl DownloadToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for DownloadToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("DownloadToken(<redacted>)")
    }
}

/// Temporal neighbor of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotNeighbor {
    pub id: SnapshotId,
    pub timestamp: DateTime<Utc>,
}

/// Metadata of one snapshot, fetched fresh on every resolution.
/// 快照元数据，每次解析都重新获取。
///
/// `prev` / `next` reference the adjacent snapshots in timestamp order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotDescriptor {
    pub id: SnapshotId,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub prev: Option<SnapshotNeighbor>,
    #[serde(default)]
    pub next: Option<SnapshotNeighbor>,
    pub download_token: DownloadToken,
}

impl SnapshotDescriptor {
    pub fn neighbor_ids(&self) -> (Option<SnapshotId>, Option<SnapshotId>) {
        (self.prev.map(|n| n.id), self.next.map(|n| n.id))
    }
}
