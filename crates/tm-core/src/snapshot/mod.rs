//! Snapshot domain models.
//! 快照领域模型。

mod catalog;
mod descriptor;
mod selection;

pub use catalog::{SnapshotPage, SnapshotSourceKind, SnapshotSummary};
pub use descriptor::{DownloadToken, SnapshotDescriptor, SnapshotNeighbor};
pub use selection::{Selection, SelectionParseError, VIEWING_SNAPSHOT_KEY};
