use std::sync::Arc;

use futures::future::join_all;
use tracing::debug;

use tm_core::ports::SnapshotMetadataPort;
use tm_core::{ApiResult, SnapshotDescriptor, SnapshotId};

/// Resolves snapshot ids into descriptors.
/// 将快照 ID 解析为描述信息。
///
/// Descriptors are never cached: neighbor links change whenever a new
/// snapshot is created. Retries belong to the transport.
#[derive(Clone)]
pub struct MetadataResolver {
    metadata: Arc<dyn SnapshotMetadataPort>,
}

impl MetadataResolver {
    pub fn new(metadata: Arc<dyn SnapshotMetadataPort>) -> Self {
        Self { metadata }
    }

    pub async fn resolve_one(&self, id: SnapshotId) -> ApiResult<SnapshotDescriptor> {
        debug!(snapshot_id = %id, "Resolving snapshot metadata");
        self.metadata.get_snapshot(id).await
    }

    /// Resolve every id concurrently and wait for all of them.
    ///
    /// Descriptors come back in the order of `ids`. If any lookup fails the
    /// first failure (in `ids` order) is returned.
    pub async fn resolve_many(&self, ids: &[SnapshotId]) -> ApiResult<Vec<SnapshotDescriptor>> {
        join_all(ids.iter().map(|id| self.resolve_one(*id)))
            .await
            .into_iter()
            .collect()
    }

    /// Two-id variant of [`resolve_many`](Self::resolve_many), keeping the order.
    pub async fn resolve_pair(
        &self,
        first: SnapshotId,
        second: SnapshotId,
    ) -> ApiResult<(SnapshotDescriptor, SnapshotDescriptor)> {
        let (first, second) = tokio::join!(self.resolve_one(first), self.resolve_one(second));
        Ok((first?, second?))
    }
}
