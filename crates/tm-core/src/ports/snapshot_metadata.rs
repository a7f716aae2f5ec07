use async_trait::async_trait;
use std::sync::Arc;

use crate::api::ApiResult;
use crate::ids::SnapshotId;
use crate::snapshot::SnapshotDescriptor;

/// `GET snapshot/{id}`
#[async_trait]
pub trait SnapshotMetadataPort: Send + Sync {
    async fn get_snapshot(&self, id: SnapshotId) -> ApiResult<SnapshotDescriptor>;
}

#[async_trait]
impl<T: SnapshotMetadataPort + ?Sized> SnapshotMetadataPort for Arc<T> {
    async fn get_snapshot(&self, id: SnapshotId) -> ApiResult<SnapshotDescriptor> {
        (**self).get_snapshot(id).await
    }
}
