use async_trait::async_trait;

use crate::api::ApiResult;
use crate::snapshot::SnapshotPage;

/// Paged snapshot listing, `GET snapshot?page=&page_size=`. Pages start at 1.
#[async_trait]
pub trait SnapshotCatalogPort: Send + Sync {
    async fn list_snapshots(&self, page: u32, page_size: u32) -> ApiResult<SnapshotPage>;
}
