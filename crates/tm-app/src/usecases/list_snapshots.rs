use anyhow::Result;
use std::sync::Arc;
use tm_core::ports::SnapshotCatalogPort;
use tm_core::SnapshotPage;

/// Use case for listing snapshots with pagination
/// 分页列出快照的用例
pub struct ListSnapshots {
    catalog: Arc<dyn SnapshotCatalogPort>,
    max_page_size: u32,
}

impl ListSnapshots {
    pub fn from_arc(catalog: Arc<dyn SnapshotCatalogPort>) -> Self {
        Self {
            catalog,
            max_page_size: 100, // Business rule: maximum 100 snapshots per page
        }
    }

    /// Fetch page `page` (1-based) holding at most `page_size` snapshots.
    ///
    /// # Errors
    ///
    /// Returns an error if `page` is 0, `page_size` is out of range, or the backend call fails.
    #[tracing::instrument(name = "usecase.list_snapshots.execute", skip(self))]
    pub async fn execute(&self, page: u32, page_size: u32) -> Result<SnapshotPage> {
        if page == 0 {
            return Err(anyhow::anyhow!("Invalid page: {}. Pages start at 1", page));
        }

        if page_size == 0 || page_size > self.max_page_size {
            return Err(anyhow::anyhow!(
                "Invalid page size: {}. Must be between 1 and {}",
                page_size,
                self.max_page_size
            ));
        }

        self.catalog
            .list_snapshots(page, page_size)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to list snapshots: {}", e))
    }
}
