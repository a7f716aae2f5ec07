//! Session-scoped snapshot content cache.
//! 会话级快照内容缓存。
//!
//! Snapshot ids are immutable keys, so content fetched once is served from
//! memory for the rest of the session. Entries are never evicted or replaced.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::{Mutex, OnceCell};
use tracing::{debug, warn};

use tm_core::ports::SnapshotDownloadPort;
use tm_core::{ApiResult, SnapshotDescriptor, SnapshotId};

/// Content cache keyed by snapshot id.
///
/// Concurrent requests for the same uncached id share a single download.
/// A failed download leaves the slot empty so the next request retries.
pub struct SnapshotContentCache {
    downloader: Arc<dyn SnapshotDownloadPort>,
    slots: Mutex<HashMap<SnapshotId, Arc<OnceCell<Bytes>>>>,
}

impl SnapshotContentCache {
    pub fn new(downloader: Arc<dyn SnapshotDownloadPort>) -> Self {
        Self {
            downloader,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Return the content for `descriptor`, downloading it on first use.
    ///
    /// The returned `Bytes` is a shared, read-only view of the cached entry.
    pub async fn get_content(&self, descriptor: &SnapshotDescriptor) -> ApiResult<Bytes> {
        let slot = {
            let mut slots = self.slots.lock().await;
            slots
                .entry(descriptor.id)
                .or_insert_with(|| Arc::new(OnceCell::new()))
                .clone()
        };

        if let Some(content) = slot.get() {
            debug!(snapshot_id = %descriptor.id, "Snapshot content cache hit");
            return Ok(content.clone());
        }

        let result = slot
            .get_or_try_init(|| async {
                debug!(snapshot_id = %descriptor.id, "Snapshot content cache miss, downloading");
                let bytes = self.downloader.download(&descriptor.download_token).await;
                if let Err(err) = &bytes {
                    warn!(snapshot_id = %descriptor.id, error = %err, "Snapshot download failed");
                }
                bytes
            })
            .await;

        match result {
            Ok(content) => {
                // A failed racer may have dropped this slot while we were filling it.
                self.slots
                    .lock()
                    .await
                    .entry(descriptor.id)
                    .or_insert_with(|| slot.clone());
                Ok(content.clone())
            }
            Err(err) => {
                self.release_empty_slot(descriptor.id, &slot).await;
                Err(err)
            }
        }
    }

    /// Forget `slot` if it is still the entry for `id` and nothing was stored in it.
    async fn release_empty_slot(&self, id: SnapshotId, slot: &Arc<OnceCell<Bytes>>) {
        let mut slots = self.slots.lock().await;
        let unused = slots
            .get(&id)
            .is_some_and(|current| Arc::ptr_eq(current, slot) && !current.initialized());
        if unused {
            slots.remove(&id);
        }
    }

    /// Cached content for `id`, without touching the network.
    pub async fn peek(&self, id: SnapshotId) -> Option<Bytes> {
        let slots = self.slots.lock().await;
        slots.get(&id).and_then(|slot| slot.get().cloned())
    }

    pub async fn contains(&self, id: SnapshotId) -> bool {
        self.peek(id).await.is_some()
    }

    /// Number of resident entries.
    pub async fn len(&self) -> usize {
        let slots = self.slots.lock().await;
        slots.values().filter(|slot| slot.initialized()).count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
