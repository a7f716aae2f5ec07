use async_trait::async_trait;

use crate::map::{DecodeError, FogMap};

/// Snapshot container decoder.
/// 快照容器解码器。
///
/// Implementations must not keep references to `content`; the bytes belong
/// to the content cache and are shared read-only.
#[async_trait]
pub trait SnapshotDecoderPort: Send + Sync {
    /// Decode one content blob into a map.
    async fn decode(&self, content: &[u8]) -> Result<FogMap, DecodeError>;

    /// Fold `content` onto `base`. On error `base` is dropped, never returned half-folded.
    ///
    /// The default decodes `content` and merges it into `base` (union of explored cells).
    async fn fold(&self, base: FogMap, content: &[u8]) -> Result<FogMap, DecodeError> {
        let mut base = base;
        let overlay = self.decode(content).await?;
        base.merge(overlay);
        Ok(base)
    }
}
