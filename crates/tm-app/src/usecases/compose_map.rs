use std::sync::Arc;

use tracing::debug;

use tm_core::ports::SnapshotDecoderPort;
use tm_core::{DecodeError, FogMap};

/// Turns raw snapshot content into a renderable map.
/// 将快照原始内容组合为可渲染地图。
///
/// Content is only ever borrowed: cached bytes stay untouched.
#[derive(Clone)]
pub struct MapComposer {
    decoder: Arc<dyn SnapshotDecoderPort>,
}

impl MapComposer {
    pub fn new(decoder: Arc<dyn SnapshotDecoderPort>) -> Self {
        Self { decoder }
    }

    pub async fn compose_single(&self, content: &[u8]) -> Result<FogMap, DecodeError> {
        self.decoder.decode(content).await
    }

    /// Decode `base` and fold `overlay` onto it.
    ///
    /// Order-sensitive: callers pass the first selected snapshot as `base`.
    pub async fn compose_overlay(&self, base: &[u8], overlay: &[u8]) -> Result<FogMap, DecodeError> {
        let map = self.decoder.decode(base).await?;
        let map = self.decoder.fold(map, overlay).await?;
        debug!(
            tiles = map.tile_count(),
            explored = map.explored_cells(),
            "Composed overlay map"
        );
        Ok(map)
    }
}
