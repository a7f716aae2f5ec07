//! Snapshot container codec.
//! 快照容器编解码。
//!
//! Layout (bincode):
//! ```text
//! FogContainer { magic: b"FOGS", version: u32, tiles: [EncodedTile { x, y, bitmap }] }
//! ```
//! Each bitmap is exactly `TILE_BITMAP_LEN` bytes. A tile listed twice is
//! unioned, matching how a fold treats overlapping tiles.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use tm_core::ports::SnapshotDecoderPort;
use tm_core::{DecodeError, FogMap, Tile, TileKey, TILE_BITMAP_LEN};

pub const FOG_CONTAINER_MAGIC: [u8; 4] = *b"FOGS";
pub const FOG_CONTAINER_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct FogContainer {
    magic: [u8; 4],
    version: u32,
    tiles: Vec<EncodedTile>,
}

#[derive(Serialize, Deserialize)]
struct EncodedTile {
    x: u16,
    y: u16,
    bitmap: Vec<u8>,
}

/// Decoder for bincode fog containers.
#[derive(Debug, Clone, Copy, Default)]
pub struct FogContainerDecoder;

impl FogContainerDecoder {
    pub fn new() -> Self {
        Self
    }

    fn decode_sync(content: &[u8]) -> Result<FogMap, DecodeError> {
        let container: FogContainer = bincode::deserialize(content)
            .map_err(|e| DecodeError::InvalidContainer(e.to_string()))?;

        if container.magic != FOG_CONTAINER_MAGIC {
            return Err(DecodeError::InvalidContainer("bad magic".to_string()));
        }
        if container.version != FOG_CONTAINER_VERSION {
            return Err(DecodeError::UnsupportedVersion(container.version));
        }

        let mut map = FogMap::new();
        for encoded in container.tiles {
            let tile = Tile::from_bitmap(&encoded.bitmap).ok_or(DecodeError::MalformedTile {
                x: encoded.x,
                y: encoded.y,
                expected: TILE_BITMAP_LEN,
                actual: encoded.bitmap.len(),
            })?;
            let mut single = FogMap::new();
            single.insert_tile(TileKey::new(encoded.x, encoded.y), tile);
            map.merge(single);
        }

        debug!(tiles = map.tile_count(), "Decoded fog container");
        Ok(map)
    }
}

#[async_trait]
impl SnapshotDecoderPort for FogContainerDecoder {
    async fn decode(&self, content: &[u8]) -> Result<FogMap, DecodeError> {
        // Large containers take a while to walk; keep that off the runtime thread.
        let owned = content.to_vec();
        tokio::task::spawn_blocking(move || Self::decode_sync(&owned))
            .await
            .map_err(|e| DecodeError::InvalidContainer(format!("decode task failed: {}", e)))?
    }
}

/// Encode `map` as a fog container. Used by uploads and fixtures.
pub fn encode_fog_container(map: &FogMap) -> anyhow::Result<Vec<u8>> {
    let container = FogContainer {
        magic: FOG_CONTAINER_MAGIC,
        version: FOG_CONTAINER_VERSION,
        tiles: map
            .tiles()
            .map(|(key, tile)| EncodedTile {
                x: key.x,
                y: key.y,
                bitmap: tile.bitmap().to_vec(),
            })
            .collect(),
    };
    Ok(bincode::serialize(&container)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_with(cells: &[(u16, u16, usize)]) -> FogMap {
        let mut map = FogMap::new();
        for (x, y, cell) in cells {
            let mut tile = Tile::empty();
            tile.set_explored(*cell);
            let mut single = FogMap::new();
            single.insert_tile(TileKey::new(*x, *y), tile);
            map.merge(single);
        }
        map
    }

    #[tokio::test]
    async fn test_decode_encoded_map() {
        let map = map_with(&[(1, 2, 10), (1, 2, 11), (300, 4, 0)]);
        let bytes = encode_fog_container(&map).unwrap();

        let decoded = FogContainerDecoder::new().decode(&bytes).await.unwrap();

        assert_eq!(decoded, map);
        assert_eq!(decoded.explored_cells(), 3);
    }

    #[tokio::test]
    async fn test_fold_unions_two_containers() {
        let decoder = FogContainerDecoder::new();
        let a = encode_fog_container(&map_with(&[(0, 0, 1)])).unwrap();
        let b = encode_fog_container(&map_with(&[(0, 0, 2), (9, 9, 0)])).unwrap();

        let base = decoder.decode(&a).await.unwrap();
        let folded = decoder.fold(base, &b).await.unwrap();

        assert_eq!(folded.tile_count(), 2);
        assert_eq!(folded.explored_cells(), 3);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_decode_yields_the_runtime_thread() {
        let cells: Vec<(u16, u16, usize)> = (0..4096u16).map(|i| (i % 64, i / 64, 0)).collect();
        let bytes = encode_fog_container(&map_with(&cells)).unwrap();
        let order = std::sync::Mutex::new(Vec::new());

        let (decoded, _) = tokio::join!(
            async {
                let decoded = FogContainerDecoder::new().decode(&bytes).await;
                order.lock().unwrap().push("decoded");
                decoded
            },
            async {
                order.lock().unwrap().push("other task ran");
            }
        );

        assert_eq!(decoded.unwrap().tile_count(), 4096);
        assert_eq!(*order.lock().unwrap(), vec!["other task ran", "decoded"]);
    }

    #[tokio::test]
    async fn test_rejects_garbage() {
        let result = FogContainerDecoder::new().decode(b"PK\x03\x04").await;
        assert!(matches!(result, Err(DecodeError::InvalidContainer(_))));
    }

    #[tokio::test]
    async fn test_rejects_unknown_version() {
        let container = FogContainer {
            magic: FOG_CONTAINER_MAGIC,
            version: 7,
            tiles: vec![],
        };
        let bytes = bincode::serialize(&container).unwrap();

        let result = FogContainerDecoder::new().decode(&bytes).await;

        assert_eq!(result, Err(DecodeError::UnsupportedVersion(7)));
    }

    #[tokio::test]
    async fn test_rejects_short_tile() {
        let container = FogContainer {
            magic: FOG_CONTAINER_MAGIC,
            version: FOG_CONTAINER_VERSION,
            tiles: vec![EncodedTile {
                x: 3,
                y: 4,
                bitmap: vec![0xFF; 8],
            }],
        };
        let bytes = bincode::serialize(&container).unwrap();

        let result = FogContainerDecoder::new().decode(&bytes).await;

        assert_eq!(
            result,
            Err(DecodeError::MalformedTile {
                x: 3,
                y: 4,
                expected: TILE_BITMAP_LEN,
                actual: 8
            })
        );
    }
}
