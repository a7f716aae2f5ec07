//! Decoded, renderable fog map.
//! 已解码、可渲染的迷雾地图。

mod error;
mod fog_map;

pub use error::DecodeError;
pub use fog_map::{FogMap, Tile, TileKey, TILE_BITMAP_LEN};
