use std::collections::BTreeMap;

/// Bytes in one tile's explored-cell bitmap (64 x 64 cells, one bit per cell).
pub const TILE_BITMAP_LEN: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileKey {
    pub x: u16,
    pub y: u16,
}

impl TileKey {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Explored-cell bitmap of one tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    bitmap: Box<[u8; TILE_BITMAP_LEN]>,
}

impl Tile {
    pub fn empty() -> Self {
        Self {
            bitmap: Box::new([0u8; TILE_BITMAP_LEN]),
        }
    }

    /// Build a tile from raw bitmap bytes. Returns `None` on a length mismatch.
    pub fn from_bitmap(bytes: &[u8]) -> Option<Self> {
        let bitmap: [u8; TILE_BITMAP_LEN] = bytes.try_into().ok()?;
        Some(Self {
            bitmap: Box::new(bitmap),
        })
    }

    pub fn bitmap(&self) -> &[u8] {
        &self.bitmap[..]
    }

    /// Mark a cell as explored. `cell` is `row * 64 + column`.
    pub fn set_explored(&mut self, cell: usize) {
        if cell < TILE_BITMAP_LEN * 8 {
            self.bitmap[cell / 8] |= 1 << (cell % 8);
        }
    }

    pub fn is_explored(&self, cell: usize) -> bool {
        cell < TILE_BITMAP_LEN * 8 && self.bitmap[cell / 8] & (1 << (cell % 8)) != 0
    }

    pub fn explored_cells(&self) -> u32 {
        self.bitmap.iter().map(|b| b.count_ones()).sum()
    }

    fn union_with(&mut self, other: &Tile) {
        for (dst, src) in self.bitmap.iter_mut().zip(other.bitmap.iter()) {
            *dst |= *src;
        }
    }
}

/// Accumulated explored regions of one or more snapshots.
/// 一个或多个快照累积的已探索区域。
///
/// A map built from a single snapshot represents exactly that snapshot.
/// Folding another snapshot in unions explored cells tile by tile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FogMap {
    tiles: BTreeMap<TileKey, Tile>,
}

impl FogMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_tile(&mut self, key: TileKey, tile: Tile) {
        self.tiles.insert(key, tile);
    }

    pub fn tile(&self, key: &TileKey) -> Option<&Tile> {
        self.tiles.get(key)
    }

    pub fn tiles(&self) -> impl Iterator<Item = (&TileKey, &Tile)> {
        self.tiles.iter()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn explored_cells(&self) -> u64 {
        self.tiles
            .values()
            .map(|tile| u64::from(tile.explored_cells()))
            .sum()
    }

    /// Fold `other` into `self`: explored cells accumulate.
    pub fn merge(&mut self, other: FogMap) {
        for (key, tile) in other.tiles {
            match self.tiles.get_mut(&key) {
                Some(existing) => existing.union_with(&tile),
                None => {
                    self.tiles.insert(key, tile);
                }
            }
        }
    }
}
