use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use tm_core::ports::MapRendererPort;
use tm_core::FogMap;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapSummary {
    pub tiles: usize,
    pub explored_cells: u64,
}

impl From<&FogMap> for MapSummary {
    fn from(map: &FogMap) -> Self {
        Self {
            tiles: map.tile_count(),
            explored_cells: map.explored_cells(),
        }
    }
}

/// Renders a map as a one-line summary on stdout.
#[derive(Default)]
pub struct ConsoleRenderer {
    displayed: Mutex<Option<MapSummary>>,
    ready: AtomicBool,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn displayed(&self) -> Option<MapSummary> {
        *self
            .displayed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }
}

impl MapRendererPort for ConsoleRenderer {
    fn replace_map(&self, map: FogMap) {
        let summary = MapSummary::from(&map);
        println!(
            "map: {} tiles, {} explored cells",
            summary.tiles, summary.explored_cells
        );
        *self
            .displayed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(summary);
    }

    fn set_ready(&self, ready: bool) {
        debug!(ready, "Renderer readiness changed");
        self.ready.store(ready, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tm_core::{Tile, TileKey};

    #[test]
    fn test_replace_map_records_summary() {
        let renderer = ConsoleRenderer::new();
        let mut tile = Tile::empty();
        tile.set_explored(3);
        tile.set_explored(4);
        let mut map = FogMap::new();
        map.insert_tile(TileKey::new(0, 0), tile);

        renderer.replace_map(map);
        renderer.set_ready(true);

        assert_eq!(
            renderer.displayed(),
            Some(MapSummary {
                tiles: 1,
                explored_cells: 2
            })
        );
        assert!(renderer.is_ready());
    }
}
