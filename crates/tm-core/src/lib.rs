//! # tm-core
//!
//! Core domain models and ports for the snapshot time machine.
//!
//! This crate contains pure domain types and the collaborator contracts
//! (ports). It has no transport, storage, or rendering dependencies.

pub mod api;
pub mod config;
pub mod ids;
pub mod map;
pub mod ports;
pub mod snapshot;

// Re-export commonly used types at the crate root
pub use api::{ApiError, ApiResult};
pub use config::AppConfig;
pub use ids::SnapshotId;
pub use map::{DecodeError, FogMap, Tile, TileKey, TILE_BITMAP_LEN};
pub use snapshot::{
    DownloadToken, Selection, SelectionParseError, SnapshotDescriptor, SnapshotNeighbor,
    SnapshotPage, SnapshotSourceKind, SnapshotSummary,
};
