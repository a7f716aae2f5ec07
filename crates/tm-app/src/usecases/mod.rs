//! Pipeline stages and standalone use cases
//!
//! [NavigationController]
//        ↓
// MetadataResolver   → descriptor(s), fresh every time
//        ↓
// SnapshotContentCache → raw content, downloaded once per id
//        ↓
// MapComposer        → renderable map (single or overlay)

pub mod compose_map;
pub mod list_snapshots;
pub mod resolve_snapshot;

pub use compose_map::MapComposer;
pub use list_snapshots::ListSnapshots;
pub use resolve_snapshot::MetadataResolver;
