//! ID type wrappers for type safety.

pub mod snapshot_id;

pub use snapshot_id::SnapshotId;
