//! Port interfaces for the application layer
//!
//! Ports define the contract between the navigation engine and the
//! collaborators it drives: the snapshot backend, the content decoder,
//! the rendering surface, the address bar and the message box.
//! Infrastructure and presentation layers provide the implementations.

mod decoder;
mod location;
mod notifier;
mod renderer;
mod snapshot_catalog;
mod snapshot_download;
mod snapshot_metadata;

pub use decoder::SnapshotDecoderPort;
pub use location::LocationPort;
pub use notifier::{NoticeKind, NotifierPort};
pub use renderer::MapRendererPort;
pub use snapshot_catalog::SnapshotCatalogPort;
pub use snapshot_download::SnapshotDownloadPort;
pub use snapshot_metadata::SnapshotMetadataPort;
