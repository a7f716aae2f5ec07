//! Snapshot cache and temporal navigation engine.
//!
//! This crate resolves snapshot metadata, caches downloaded content, composes
//! maps and drives the navigation state machine on top of the `tm-core` ports.

pub mod cache;
pub mod deps;
pub mod error;
pub mod navigation;
pub mod usecases;

pub use cache::SnapshotContentCache;
pub use deps::NavigationDeps;
pub use error::NavigationError;
pub use navigation::{
    read_initial_selection, NavigationController, NavigationState, PipelineOutcome, ResolvedView,
};
pub use usecases::{ListSnapshots, MapComposer, MetadataResolver};
