//! # Dependency Wiring / 依赖注入
//!
//! Builds the concrete adapters from `AppConfig` and hands them to the
//! navigation engine. This is the only place that knows which adapter
//! implements which port.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use tm_app::{ListSnapshots, NavigationDeps, SnapshotContentCache};
use tm_core::ports::LocationPort;
use tm_core::AppConfig;
use tm_infra::{FileLocationStore, FogContainerDecoder, InMemoryLocation, TimeMachineHttpApi};

use crate::adapters::{ConsoleNotifier, ConsoleRenderer};

/// Everything a viewer session needs, wired but not yet started.
pub struct Viewer {
    pub deps: NavigationDeps,
    pub list_snapshots: ListSnapshots,
    pub location: Arc<dyn LocationPort>,
}

pub fn wire_viewer(config: &AppConfig) -> anyhow::Result<Viewer> {
    if config.backend_url.trim().is_empty() {
        anyhow::bail!(
            "No backend url configured; set [backend] url or {}",
            super::config::BACKEND_URL_ENV
        );
    }

    let api = Arc::new(
        TimeMachineHttpApi::from_config(config).context("Failed to create backend client")?,
    );

    let location: Arc<dyn LocationPort> = if config.location_path.as_os_str().is_empty() {
        Arc::new(InMemoryLocation::default())
    } else {
        Arc::new(FileLocationStore::new(config.location_path.clone()))
    };

    // One cache per viewer session.
    let cache = Arc::new(SnapshotContentCache::new(api.clone()));

    info!(backend = %config.backend_url, "Viewer wired");

    Ok(Viewer {
        deps: NavigationDeps {
            metadata: api.clone(),
            cache,
            decoder: Arc::new(FogContainerDecoder::new()),
            renderer: Arc::new(ConsoleRenderer::new()),
            location: location.clone(),
            notifier: Arc::new(ConsoleNotifier),
        },
        list_snapshots: ListSnapshots::from_arc(api),
        location,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_wire_viewer_requires_backend_url() {
        let err = wire_viewer(&AppConfig::empty()).err().unwrap();
        assert!(err.to_string().contains("No backend url configured"));
    }

    #[test]
    fn test_wire_viewer_uses_file_location_when_configured() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("location");
        std::fs::write(&path, "?viewing-snapshot=12").unwrap();
        let config = AppConfig {
            backend_url: "http://localhost:3000/api/v1/".to_string(),
            request_timeout_secs: 10,
            location_path: PathBuf::from(&path),
        };

        let viewer = wire_viewer(&config).unwrap();

        assert_eq!(
            viewer.location.read(),
            Some("?viewing-snapshot=12".to_string())
        );
    }
}
