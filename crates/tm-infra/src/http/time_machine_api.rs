use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use tm_core::ports::{SnapshotCatalogPort, SnapshotDownloadPort, SnapshotMetadataPort};
use tm_core::{
    ApiError, ApiResult, AppConfig, DownloadToken, SnapshotDescriptor, SnapshotId, SnapshotPage,
};

use super::classify::{classify_status, classify_transport};

/// reqwest-backed client for the snapshot backend.
///
/// Endpoints, relative to the base url:
/// - `GET snapshot/{id}` → descriptor
/// - `GET snapshot/download?token=...` → raw container bytes
/// - `GET snapshot?page=&page_size=` → listing page
///
/// No retries happen here; the configured timeout is the only transport policy.
#[derive(Clone)]
pub struct TimeMachineHttpApi {
    client: Client,
    base_url: Url,
}

impl TimeMachineHttpApi {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> anyhow::Result<Self> {
        // Url::join drops the last path segment unless it ends with '/'.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&normalized)
            .with_context(|| format!("Invalid backend url: {}", base_url))?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let timeout = (config.request_timeout_secs > 0)
            .then(|| Duration::from_secs(config.request_timeout_secs));
        Self::new(&config.backend_url, timeout)
    }

    fn url(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::unknown(None, format!("invalid request path {}: {}", path, e)))
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> ApiResult<Bytes> {
        let url = self.url(path)?;
        debug!(url = %url, "Requesting api");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(classify_transport)?;

        if !status.is_success() {
            let err = classify_status(status, &body);
            warn!(path, error = %err, "Api error");
            return Err(err);
        }
        Ok(body)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> ApiResult<T> {
        let body = self.get(path, query).await?;
        serde_json::from_slice(&body).map_err(|e| {
            warn!(path, error = %e, "Malformed api response");
            ApiError::unknown(Some(200), format!("malformed response body: {}", e))
        })
    }
}

#[async_trait]
impl SnapshotMetadataPort for TimeMachineHttpApi {
    async fn get_snapshot(&self, id: SnapshotId) -> ApiResult<SnapshotDescriptor> {
        self.get_json(&format!("snapshot/{}", id), &[]).await
    }
}

#[async_trait]
impl SnapshotDownloadPort for TimeMachineHttpApi {
    async fn download(&self, token: &DownloadToken) -> ApiResult<Bytes> {
        let bytes = self
            .get("snapshot/download", &[("token", token.as_str())])
            .await?;
        debug!(size = bytes.len(), "Downloaded snapshot content");
        Ok(bytes)
    }
}

#[async_trait]
impl SnapshotCatalogPort for TimeMachineHttpApi {
    async fn list_snapshots(&self, page: u32, page_size: u32) -> ApiResult<SnapshotPage> {
        let page = page.to_string();
        let page_size = page_size.to_string();
        self.get_json("snapshot", &[("page", &page), ("page_size", &page_size)])
            .await
    }
}
