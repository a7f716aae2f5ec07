use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;

use crate::api::ApiResult;
use crate::snapshot::DownloadToken;

#[async_trait]
pub trait SnapshotDownloadPort: Send + Sync {
    // 用下载令牌拉取快照原始字节
    async fn download(&self, token: &DownloadToken) -> ApiResult<Bytes>;
}

#[async_trait]
impl<T: SnapshotDownloadPort + ?Sized> SnapshotDownloadPort for Arc<T> {
    async fn download(&self, token: &DownloadToken) -> ApiResult<Bytes> {
        (**self).download(token).await
    }
}
