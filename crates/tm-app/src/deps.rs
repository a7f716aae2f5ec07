//! # Navigation Dependencies / 导航依赖
//!
//! Parameter grouping for `NavigationController` construction.
//! Not a builder: no defaults, no hidden logic.

use std::sync::Arc;
use tm_core::ports::*;

use crate::cache::SnapshotContentCache;

/// All dependencies are required - no defaults, no optional fields.
/// 所有依赖都是必需的。
pub struct NavigationDeps {
    // Backend / 后端
    pub metadata: Arc<dyn SnapshotMetadataPort>,

    // Session-owned content cache / 会话级内容缓存
    pub cache: Arc<SnapshotContentCache>,

    // Decoding / 解码
    pub decoder: Arc<dyn SnapshotDecoderPort>,

    // Presentation / 展示
    pub renderer: Arc<dyn MapRendererPort>,
    pub location: Arc<dyn LocationPort>,
    pub notifier: Arc<dyn NotifierPort>,
}
