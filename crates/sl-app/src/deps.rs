//! # List Dependencies / 列表依赖
//!
//! Dependency grouping for [`crate::ListController`] construction.
//!
//! **Note / 注意**: This is NOT a Builder pattern. No defaults, no hidden
//! logic; just parameter grouping.

use sl_core::ports::*;
use std::sync::Arc;

/// List session dependency grouping (non-Builder, just parameter grouping)
/// 列表会话依赖分组（非 Builder，仅参数打包）
pub struct ListDeps {
    // State / 状态
    pub registry: Arc<dyn ContentRegistryPort>,
    pub view: Arc<dyn ItemViewPort>,

    // Local side effects / 本地副作用
    pub clipboard: Arc<dyn ClipboardPort>,
    pub downloader: Arc<dyn DownloadPort>,
    pub markdown: Arc<dyn MarkdownRendererPort>,
    pub alert: Arc<dyn AlertPort>,
    pub timer: Arc<dyn TeardownTimerPort>,

    // Remote / 远端
    pub transport: Arc<dyn ActionTransportPort>,
    pub uploader: Arc<dyn FileUploadPort>,
}
