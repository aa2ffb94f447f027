use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::content::{FileReference, ItemContent, DEFAULT_FILE_NAME};
use crate::ports::TransportError;

/// What to fetch when a binary item is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadRequest {
    /// Stored upload, fetched from the download endpoint.
    File(FileReference),
    /// Embedded `data:` URL, decoded locally.
    InlineData { data_url: String, filename: String },
}

impl DownloadRequest {
    /// Build the request for `content`; `None` for text items.
    ///
    /// Uploaded files always download under their original name. Inline data
    /// uses the element's filename attribute when it has one.
    pub fn for_content(content: &ItemContent, filename_hint: Option<&str>) -> Option<Self> {
        match content {
            ItemContent::FileRef { file, .. } => Some(Self::File(file.clone())),
            ItemContent::InlineData { raw, .. } => Some(Self::InlineData {
                data_url: raw.clone(),
                filename: filename_hint
                    .filter(|name| !name.is_empty())
                    .unwrap_or(DEFAULT_FILE_NAME)
                    .to_string(),
            }),
            ItemContent::PlainText { .. } | ItemContent::Markdown { .. } => None,
        }
    }

    pub fn filename(&self) -> &str {
        match self {
            Self::File(file) => &file.original_name,
            Self::InlineData { filename, .. } => filename,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DownloadError {
    #[error("download failed: {0}")]
    Transport(#[from] TransportError),

    #[error("invalid data URL: {0}")]
    InvalidDataUrl(String),

    #[error("failed to save {path}: {reason}")]
    Save { path: String, reason: String },
}

/// Download collaborator; returns where the payload ended up.
#[async_trait]
pub trait DownloadPort: Send + Sync {
    async fn download(&self, request: &DownloadRequest) -> Result<PathBuf, DownloadError>;
}
