use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::action::ActionRecord;
use crate::content::FileReference;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// Server answered with a non-2xx status.
    #[error("{status} {reason}")]
    Status { status: u16, reason: String },

    /// Request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// Response arrived but its body could not be understood.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Action persistence port.
///
/// One call is one request: no retry, no queue. The caller decides what a
/// failure means for the user.
#[async_trait]
pub trait ActionTransportPort: Send + Sync {
    async fn send(&self, record: &ActionRecord) -> Result<(), TransportError>;
}

/// A local file about to be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Upload endpoint response: `{fileId, originalName, mimeType}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub file_id: String,
    pub original_name: String,
    pub mime_type: String,
}

impl From<UploadedFile> for FileReference {
    fn from(uploaded: UploadedFile) -> Self {
        FileReference::new(uploaded.file_id, uploaded.original_name, uploaded.mime_type)
    }
}

#[async_trait]
pub trait FileUploadPort: Send + Sync {
    async fn upload(&self, file: UploadFile) -> Result<UploadedFile, TransportError>;
}
