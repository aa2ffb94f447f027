use sl_core::ports::{ContentRegistryPort, ItemViewPort, RegistryError, UploadFile, UploadedFile};
use sl_core::{FileReference, InsertPosition, ItemContent, ItemElement, ItemId, ItemState, ListConfig};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use super::internal::RegisterContent;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("file upload is not enabled for this list")]
    Disabled,

    #[error("file too large: {size} bytes (limit {limit})")]
    TooLarge { size: u64, limit: u64 },

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Turn a local file into a list item in two steps.
///
/// [`prepare`](Self::prepare) runs the local checks before any network
/// call; [`complete`](Self::complete) adds the item once the server has
/// stored the file. The upload request itself is the caller's to run.
pub struct UploadFileUseCase {
    view: Arc<dyn ItemViewPort>,
    register: RegisterContent,
    enabled: bool,
    max_bytes: u64,
    position: InsertPosition,
}

impl UploadFileUseCase {
    pub fn new(
        registry: Arc<dyn ContentRegistryPort>,
        view: Arc<dyn ItemViewPort>,
        config: &ListConfig,
    ) -> Self {
        Self {
            view,
            register: RegisterContent::new(registry),
            enabled: config.upload_enabled(),
            max_bytes: config.max_file_size_bytes(),
            position: InsertPosition::from_config(config.new_item_location_at_top),
        }
    }

    #[tracing::instrument(name = "usecase.upload_file.prepare", skip_all, fields(path = %path.display()))]
    pub async fn prepare(&self, path: &Path) -> Result<UploadFile, UploadError> {
        if !self.enabled {
            return Err(UploadError::Disabled);
        }

        let read_error = |source| UploadError::Read {
            path: path.display().to_string(),
            source,
        };
        let size = tokio::fs::metadata(path).await.map_err(read_error)?.len();
        if size > self.max_bytes {
            return Err(UploadError::TooLarge {
                size,
                limit: self.max_bytes,
            });
        }

        let bytes = tokio::fs::read(path).await.map_err(read_error)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| sl_core::content::DEFAULT_FILE_NAME.to_string());

        Ok(UploadFile { file_name, bytes })
    }

    /// Register the stored file and render it as an active item.
    pub fn complete(&self, uploaded: UploadedFile) -> Result<ItemId, RegistryError> {
        let file = FileReference::from(uploaded);
        let filename = file.original_name.clone();
        let content = ItemContent::from_file(file);
        let label = content.attachment_label().unwrap_or_default();

        let id = self.register.execute(content)?;
        self.view.insert(
            ItemElement::new(id.clone(), ItemState::Active, label).with_filename(filename),
            self.position,
        );

        info!(item_id = %id, "uploaded file added");
        Ok(id)
    }
}
