use sl_core::content::escape::decode_for_clipboard;
use sl_core::content::{is_data_url, is_file_reference};
use sl_core::ports::{ContentRegistryPort, ItemViewPort, MarkdownRendererPort, RegistryError};
use sl_core::{InsertPosition, ItemContent, ItemElement, ItemId, ItemState};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use super::internal::RegisterContent;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddItemError {
    #[error("nothing to add")]
    Empty,

    #[error("item already on the list: {0}")]
    Duplicate(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Add what the user typed or pasted as a new, active item.
///
/// Returns the new id; reporting the creation is left to the caller.
pub struct AddItem {
    registry: Arc<dyn ContentRegistryPort>,
    view: Arc<dyn ItemViewPort>,
    markdown: Arc<dyn MarkdownRendererPort>,
    register: RegisterContent,
    multiline: bool,
    position: InsertPosition,
}

impl AddItem {
    pub fn new(
        registry: Arc<dyn ContentRegistryPort>,
        view: Arc<dyn ItemViewPort>,
        markdown: Arc<dyn MarkdownRendererPort>,
        multiline: bool,
        position: InsertPosition,
    ) -> Self {
        Self {
            register: RegisterContent::new(registry.clone()),
            registry,
            view,
            markdown,
            multiline,
            position,
        }
    }

    #[tracing::instrument(name = "usecase.add_item.execute", skip(self, input))]
    pub fn execute(&self, input: &str) -> Result<ItemId, AddItemError> {
        // Pasted attachments are stored verbatim and may repeat.
        if is_data_url(input) || is_file_reference(input) {
            let content = ItemContent::classify(input, self.multiline);
            let label = content.attachment_label().unwrap_or_default();
            let id = self.register.execute(content)?;
            self.view.insert(
                ItemElement::new(id.clone(), ItemState::Active, label),
                self.position,
            );
            info!(item_id = %id, "attachment added");
            return Ok(id);
        }

        let content = ItemContent::from_input(input, self.multiline).ok_or(AddItemError::Empty)?;
        if self.registry.exists(content.as_str()) {
            debug!("duplicate item ignored");
            return Err(AddItemError::Duplicate(content.as_str().to_string()));
        }

        let raw = content.as_str().to_string();
        let id = self.register.execute(content)?;
        let element = if self.multiline {
            let label = self.markdown.render(&decode_for_clipboard(&raw));
            ItemElement::new(id.clone(), ItemState::Active, label).with_markdown(raw)
        } else {
            ItemElement::new(id.clone(), ItemState::Active, raw)
        };
        // Typed items always join at the end of the list.
        self.view.insert(element, InsertPosition::Bottom);

        info!(item_id = %id, "item added");
        Ok(id)
    }
}
