use sl_core::identity::unique_id;
use sl_core::ports::{ContentRegistryPort, RegistryError};
use sl_core::{ItemContent, ItemId};
use std::sync::Arc;
use tracing::debug;

/// Derive a collision-free id for `content` and store it.
///
/// Shared by bootstrap, add and upload completion; the only way content
/// enters the registry.
#[derive(Clone)]
pub struct RegisterContent {
    registry: Arc<dyn ContentRegistryPort>,
}

impl RegisterContent {
    pub fn new(registry: Arc<dyn ContentRegistryPort>) -> Self {
        Self { registry }
    }

    pub fn execute(&self, content: ItemContent) -> Result<ItemId, RegistryError> {
        let id = unique_id(content.as_str(), self.registry.as_ref());
        self.registry.put(id.clone(), content)?;
        debug!(item_id = %id, "content registered");
        Ok(id)
    }
}
