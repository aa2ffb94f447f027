use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use sl_core::ports::{ContentRegistryPort, RegistryError};
use sl_core::{ItemContent, ItemId};
use tracing::debug;

/// Session-scoped content registry.
///
/// `exists` scans every value. Lists stay in the hundreds of items, so no
/// content → id index is kept.
#[derive(Default)]
pub struct InMemoryContentRegistry {
    entries: RwLock<HashMap<ItemId, ItemContent>>,
}

impl InMemoryContentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<ItemId, ItemContent>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<ItemId, ItemContent>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ContentRegistryPort for InMemoryContentRegistry {
    fn get(&self, id: &ItemId) -> Option<ItemContent> {
        self.read().get(id).cloned()
    }

    fn put(&self, id: ItemId, content: ItemContent) -> Result<(), RegistryError> {
        let mut entries = self.write();
        if entries.contains_key(&id) {
            return Err(RegistryError::Occupied(id));
        }
        debug!(item_id = %id, "registry put");
        entries.insert(id, content);
        Ok(())
    }

    fn delete(&self, id: &ItemId) -> Option<ItemContent> {
        let removed = self.write().remove(id);
        if removed.is_some() {
            debug!(item_id = %id, "registry delete");
        }
        removed
    }

    fn contains(&self, id: &ItemId) -> bool {
        self.read().contains_key(id)
    }

    fn exists(&self, raw: &str) -> bool {
        self.read().values().any(|content| content.as_str() == raw)
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
