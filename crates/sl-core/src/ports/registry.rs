use thiserror::Error;

use crate::content::ItemContent;
use crate::ids::ItemId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Entries are immutable; an id is never rebound while live.
    #[error("item id already registered: {0}")]
    Occupied(ItemId),
}

/// Content registry port - the session's id → content map.
///
/// Single source of truth for what an item says. One instance per list
/// session, shared by every use case that needs it; nothing reaches for an
/// ambient global.
pub trait ContentRegistryPort: Send + Sync {
    fn get(&self, id: &ItemId) -> Option<ItemContent>;

    /// Insert a new entry. Fails if `id` is already live.
    fn put(&self, id: ItemId, content: ItemContent) -> Result<(), RegistryError>;

    /// Remove an entry, returning what it held.
    fn delete(&self, id: &ItemId) -> Option<ItemContent>;

    fn contains(&self, id: &ItemId) -> bool;

    /// Whether any live entry holds exactly this raw string.
    fn exists(&self, raw: &str) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
