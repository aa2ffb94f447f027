use crate::ids::ItemId;
use crate::item::ItemState;
use crate::list::{InsertPosition, ItemElement};

/// The rendered list the session binds to.
///
/// Every element carries its bound id and state marker; the session reads
/// state back from here rather than keeping a second copy.
pub trait ItemViewPort: Send + Sync {
    fn insert(&self, element: ItemElement, position: InsertPosition);

    /// Bind the server-rendered element at `index` to `id`.
    ///
    /// Returns `false` if no such element exists.
    fn bind_rendered(&self, index: usize, id: &ItemId) -> bool;

    fn element(&self, id: &ItemId) -> Option<ItemElement>;

    fn set_state(&self, id: &ItemId, state: ItemState) -> bool;

    fn set_label(&self, id: &ItemId, label: &str) -> bool;

    fn set_filename(&self, id: &ItemId, filename: &str) -> bool;

    fn remove(&self, id: &ItemId) -> bool;

    fn elements(&self) -> Vec<ItemElement>;
}
