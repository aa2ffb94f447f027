use sl_core::ports::{ContentRegistryPort, ItemViewPort};
use sl_core::{ItemAction, ItemContent, ItemId, ItemState, ItemStateMachine};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToggleError {
    #[error("no list element bound to {0}")]
    UnknownElement(ItemId),

    #[error("item not found in registry: {0}")]
    UnknownItem(ItemId),
}

/// Result of advancing one item; `actions` still have to be carried out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub id: ItemId,
    pub previous: ItemState,
    pub next: ItemState,
    pub content: ItemContent,
    /// Download name from the element, if it has one.
    pub filename: Option<String>,
    pub actions: Vec<ItemAction>,
}

/// Advance an item to its next state and update its state marker.
pub struct ToggleItem {
    registry: Arc<dyn ContentRegistryPort>,
    view: Arc<dyn ItemViewPort>,
}

impl ToggleItem {
    pub fn new(registry: Arc<dyn ContentRegistryPort>, view: Arc<dyn ItemViewPort>) -> Self {
        Self { registry, view }
    }

    #[tracing::instrument(name = "usecase.toggle_item.execute", skip_all, fields(item_id = %id))]
    pub fn execute(&self, id: &ItemId) -> Result<ToggleOutcome, ToggleError> {
        let element = self
            .view
            .element(id)
            .ok_or_else(|| ToggleError::UnknownElement(id.clone()))?;
        let content = self
            .registry
            .get(id)
            .ok_or_else(|| ToggleError::UnknownItem(id.clone()))?;

        let previous = element.state;
        let (next, actions) = ItemStateMachine::transition(previous, &content);
        self.view.set_state(id, next);
        debug!(%previous, %next, "item toggled");

        Ok(ToggleOutcome {
            id: id.clone(),
            previous,
            next,
            content,
            filename: element.filename,
            actions,
        })
    }
}
