use sl_core::ports::{ActionTransportPort, ContentRegistryPort, TransportError};
use sl_core::{ActionCode, ActionRecord, ItemId};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PersistError {
    /// Nothing in the registry under this id; nothing is sent.
    #[error("item not found in registry: {0}")]
    UnknownItem(ItemId),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Report one item transition to the list server.
///
/// Split in two so the record can be built while the registry entry is
/// guaranteed live and the request can run later, off the session loop.
#[derive(Clone)]
pub struct PersistItemAction {
    registry: Arc<dyn ContentRegistryPort>,
    transport: Arc<dyn ActionTransportPort>,
    separator: String,
}

impl PersistItemAction {
    pub fn new(
        registry: Arc<dyn ContentRegistryPort>,
        transport: Arc<dyn ActionTransportPort>,
        separator: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            transport,
            separator: separator.into(),
        }
    }

    /// Capture the current content of `id` into a wire record.
    pub fn prepare(&self, id: &ItemId, action: ActionCode) -> Result<ActionRecord, PersistError> {
        let Some(content) = self.registry.get(id) else {
            error!(item_id = %id, %action, "item not found in registry, action dropped");
            return Err(PersistError::UnknownItem(id.clone()));
        };
        Ok(ActionRecord::new(id.clone(), action, &self.separator, &content))
    }

    #[tracing::instrument(
        name = "usecase.persist_item_action.send",
        skip(self, record),
        fields(item_id = %record.id, action = %record.action)
    )]
    pub async fn send(&self, record: &ActionRecord) -> Result<(), TransportError> {
        self.transport.send(record).await?;
        debug!("action persisted");
        Ok(())
    }

    pub async fn execute(&self, id: &ItemId, action: ActionCode) -> Result<(), PersistError> {
        let record = self.prepare(id, action)?;
        self.send(&record).await?;
        Ok(())
    }
}
