//! # List Controller / 列表控制器
//!
//! Owns one list session: the registry, the rendered list and every side
//! effect a user action triggers.
//!
//! Network calls, downloads and the removal delay run as spawned tasks.
//! They never touch the registry or the view themselves; each reports back
//! with exactly one [`ListEvent`], and the controller applies it in
//! [`ListController::handle_event`]. All session state therefore changes on
//! the controller's own task.

use sl_core::ports::{DownloadRequest, UploadedFile};
use sl_core::{
    ActionCode, InsertPosition, ItemAction, ItemContent, ItemId, ItemState, ListConfig, ListEvent,
};
use std::path::Path;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info, warn};

use crate::deps::ListDeps;
use crate::policy;
use crate::usecases::{
    AddItem, AddItemError, BootstrapList, PersistItemAction, ToggleError, ToggleItem,
    UploadError, UploadFileUseCase,
};

/// How long a removed file item stays visible before it is torn down.
pub const TEARDOWN_DELAY: Duration = Duration::from_millis(100);

/// Event channel of a list session.
///
/// Created before the adapters so the ones that report back (the teardown
/// timer) can be handed a sender.
pub struct ListEvents {
    tx: UnboundedSender<ListEvent>,
    rx: UnboundedReceiver<ListEvent>,
}

impl ListEvents {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    pub fn sender(&self) -> UnboundedSender<ListEvent> {
        self.tx.clone()
    }
}

impl Default for ListEvents {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ListController {
    config: ListConfig,
    deps: ListDeps,
    bootstrap: BootstrapList,
    add: AddItem,
    toggle: ToggleItem,
    upload: UploadFileUseCase,
    persist: PersistItemAction,
    events: ListEvents,
    /// Spawned tasks and timers whose event has not arrived yet.
    in_flight: usize,
}

impl ListController {
    pub fn new(config: ListConfig, deps: ListDeps, events: ListEvents) -> Self {
        let multiline = config.multiline_mode;
        let position = InsertPosition::from_config(config.new_item_location_at_top);

        Self {
            bootstrap: BootstrapList::new(
                deps.registry.clone(),
                deps.view.clone(),
                deps.markdown.clone(),
                multiline,
            ),
            add: AddItem::new(
                deps.registry.clone(),
                deps.view.clone(),
                deps.markdown.clone(),
                multiline,
                position,
            ),
            toggle: ToggleItem::new(deps.registry.clone(), deps.view.clone()),
            upload: UploadFileUseCase::new(deps.registry.clone(), deps.view.clone(), &config),
            persist: PersistItemAction::new(
                deps.registry.clone(),
                deps.transport.clone(),
                config.separator.clone(),
            ),
            config,
            deps,
            events,
            in_flight: 0,
        }
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Number of outstanding background results.
    pub fn pending(&self) -> usize {
        self.in_flight
    }

    /// Register and bind the items the server rendered.
    pub fn bootstrap(&mut self) -> Vec<ItemId> {
        self.bootstrap.execute(&self.config.server_items)
    }

    /// Add typed or pasted input and report its creation.
    pub fn add_item(&mut self, input: &str) -> Result<ItemId, AddItemError> {
        let id = self.add.execute(input)?;
        self.persist_in_background(&id, ActionCode::Create);
        Ok(id)
    }

    /// Advance an item and carry out what the transition asks for.
    pub fn toggle(&mut self, id: &ItemId) -> Result<ItemState, ToggleError> {
        let outcome = self.toggle.execute(id)?;

        for action in &outcome.actions {
            match action {
                ItemAction::CopyToClipboard { text } => {
                    if let Err(err) = self.deps.clipboard.write_text(text) {
                        warn!(item_id = %id, error = %err, "clipboard write failed");
                    }
                }
                ItemAction::Download => {
                    self.spawn_download(id, &outcome.content, outcome.filename.as_deref())
                }
                ItemAction::Persist { action } => self.persist_in_background(id, *action),
                ItemAction::ScheduleTeardown => {
                    self.deps.timer.schedule(id.clone(), TEARDOWN_DELAY);
                    self.in_flight += 1;
                }
            }
        }

        Ok(outcome.next)
    }

    /// Check a local file and start uploading it.
    ///
    /// Size violations and unreadable files are alerted here; the item
    /// appears once the upload result comes back through
    /// [`handle_event`](Self::handle_event).
    pub async fn upload(&mut self, path: &Path) -> Result<(), UploadError> {
        let file = match self.upload.prepare(path).await {
            Ok(file) => file,
            Err(err) => {
                match &err {
                    UploadError::TooLarge { .. } => self
                        .deps
                        .alert
                        .alert(&policy::file_too_large(self.config.max_file_size_mb)),
                    UploadError::Read { .. } => {
                        warn!(error = %err, "upload file unreadable");
                        self.deps.alert.alert(&policy::upload_failed(&err));
                    }
                    UploadError::Disabled => {}
                }
                return Err(err);
            }
        };

        info!(file_name = %file.file_name, size = file.size(), "upload started");
        let uploader = self.deps.uploader.clone();
        let tx = self.events.sender();
        self.in_flight += 1;
        tokio::spawn(async move {
            let result = uploader.upload(file).await;
            let _ = tx.send(ListEvent::UploadFinished { result });
        });
        Ok(())
    }

    /// Wait for the next background result.
    pub async fn next_event(&mut self) -> Option<ListEvent> {
        self.events.rx.recv().await
    }

    /// Apply every background result that has already arrived.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events.rx.try_recv() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    /// Wait until every outstanding background result has been applied.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            match self.events.rx.recv().await {
                Some(event) => self.handle_event(event),
                None => break,
            }
        }
    }

    pub fn handle_event(&mut self, event: ListEvent) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match event {
            ListEvent::PersistFinished { id, action, result } => match result {
                Ok(()) => debug!(item_id = %id, %action, "action saved"),
                Err(err) => {
                    warn!(item_id = %id, %action, error = %err, "action not saved");
                    self.deps.alert.alert(&policy::persist_failed(&err));
                }
            },
            ListEvent::UploadFinished { result } => match result {
                Ok(uploaded) => self.upload_completed(uploaded),
                Err(err) => {
                    warn!(error = %err, "upload failed");
                    self.deps.alert.alert(&policy::upload_failed(&err));
                }
            },
            ListEvent::DownloadFinished { id, result } => match result {
                Ok(path) => info!(item_id = %id, path = %path.display(), "attachment downloaded"),
                Err(err) => warn!(item_id = %id, error = %err, "attachment download failed"),
            },
            ListEvent::TeardownDue { id } => {
                self.deps.view.remove(&id);
                self.deps.registry.delete(&id);
                debug!(item_id = %id, "removed file item torn down");
            }
        }
    }

    fn upload_completed(&mut self, uploaded: UploadedFile) {
        match self.upload.complete(uploaded) {
            Ok(id) => self.persist_in_background(&id, ActionCode::Create),
            Err(err) => {
                error!(error = %err, "uploaded file could not be registered");
                self.deps.alert.alert(&policy::upload_failed(&err));
            }
        }
    }

    fn persist_in_background(&mut self, id: &ItemId, action: ActionCode) {
        // The record is built now; a teardown may remove the entry before
        // the request goes out.
        let Ok(record) = self.persist.prepare(id, action) else {
            return;
        };

        let persist = self.persist.clone();
        let tx = self.events.sender();
        let id = id.clone();
        self.in_flight += 1;
        tokio::spawn(async move {
            let result = persist.send(&record).await;
            let _ = tx.send(ListEvent::PersistFinished { id, action, result });
        });
    }

    fn spawn_download(&mut self, id: &ItemId, content: &ItemContent, filename: Option<&str>) {
        let Some(request) = DownloadRequest::for_content(content, filename) else {
            return;
        };

        let downloader = self.deps.downloader.clone();
        let tx = self.events.sender();
        let id = id.clone();
        self.in_flight += 1;
        tokio::spawn(async move {
            let result = downloader.download(&request).await;
            let _ = tx.send(ListEvent::DownloadFinished { id, result });
        });
    }
}
