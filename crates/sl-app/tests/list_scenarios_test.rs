//! End-to-end list session scenarios against in-process adapters.

use anyhow::Result;
use async_trait::async_trait;
use sl_app::{ListController, ListDeps, ListEvents};
use sl_core::ports::{
    ActionTransportPort, AlertPort, ClipboardPort, ContentRegistryPort, DownloadError,
    DownloadPort, DownloadRequest, FileUploadPort, ItemViewPort, TransportError, UploadFile, UploadedFile,
};
use sl_core::{ActionRecord, ItemId, ItemState, ListConfig, ServerItem};
use sl_infra::{InMemoryContentRegistry, TeardownTimer};
use sl_platform::{InMemoryItemView, PassthroughMarkdownRenderer};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct RecordingTransport {
    payloads: Mutex<Vec<String>>,
    fail_with: Option<TransportError>,
}

#[async_trait]
impl ActionTransportPort for RecordingTransport {
    async fn send(&self, record: &ActionRecord) -> Result<(), TransportError> {
        self.payloads.lock().unwrap().push(record.payload().to_string());
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
struct RecordingClipboard {
    texts: Mutex<Vec<String>>,
}

impl ClipboardPort for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        self.texts.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingAlert {
    messages: Mutex<Vec<String>>,
}

impl AlertPort for RecordingAlert {
    fn alert(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

#[derive(Default)]
struct RecordingDownloader {
    requests: Mutex<Vec<DownloadRequest>>,
}

#[async_trait]
impl DownloadPort for RecordingDownloader {
    async fn download(&self, request: &DownloadRequest) -> Result<PathBuf, DownloadError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(PathBuf::from("/tmp").join(request.filename()))
    }
}

struct StaticUploader {
    result: Result<UploadedFile, TransportError>,
}

#[async_trait]
impl FileUploadPort for StaticUploader {
    async fn upload(&self, _file: UploadFile) -> Result<UploadedFile, TransportError> {
        self.result.clone()
    }
}

struct Session {
    controller: ListController,
    registry: Arc<InMemoryContentRegistry>,
    view: Arc<InMemoryItemView>,
    transport: Arc<RecordingTransport>,
    clipboard: Arc<RecordingClipboard>,
    alert: Arc<RecordingAlert>,
    downloader: Arc<RecordingDownloader>,
}

fn config(multiline: bool, server_items: Vec<ServerItem>) -> ListConfig {
    ListConfig {
        server_url: "http://127.0.0.1:5000".into(),
        base_url_path: "/".into(),
        list_name: "groceries".into(),
        separator: "|".into(),
        multiline_mode: multiline,
        multiline_file_upload: multiline,
        new_item_location_at_top: false,
        max_file_size_mb: 10.0,
        server_items,
        download_dir: None,
    }
}

fn uploaded_invoice() -> UploadedFile {
    UploadedFile {
        file_id: "abc123".into(),
        original_name: "invoice.pdf".into(),
        mime_type: "application/pdf".into(),
    }
}

fn session_with(
    config: ListConfig,
    transport: RecordingTransport,
    upload: Result<UploadedFile, TransportError>,
) -> Session {
    let events = ListEvents::new();
    let registry = Arc::new(InMemoryContentRegistry::new());
    let view = Arc::new(InMemoryItemView::from_server_items(
        &config.server_items,
        config.multiline_mode,
    ));
    let transport = Arc::new(transport);
    let clipboard = Arc::new(RecordingClipboard::default());
    let alert = Arc::new(RecordingAlert::default());
    let downloader = Arc::new(RecordingDownloader::default());

    let deps = ListDeps {
        registry: registry.clone(),
        view: view.clone(),
        clipboard: clipboard.clone(),
        downloader: downloader.clone(),
        markdown: Arc::new(PassthroughMarkdownRenderer),
        alert: alert.clone(),
        timer: Arc::new(TeardownTimer::new(events.sender())),
        transport: transport.clone(),
        uploader: Arc::new(StaticUploader { result: upload }),
    };

    Session {
        controller: ListController::new(config, deps, events),
        registry,
        view,
        transport,
        clipboard,
        alert,
        downloader,
    }
}

fn session(multiline: bool) -> Session {
    session_with(
        config(multiline, Vec::new()),
        RecordingTransport::default(),
        Ok(uploaded_invoice()),
    )
}

impl Session {
    fn payloads(&self) -> Vec<String> {
        self.transport.payloads.lock().unwrap().clone()
    }

    fn alerts(&self) -> Vec<String> {
        self.alert.messages.lock().unwrap().clone()
    }

    fn state_of(&self, id: &ItemId) -> Option<ItemState> {
        self.view.element(id).map(|e| e.state)
    }

    async fn upload_invoice(&mut self) -> ItemId {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invoice.pdf");
        std::fs::write(&path, b"%PDF-1.7").unwrap();

        self.controller.upload(&path).await.unwrap();
        self.controller.settle().await;

        self.view
            .elements()
            .into_iter()
            .find_map(|e| e.id.filter(|_| e.filename.is_some()))
            .unwrap()
    }
}

#[tokio::test]
async fn typed_item_is_normalized_stored_once_and_created() {
    let mut s = session(false);

    let id = s.controller.add_item("Milk").unwrap();
    assert!(s.controller.add_item("Milk").is_err());
    s.controller.settle().await;

    assert_eq!(s.registry.len(), 1);
    assert!(s.registry.exists("milk"));
    assert_eq!(s.state_of(&id), Some(ItemState::Active));
    assert_eq!(s.payloads(), ["c|milk"]);
    assert!(s.alerts().is_empty());
}

#[tokio::test]
async fn upload_adds_file_item_with_attachment_label() {
    let mut s = session(true);

    let id = s.upload_invoice().await;

    assert_eq!(
        s.registry.get(&id).map(|c| c.as_str().to_string()),
        Some("file://abc123::invoice.pdf::application/pdf".into())
    );
    let element = s.view.element(&id).unwrap();
    assert_eq!(element.label, "📎 invoice.pdf");
    assert_eq!(element.state, ItemState::Active);
    assert_eq!(
        s.payloads(),
        ["c|file://abc123::invoice.pdf::application/pdf"]
    );
}

#[tokio::test]
async fn file_item_reaching_removed_is_torn_down() {
    let mut s = session(true);
    let id = s.upload_invoice().await;

    // Active -> Acknowledged -> Removed
    assert_eq!(s.controller.toggle(&id).unwrap(), ItemState::Acknowledged);
    assert_eq!(s.controller.toggle(&id).unwrap(), ItemState::Removed);
    s.controller.settle().await;

    assert!(!s.registry.contains(&id));
    assert!(s.view.element(&id).is_none());
    assert_eq!(
        s.payloads(),
        [
            "c|file://abc123::invoice.pdf::application/pdf",
            "h|file://abc123::invoice.pdf::application/pdf",
            "d|file://abc123::invoice.pdf::application/pdf",
        ]
    );
    // Only the Acknowledged step downloads; reaching Removed does not.
    assert_eq!(s.downloader.requests.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn failed_persist_alerts_and_keeps_optimistic_state() {
    let mut s = session_with(
        config(false, Vec::new()),
        RecordingTransport {
            fail_with: Some(TransportError::Status {
                status: 500,
                reason: "Internal Server Error".into(),
            }),
            ..Default::default()
        },
        Ok(uploaded_invoice()),
    );

    let id = s.controller.add_item("bread").unwrap();
    s.controller.settle().await;

    let alerts = s.alerts();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].contains("500"));
    assert_eq!(s.state_of(&id), Some(ItemState::Active));
    assert!(s.registry.contains(&id));
}

#[tokio::test]
async fn text_item_cycles_through_all_actions_and_stays_registered() {
    let mut s = session(false);
    let id = s.controller.add_item("Tom's Eggs").unwrap();

    for _ in 0..4 {
        s.controller.toggle(&id).unwrap();
    }
    s.controller.settle().await;

    assert_eq!(s.state_of(&id), Some(ItemState::Active));
    assert_eq!(
        s.payloads(),
        [
            "c|tom&#39;s eggs",
            "h|tom&#39;s eggs",
            "d|tom&#39;s eggs",
            "u|tom&#39;s eggs",
            "c|tom&#39;s eggs",
        ]
    );
    // Copied on Active -> Acknowledged and on the two steps after Removed.
    assert_eq!(
        *s.clipboard.texts.lock().unwrap(),
        ["tom's eggs", "tom's eggs", "tom's eggs"]
    );
    assert!(s.registry.contains(&id));
}

#[tokio::test]
async fn oversized_upload_is_alerted_without_network() {
    let mut s = session(true);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.bin");
    std::fs::write(&path, vec![0u8; 11 * 1024 * 1024]).unwrap();

    assert!(s.controller.upload(&path).await.is_err());

    assert_eq!(s.alerts(), ["File too large. Maximum size: 10MB"]);
    assert_eq!(s.controller.pending(), 0);
    assert!(s.registry.is_empty());
}

#[tokio::test]
async fn unreadable_upload_is_alerted_without_network() {
    let mut s = session(true);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.pdf");

    assert!(s.controller.upload(&path).await.is_err());

    let alerts = s.alerts();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].starts_with("File upload failed: failed to read "));
    assert!(alerts[0].contains("missing.pdf"));
    assert_eq!(s.controller.pending(), 0);
    assert!(s.payloads().is_empty());
}

#[tokio::test]
async fn disabled_upload_is_not_alerted() {
    let mut s = session(false);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.txt");
    std::fs::write(&path, b"a").unwrap();

    assert!(s.controller.upload(&path).await.is_err());
    assert!(s.alerts().is_empty());
}

#[tokio::test]
async fn rejected_upload_is_alerted() {
    let mut s = session_with(
        config(true, Vec::new()),
        RecordingTransport::default(),
        Err(TransportError::Status {
            status: 403,
            reason: "Forbidden".into(),
        }),
    );
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.txt");
    std::fs::write(&path, b"a").unwrap();

    s.controller.upload(&path).await.unwrap();
    s.controller.settle().await;

    assert_eq!(s.alerts(), ["File upload failed: 403 Forbidden"]);
    assert!(s.registry.is_empty());
    assert!(s.payloads().is_empty());
}

#[tokio::test]
async fn bootstrapped_items_toggle_from_server_state() {
    let mut s = session_with(
        config(
            false,
            vec![
                ServerItem::new("milk", ItemState::Acknowledged),
                ServerItem::new("milk", ItemState::New),
            ],
        ),
        RecordingTransport::default(),
        Ok(uploaded_invoice()),
    );

    let ids = s.controller.bootstrap();
    assert_eq!(ids.len(), 2);

    assert_eq!(s.controller.toggle(&ids[0]).unwrap(), ItemState::Removed);
    assert_eq!(s.controller.toggle(&ids[1]).unwrap(), ItemState::Active);
    s.controller.settle().await;

    assert_eq!(s.payloads(), ["d|milk", "c|milk"]);
    assert_eq!(*s.clipboard.texts.lock().unwrap(), ["milk"]);
}

#[tokio::test]
async fn pump_applies_only_what_has_arrived() {
    let mut s = session(false);
    s.controller.add_item("tea").unwrap();
    assert_eq!(s.controller.pending(), 1);

    while s.controller.pending() > 0 {
        tokio::task::yield_now().await;
        s.controller.pump();
    }

    assert_eq!(s.payloads(), ["c|tea"]);
}

#[tokio::test]
async fn bootstrapped_and_uploaded_files_share_filename_form() {
    let mut s = session_with(
        config(
            true,
            vec![ServerItem::new("file://a::Tom's.pdf::application/pdf", ItemState::New)],
        ),
        RecordingTransport::default(),
        Ok(UploadedFile {
            file_id: "b".into(),
            original_name: "Tom's.pdf".into(),
            mime_type: "application/pdf".into(),
        }),
    );
    let bootstrapped = s.controller.bootstrap().remove(0);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Tom's.pdf");
    std::fs::write(&path, b"%PDF").unwrap();
    s.controller.upload(&path).await.unwrap();
    s.controller.settle().await;

    let filenames: Vec<Option<String>> = s
        .view
        .elements()
        .into_iter()
        .map(|e| e.filename)
        .collect();
    assert_eq!(filenames.len(), 2);
    assert!(filenames.iter().all(|f| f.as_deref() == Some("Tom's.pdf")));
    assert_eq!(
        s.view.element(&bootstrapped).and_then(|e| e.filename),
        Some("Tom's.pdf".into())
    );
    assert!(s.view.render().contains("<Tom's.pdf>"));
    assert!(!s.view.render().contains("&#39;"));
}
