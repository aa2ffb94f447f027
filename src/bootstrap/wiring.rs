//! # Dependency Wiring / 依赖注入
//!
//! Builds the concrete adapters for one list session and hands them to the
//! controller. This is the only place that knows every concrete type.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use sl_app::{ListController, ListDeps, ListEvents};
use sl_core::ListConfig;
use sl_infra::{
    Endpoints, HttpActionTransport, HttpDownloader, HttpFileUploader, InMemoryContentRegistry,
    TeardownTimer,
};
use sl_platform::{ArboardClipboard, InMemoryItemView, PassthroughMarkdownRenderer, TerminalAlert};
use tracing::info;

/// A wired session: the controller plus the view the CLI prints.
pub struct WiredSession {
    pub controller: ListController,
    pub view: Arc<InMemoryItemView>,
}

pub fn wire_session(config: ListConfig) -> anyhow::Result<WiredSession> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("shoplist/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;
    let endpoints = Endpoints::from_config(&config);
    let download_dir = resolve_download_dir(&config);

    let events = ListEvents::new();
    let view = Arc::new(InMemoryItemView::from_server_items(
        &config.server_items,
        config.multiline_mode,
    ));

    let deps = ListDeps {
        registry: Arc::new(InMemoryContentRegistry::new()),
        view: view.clone(),
        clipboard: Arc::new(ArboardClipboard::new()),
        downloader: Arc::new(HttpDownloader::new(
            client.clone(),
            endpoints.clone(),
            &download_dir,
        )),
        markdown: Arc::new(PassthroughMarkdownRenderer),
        alert: Arc::new(TerminalAlert::stderr()),
        timer: Arc::new(TeardownTimer::new(events.sender())),
        transport: Arc::new(HttpActionTransport::new(client.clone(), endpoints.clone())),
        uploader: Arc::new(HttpFileUploader::new(client, endpoints)),
    };

    info!(
        list = %config.list_name,
        server = %config.server_url,
        download_dir = %download_dir.display(),
        "list session wired"
    );

    Ok(WiredSession {
        controller: ListController::new(config, deps, events),
        view,
    })
}

fn resolve_download_dir(config: &ListConfig) -> PathBuf {
    config
        .download_dir
        .clone()
        .or_else(dirs::download_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
