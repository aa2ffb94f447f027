//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define the list session configuration handed over by the server
//! - Provide serde mapping for the camelCase keys the page template uses
//!
//! ## Prohibited
//!
//! - No business logic or policies
//! - No validation logic
//!
//! Defaults below only mirror what the server template falls back to when a
//! key is absent; they are not policy.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::item::ItemState;

/// List session configuration DTO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListConfig {
    /// Scheme and authority of the list server, e.g. `http://127.0.0.1:5000`.
    pub server_url: String,

    /// Path prefix every endpoint hangs off, with trailing slash.
    #[serde(default = "default_base_url_path")]
    pub base_url_path: String,

    pub list_name: String,

    /// Field separator of the server's list format.
    #[serde(default = "default_separator")]
    pub separator: String,

    #[serde(default)]
    pub multiline_mode: bool,

    #[serde(default)]
    pub multiline_file_upload: bool,

    #[serde(default)]
    pub new_item_location_at_top: bool,

    #[serde(default = "default_max_file_size_mb")]
    pub max_file_size_mb: f64,

    /// Items rendered by the server, `[content, state, css_class]` each.
    #[serde(default)]
    pub server_items: Vec<ServerItem>,

    /// Where downloaded attachments are written.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

impl ListConfig {
    /// Upload ceiling in bytes.
    pub fn max_file_size_bytes(&self) -> u64 {
        (self.max_file_size_mb * 1024.0 * 1024.0) as u64
    }

    pub fn upload_enabled(&self) -> bool {
        self.multiline_mode && self.multiline_file_upload
    }
}

/// One server-rendered item: content first, then metadata columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerItem(pub Vec<String>);

impl ServerItem {
    pub fn new(content: impl Into<String>, state: ItemState) -> Self {
        Self(vec![
            content.into(),
            state.ordinal().to_string(),
            state.css_class().to_string(),
        ])
    }

    pub fn content(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn state(&self) -> ItemState {
        self.0
            .get(1)
            .map(|raw| ItemState::from_server_state(raw))
            .unwrap_or_default()
    }
}

fn default_base_url_path() -> String {
    "/".to_string()
}

fn default_separator() -> String {
    "|".to_string()
}

fn default_max_file_size_mb() -> f64 {
    10.0
}
