//! System clipboard adapter
//! 系统剪贴板适配器

use anyhow::{Context, Result};
use sl_core::ports::ClipboardPort;
use tracing::debug;

/// Writes activated items to the system clipboard.
///
/// A fresh arboard handle is opened per write, so a session started without
/// a display only fails when something is actually copied.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArboardClipboard;

impl ArboardClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardPort for ArboardClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().context("failed to open system clipboard")?;
        clipboard
            .set_text(text.to_owned())
            .context("failed to write text to clipboard")?;
        debug!(len = text.len(), "clipboard updated");
        Ok(())
    }
}
