use anyhow::Result;

/// Clipboard port - abstracts system clipboard writes.
pub trait ClipboardPort: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}
