/// Markdown engine collaborator for multiline lists.
pub trait MarkdownRendererPort: Send + Sync {
    /// Render already clipboard-decoded text into a display label.
    fn render(&self, text: &str) -> String;
}
