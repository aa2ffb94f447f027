use sl_core::ports::MarkdownRendererPort;

/// Markdown engine that leaves text as typed.
///
/// The terminal shows markdown source fine; a richer engine can be swapped in
/// behind [`MarkdownRendererPort`] without touching the list logic.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughMarkdownRenderer;

impl MarkdownRendererPort for PassthroughMarkdownRenderer {
    fn render(&self, text: &str) -> String {
        text.to_string()
    }
}
