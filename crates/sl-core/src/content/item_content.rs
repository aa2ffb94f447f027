use serde::{Deserialize, Serialize};

use super::escape::{decode_for_clipboard, escape_quotes, line_breaks_to_markers};
use super::file_ref::{data_url_media_type, is_data_url, is_file_reference, FileReference};

/// What a list item says, classified once where it enters the system.
///
/// Every variant keeps the exact raw string it was built from. That string is
/// what the registry compares in `exists`, and what goes over the wire, so a
/// legacy `file://id|name|mime` reference is re-sent untouched even though it
/// decodes to the same [`FileReference`] as the modern form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemContent {
    /// Single-line text, already trimmed, lower-cased and quote-escaped.
    PlainText { text: String },

    /// Multiline text with `<br>` markers, rendered as markdown.
    Markdown { text: String },

    /// Self-describing `data:` URL pasted into the list.
    InlineData { raw: String, media_type: String },

    /// Reference to an uploaded file.
    FileRef { raw: String, file: FileReference },
}

impl ItemContent {
    /// Classify a stored or server-supplied string without normalizing it.
    pub fn classify(raw: impl Into<String>, multiline: bool) -> Self {
        let raw = raw.into();
        if is_data_url(&raw) {
            let media_type = data_url_media_type(&raw).to_string();
            return Self::InlineData { raw, media_type };
        }
        if let Some(file) = FileReference::decode(&raw) {
            return Self::FileRef { raw, file };
        }
        if multiline {
            Self::Markdown { text: raw }
        } else {
            Self::PlainText { text: raw }
        }
    }

    /// Build content from what the user typed.
    ///
    /// Data URLs and file references are taken verbatim. Other input is
    /// normalized per list mode (line breaks become markers in multiline
    /// lists; single-line input is trimmed and lower-cased) and has its
    /// quotes escaped. Returns `None` when nothing is left.
    pub fn from_input(input: &str, multiline: bool) -> Option<Self> {
        if is_data_url(input) || is_file_reference(input) {
            return Some(Self::classify(input, multiline));
        }

        let normalized = if multiline {
            line_breaks_to_markers(input)
        } else {
            input.trim().to_lowercase()
        };
        let text = escape_quotes(&normalized);
        if text.is_empty() {
            return None;
        }

        Some(if multiline {
            Self::Markdown { text }
        } else {
            Self::PlainText { text }
        })
    }

    pub fn from_file(file: FileReference) -> Self {
        Self::FileRef {
            raw: file.encode(),
            file,
        }
    }

    /// Raw string as stored in the registry and sent to the server.
    pub fn as_str(&self) -> &str {
        match self {
            Self::PlainText { text } | Self::Markdown { text } => text,
            Self::InlineData { raw, .. } | Self::FileRef { raw, .. } => raw,
        }
    }

    pub fn is_file_backed(&self) -> bool {
        matches!(self, Self::FileRef { .. })
    }

    /// Inline data and file references are downloaded instead of copied.
    pub fn is_binary(&self) -> bool {
        matches!(self, Self::InlineData { .. } | Self::FileRef { .. })
    }

    pub fn is_markdown(&self) -> bool {
        matches!(self, Self::Markdown { .. })
    }

    pub fn file(&self) -> Option<&FileReference> {
        match self {
            Self::FileRef { file, .. } => Some(file),
            _ => None,
        }
    }

    /// Text placed on the clipboard when the item is activated.
    pub fn clipboard_text(&self) -> Option<String> {
        match self {
            Self::PlainText { text } | Self::Markdown { text } => Some(decode_for_clipboard(text)),
            Self::InlineData { .. } | Self::FileRef { .. } => None,
        }
    }

    /// Short label for binary content; `None` for text, which renders itself.
    pub fn attachment_label(&self) -> Option<String> {
        match self {
            Self::InlineData { media_type, .. } => Some(format!("📎 File ({media_type})")),
            Self::FileRef { file, .. } => Some(format!("📎 {}", file.original_name)),
            Self::PlainText { .. } | Self::Markdown { .. } => None,
        }
    }
}
