//! File reference micro-format.
//!
//! An uploaded file is stored in the list as a single string:
//!
//! ```text
//! file://<fileId>::<originalName>::<mimeType>
//! ```
//!
//! `::` is used instead of the list separator (`|` by default) so the
//! reference never needs escaping on the wire. Older lists stored
//! `file://<fileId>|<originalName>|<mimeType>`, sometimes with the pipe
//! entity-encoded as `&#124;`; [`FileReference::decode`] still reads those.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const FILE_REF_PREFIX: &str = "file://";
pub const DATA_URL_PREFIX: &str = "data:";
pub const DEFAULT_FILE_NAME: &str = "download";
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

const FIELD_SEPARATOR: &str = "::";
const LEGACY_SEPARATOR: char = '|';
const LEGACY_SEPARATOR_ESCAPED: &str = "&#124;";

/// Externally stored upload: `(file_id, original_name, mime_type)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReference {
    pub file_id: String,
    pub original_name: String,
    pub mime_type: String,
}

impl FileReference {
    pub fn new(
        file_id: impl Into<String>,
        original_name: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            file_id: file_id.into(),
            original_name: original_name.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Serialize to `file://<fileId>::<originalName>::<mimeType>`.
    pub fn encode(&self) -> String {
        format!(
            "{FILE_REF_PREFIX}{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}",
            self.file_id, self.original_name, self.mime_type
        )
    }

    /// Parse a file reference, degrading to defaults instead of failing.
    ///
    /// Returns `None` only when `raw` does not carry the `file://` prefix.
    /// Missing or empty trailing fields fall back to [`DEFAULT_FILE_NAME`]
    /// and [`DEFAULT_MIME_TYPE`]; a remainder without any separator is taken
    /// whole as the file id.
    pub fn decode(raw: &str) -> Option<Self> {
        let rest = raw.strip_prefix(FILE_REF_PREFIX)?;

        if rest.contains(FIELD_SEPARATOR) {
            let parts: Vec<&str> = rest.split(FIELD_SEPARATOR).collect();
            return Some(Self::from_parts(&parts));
        }

        let unescaped = rest.replace(LEGACY_SEPARATOR_ESCAPED, "|");
        let parts: Vec<&str> = unescaped.split(LEGACY_SEPARATOR).collect();
        Some(Self::from_parts(&parts))
    }

    fn from_parts(parts: &[&str]) -> Self {
        let field = |idx: usize| parts.get(idx).copied().filter(|s| !s.is_empty());
        Self {
            file_id: field(0).unwrap_or_default().to_string(),
            original_name: field(1).unwrap_or(DEFAULT_FILE_NAME).to_string(),
            mime_type: field(2).unwrap_or(DEFAULT_MIME_TYPE).to_string(),
        }
    }
}

impl fmt::Display for FileReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Prefix test only; never parses.
pub fn is_file_reference(raw: &str) -> bool {
    raw.starts_with(FILE_REF_PREFIX)
}

pub fn is_data_url(raw: &str) -> bool {
    raw.starts_with(DATA_URL_PREFIX)
}

/// Media type of a `data:` URL, e.g. `image/png` for `data:image/png;base64,...`.
pub fn data_url_media_type(raw: &str) -> &str {
    raw.strip_prefix(DATA_URL_PREFIX)
        .and_then(|rest| rest.split([';', ',']).next())
        .filter(|media| !media.is_empty())
        .unwrap_or(DEFAULT_MIME_TYPE)
}
