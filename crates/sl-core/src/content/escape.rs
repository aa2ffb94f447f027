//! HTML entity helpers shared by the content model and the action record.
//!
//! Only a handful of characters are ever escaped. Stored item text keeps its
//! entities (`&#39;`, `&quot;`, `<br>`) because the remote authority stores
//! items verbatim; decoding happens only on the way to the clipboard.

use once_cell::sync::Lazy;
use regex::Regex;

static LINE_BREAK_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").expect("line break pattern is valid"));

/// Entity-encode `& < > " ' |` for use inside element attributes.
pub fn html_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '|' => out.push_str("&#124;"),
            other => out.push(other),
        }
    }
    out
}

/// Escape quote characters only. Applied to typed items before storage.
pub fn escape_quotes(input: &str) -> String {
    input.replace('\'', "&#39;").replace('"', "&quot;")
}

/// Replace newlines with `<br>` markers (multiline lists).
pub fn line_breaks_to_markers(input: &str) -> String {
    input.replace('\n', "<br>")
}

/// Partial decode used for clipboard copies and markdown input.
///
/// Intentionally does not touch `&amp;`, `&lt;` or `&gt;`.
pub fn decode_for_clipboard(input: &str) -> String {
    LINE_BREAK_MARKER
        .replace_all(input, "\n")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#124;", "|")
}
