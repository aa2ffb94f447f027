use crate::content::escape::html_encode;
use crate::content::ItemContent;
use crate::ids::ItemId;
use crate::item::ActionCode;

/// One transition, captured and ready to send.
///
/// The payload is `<code><separator><content>`, where every occurrence of
/// the separator inside the content is replaced by its HTML entity so the
/// server can split on the first separator unambiguously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRecord {
    pub id: ItemId,
    pub action: ActionCode,
    payload: String,
}

impl ActionRecord {
    pub fn new(id: ItemId, action: ActionCode, separator: &str, content: &ItemContent) -> Self {
        let raw = content.as_str();
        let escaped = if separator.is_empty() {
            raw.to_string()
        } else {
            raw.replace(separator, &html_encode(separator))
        };
        Self {
            id,
            action,
            payload: format!("{action}{separator}{escaped}"),
        }
    }

    /// Unencoded `<code><separator><content>`.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// URL-component encoded payload used as the form body.
    pub fn form_body(&self) -> String {
        urlencoding::encode(&self.payload).into_owned()
    }
}
