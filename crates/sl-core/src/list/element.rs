use serde::{Deserialize, Serialize};

use crate::ids::ItemId;
use crate::item::ItemState;

/// Where new elements enter the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsertPosition {
    Top,
    Bottom,
}

impl InsertPosition {
    pub fn from_config(new_item_location_at_top: bool) -> Self {
        if new_item_location_at_top {
            Self::Top
        } else {
            Self::Bottom
        }
    }
}

/// One interactive element of the list surface.
///
/// Mirrors the attributes the surface keeps per element: the bound id, the
/// state marker, the display label and, for attachments, the download
/// filename. `index` is only set on server-rendered elements until the
/// bootstrap binds them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemElement {
    pub id: Option<ItemId>,
    pub index: Option<usize>,
    pub state: ItemState,
    pub label: String,
    pub filename: Option<String>,
    /// Raw stored text for markdown elements, re-rendered on bootstrap.
    pub raw: Option<String>,
    pub markdown: bool,
}

impl ItemElement {
    pub fn new(id: ItemId, state: ItemState, label: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            index: None,
            state,
            label: label.into(),
            filename: None,
            raw: None,
            markdown: false,
        }
    }

    /// Element as rendered by the server template, not yet bound to an id.
    pub fn server_rendered(index: usize, state: ItemState, label: impl Into<String>) -> Self {
        Self {
            id: None,
            index: Some(index),
            state,
            label: label.into(),
            filename: None,
            raw: None,
            markdown: false,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_markdown(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self.markdown = true;
        self
    }

    pub fn is_bound_to(&self, id: &ItemId) -> bool {
        self.id.as_ref() == Some(id)
    }
}
