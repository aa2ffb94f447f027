use sl_core::ports::ItemViewPort;
use sl_core::{InsertPosition, ItemElement, ItemId, ItemState, ServerItem};
use std::fmt::Write as _;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Ordered list surface kept in memory and printed by the CLI.
///
/// Elements are addressed by their bound id; server-rendered elements are
/// also reachable by index until the bootstrap binds them.
#[derive(Debug, Default)]
pub struct InMemoryItemView {
    elements: Mutex<Vec<ItemElement>>,
}

impl InMemoryItemView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-render the items the server handed over, the way the page
    /// template does: one unbound element per item, labelled with the stored
    /// text. Multiline lists also keep the raw text for re-rendering.
    pub fn from_server_items(items: &[ServerItem], multiline: bool) -> Self {
        let elements = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let content = item.content().unwrap_or_default();
                let element = ItemElement::server_rendered(index, item.state(), content);
                if multiline {
                    element.with_markdown(content)
                } else {
                    element
                }
            })
            .collect();

        Self {
            elements: Mutex::new(elements),
        }
    }

    /// Numbered listing, one element per line, as shown by `list`.
    pub fn render(&self) -> String {
        let elements = self.lock();
        if elements.is_empty() {
            return "(empty list)\n".to_string();
        }

        let mut out = String::new();
        for (position, element) in elements.iter().enumerate() {
            let id = element.id.as_ref().map(ItemId::as_str).unwrap_or("-");
            let _ = write!(
                out,
                "{:>3}. [{}] {}",
                position + 1,
                state_marker(element.state),
                element.label.replace('\n', " / ")
            );
            if let Some(filename) = &element.filename {
                let _ = write!(out, " <{filename}>");
            }
            let _ = writeln!(out, "  ({id})");
        }
        out
    }

    /// Id bound to the element at 1-based `position` in the listing.
    pub fn id_at(&self, position: usize) -> Option<ItemId> {
        let index = position.checked_sub(1)?;
        self.lock().get(index).and_then(|e| e.id.clone())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ItemElement>> {
        self.elements.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update(&self, id: &ItemId, f: impl FnOnce(&mut ItemElement)) -> bool {
        match self.lock().iter_mut().find(|e| e.is_bound_to(id)) {
            Some(element) => {
                f(element);
                true
            }
            None => false,
        }
    }
}

fn state_marker(state: ItemState) -> &'static str {
    match state {
        ItemState::New => " ",
        ItemState::Active => "*",
        ItemState::Acknowledged => "!",
        ItemState::Removed => "x",
    }
}

impl ItemViewPort for InMemoryItemView {
    fn insert(&self, element: ItemElement, position: InsertPosition) {
        let mut elements = self.lock();
        match position {
            InsertPosition::Top => elements.insert(0, element),
            InsertPosition::Bottom => elements.push(element),
        }
    }

    fn bind_rendered(&self, index: usize, id: &ItemId) -> bool {
        match self
            .lock()
            .iter_mut()
            .find(|e| e.id.is_none() && e.index == Some(index))
        {
            Some(element) => {
                element.id = Some(id.clone());
                true
            }
            None => false,
        }
    }

    fn element(&self, id: &ItemId) -> Option<ItemElement> {
        self.lock().iter().find(|e| e.is_bound_to(id)).cloned()
    }

    fn set_state(&self, id: &ItemId, state: ItemState) -> bool {
        self.update(id, |e| e.state = state)
    }

    fn set_label(&self, id: &ItemId, label: &str) -> bool {
        self.update(id, |e| e.label = label.to_string())
    }

    fn set_filename(&self, id: &ItemId, filename: &str) -> bool {
        self.update(id, |e| e.filename = Some(filename.to_string()))
    }

    fn remove(&self, id: &ItemId) -> bool {
        let mut elements = self.lock();
        let before = elements.len();
        elements.retain(|e| !e.is_bound_to(id));
        elements.len() != before
    }

    fn elements(&self) -> Vec<ItemElement> {
        self.lock().clone()
    }
}
