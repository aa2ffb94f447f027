use sl_core::content::escape::decode_for_clipboard;
use sl_core::ports::{ContentRegistryPort, ItemViewPort, MarkdownRendererPort};
use sl_core::{ItemContent, ItemId, ServerItem};
use std::sync::Arc;
use tracing::{info, warn};

use super::internal::RegisterContent;

/// Register the server-rendered items and bind their elements.
///
/// Items are processed in server order, so duplicates get ids in the same
/// order on every load. In multiline lists labels are re-rendered from the
/// raw text the template left on each element.
pub struct BootstrapList {
    view: Arc<dyn ItemViewPort>,
    markdown: Arc<dyn MarkdownRendererPort>,
    register: RegisterContent,
    multiline: bool,
}

impl BootstrapList {
    pub fn new(
        registry: Arc<dyn ContentRegistryPort>,
        view: Arc<dyn ItemViewPort>,
        markdown: Arc<dyn MarkdownRendererPort>,
        multiline: bool,
    ) -> Self {
        Self {
            register: RegisterContent::new(registry),
            view,
            markdown,
            multiline,
        }
    }

    #[tracing::instrument(name = "usecase.bootstrap_list.execute", skip_all, fields(items = items.len()))]
    pub fn execute(&self, items: &[ServerItem]) -> Vec<ItemId> {
        let mut bound = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            let Some(raw) = item.content() else {
                warn!(index, "server item without content skipped");
                continue;
            };

            let content = ItemContent::classify(raw, self.multiline);
            let file_name = content.file().map(|f| f.original_name.clone());
            let id = match self.register.execute(content) {
                Ok(id) => id,
                Err(err) => {
                    warn!(index, error = %err, "server item not registered");
                    continue;
                }
            };

            if !self.view.bind_rendered(index, &id) {
                warn!(index, item_id = %id, "no rendered element for server item");
                continue;
            }
            if let Some(name) = &file_name {
                self.view.set_filename(&id, name);
            }
            if self.multiline {
                self.rerender(&id);
            }
            bound.push(id);
        }

        info!(bound = bound.len(), "list bootstrapped");
        bound
    }

    fn rerender(&self, id: &ItemId) {
        let Some(element) = self.view.element(id) else {
            return;
        };
        let Some(raw) = element.raw.as_deref().filter(|_| element.markdown) else {
            return;
        };

        let label = match ItemContent::classify(raw, true).attachment_label() {
            Some(label) => label,
            None => self.markdown.render(&decode_for_clipboard(raw)),
        };
        self.view.set_label(id, &label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sl_core::ItemState;
    use sl_infra::InMemoryContentRegistry;
    use sl_platform::{InMemoryItemView, PassthroughMarkdownRenderer};

    fn bootstrap(
        items: &[ServerItem],
        multiline: bool,
    ) -> (Arc<InMemoryContentRegistry>, Arc<InMemoryItemView>, Vec<ItemId>) {
        let registry = Arc::new(InMemoryContentRegistry::new());
        let view = Arc::new(InMemoryItemView::from_server_items(items, multiline));
        let uc = BootstrapList::new(
            registry.clone(),
            view.clone(),
            Arc::new(PassthroughMarkdownRenderer),
            multiline,
        );
        let ids = uc.execute(items);
        (registry, view, ids)
    }

    #[test]
    fn binds_every_item_with_its_server_state() {
        let items = [
            ServerItem::new("milk", ItemState::Active),
            ServerItem::new("eggs", ItemState::Acknowledged),
        ];
        let (registry, view, ids) = bootstrap(&items, false);

        assert_eq!(ids.len(), 2);
        assert_eq!(registry.len(), 2);
        assert_eq!(view.element(&ids[0]).map(|e| e.state), Some(ItemState::Active));
        assert_eq!(
            view.element(&ids[1]).map(|e| e.state),
            Some(ItemState::Acknowledged)
        );
    }

    #[test]
    fn duplicate_server_items_get_ordered_ids() {
        let items = [
            ServerItem::new("milk", ItemState::New),
            ServerItem::new("milk", ItemState::New),
        ];
        let (_, _, ids) = bootstrap(&items, false);

        let ids: Vec<&str> = ids.iter().map(ItemId::as_str).collect();
        assert_eq!(ids, ["item_1zu3f", "item_hrhmgj"]);
    }

    #[test]
    fn file_references_get_filename_even_in_single_line_mode() {
        let items = [ServerItem::new(
            "file://abc&#124;Report.PDF&#124;application/pdf",
            ItemState::New,
        )];
        let (_, view, ids) = bootstrap(&items, false);

        let element = view.element(&ids[0]).unwrap();
        assert_eq!(element.filename.as_deref(), Some("Report.PDF"));
        // Labels are left as the server rendered them outside multiline mode.
        assert_eq!(element.label, "file://abc&#124;Report.PDF&#124;application/pdf");
    }

    #[test]
    fn multiline_labels_are_rerendered() {
        let items = [
            ServerItem::new("file://abc123::invoice.pdf::application/pdf", ItemState::New),
            ServerItem::new("data:image/png;base64,AAAA", ItemState::New),
            ServerItem::new("Buy:<br>tom&#39;s eggs", ItemState::Active),
        ];
        let (_, view, ids) = bootstrap(&items, true);

        let labels: Vec<String> = ids
            .iter()
            .map(|id| view.element(id).unwrap().label)
            .collect();
        assert_eq!(
            labels,
            ["📎 invoice.pdf", "📎 File (image/png)", "Buy:\ntom's eggs"]
        );
    }

    #[test]
    fn missing_element_leaves_item_registered_but_unbound() {
        let items = [ServerItem::new("milk", ItemState::New)];
        let registry = Arc::new(InMemoryContentRegistry::new());
        let view = Arc::new(InMemoryItemView::new());
        let uc = BootstrapList::new(
            registry.clone(),
            view,
            Arc::new(PassthroughMarkdownRenderer),
            false,
        );

        assert!(uc.execute(&items).is_empty());
        assert_eq!(registry.len(), 1);
    }
}
