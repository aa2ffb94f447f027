//! Item state machine.
//!
//! Pure transition function for a single item. It decides the next state and
//! lists the side effects to run; executing them (clipboard, download,
//! transport, teardown) is left to the application layer.

use crate::content::ItemContent;

use super::{ActionCode, ItemState};

/// Side-effects produced by a transition, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemAction {
    /// Put the item's text on the system clipboard.
    CopyToClipboard { text: String },
    /// Hand binary or file-backed content to the download collaborator.
    Download,
    /// Report the transition to the remote authority.
    Persist { action: ActionCode },
    /// Drop the element and its registry entry after a short delay.
    ScheduleTeardown,
}

/// Pure item state machine.
pub struct ItemStateMachine;

impl ItemStateMachine {
    pub fn transition(state: ItemState, content: &ItemContent) -> (ItemState, Vec<ItemAction>) {
        let next = state.next();
        let mut actions = Vec::with_capacity(3);

        if next != ItemState::Removed {
            if content.is_binary() {
                actions.push(ItemAction::Download);
            } else if let Some(text) = content.clipboard_text() {
                actions.push(ItemAction::CopyToClipboard { text });
            }
        }

        // Persist is listed before teardown: the transport captures the
        // content synchronously, and the registry entry must still be there.
        actions.push(ItemAction::Persist {
            action: state.action_code(),
        });

        if next == ItemState::Removed && content.is_file_backed() {
            actions.push(ItemAction::ScheduleTeardown);
        }

        (next, actions)
    }
}
