//! List surface model and session events.

mod element;
mod event;

pub use element::{InsertPosition, ItemElement};
pub use event::ListEvent;
