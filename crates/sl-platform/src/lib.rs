//! # sl-platform
//!
//! Platform-specific implementations for shoplist.
//!
//! This crate holds the adapters that touch the operating system or the
//! terminal: the system clipboard, user-facing alerts, the markdown engine
//! seam and the in-memory list surface the CLI renders.

pub mod adapters;
pub mod view;

pub use adapters::{ArboardClipboard, PassthroughMarkdownRenderer, TerminalAlert};
pub use view::InMemoryItemView;
