//! # sl-core
//!
//! Core domain models and business logic for shoplist.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod action;
pub mod config;
pub mod content;
pub mod identity;
pub mod ids;
pub mod item;
pub mod list;
pub mod ports;

// Re-export commonly used types at the crate root
pub use action::ActionRecord;
pub use config::{ListConfig, ServerItem};
pub use content::{FileReference, ItemContent};
pub use ids::ItemId;
pub use item::{ActionCode, ItemAction, ItemState, ItemStateMachine};
pub use list::{InsertPosition, ItemElement, ListEvent};
