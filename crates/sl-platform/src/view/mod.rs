//! List surface adapters.

mod in_memory;

pub use in_memory::InMemoryItemView;
