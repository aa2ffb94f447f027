//! Internal building blocks shared by the list use cases.

pub mod register_content;

pub use register_content::RegisterContent;
