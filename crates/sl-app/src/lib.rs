//! # sl-app
//!
//! List session use cases and the controller that drives them.

pub mod controller;
pub mod deps;
pub mod policy;
pub mod usecases;

pub use controller::{ListController, ListEvents, TEARDOWN_DELAY};
pub use deps::ListDeps;
