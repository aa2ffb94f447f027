//! Item lifecycle.

mod state;
mod state_machine;

pub use state::{ActionCode, ItemState};
pub use state_machine::{ItemAction, ItemStateMachine};
