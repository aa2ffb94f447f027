use std::time::Duration;

use crate::ids::ItemId;

/// Deferred teardown of a removed file-backed item.
///
/// Implementations deliver [`crate::ListEvent::TeardownDue`] once `delay`
/// has passed. Scheduling never blocks and cannot be cancelled.
pub trait TeardownTimerPort: Send + Sync {
    fn schedule(&self, id: ItemId, delay: Duration);
}
