use sl_core::ports::TeardownTimerPort;
use sl_core::{ItemId, ListEvent};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::sleep;
use tracing::debug;

/// Delivers [`ListEvent::TeardownDue`] back to the session after a delay.
///
/// Must be used from inside a tokio runtime.
pub struct TeardownTimer {
    events: UnboundedSender<ListEvent>,
}

impl TeardownTimer {
    pub fn new(events: UnboundedSender<ListEvent>) -> Self {
        Self { events }
    }
}

impl TeardownTimerPort for TeardownTimer {
    fn schedule(&self, id: ItemId, delay: Duration) {
        let events = self.events.clone();
        debug!(item_id = %id, delay_ms = delay.as_millis() as u64, "teardown scheduled");

        tokio::spawn(async move {
            sleep(delay).await;
            if events.send(ListEvent::TeardownDue { id }).is_err() {
                debug!("list session gone, teardown dropped");
            }
        });
    }
}
