//! Event sink adapter.
//!
//! Implements the `EventSink` port by recording events in memory, for
//! tests and simulations that assert on emitted notifications.

use crate::events::BeaconEvent;
use crate::ports::EventSink;
use async_trait::async_trait;

/// In-memory event bus adapter.
#[derive(Default)]
pub struct InMemoryEventBus {
    events: parking_lot::RwLock<Vec<BeaconEvent>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_events(&self) -> Vec<BeaconEvent> {
        self.events.read().clone()
    }

    pub fn event_count(&self) -> usize {
        self.events.read().len()
    }

    pub fn last_event(&self) -> Option<BeaconEvent> {
        self.events.read().last().cloned()
    }
}

#[async_trait]
impl EventSink for InMemoryEventBus {
    async fn publish(&self, event: BeaconEvent) -> Result<(), String> {
        self.events.write().push(event);
        Ok(())
    }
}
