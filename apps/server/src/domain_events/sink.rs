use leekfund_core::events::{DomainEvent, DomainEventSink};
use serde_json::json;

use crate::events::{EventBus, ServerEvent, WATCHLIST_REFRESH_COMPLETE};

/// Domain event sink for the web server runtime.
pub struct WebDomainEventSink {
    event_bus: EventBus,
}

impl WebDomainEventSink {
    pub fn new(event_bus: EventBus) -> Self {
        Self { event_bus }
    }
}

impl DomainEventSink for WebDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        match event {
            DomainEvent::RefreshCompleted {
                success,
                total,
                failed,
                completed_at,
            } => {
                tracing::debug!(
                    "Publishing refresh completion: success={}, total={}, failed={}",
                    success,
                    total,
                    failed
                );
                self.event_bus.publish(ServerEvent::new(
                    WATCHLIST_REFRESH_COMPLETE,
                    json!({
                        "success": success,
                        "total": total,
                        "failed": failed,
                        "completedAt": completed_at,
                    }),
                ));
            }
        }
    }
}
