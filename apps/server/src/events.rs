use serde_json::Value;
use tokio::sync::broadcast;

/// Fired after every non-empty watchlist refresh.
pub const WATCHLIST_REFRESH_COMPLETE: &str = "watchlist:refresh-complete";

/// Serializable envelope that carries an event name and its JSON payload.
#[derive(Clone, Debug)]
pub struct ServerEvent {
    pub name: &'static str,
    pub payload: Value,
}

impl ServerEvent {
    pub fn new(name: &'static str, payload: Value) -> Self {
        Self { name, payload }
    }
}

/// Lightweight broadcast bus that fans out events to any connected clients.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ServerEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: ServerEvent) {
        // No subscribers is not an error.
        let _ = self.sender.send(event);
    }
}
