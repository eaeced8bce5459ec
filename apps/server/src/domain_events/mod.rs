//! Domain events runtime bridge for the web server.
//!
//! Receives domain events via DomainEventSink and republishes them on the
//! SSE event bus.

mod sink;

pub use sink::WebDomainEventSink;
