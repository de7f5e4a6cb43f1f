//! Event endpoints

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::event_store::EventStore;
use crate::types::Event;

/// Handler for the events routes
///
/// Holds the store it reads from; construct it with [`EventHandler::new`]
/// and hand it to the router as state.
#[derive(Debug, Clone)]
pub struct EventHandler {
    event_store: EventStore,
}

impl EventHandler {
    /// Create a handler backed by the given store
    pub fn new(event_store: EventStore) -> Self {
        Self { event_store }
    }

    /// All events from the backing store
    pub fn all_events(&self) -> Vec<Event> {
        self.event_store.get_all_events()
    }
}

/// GET /events - List all events
///
/// Query parameters, headers and body are ignored.
pub async fn get_all_events(State(handler): State<Arc<EventHandler>>) -> Json<Vec<Event>> {
    let events = handler.all_events();
    tracing::debug!(count = events.len(), "serving events");
    Json(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_delegates_to_store() {
        let store = EventStore::new();
        let handler = EventHandler::new(store);

        assert_eq!(handler.all_events(), store.get_all_events());
    }

    #[tokio::test]
    async fn test_get_all_events_wraps_store_output() {
        let handler = Arc::new(EventHandler::new(EventStore::new()));

        let Json(events) = get_all_events(State(handler)).await;

        assert_eq!(events.len(), 2);
        assert_eq!(events[0], Event::new("event1", "desc1"));
        assert_eq!(events[1], Event::new("event2", "desc2"));
    }
}
