//! Static event store

use crate::types::Event;

/// Produces the ordered list of known events
#[derive(Debug, Clone, Copy, Default)]
pub struct EventStore;

impl EventStore {
    /// Create a new event store
    pub fn new() -> Self {
        Self
    }

    /// Get all events, in order
    pub fn get_all_events(&self) -> Vec<Event> {
        vec![
            Event::new("event1", "desc1"),
            Event::new("event2", "desc2"),
        ]
    }
}
