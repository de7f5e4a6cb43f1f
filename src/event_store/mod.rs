//! Event Store
//!
//! Source of the event sequence served over HTTP. The sequence is fixed:
//! there is no persistence and nothing to mutate, so the store carries no
//! state and every call builds the same list.

mod store;

pub use store::EventStore;
