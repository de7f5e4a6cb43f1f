//! REST API module for HTTP endpoints
//!
//! Provides:
//! - `GET /events` - List all events (also served at `/events/`)

pub mod events;

pub use events::EventHandler;
