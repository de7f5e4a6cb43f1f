//! Event record served by the `/events` endpoint

use serde::{Deserialize, Serialize};

/// An immutable event record
///
/// Serialized as `{"name": ..., "description": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub description: String,
}

impl Event {
    /// Create a new event
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}
