//! Data types for the event service

mod event;

pub use event::Event;

/// Result type for service setup and I/O
pub type ServiceResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
