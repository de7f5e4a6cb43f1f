//! Event Service
//!
//! A minimal HTTP service exposing a read-only list of events at `/events`.
//!
//! # Modules
//!
//! - `types`: The `Event` record and the crate result alias
//! - `event_store`: Source of the event sequence
//! - `api`: Axum router and REST handlers
//! - `config`: Listen address from environment variables
//! - `logging`: `tracing` subscriber setup
//! - `server`: Listener binding and graceful shutdown
//!
//! # Example
//!
//! ```no_run
//! use event_service::{build_app, server, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig::from_env().unwrap();
//!     server::run(&config, build_app()).await.unwrap();
//! }
//! ```

pub mod api;
pub mod config;
pub mod event_store;
pub mod logging;
pub mod server;
pub mod types;

// Re-export commonly used items at crate root
pub use api::http::{build_app, create_router};
pub use api::rest::EventHandler;
pub use config::ServerConfig;
pub use event_store::EventStore;
pub use types::{Event, ServiceResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
