//! Event Service - Binary Entry Point

use std::sync::Arc;

use event_service::config::ServerConfig;
use event_service::types::ServiceResult;
use event_service::{create_router, logging, server, EventHandler, EventStore, NAME, VERSION};

#[tokio::main]
async fn main() -> ServiceResult<()> {
    logging::init()?;

    let config = ServerConfig::from_env()?;
    tracing::info!("Starting {} v{}", NAME, VERSION);

    let event_store = EventStore::new();
    let handler = Arc::new(EventHandler::new(event_store));
    let app = create_router(handler);

    server::run(&config, app).await
}
