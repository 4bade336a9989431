use std::error::Error;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use trip_server::catalog::Catalog;
use trip_server::config::AppConfig;
use trip_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env()?;

    // Fail fast if the catalog is unusable
    let catalog = Catalog::load(&config.catalog_path)?;

    let state = AppState::new(catalog, config.planner);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "trip planner listening");
    info!("API endpoints:");
    info!("  GET  /health                         - Health check");
    info!("  GET  /api/destinations               - Destinations");
    info!("  GET  /api/destinations/:id/hotels    - Nearby hotels");
    info!("  POST /api/trip/matrix                - Distance matrix");
    info!("  POST /api/trip/feasibility           - Feasibility check");
    info!("  POST /api/trip/suggest-transport     - Transport recommendation");
    info!("  POST /api/trip/estimate              - Cost estimate");
    info!("  POST /api/trip/itinerary             - Itinerary");
    info!("  POST /api/trip/plan                  - Trip plan");
    info!("  GET  /api/schedule                   - Day schedule");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
