mod problem;
mod router;
mod starred;
mod telemetry;

use std::net::SocketAddr;

use tracing::info;

use starlist_storage::{RestaurantCatalog, StarredStore};
use starlist_util::{load_env_file, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    load_env_file();
    let config = AppConfig::from_env()?;

    telemetry::init_tracing(&config)?;
    let metrics = telemetry::init_metrics()?;

    let state = router::AppState::new(metrics, StarredStore::seeded(), RestaurantCatalog::seeded());

    let addr: SocketAddr = config.bind_addr;
    info!(%addr, env = %config.environment.as_str(), "starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router::app_router(state))
        .await
        .map_err(|err| err.into())
}
