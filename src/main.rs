use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use edumarket_api::config::Config;
use edumarket_api::routes::create_router;
use edumarket_api::services::fault::{FaultInjector, RandomFaults};
use edumarket_api::state::AppState;
use edumarket_api::storage::{FileStorage, StorageBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(
            |_| "edumarket_api=debug,tower_http=info".into(),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let storage: Arc<dyn StorageBackend> = Arc::new(FileStorage::new(&config.data_dir));
    let faults: Arc<dyn FaultInjector> =
        Arc::new(RandomFaults::new(config.suggestion_failure_rate));

    let state = AppState::new(storage, faults).await;
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!(%addr, "Storefront API listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
