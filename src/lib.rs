pub mod api;
pub mod config;
pub mod models;
pub mod store;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::store::JsonStore;

/// Initialize logging, open the store and serve until ctrl-c.
pub async fn run() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let data_file = config::data_file();
    let store = JsonStore::open(data_file.clone())
        .map_err(|e| format!("Cannot open data file {}: {e}", data_file.display()))?;

    let mut server = api::start_server(Arc::new(store), config::bind_addr()).await?;
    tracing::info!(addr = %server.session.server_addr, "serving the hospital API");

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| format!("Failed to listen for shutdown signal: {e}"))?;
    server.shutdown();
    Ok(())
}
