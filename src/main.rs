use std::sync::Arc;
use supplier_service::core::{AppState, Config, init_logging};
use supplier_service::create_router;
use supplier_service::repositories::create_pool;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Inizializza la configurazione
    let config = Config::from_env()?;
    init_logging(config.log_format);
    config.print_info();

    // Pool di connessioni e schema
    let pool = create_pool(
        &config.database_url,
        config.max_connections,
        config.acquire_timeout(),
    )
    .await?;
    let state = Arc::new(AppState::new(pool, config.public_base_url.clone()));
    state.supplier.init_schema().await?;

    // Crea il router
    let app = create_router(state);

    // Crea il listener TCP
    let listener =
        TcpListener::bind(format!("{}:{}", config.server_host, config.server_port)).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    // Avvia il server
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
