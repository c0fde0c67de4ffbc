use std::sync::Arc;

use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use task_api::{api, api::AppState, config::Config, db, openapi, store::TaskStore};

const MOCK_TASK_COUNT: usize = 50;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Tasks API...");

    // Startup liveness probe only; no connection is held afterwards.
    if let Err(e) = db::check_connection(&config.db_url).await {
        tracing::error!("Error connecting to database: {e}");
        return Err(e.into());
    }
    tracing::info!("Successfully connected to database.");

    let store = Arc::new(TaskStore::seed(MOCK_TASK_COUNT));
    tracing::info!("Seeded mock task store with {} records.", store.len());

    let doc = openapi::build(&config);

    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };

    let app = api::router(state, doc);
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = TcpListener::bind(&addr).await?;

    let base_url = config.base_url();
    tracing::info!("Server running at {}", base_url);
    tracing::info!("API documentation available at {}/api-docs", base_url);
    tracing::info!("Swagger UI available at {}/swagger-docs", base_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Application shut down gracefully.");

    Ok(())
}

/// Listens for shutdown signals (Ctrl+C or termination).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received.");
}
