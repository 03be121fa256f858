use std::sync::Arc;

use reviews_api::{router, AppConfig, AppState, JsonStore};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("🚀 Starting Reviews API Server");

    // Load configuration
    let config = AppConfig::load()?;
    info!("📋 Configuration loaded");
    info!("   - Reviews file: {}", config.storage.reviews_path.display());
    info!("   - Server: {}:{}", config.server.host, config.server.port);

    // Initialize review storage
    info!("💾 Initializing review storage...");
    let store = Arc::new(JsonStore::new(&config.storage.reviews_path));
    store.initialize()?;
    info!("✅ Review storage ready ({} reviews)", store.count());

    // Create application state
    let state = AppState { store };

    // Build router with modular routes
    let app = router(state);

    // Start server
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(config.server.port);
    let addr = format!("{}:{}", config.server.host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET    /                  - Service descriptor");
    info!("   GET    /api/reviews       - List all reviews");
    info!("   POST   /api/reviews       - Add new review");
    info!("   DELETE /api/reviews/{{id}}  - Delete review by id");
    info!("   GET    /api/stats         - Review statistics");
    info!("   POST   /api/clear         - Delete all reviews");
    info!("");
    info!("✨ Server is ready to accept requests!");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

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

    info!("🛑 Shutdown signal received");
}
