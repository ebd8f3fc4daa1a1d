use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use wikidef_config::Config;
use wikidef_server::router::build_router;
use wikidef_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let config = Config::new();
    init_tracing(config.log_json);

    let state = Arc::new(AppState::new(&config).context("failed to build upstream client")?);
    let source = state.source.metadata();
    tracing::info!(
        "Proxying {} at {} (default locale {})",
        source.name,
        source.endpoint,
        state.default_locale
    );

    let app = build_router(state);

    let bind_addr = &config.server.bind_addr;
    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind to {bind_addr}"))?;
    tracing::info!("wikidef listening on {bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,wikidef_server=debug,wikidef_lookup=debug,tower_http=debug".into());
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Resolves on Ctrl+C
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl+c: {e}");
        // Without a signal handler, run until killed
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
