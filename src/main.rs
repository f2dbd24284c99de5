use std::sync::Arc;

use lalana_relay::{app, config::RelayConfig, gemini::GeminiClient, state::AppState};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -----------------------------
    // Logging
    // -----------------------------
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // -----------------------------
    // Config (fails fast without GEMINI_API_KEY)
    // -----------------------------
    let config = RelayConfig::from_env()?;
    let generator = Arc::new(GeminiClient::new(config.model.clone())?);

    info!(
        model = config.model.model.as_str(),
        endpoint = generator.endpoint(),
        timeout_secs = config.model.timeout.as_secs(),
        max_input_chars = config.max_input_chars,
        "gemini client ready"
    );

    let addr = config.bind_addr;
    let state = AppState::new(config, generator);

    // -----------------------------
    // Routers
    // -----------------------------
    let app = app::build_router(state);

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "explain relay listening on http://{addr}/explain");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("explain relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
