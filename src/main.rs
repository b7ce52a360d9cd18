use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vibe_check::config::AppConfig;
use vibe_check::routes;
use vibe_check::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vibe_check=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Missing credentials halt here, before any listener exists.
    let config = AppConfig::from_env().context("startup configuration")?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        vision_model = %config.vision_model,
        copy_model = %config.copy_model,
        "configuration loaded"
    );

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::from_config(config)?;
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    tracing::info!("Vibe-Check running on http://{addr}");

    axum::serve(listener, app).await.context("server exited")?;

    Ok(())
}
