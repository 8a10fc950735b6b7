use std::sync::Arc;

use anyhow::Result;
use recipelens_config::Config;
use recipelens_server::{app, state::AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let config = Config::from_env()?;
    info!(
        "Using model {} (api key {})",
        config.model,
        config.masked_key()
    );

    let addr = config.bind_addr.clone();
    let state = Arc::new(AppState::new(config)?);
    let app = app(state);

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
