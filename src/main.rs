use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use vision_inventory::{router, AppState, VisionConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // The server never accepts traffic without a credential.
    let api_key = std::env::var("OPENAI_API_KEY")
        .context("OPENAI_API_KEY environment variable is not set")?;

    let mut config = VisionConfig::new(api_key);
    if let Ok(endpoint) = std::env::var("VISION_INVENTORY_ENDPOINT") {
        config = config.endpoint(endpoint);
    }
    if let Ok(model) = std::env::var("VISION_INVENTORY_MODEL") {
        config = config.model(model);
    }

    let port: u16 = std::env::var("VISION_INVENTORY_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8487);

    let app = router(AppState::new(config));
    let addr = format!("0.0.0.0:{}", port);
    let listener = TcpListener::bind(&addr).await?;
    info!("vision-inventory listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
