//! marketdesk gateway entry point

use anyhow::Context;
use desk_breeze::BreezeClient;
use desk_gateway::{AppState, GatewayConfig, create_router, logging};
use desk_genai::GeminiProvider;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    logging::init_tracing();

    let config = GatewayConfig::from_env()?;

    let breeze = BreezeClient::new(
        config.breeze_api_key.clone(),
        config.breeze_api_secret.clone(),
    )?;
    let gemini = match &config.genai_model {
        Some(model) => GeminiProvider::with_model(config.genai_api_key.clone(), model)?,
        None => GeminiProvider::new(config.genai_api_key.clone())?,
    };

    let state = AppState::new(Arc::new(breeze), Arc::new(gemini));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;

    info!("marketdesk gateway listening on {}", config.listen_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
