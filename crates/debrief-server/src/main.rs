mod configuration;
mod error;
mod routes;
mod state;

use debrief::providers::openai::OpenAiProvider;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    // Load configuration once; the provider credential is handed down explicitly from here
    let settings = configuration::Settings::new()?;
    if settings.provider.api_key.is_empty() {
        tracing::warn!("no provider api key configured, backend requests will be rejected");
    }

    let provider = OpenAiProvider::new(settings.provider.into_config())?;
    let state = state::AppState::new(Arc::new(provider));

    // Create router with CORS support
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::configure(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(settings.server.socket_addr()?).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
