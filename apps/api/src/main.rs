mod config;
mod errors;
mod llm_client;
mod lookup;
mod profiles;
mod routes;
mod search_client;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::OpenRouterClient;
use crate::routes::{build_router, cors_layer};
use crate::search_client::ExaClient;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Recruit API v{}", env!("CARGO_PKG_VERSION"));

    // Missing keys are not fatal; the affected calls fail per request instead.
    for key in config.missing_keys() {
        warn!("{key} is not set; requests that need it will fail");
    }
    if !config.frontend_url_from_env {
        warn!(
            "FRONTEND_URL is not set; allowing CORS from {}",
            config.frontend_url
        );
    }

    let search = ExaClient::new(
        config.exa_api_key.clone().unwrap_or_default(),
        config.exa_base_url.clone(),
    );
    info!("Search client initialized ({})", config.exa_base_url);

    let llm = OpenRouterClient::new(
        config.openrouter_api_key.clone().unwrap_or_default(),
        config.openrouter_base_url.clone(),
        config.llm_model.clone(),
    );
    info!("LLM client initialized (model: {})", llm.model());

    let state = AppState {
        search: Arc::new(search),
        llm: Arc::new(llm),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.frontend_url)?);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
