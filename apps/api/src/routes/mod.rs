pub mod health;

use anyhow::{Context, Result};
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::profiles::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/search-linkedin", post(handlers::handle_search_linkedin))
        .route("/profile-details", post(handlers::handle_profile_details))
        .with_state(state)
}

/// Allows the single frontend origin, with credentials.
/// Wildcards cannot be combined with credentials, so methods and headers mirror the request.
pub fn cors_layer(frontend_url: &str) -> Result<CorsLayer> {
    let origin: HeaderValue = frontend_url
        .parse()
        .with_context(|| format!("FRONTEND_URL '{frontend_url}' is not a valid origin"))?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
