//! Axum route handlers for profile search and details.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::profiles::details::fetch_profile_details;
use crate::profiles::models::{LinkedinResult, ProfileDetails, ProfileDetailsRequest, SearchRequest};
use crate::profiles::search::search_linkedin;
use crate::state::AppState;

/// POST /search-linkedin
pub async fn handle_search_linkedin(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<Vec<LinkedinResult>>, AppError> {
    let results = search_linkedin(&request, state.search.as_ref()).await?;
    Ok(Json(results))
}

/// POST /profile-details
pub async fn handle_profile_details(
    State(state): State<AppState>,
    Json(request): Json<ProfileDetailsRequest>,
) -> Result<Json<ProfileDetails>, AppError> {
    let details =
        fetch_profile_details(&request, state.search.as_ref(), state.llm.as_ref()).await?;
    Ok(Json(details))
}
