//! Candidate profile search: name + institution + degree → up to five LinkedIn profiles.

use tracing::{debug, info};

use crate::errors::AppError;
use crate::lookup::{DegreeStatus, University};
use crate::profiles::models::{LinkedinResult, SearchRequest};
use crate::profiles::query::{build_query, filter_profile_results, MAX_RESULTS};
use crate::profiles::LINKEDIN_DOMAIN;
use crate::search_client::{SearchOptions, SearchProvider, SearchType};

/// Validates the request, runs one keyword search restricted to LinkedIn,
/// and keeps only individual profile pages.
///
/// Invalid codes or a blank name are rejected before any outbound call.
pub async fn search_linkedin(
    request: &SearchRequest,
    search: &dyn SearchProvider,
) -> Result<Vec<LinkedinResult>, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }
    let university: University = request.university.parse()?;
    let degree: DegreeStatus = request.degree_status.parse()?;

    let query = build_query(&request.name, university, degree);
    info!("Searching LinkedIn profiles: {query}");

    let options = SearchOptions {
        query,
        num_results: MAX_RESULTS as u32,
        search_type: SearchType::Keyword,
        include_domains: vec![LINKEDIN_DOMAIN.to_string()],
    };

    let hits = search
        .search(&options)
        .await
        .map_err(|e| AppError::SearchFailed(e.to_string()))?;

    let total = hits.len();
    let results = filter_profile_results(hits);
    debug!(
        "Kept {} of {} results for {} / {}",
        results.len(),
        total,
        university,
        degree
    );

    Ok(results)
}
