//! Profile details: page text for one LinkedIn URL, condensed by three completion prompts.

use tracing::{debug, info};

use crate::errors::AppError;
use crate::llm_client::CompletionProvider;
use crate::profiles::extraction::{parse_name, parse_social_links, summary_or_placeholder};
use crate::profiles::models::{ProfileDetails, ProfileDetailsRequest};
use crate::profiles::prompts::{
    render, NAME_PROMPT_TEMPLATE, SOCIAL_LINKS_PROMPT_TEMPLATE, SUMMARY_PROMPT_TEMPLATE,
};
use crate::profiles::LINKEDIN_DOMAIN;
use crate::search_client::{SearchOptions, SearchProvider, SearchType};

/// Fetches the profile text, then asks for a summary, the person's name, and
/// their social links, one completion at a time.
///
/// Content retrieval failures surface as `ProfileFetch`; any completion
/// failure fails the whole request as `Llm`. Unusable name or link replies
/// degrade to empty values.
pub async fn fetch_profile_details(
    request: &ProfileDetailsRequest,
    search: &dyn SearchProvider,
    llm: &dyn CompletionProvider,
) -> Result<ProfileDetails, AppError> {
    let url = request.linkedin_url.trim();
    if url.is_empty() {
        return Err(AppError::Validation("linkedin_url cannot be empty".to_string()));
    }

    info!("Fetching LinkedIn contents for {url}");
    let contents = fetch_contents(url, search).await?;
    debug!("Fetched {} chars of profile text", contents.len());

    let summary = complete(llm, SUMMARY_PROMPT_TEMPLATE, &contents).await?;
    let name_reply = complete(llm, NAME_PROMPT_TEMPLATE, &contents).await?;
    let links_reply = complete(llm, SOCIAL_LINKS_PROMPT_TEMPLATE, &contents).await?;

    // The name is only used for diagnostics; the response does not carry it.
    match parse_name(&name_reply) {
        Some(name) => debug!("Extracted name: {name}"),
        None => debug!("Model could not identify a name"),
    }

    let social_links = parse_social_links(&links_reply);
    debug!("Extracted {} social links", social_links.len());

    Ok(ProfileDetails {
        summary: summary_or_placeholder(summary),
        social_links: Some(social_links),
    })
}

async fn fetch_contents(url: &str, search: &dyn SearchProvider) -> Result<String, AppError> {
    let options = SearchOptions {
        query: format!("\"{url}\""),
        num_results: 1,
        search_type: SearchType::Keyword,
        include_domains: vec![LINKEDIN_DOMAIN.to_string()],
    };

    let hits = search
        .search_and_contents(&options)
        .await
        .map_err(|e| AppError::ProfileFetch(e.to_string()))?;

    let first = hits
        .into_iter()
        .next()
        .ok_or_else(|| AppError::ProfileFetch("Could not fetch LinkedIn contents".to_string()))?;

    Ok(first.text.unwrap_or_default())
}

async fn complete(
    llm: &dyn CompletionProvider,
    template: &str,
    contents: &str,
) -> Result<String, AppError> {
    llm.complete(&render(template, contents))
        .await
        .map_err(|e| AppError::Llm(e.to_string()))
}
