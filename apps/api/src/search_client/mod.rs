//! Search client: keyword search and search-with-contents over the Exa API.
//!
//! Handlers never talk to reqwest directly; they go through `SearchProvider`
//! so tests can substitute a scripted implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed search response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    #[default]
    Keyword,
}

/// Parameters shared by both search modes.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    pub query: String,
    pub num_results: u32,
    pub search_type: SearchType,
    pub include_domains: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchHit {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Page text; only populated by `search_and_contents`.
    #[serde(default)]
    pub text: Option<String>,
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, options: &SearchOptions) -> Result<Vec<SearchHit>, SearchError>;

    /// Like `search`, but each hit carries the page text with HTML tags stripped.
    async fn search_and_contents(
        &self,
        options: &SearchOptions,
    ) -> Result<Vec<SearchHit>, SearchError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExaSearchRequest<'a> {
    query: &'a str,
    num_results: u32,
    #[serde(rename = "type")]
    search_type: SearchType,
    #[serde(skip_serializing_if = "no_domains")]
    include_domains: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    contents: Option<ExaContents>,
}

fn no_domains(domains: &&[String]) -> bool {
    domains.is_empty()
}

#[derive(Debug, Serialize)]
struct ExaContents {
    text: ExaTextOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExaTextOptions {
    include_html_tags: bool,
}

/// Builds the `/search` body. `with_contents` asks for page text without HTML tags.
fn search_request(options: &SearchOptions, with_contents: bool) -> ExaSearchRequest<'_> {
    ExaSearchRequest {
        query: &options.query,
        num_results: options.num_results,
        search_type: options.search_type,
        include_domains: &options.include_domains,
        contents: with_contents.then_some(ExaContents {
            text: ExaTextOptions {
                include_html_tags: false,
            },
        }),
    }
}

#[derive(Debug, Deserialize)]
struct ExaSearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct ExaErrorBody {
    error: String,
}

/// Exa API client. Built once at startup and shared across requests.
#[derive(Clone)]
pub struct ExaClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ExaClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn post_search(
        &self,
        options: &SearchOptions,
        with_contents: bool,
    ) -> Result<Vec<SearchHit>, SearchError> {
        let request_body = search_request(options, with_contents);

        let response = self
            .client
            .post(format!("{}/search", self.base_url))
            .header("x-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ExaErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ExaSearchResponse = serde_json::from_str(&body)?;
        debug!(
            "Exa search returned {} results for query {}",
            parsed.results.len(),
            options.query
        );
        Ok(parsed.results)
    }
}

#[async_trait]
impl SearchProvider for ExaClient {
    async fn search(&self, options: &SearchOptions) -> Result<Vec<SearchHit>, SearchError> {
        self.post_search(options, false).await
    }

    async fn search_and_contents(
        &self,
        options: &SearchOptions,
    ) -> Result<Vec<SearchHit>, SearchError> {
        self.post_search(options, true).await
    }
}
