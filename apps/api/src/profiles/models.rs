use serde::{Deserialize, Serialize};

/// Body of `POST /search-linkedin`. Codes are validated against the lookup tables.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub name: String,
    pub university: String,
    pub degree_status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedinResult {
    pub url: String,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileDetailsRequest {
    pub linkedin_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDetails {
    pub summary: String,
    pub social_links: Option<Vec<String>>,
}
