//! Profile lookup: finding candidate LinkedIn profiles and summarizing a chosen one.

pub mod details;
pub mod extraction;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod query;
pub mod search;

/// Domain every search is restricted to.
pub const LINKEDIN_DOMAIN: &str = "linkedin.com";
