//! Post-processing of free-text model replies.
//!
//! Model output is loosely formatted, so nothing here fails: an unusable reply
//! degrades to the empty/default value and is logged.

use tracing::{debug, warn};

use crate::llm_client::prompts::UNSURE_MARKER;
use crate::llm_client::strip_json_fences;

pub const SUMMARY_PLACEHOLDER: &str = "Summary not available";

pub fn summary_or_placeholder(reply: String) -> String {
    if reply.trim().is_empty() {
        SUMMARY_PLACEHOLDER.to_string()
    } else {
        reply
    }
}

fn is_unsure(reply: &str) -> bool {
    reply.to_lowercase().contains(UNSURE_MARKER)
}

/// `None` when the model was unsure or returned nothing.
pub fn parse_name(reply: &str) -> Option<String> {
    let name = reply.trim();
    if name.is_empty() || is_unsure(name) {
        None
    } else {
        Some(name.to_string())
    }
}

/// Parses the link-list reply.
///
/// A JSON array of strings, optionally inside a code fence, is returned as
/// parsed. A bracketed list with single-quoted items is split and cleaned.
/// Anything else yields an empty list.
pub fn parse_social_links(reply: &str) -> Vec<String> {
    if is_unsure(reply) {
        debug!("Model was unsure about social links");
        return Vec::new();
    }

    let text = strip_json_fences(reply);

    if let Ok(links) = serde_json::from_str::<Vec<String>>(text) {
        return links;
    }

    match text.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
        Some(inner) => clean(inner.split(',').map(|item| {
            item.trim()
                .trim_matches(|c: char| c == '\'' || c == '"')
                .to_string()
        })),
        None => {
            warn!("Discarding unparsable social links reply: {text:?}");
            Vec::new()
        }
    }
}

fn clean(links: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for link in links {
        let link = link.trim();
        if !link.is_empty() && !out.iter().any(|l| l == link) {
            out.push(link.to_string());
        }
    }
    out
}
