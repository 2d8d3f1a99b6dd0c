//! Keyword query construction and search-result shaping.

use crate::lookup::{DegreeStatus, University};
use crate::profiles::models::LinkedinResult;
use crate::search_client::SearchHit;

/// URL fragment that marks an individual profile, as opposed to company or group pages.
pub const PROFILE_PATH_MARKER: &str = "linkedin.com/in/";

/// Upper bound on results requested from search and returned to the caller.
pub const MAX_RESULTS: usize = 5;

/// Builds `"<name>" "<full institution>" <degree phrase>`.
pub fn build_query(name: &str, university: University, degree: DegreeStatus) -> String {
    format!(
        "\"{}\" \"{}\" {}",
        name.trim(),
        university.full_name(),
        degree.phrase()
    )
}

pub fn is_profile_url(url: &str) -> bool {
    url.contains(PROFILE_PATH_MARKER)
}

/// Keeps profile pages in search order and truncates to `MAX_RESULTS`.
pub fn filter_profile_results(hits: Vec<SearchHit>) -> Vec<LinkedinResult> {
    hits.into_iter()
        .filter(|hit| is_profile_url(&hit.url))
        .take(MAX_RESULTS)
        .map(|hit| LinkedinResult {
            url: hit.url,
            title: hit.title.unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(url: &str, title: Option<&str>) -> SearchHit {
        SearchHit {
            url: url.to_string(),
            title: title.map(str::to_string),
            text: None,
        }
    }

    #[test]
    fn test_build_query_example() {
        let query = build_query("Jane Doe", University::Waterloo, DegreeStatus::Alumni);
        assert_eq!(query, r#""Jane Doe" "University of Waterloo" Alumni"#);
    }

    #[test]
    fn test_build_query_orders_name_institution_degree_for_all_codes() {
        for university in University::ALL {
            for degree in DegreeStatus::ALL {
                let query = build_query("Sam Lee", university, degree);
                let name_at = query.find("\"Sam Lee\"").unwrap();
                let uni_at = query
                    .find(&format!("\"{}\"", university.full_name()))
                    .unwrap();
                let degree_at = query.rfind(degree.phrase()).unwrap();
                assert!(name_at < uni_at, "{query}");
                assert!(uni_at < degree_at, "{query}");
            }
        }
    }

    #[test]
    fn test_build_query_trims_name() {
        let query = build_query("  Jane Doe ", University::Guelph, DegreeStatus::Phd);
        assert_eq!(query, r#""Jane Doe" "University of Guelph" PhD student"#);
    }

    #[test]
    fn test_filter_drops_company_pages() {
        let results = filter_profile_results(vec![
            hit("https://www.linkedin.com/in/janedoe", Some("Jane Doe")),
            hit("https://www.linkedin.com/company/acme", Some("Acme")),
        ]);
        assert_eq!(
            results,
            vec![LinkedinResult {
                url: "https://www.linkedin.com/in/janedoe".to_string(),
                title: "Jane Doe".to_string(),
            }]
        );
    }

    #[test]
    fn test_filter_keeps_order_and_caps_at_five() {
        let hits = (0..8)
            .map(|i| hit(&format!("https://ca.linkedin.com/in/person-{i}"), None))
            .collect();
        let results = filter_profile_results(hits);
        assert_eq!(results.len(), MAX_RESULTS);
        assert_eq!(results[0].url, "https://ca.linkedin.com/in/person-0");
        assert_eq!(results[4].url, "https://ca.linkedin.com/in/person-4");
        assert!(results.iter().all(|r| r.title.is_empty()));
    }

    #[test]
    fn test_filter_truncates_after_filtering() {
        let mut hits = vec![
            hit("https://www.linkedin.com/groups/123", None),
            hit("https://www.linkedin.com/posts/abc", None),
        ];
        hits.extend((0..5).map(|i| hit(&format!("https://www.linkedin.com/in/p{i}"), None)));
        let results = filter_profile_results(hits);
        assert_eq!(results.len(), 5);
        assert!(results.iter().all(|r| is_profile_url(&r.url)));
    }
}
