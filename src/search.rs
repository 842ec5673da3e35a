use crate::hosting::HostedImageUrl;
use async_trait::async_trait;
use serde::Deserialize;

/// One candidate match as returned by the visual search API. Every field is
/// optional at the source.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct RawMatch {
    pub title: Option<String>,
    pub source: Option<String>,
    pub link: Option<String>,
    pub thumbnail: Option<String>,
    pub image: Option<String>,
}

/// Distinguishes a real (possibly empty) result set from a failed lookup.
/// Both currently degrade to the demo fallback, but the tag keeps the two
/// cases observable.
#[derive(Debug, PartialEq)]
pub enum SearchOutcome {
    Matches(Vec<RawMatch>),
    NoMatches,
}

#[async_trait]
pub trait MatchSearcher: Send + Sync {
    /// Looks up visual matches for a hosted image. Infallible by contract:
    /// implementations swallow their own errors and report `NoMatches`.
    /// Rank order of the returned matches follows the API.
    async fn search(&self, url: &HostedImageUrl) -> SearchOutcome;
}
