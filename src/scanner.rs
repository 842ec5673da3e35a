use crate::error::AppError;
use crate::hosting::ImageHost;
use crate::intake::ImageHandle;
use crate::results::{normalize, MatchResult};
use crate::search::{MatchSearcher, SearchOutcome};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub success: bool,
    pub imgbb_url: String,
    pub results: Vec<MatchResult>,
    pub total_matches: usize,
}

/// Runs one scan end to end: upload the transient image, search for visual
/// matches, normalize. Owns the handle for the duration of the request and
/// releases it on every exit path.
pub struct Scanner {
    host: Arc<dyn ImageHost>,
    searcher: Arc<dyn MatchSearcher>,
}

impl Scanner {
    pub fn new(host: Arc<dyn ImageHost>, searcher: Arc<dyn MatchSearcher>) -> Self {
        Self { host, searcher }
    }

    pub async fn scan(&self, handle: ImageHandle) -> Result<ScanResponse, AppError> {
        log::info!("Scanning uploaded image ({} bytes)", handle.size());

        let uploaded = self.host.upload(&handle).await;
        // The hosting step is the last consumer of the transient file.
        handle.release();
        let hosted = uploaded?;
        log::info!("Image hosted at {}", hosted);

        log::info!("Searching for visual matches");
        let raw = match self.searcher.search(&hosted).await {
            SearchOutcome::Matches(matches) => matches,
            SearchOutcome::NoMatches => Vec::new(),
        };

        let results = normalize(raw);
        log::info!("Scan finished with {} results", results.len());

        Ok(ScanResponse {
            success: true,
            imgbb_url: hosted.to_string(),
            total_matches: results.len(),
            results,
        })
    }
}
