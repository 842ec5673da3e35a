use crate::config::AppConfig;
use crate::error::AppError;
use crate::hosting::HostedImageUrl;
use crate::search::{MatchSearcher, RawMatch, SearchOutcome};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// SerpAPI-style visual search client: one GET against the search endpoint in
/// reverse-image mode. Failures degrade to `NoMatches` instead of surfacing.
pub struct SerpApiSearcher {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct SearchBody {
    visual_matches: Option<Vec<RawMatch>>,
}

impl SerpApiSearcher {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        log::debug!("Creating visual search client for {}", config.search_api_url);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.search_api_url.clone(),
            api_key: config.search_api_key.clone(),
        })
    }

    async fn visual_matches(&self, url: &HostedImageUrl) -> Result<Vec<RawMatch>, AppError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("engine", "google_lens"),
                ("url", url.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: SearchBody = response.json().await?;
        Ok(body.visual_matches.unwrap_or_default())
    }
}

#[async_trait]
impl MatchSearcher for SerpApiSearcher {
    async fn search(&self, url: &HostedImageUrl) -> SearchOutcome {
        match self.visual_matches(url).await {
            Ok(matches) => {
                log::debug!("Visual search returned {} matches", matches.len());
                SearchOutcome::Matches(matches)
            }
            Err(e) => {
                log::warn!("Visual search failed, degrading to no matches: {}", e);
                SearchOutcome::NoMatches
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn search_config(endpoint: String) -> AppConfig {
        AppConfig {
            upload_directory: "uploads".to_string(),
            hosting_api_url: String::new(),
            hosting_api_key: String::new(),
            search_api_url: endpoint,
            search_api_key: "search-key".to_string(),
            request_timeout_secs: 5,
            web_port: 0,
            log_level: "debug".to_string(),
        }
    }

    fn hosted() -> HostedImageUrl {
        HostedImageUrl::parse("https://i.example.com/abc/photo.jpg").unwrap()
    }

    #[tokio::test]
    async fn search_preserves_api_rank_order() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search.json")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("engine".into(), "google_lens".into()),
                mockito::Matcher::UrlEncoded("url".into(), "https://i.example.com/abc/photo.jpg".into()),
                mockito::Matcher::UrlEncoded("api_key".into(), "search-key".into()),
            ]))
            .with_status(200)
            .with_body(
                json!({
                    "visual_matches": [
                        {"title": "a", "source": "s1", "link": "l1", "thumbnail": "t1"},
                        {"title": "b", "source": "s2", "link": "l2", "image": "i2"},
                        {"title": "c"}
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let searcher = SerpApiSearcher::new(&search_config(format!("{}/search.json", server.url()))).unwrap();

        let outcome = searcher.search(&hosted()).await;
        let matches = match outcome {
            SearchOutcome::Matches(matches) => matches,
            SearchOutcome::NoMatches => panic!("expected matches"),
        };

        let titles: Vec<Option<&str>> = matches.iter().map(|m| m.title.as_deref()).collect();
        assert_eq!(titles, vec![Some("a"), Some("b"), Some("c")]);
        assert_eq!(matches[0].thumbnail.as_deref(), Some("t1"));
        assert_eq!(matches[1].image.as_deref(), Some("i2"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn missing_match_array_is_a_real_empty_result() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search.json")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(json!({"search_metadata": {"status": "Success"}}).to_string())
            .create_async()
            .await;

        let searcher = SerpApiSearcher::new(&search_config(format!("{}/search.json", server.url()))).unwrap();

        assert_eq!(searcher.search(&hosted()).await, SearchOutcome::Matches(Vec::new()));
    }

    #[tokio::test]
    async fn non_2xx_response_degrades_to_no_matches() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search.json")
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let searcher = SerpApiSearcher::new(&search_config(format!("{}/search.json", server.url()))).unwrap();

        assert_eq!(searcher.search(&hosted()).await, SearchOutcome::NoMatches);
    }

    #[tokio::test]
    async fn malformed_body_degrades_to_no_matches() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search.json")
            .with_status(200)
            .with_body("this is not json")
            .create_async()
            .await;

        let searcher = SerpApiSearcher::new(&search_config(format!("{}/search.json", server.url()))).unwrap();

        assert_eq!(searcher.search(&hosted()).await, SearchOutcome::NoMatches);
    }
}
