use crate::error::AppError;
use crate::intake::ImageHandle;
use async_trait::async_trait;
use std::fmt;
use url::Url;

/// A publicly resolvable URL returned by the image host. Construction fails
/// unless the host handed back a well-formed absolute URL.
#[derive(Debug, Clone)]
pub struct HostedImageUrl(Url);

impl HostedImageUrl {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        Ok(Self(Url::parse(raw)?))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for HostedImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Uploads the transient image once, no retries. The handle is only
    /// borrowed: its lifetime stays with the orchestrator.
    async fn upload(&self, handle: &ImageHandle) -> Result<HostedImageUrl, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_an_absolute_url() {
        let url = HostedImageUrl::parse("https://i.example.com/abc/photo.jpg").unwrap();
        assert_eq!(url.as_str(), "https://i.example.com/abc/photo.jpg");
    }

    #[test]
    fn parse_rejects_a_relative_path() {
        assert!(HostedImageUrl::parse("/abc/photo.jpg").is_err());
    }
}
