use crate::config::AppConfig;
use crate::error::AppError;
use crate::hosting::{HostedImageUrl, ImageHost};
use crate::intake::ImageHandle;
use async_trait::async_trait;
use reqwest::multipart;
use std::time::Duration;

/// ImgBB-style hosting client: one multipart POST with a `key` query
/// credential, image URL read from `data.url` in the response body.
pub struct ImgbbHost {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl ImgbbHost {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        log::debug!("Creating image hosting client for {}", config.hosting_api_url);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.hosting_api_url.clone(),
            api_key: config.hosting_api_key.clone(),
        })
    }
}

#[async_trait]
impl ImageHost for ImgbbHost {
    async fn upload(&self, handle: &ImageHandle) -> Result<HostedImageUrl, AppError> {
        log::debug!("Uploading {:?} to image host", handle.path());

        let bytes = tokio::fs::read(handle.path()).await?;
        let filename = handle.original_filename().unwrap_or("upload.bin").to_string();
        let mime = mime_guess::from_path(&filename).first_or_octet_stream();
        let part = multipart::Part::bytes(bytes)
            .file_name(filename)
            .mime_str(mime.essence_str())?;
        let form = multipart::Form::new().part("image", part);

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UploadFailed {
                status: status.as_u16(),
                body,
            });
        }

        let body: serde_json::Value = response.json().await?;
        let raw_url = body["data"]["url"]
            .as_str()
            .ok_or(AppError::MalformedUploadResponse)?;

        log::debug!("Image host returned URL: {}", raw_url);
        HostedImageUrl::parse(raw_url)
    }
}
