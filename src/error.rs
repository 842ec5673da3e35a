use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Multipart error: {0}")]
    Multipart(String),

    #[error("No file uploaded in the 'image' field")]
    MissingImageField,

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Image hosting upload failed with status {status}: {body}")]
    UploadFailed { status: u16, body: String },

    #[error("Image hosting response did not contain an image URL")]
    MalformedUploadResponse,

    #[error("Invalid hosted image URL: {0}")]
    Url(#[from] url::ParseError),
}

// MultipartError is neither Send nor Sync, so it is captured as a message
// rather than held as a source.
impl From<actix_multipart::MultipartError> for AppError {
    fn from(err: actix_multipart::MultipartError) -> Self {
        AppError::Multipart(err.to_string())
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "error": self.to_string(),
        }))
    }

    fn status_code(&self) -> StatusCode {
        // The scan endpoint only distinguishes success from failure.
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
