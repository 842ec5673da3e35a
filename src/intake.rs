use crate::error::AppError;
use actix_multipart::Multipart;
use futures::TryStreamExt;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A transiently stored upload. The file lives under the uploads directory
/// until `release` removes it after the hosting step has consumed it.
#[derive(Debug)]
pub struct ImageHandle {
    path: PathBuf,
    original_filename: Option<String>,
    size: u64,
}

impl ImageHandle {
    pub fn new(path: PathBuf, original_filename: Option<String>, size: u64) -> Self {
        Self {
            path,
            original_filename,
            size,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn original_filename(&self) -> Option<&str> {
        self.original_filename.as_deref()
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Removes the transient file. Deletion failure is logged and swallowed,
    /// it never affects the response.
    pub fn release(self) {
        log::trace!("Releasing transient file: {:?}", self.path);
        if let Err(e) = std::fs::remove_file(&self.path) {
            log::warn!("Failed to remove transient file {:?}: {}", self.path, e);
        }
    }
}

/// Reads the single `image` field out of a multipart request body and writes
/// it to the uploads directory under a generated name. Any byte stream is
/// accepted, content is not inspected here.
pub async fn receive_image(
    payload: &mut Multipart,
    upload_dir: &Path,
) -> Result<ImageHandle, AppError> {
    while let Some(mut field) = payload.try_next().await? {
        if field.name() != "image" {
            log::trace!("Skipping multipart field: {}", field.name());
            continue;
        }

        let original_filename = field
            .content_disposition()
            .get_filename()
            .map(|name| name.to_string());

        let mut bytes: Vec<u8> = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            bytes.extend_from_slice(&chunk);
        }

        let path = upload_dir.join(Uuid::new_v4().to_string());
        let size = bytes.len() as u64;
        tokio::fs::write(&path, &bytes).await?;
        log::debug!(
            "Stored uploaded image ({} bytes, original name {:?}) at {:?}",
            size,
            original_filename,
            path
        );

        return Ok(ImageHandle {
            path,
            original_filename,
            size,
        });
    }

    Err(AppError::MissingImageField)
}
