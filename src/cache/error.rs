//! Image cache error types.

use thiserror::Error;

/// Errors from a single image load attempt.
///
/// These are recoverable: they are logged, never surfaced to the UI, and
/// never cached, so a later call for the same URL retries from scratch.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("failed to load image {url}: {source}")]
    LoadFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("image {url} returned status {status}")]
    BadStatus { url: String, status: u16 },

    #[error("failed to decode image {url}: {source}")]
    DecodeFailed {
        url: String,
        #[source]
        source: image::ImageError,
    },
}

impl ImageError {
    /// URL of the failed load.
    pub fn url(&self) -> &str {
        match self {
            ImageError::LoadFailed { url, .. }
            | ImageError::BadStatus { url, .. }
            | ImageError::DecodeFailed { url, .. } => url,
        }
    }
}
