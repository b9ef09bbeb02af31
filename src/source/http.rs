//! HTTP implementation of the business source.

use async_trait::async_trait;
use reqwest::Client;

use crate::models::BusinessRecord;

use super::{BusinessSource, SourceError};

/// Default base URL for the directory backend.
pub const DIRECTORY_BASE_URL: &str = "https://directory.plaza.local";

/// Fetches the catalog as a JSON array from `{base_url}/businesses`.
pub struct HttpBusinessSource {
    base_url: String,
    client: Client,
}

impl HttpBusinessSource {
    /// Create a source against the default base URL.
    pub fn new() -> Self {
        Self::with_base_url(DIRECTORY_BASE_URL.to_string())
    }

    /// Create a source against a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// Base URL this source talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for HttpBusinessSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BusinessSource for HttpBusinessSource {
    async fn fetch(&self) -> Result<Vec<BusinessRecord>, SourceError> {
        let url = format!("{}/businesses", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SourceError::Unavailable(format!(
                "server returned status {}",
                response.status().as_u16()
            )));
        }

        response
            .json::<Vec<BusinessRecord>>()
            .await
            .map_err(|e| SourceError::Unavailable(format!("invalid catalog payload: {e}")))
    }
}
