//! Process-lifetime image prefetch cache.
//!
//! Loads images by URL and caches completed loads, so repeat requests for
//! a resolved URL never touch the network again. Created once per process
//! and injected wherever it is needed; never torn down mid-run.
//!
//! Two deliberate limitations are inherited from the original design:
//! - entries are never evicted, so the cache grows for the life of the
//!   process (`len`/`total_bytes` make the growth observable), and
//! - in-flight loads are not deduplicated. Only calls arriving after a
//!   successful resolution hit the cache; two concurrent loads for the
//!   same URL each issue a request, and the later resolution overwrites
//!   the earlier entry.

mod error;

pub use error::ImageError;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use bytes::Bytes;
use reqwest::Client;
use tracing::{debug, warn};

/// Per-request timeout for image fetches. Prefetch is best-effort; a slow
/// image must not hold a worker forever.
const IMAGE_FETCH_TIMEOUT_SECS: u64 = 30;

/// A successfully loaded image: raw payload plus decoded dimensions.
#[derive(Debug, Clone)]
pub struct ImageHandle {
    pub url: String,
    pub bytes: Bytes,
    pub width: u32,
    pub height: u32,
}

/// Deduplicating, lazily-loaded image cache.
pub struct ImageCache {
    client: Client,
    entries: RwLock<HashMap<String, Arc<ImageHandle>>>,
}

impl ImageCache {
    /// Create the process-wide cache service.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(IMAGE_FETCH_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Load `url`, returning the cached handle when one exists.
    ///
    /// On a miss this issues one HTTP GET. Success stores the handle;
    /// failure caches nothing, so the next call retries from scratch.
    pub async fn load(&self, url: &str) -> Result<Arc<ImageHandle>, ImageError> {
        if let Some(handle) = self.get(url) {
            return Ok(handle);
        }

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ImageError::LoadFailed {
                url: url.to_string(),
                source: e,
            })?;

        if !response.status().is_success() {
            return Err(ImageError::BadStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ImageError::LoadFailed {
                url: url.to_string(),
                source: e,
            })?;

        let decoded = image::load_from_memory(&bytes).map_err(|e| ImageError::DecodeFailed {
            url: url.to_string(),
            source: e,
        })?;

        let handle = Arc::new(ImageHandle {
            url: url.to_string(),
            width: decoded.width(),
            height: decoded.height(),
            bytes,
        });

        self.entries
            .write()
            .expect("image cache lock poisoned")
            .insert(url.to_string(), Arc::clone(&handle));

        debug!(
            "cached image {} ({}x{}, {} bytes)",
            url,
            handle.width,
            handle.height,
            handle.bytes.len()
        );
        Ok(handle)
    }

    /// Resolved handle for `url`, if one is cached. Never loads.
    pub fn get(&self, url: &str) -> Option<Arc<ImageHandle>> {
        self.entries
            .read()
            .expect("image cache lock poisoned")
            .get(url)
            .cloned()
    }

    /// True when `url` has a resolved entry.
    pub fn contains(&self, url: &str) -> bool {
        self.get(url).is_some()
    }

    /// Number of resolved entries.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .expect("image cache lock poisoned")
            .len()
    }

    /// True when nothing has resolved yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total payload bytes held by resolved entries.
    pub fn total_bytes(&self) -> usize {
        self.entries
            .read()
            .expect("image cache lock poisoned")
            .values()
            .map(|h| h.bytes.len())
            .sum()
    }

    /// Warm the cache: spawn one fire-and-forget load per URL.
    ///
    /// Never blocks the caller. Failures are logged and otherwise
    /// ignored; a missing image must not affect filtering, pagination,
    /// or rendering. There is no concurrency cap.
    pub fn warm(self: &Arc<Self>, urls: impl IntoIterator<Item = String>) {
        for url in urls {
            let cache = Arc::clone(self);
            tokio::spawn(async move {
                if let Err(e) = cache.load(&url).await {
                    warn!("image prefetch failed for {}: {}", e.url(), e);
                }
            });
        }
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("entries", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cache_is_empty() {
        let cache = ImageCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.total_bytes(), 0);
        assert!(cache.get("img://x").is_none());
    }

    #[tokio::test]
    async fn test_load_failure_is_not_cached() {
        // Nothing listens on this port; the load must fail and leave the
        // cache untouched so a later call can retry.
        let cache = ImageCache::new();
        let err = cache.load("http://127.0.0.1:1/a.png").await.unwrap_err();
        assert_eq!(err.url(), "http://127.0.0.1:1/a.png");
        assert!(cache.is_empty());
    }
}
