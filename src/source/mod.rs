//! Business source: the external collaborator supplying catalog snapshots.
//!
//! The source yields an already-decoded collection plus loading/error
//! status. A new snapshot means full recomputation downstream; records
//! within one snapshot never change.

mod http;

pub use http::{HttpBusinessSource, DIRECTORY_BASE_URL};

use async_trait::async_trait;
use thiserror::Error;

use crate::models::BusinessRecord;

/// Error type for business source operations.
///
/// Source failure is the only error in the system that is surfaced to the
/// user; the listing does not run against a failed source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("business source unavailable: {0}")]
    Unavailable(String),
}

/// A fetched catalog collection with an identity tag for memoization.
///
/// `generation` increases with each applied snapshot, so downstream
/// caches can compare identity without comparing record contents.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub records: Vec<BusinessRecord>,
    pub generation: u64,
}

impl CatalogSnapshot {
    /// Wrap a fetched collection under the given generation.
    pub fn new(records: Vec<BusinessRecord>, generation: u64) -> Self {
        Self {
            records,
            generation,
        }
    }

    /// Image URLs referenced by this snapshot, in record order.
    pub fn image_urls(&self) -> Vec<String> {
        self.records
            .iter()
            .filter_map(|r| r.image_url.clone())
            .collect()
    }
}

/// Current view of the source as consumed by the UI.
#[derive(Debug, Default)]
pub struct SourceState {
    pub snapshot: CatalogSnapshot,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl SourceState {
    /// Apply a freshly fetched collection, bumping the generation.
    pub fn apply_records(&mut self, records: Vec<BusinessRecord>) {
        let generation = self.snapshot.generation + 1;
        self.snapshot = CatalogSnapshot::new(records, generation);
        self.is_loading = false;
        self.error = None;
    }

    /// Record a fetch failure; the previous snapshot is kept but the UI
    /// shows the blocking error state.
    pub fn apply_error(&mut self, error: &SourceError) {
        self.is_loading = false;
        self.error = Some(error.to_string());
    }
}

/// Supplies the raw catalog collection.
///
/// One attempt per request; retry policy belongs to the caller (and in
/// this application there is none, by design).
#[async_trait]
pub trait BusinessSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<BusinessRecord>, SourceError>;
}
