//! Mock business source serving a fixed collection.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::models::BusinessRecord;
use crate::source::{BusinessSource, SourceError};

/// A source that returns a preconfigured collection, or a preconfigured
/// failure. Used by integration tests and offline development.
pub struct StaticBusinessSource {
    response: Mutex<Result<Vec<BusinessRecord>, String>>,
}

impl StaticBusinessSource {
    /// Source that always succeeds with `records`.
    pub fn new(records: Vec<BusinessRecord>) -> Self {
        Self {
            response: Mutex::new(Ok(records)),
        }
    }

    /// Source that always fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Mutex::new(Err(message.into())),
        }
    }

    /// Replace the collection served by subsequent fetches.
    pub fn set_records(&self, records: Vec<BusinessRecord>) {
        *self.response.lock().unwrap() = Ok(records);
    }
}

#[async_trait]
impl BusinessSource for StaticBusinessSource {
    async fn fetch(&self) -> Result<Vec<BusinessRecord>, SourceError> {
        match &*self.response.lock().unwrap() {
            Ok(records) => Ok(records.clone()),
            Err(message) => Err(SourceError::Unavailable(message.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_source_serves_collection() {
        let source = StaticBusinessSource::new(vec![BusinessRecord::new("b1", "One")]);
        let records = source.fetch().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "b1");
    }

    #[tokio::test]
    async fn test_failing_source_returns_unavailable() {
        let source = StaticBusinessSource::failing("offline");
        let err = source.fetch().await.unwrap_err();
        assert!(err.to_string().contains("offline"));
    }

    #[tokio::test]
    async fn test_set_records_replaces_collection() {
        let source = StaticBusinessSource::new(vec![]);
        source.set_records(vec![BusinessRecord::new("b2", "Two")]);
        let records = source.fetch().await.unwrap();
        assert_eq!(records[0].id, "b2");
    }
}
