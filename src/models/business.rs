//! Business record model.

use serde::{Deserialize, Serialize};

/// One catalog entry as supplied by the business source.
///
/// Records are immutable within a fetch snapshot; the listing pipeline
/// never mutates them. Every field except `id` may be absent on the wire,
/// and the filter treats absent fields as non-matches rather than errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    /// Stable unique identifier.
    pub id: String,
    /// Display name shown on cards and used for free-text search.
    #[serde(default)]
    pub name: Option<String>,
    /// URL-friendly short name.
    #[serde(default)]
    pub slug: Option<String>,
    /// Category label, matched exactly (case-insensitive) against the
    /// selected category.
    #[serde(default)]
    pub category: Option<String>,
    /// Street address.
    #[serde(default)]
    pub address: Option<String>,
    /// Opening hours, free-form.
    #[serde(default)]
    pub hours: Option<String>,
    /// Inactive records are hidden from every listing.
    #[serde(default)]
    pub active: bool,
    /// Image to prefetch for this record, if any.
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
}

impl BusinessRecord {
    /// Create an active record with the given id and name.
    ///
    /// Convenience constructor used by tests and the static source.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            slug: None,
            category: None,
            address: None,
            hours: None,
            active: true,
            image_url: None,
        }
    }

    /// Builder-style category setter.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Builder-style address setter.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Builder-style hours setter.
    pub fn with_hours(mut self, hours: impl Into<String>) -> Self {
        self.hours = Some(hours.into());
        self
    }

    /// Builder-style image URL setter.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Builder-style active flag setter.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Display name, or a placeholder for records missing one.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": "b1",
            "name": "Cafe Central",
            "slug": "cafe-central",
            "category": "Cafes",
            "address": "12 Main St",
            "hours": "8:00 - 18:00",
            "active": true,
            "imageUrl": "https://example.com/business-cafe-central.jpg"
        }"#;

        let record: BusinessRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "b1");
        assert_eq!(record.name.as_deref(), Some("Cafe Central"));
        assert_eq!(record.category.as_deref(), Some("Cafes"));
        assert!(record.active);
        assert_eq!(
            record.image_url.as_deref(),
            Some("https://example.com/business-cafe-central.jpg")
        );
    }

    #[test]
    fn test_deserialize_sparse_record_defaults() {
        // Only the id is guaranteed on the wire
        let record: BusinessRecord = serde_json::from_str(r#"{"id": "b2"}"#).unwrap();
        assert_eq!(record.id, "b2");
        assert!(record.name.is_none());
        assert!(record.category.is_none());
        assert!(!record.active);
        assert!(record.image_url.is_none());
    }

    #[test]
    fn test_display_name_placeholder() {
        let record: BusinessRecord = serde_json::from_str(r#"{"id": "b3"}"#).unwrap();
        assert_eq!(record.display_name(), "(unnamed)");
    }
}
