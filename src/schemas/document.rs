//! Stored document schema - records owned by the document-storage collaborator

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One version of a document filed against an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub entity_type: String,

    pub entity_id: String,

    /// Matches `ChecklistItem::document_type`
    pub document_type: String,

    /// Monotonic per (entity, document_type); the highest is current
    pub version: u32,

    /// Whether an authorized reviewer accepted this version
    #[serde(default)]
    pub was_reviewed: bool,

    pub created_at: DateTime<Utc>,

    /// Soft-delete marker (null while the document is live)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl StoredDocument {
    /// Create version 1 of a document, unreviewed
    pub fn new(entity_type: &str, entity_id: &str, document_type: &str) -> Self {
        StoredDocument {
            entity_type: entity_type.to_string(),
            entity_id: entity_id.to_string(),
            document_type: document_type.to_string(),
            version: 1,
            was_reviewed: false,
            created_at: Utc::now(),
            deleted_at: None,
        }
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn with_reviewed(mut self, was_reviewed: bool) -> Self {
        self.was_reviewed = was_reviewed;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn with_deleted_at(mut self, deleted_at: Option<DateTime<Utc>>) -> Self {
        self.deleted_at = deleted_at;
        self
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn belongs_to(&self, entity_type: &str, entity_id: &str) -> bool {
        self.entity_type == entity_type && self.entity_id == entity_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_defaults() {
        let doc = StoredDocument::new("driver", "d-7", "medical_certificate");
        assert_eq!(doc.version, 1);
        assert!(!doc.was_reviewed);
        assert!(!doc.is_deleted());
        assert!(doc.belongs_to("driver", "d-7"));
        assert!(!doc.belongs_to("truck", "d-7"));
    }

    #[test]
    fn test_document_json_defaults() {
        let json = r#"{
            "entity_type": "truck",
            "entity_id": "t-1",
            "document_type": "registration",
            "version": 3,
            "created_at": "2024-05-01T12:00:00Z"
        }"#;
        let doc: StoredDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.version, 3);
        assert!(!doc.was_reviewed);
        assert!(doc.deleted_at.is_none());

        let value = serde_json::to_value(&doc).unwrap();
        assert!(value.get("deleted_at").is_none());
    }
}
