//! Document-storage collaborator
//!
//! The engine only needs one query: live documents of some types for one
//! entity, newest first.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::{DocgateError, Result};
use crate::schemas::StoredDocument;

/// Read access to stored documents
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch all non-deleted documents for `(entity_type, entity_id)` whose
    /// type is in `document_types`, newest first.
    async fn fetch_documents(
        &self,
        entity_type: &str,
        entity_id: &str,
        document_types: &[String],
    ) -> Result<Vec<StoredDocument>>;
}

/// Apply the store query to an in-memory list of documents.
///
/// Newest first means highest version first, then latest `created_at`.
/// The sort is stable, so full ties keep their input order.
pub fn select_documents(
    documents: &[StoredDocument],
    entity_type: &str,
    entity_id: &str,
    document_types: &[String],
) -> Vec<StoredDocument> {
    let mut selected: Vec<StoredDocument> = documents
        .iter()
        .filter(|doc| doc.belongs_to(entity_type, entity_id))
        .filter(|doc| !doc.is_deleted())
        .filter(|doc| document_types.iter().any(|t| *t == doc.document_type))
        .cloned()
        .collect();
    selected.sort_by(|a, b| {
        b.version
            .cmp(&a.version)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
    selected
}

/// Process-local document store, used by tests and embedding callers
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<Vec<StoredDocument>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(documents: Vec<StoredDocument>) -> Self {
        InMemoryDocumentStore {
            documents: RwLock::new(documents),
        }
    }

    pub async fn insert(&self, document: StoredDocument) {
        self.documents.write().await.push(document);
    }

    /// Soft-delete every version of a document type for an entity.
    ///
    /// Returns the number of versions marked.
    pub async fn soft_delete(&self, entity_type: &str, entity_id: &str, document_type: &str) -> usize {
        let now = chrono::Utc::now();
        let mut documents = self.documents.write().await;
        let mut marked = 0;
        for doc in documents.iter_mut() {
            if doc.belongs_to(entity_type, entity_id)
                && doc.document_type == document_type
                && !doc.is_deleted()
            {
                doc.deleted_at = Some(now);
                marked += 1;
            }
        }
        marked
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn fetch_documents(
        &self,
        entity_type: &str,
        entity_id: &str,
        document_types: &[String],
    ) -> Result<Vec<StoredDocument>> {
        let documents = self.documents.read().await;
        Ok(select_documents(&documents, entity_type, entity_id, document_types))
    }
}

/// Document store backed by a JSON array on disk.
///
/// The file is re-read on every query so edits made by other tools are
/// picked up. A missing file is an empty store.
#[derive(Debug, Clone)]
pub struct JsonDocumentStore {
    path: PathBuf,
}

impl JsonDocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonDocumentStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record in the file, deleted ones included
    pub async fn load_all(&self) -> Result<Vec<StoredDocument>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(DocgateError::UpstreamRead(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
        };
        serde_json::from_str(&content).map_err(|e| {
            DocgateError::UpstreamRead(format!("Invalid JSON in {}: {}", self.path.display(), e))
        })
    }
}

#[async_trait]
impl DocumentStore for JsonDocumentStore {
    async fn fetch_documents(
        &self,
        entity_type: &str,
        entity_id: &str,
        document_types: &[String],
    ) -> Result<Vec<StoredDocument>> {
        let documents = self.load_all().await?;
        let selected = select_documents(&documents, entity_type, entity_id, document_types);
        debug!(
            path = %self.path.display(),
            entity_type,
            entity_id,
            matched = selected.len(),
            "Fetched documents"
        );
        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use tempfile::TempDir;

    fn keys(types: &[&str]) -> Vec<String> {
        types.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_select_filters_entity_type_and_deleted() {
        let docs = vec![
            StoredDocument::new("driver", "d-1", "drivers_license"),
            StoredDocument::new("driver", "d-2", "drivers_license"),
            StoredDocument::new("truck", "d-1", "drivers_license"),
            StoredDocument::new("driver", "d-1", "road_test"),
            StoredDocument::new("driver", "d-1", "medical_certificate")
                .with_deleted_at(Some(Utc::now())),
        ];

        let selected = select_documents(
            &docs,
            "driver",
            "d-1",
            &keys(&["drivers_license", "medical_certificate"]),
        );
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].document_type, "drivers_license");
        assert_eq!(selected[0].entity_id, "d-1");
    }

    #[test]
    fn test_select_orders_newest_first() {
        let earlier = Utc::now() - Duration::hours(1);
        let docs = vec![
            StoredDocument::new("truck", "t-1", "insurance").with_version(1),
            StoredDocument::new("truck", "t-1", "insurance")
                .with_version(2)
                .with_created_at(earlier),
            StoredDocument::new("truck", "t-1", "insurance").with_version(2),
        ];

        let selected = select_documents(&docs, "truck", "t-1", &keys(&["insurance"]));
        let order: Vec<(u32, bool)> = selected
            .iter()
            .map(|d| (d.version, d.created_at == earlier))
            .collect();
        assert_eq!(order, vec![(2, false), (2, true), (1, false)]);
    }

    #[tokio::test]
    async fn test_in_memory_soft_delete_hides_documents() {
        let store = InMemoryDocumentStore::new();
        store.insert(StoredDocument::new("employee", "e-1", "resume")).await;
        store
            .insert(StoredDocument::new("employee", "e-1", "resume").with_version(2))
            .await;

        let marked = store.soft_delete("employee", "e-1", "resume").await;
        assert_eq!(marked, 2);

        let docs = store
            .fetch_documents("employee", "e-1", &keys(&["resume"]))
            .await
            .unwrap();
        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn test_json_store_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = JsonDocumentStore::new(temp.path().join("documents.json"));
        let docs = store
            .fetch_documents("employee", "e-1", &keys(&["resume"]))
            .await
            .unwrap();
        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn test_json_store_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("documents.json");
        let docs = vec![
            StoredDocument::new("employee", "e-1", "resume").with_reviewed(true),
            StoredDocument::new("employee", "e-2", "resume"),
        ];
        std::fs::write(&path, serde_json::to_string(&docs).unwrap()).unwrap();

        let store = JsonDocumentStore::new(&path);
        let fetched = store
            .fetch_documents("employee", "e-1", &keys(&["resume"]))
            .await
            .unwrap();
        assert_eq!(fetched.len(), 1);
        assert!(fetched[0].was_reviewed);
    }

    #[tokio::test]
    async fn test_json_store_invalid_file_is_upstream_failure() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("documents.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonDocumentStore::new(&path);
        let err = store
            .fetch_documents("employee", "e-1", &keys(&["resume"]))
            .await
            .unwrap_err();
        assert!(matches!(err, DocgateError::UpstreamRead(_)));
    }
}
