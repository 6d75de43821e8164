//! Entity-update collaborator
//!
//! Status writes go through a compare-and-set on the record revision so a
//! gate decision can never be applied on top of a status it did not see.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::{DocgateError, Result};
use crate::schemas::EntityRecord;

#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Load the current record; `NotFound` when the entity does not exist
    async fn get(&self, entity_type: &str, entity_id: &str) -> Result<EntityRecord>;

    /// Write a new status if the stored revision still equals
    /// `expected_revision`; `StaleRevision` otherwise.
    async fn compare_and_set_status(
        &self,
        entity_type: &str,
        entity_id: &str,
        expected_revision: u64,
        status: &str,
    ) -> Result<EntityRecord>;
}

#[derive(Debug, Default)]
pub struct InMemoryEntityStore {
    records: RwLock<HashMap<(String, String), EntityRecord>>,
}

impl InMemoryEntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, record: EntityRecord) {
        let key = (record.entity_type.clone(), record.entity_id.clone());
        self.records.write().await.insert(key, record);
    }
}

#[async_trait]
impl EntityStore for InMemoryEntityStore {
    async fn get(&self, entity_type: &str, entity_id: &str) -> Result<EntityRecord> {
        self.records
            .read()
            .await
            .get(&(entity_type.to_string(), entity_id.to_string()))
            .cloned()
            .ok_or_else(|| DocgateError::not_found(entity_type, entity_id))
    }

    async fn compare_and_set_status(
        &self,
        entity_type: &str,
        entity_id: &str,
        expected_revision: u64,
        status: &str,
    ) -> Result<EntityRecord> {
        let mut records = self.records.write().await;
        let key = (entity_type.to_string(), entity_id.to_string());
        let current = records
            .get(&key)
            .ok_or_else(|| DocgateError::not_found(entity_type, entity_id))?;

        if current.revision != expected_revision {
            return Err(DocgateError::StaleRevision {
                entity_type: entity_type.to_string(),
                entity_id: entity_id.to_string(),
                expected: expected_revision,
                actual: current.revision,
            });
        }

        let next = current.clone().with_status(status);
        records.insert(key, next.clone());
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_entity() {
        let store = InMemoryEntityStore::new();
        let err = store.get("truck", "t-404").await.unwrap_err();
        assert!(matches!(err, DocgateError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_compare_and_set_applies_once() {
        let store = InMemoryEntityStore::new();
        store.insert(EntityRecord::new("truck", "t-1", "out_of_service")).await;

        let written = store
            .compare_and_set_status("truck", "t-1", 0, "in_service")
            .await
            .unwrap();
        assert_eq!(written.status, "in_service");
        assert_eq!(written.revision, 1);

        let err = store
            .compare_and_set_status("truck", "t-1", 0, "out_of_service")
            .await
            .unwrap_err();
        match err {
            DocgateError::StaleRevision { expected, actual, .. } => {
                assert_eq!(expected, 0);
                assert_eq!(actual, 1);
            }
            other => panic!("unexpected error: {other}"),
        }

        assert_eq!(store.get("truck", "t-1").await.unwrap().status, "in_service");
    }
}
