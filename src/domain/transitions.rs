//! Status transition logic
//!
//! Decides and writes in one step: the gate is evaluated against the status
//! that was read, and the write only lands if that status is still current.

use std::sync::Arc;

use tracing::{debug, info};

use crate::errors::Result;
use crate::schemas::{EntityRecord, TransitionDecision};
use crate::store::EntityStore;

use super::engine::ChecklistEngine;

/// Result of a status transition request
#[derive(Debug)]
pub enum TransitionOutcome {
    /// The gates allowed the change and the new status was written
    Applied {
        /// The record as stored after the write
        record: EntityRecord,
        decision: TransitionDecision,
    },
    /// A gating checklist is incomplete; nothing was written
    Denied { decision: TransitionDecision },
}

impl TransitionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, TransitionOutcome::Applied { .. })
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, TransitionOutcome::Denied { .. })
    }

    pub fn decision(&self) -> &TransitionDecision {
        match self {
            TransitionOutcome::Applied { decision, .. } | TransitionOutcome::Denied { decision } => {
                decision
            }
        }
    }

    /// Get the written record if the transition was applied
    pub fn record(self) -> Option<EntityRecord> {
        match self {
            TransitionOutcome::Applied { record, .. } => Some(record),
            TransitionOutcome::Denied { .. } => None,
        }
    }
}

/// Gate-checked status writes for the entity-update path
#[derive(Clone)]
pub struct StatusTransitionService {
    engine: ChecklistEngine,
    entities: Arc<dyn EntityStore>,
}

impl StatusTransitionService {
    pub fn new(engine: ChecklistEngine, entities: Arc<dyn EntityStore>) -> Self {
        StatusTransitionService { engine, entities }
    }

    /// Move an entity to `to` if its gates allow it.
    ///
    /// # Errors
    /// * `NotFound` - the entity does not exist
    /// * `StaleRevision` - the entity changed after it was read
    /// * `UpstreamRead` - the document store failed
    pub async fn request_transition(
        &self,
        entity_type: &str,
        entity_id: &str,
        to: &str,
    ) -> Result<TransitionOutcome> {
        let current = self.entities.get(entity_type, entity_id).await?;

        if current.status == to {
            debug!(entity_type, entity_id, status = to, "Status unchanged, nothing to write");
            return Ok(TransitionOutcome::Applied {
                record: current,
                decision: TransitionDecision::allow(Vec::new()),
            });
        }

        let decision = self
            .engine
            .evaluate_transition(&current.status, to, entity_id, entity_type)
            .await?;
        if !decision.allowed {
            return Ok(TransitionOutcome::Denied { decision });
        }

        let record = self
            .entities
            .compare_and_set_status(entity_type, entity_id, current.revision, to)
            .await?;
        info!(
            entity_type,
            entity_id,
            from = %current.status,
            to,
            revision = record.revision,
            "Status transition applied"
        );
        Ok(TransitionOutcome::Applied { record, decision })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChecklistRegistry;
    use crate::errors::DocgateError;
    use crate::schemas::{GatePolicy, StoredDocument};
    use crate::store::{InMemoryDocumentStore, InMemoryEntityStore};
    use async_trait::async_trait;

    async fn service(
        docs: Vec<StoredDocument>,
        records: Vec<EntityRecord>,
    ) -> (StatusTransitionService, Arc<InMemoryEntityStore>) {
        let engine = ChecklistEngine::new(
            Arc::new(ChecklistRegistry::builtin().unwrap()),
            Arc::new(InMemoryDocumentStore::with_documents(docs)),
            GatePolicy::FailFast,
        );
        let entities = Arc::new(InMemoryEntityStore::new());
        for record in records {
            entities.insert(record).await;
        }
        (StatusTransitionService::new(engine, entities.clone()), entities)
    }

    /// Entity store whose status moves underneath the caller after a read
    struct RacingEntityStore {
        inner: InMemoryEntityStore,
    }

    #[async_trait]
    impl EntityStore for RacingEntityStore {
        async fn get(&self, entity_type: &str, entity_id: &str) -> Result<EntityRecord> {
            let record = self.inner.get(entity_type, entity_id).await?;
            // Another request writes between our read and our write
            self.inner
                .compare_and_set_status(entity_type, entity_id, record.revision, "out_of_service")
                .await?;
            Ok(record)
        }

        async fn compare_and_set_status(
            &self,
            entity_type: &str,
            entity_id: &str,
            expected_revision: u64,
            status: &str,
        ) -> Result<EntityRecord> {
            self.inner
                .compare_and_set_status(entity_type, entity_id, expected_revision, status)
                .await
        }
    }

    #[tokio::test]
    async fn test_denied_transition_writes_nothing() {
        let (service, entities) =
            service(vec![], vec![EntityRecord::new("employee", "e-1", "new")]).await;

        let outcome = service
            .request_transition("employee", "e-1", "under_review")
            .await
            .unwrap();
        assert!(outcome.is_denied());
        assert!(!outcome.decision().allowed);

        let stored = entities.get("employee", "e-1").await.unwrap();
        assert_eq!(stored.status, "new");
        assert_eq!(stored.revision, 0);
    }

    #[tokio::test]
    async fn test_allowed_transition_is_written() {
        let docs = vec![StoredDocument::new("employee", "e-1", "resume").with_reviewed(true)];
        let (service, entities) =
            service(docs, vec![EntityRecord::new("employee", "e-1", "new")]).await;

        let outcome = service
            .request_transition("employee", "e-1", "under_review")
            .await
            .unwrap();
        assert!(outcome.is_applied());

        let record = outcome.record().unwrap();
        assert_eq!(record.status, "under_review");
        assert_eq!(record.revision, 1);
        assert_eq!(entities.get("employee", "e-1").await.unwrap(), record);
    }

    #[tokio::test]
    async fn test_missing_entity_is_not_found() {
        let (service, _) = service(vec![], vec![]).await;
        let err = service
            .request_transition("driver", "d-404", "active")
            .await
            .unwrap_err();
        assert!(matches!(err, DocgateError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_same_status_is_a_no_op() {
        let (service, _) =
            service(vec![], vec![EntityRecord::new("truck", "t-1", "in_service")]).await;
        let outcome = service
            .request_transition("truck", "t-1", "in_service")
            .await
            .unwrap();
        let record = outcome.record().unwrap();
        assert_eq!(record.revision, 0);
    }

    #[tokio::test]
    async fn test_concurrent_write_is_rejected() {
        let inner = InMemoryEntityStore::new();
        inner.insert(EntityRecord::new("truck", "t-1", "in_service")).await;
        let engine = ChecklistEngine::new(
            Arc::new(ChecklistRegistry::builtin().unwrap()),
            Arc::new(InMemoryDocumentStore::new()),
            GatePolicy::FailFast,
        );
        let service = StatusTransitionService::new(engine, Arc::new(RacingEntityStore { inner }));

        // in_service -> retired is ungated, but the record moved after the read
        let err = service
            .request_transition("truck", "t-1", "retired")
            .await
            .unwrap_err();
        assert!(matches!(err, DocgateError::StaleRevision { expected: 0, actual: 1, .. }));
    }
}
