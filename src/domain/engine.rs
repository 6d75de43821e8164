//! Registry-backed entry points for the request-handling layer

use std::sync::Arc;

use crate::errors::{DocgateError, Result};
use crate::schemas::{CompletionResult, GatePolicy, TransitionDecision};
use crate::store::DocumentStore;

use super::completion::CompletionEvaluator;
use super::gates::TransitionGateEvaluator;
use super::registry::ChecklistRegistry;

/// Checklist completion and transition gating over an injected registry
#[derive(Clone)]
pub struct ChecklistEngine {
    registry: Arc<ChecklistRegistry>,
    gates: TransitionGateEvaluator,
}

impl ChecklistEngine {
    pub fn new(
        registry: Arc<ChecklistRegistry>,
        store: Arc<dyn DocumentStore>,
        policy: GatePolicy,
    ) -> Self {
        let completion = CompletionEvaluator::new(store);
        ChecklistEngine {
            registry,
            gates: TransitionGateEvaluator::new(completion, policy),
        }
    }

    pub fn registry(&self) -> &ChecklistRegistry {
        &self.registry
    }

    /// Completion of one named checklist for an entity
    pub async fn evaluate_completion(
        &self,
        entity_id: &str,
        entity_type: &str,
        checklist_key: &str,
    ) -> Result<CompletionResult> {
        let checklist = self
            .registry
            .checklist(entity_type, checklist_key)
            .ok_or_else(|| DocgateError::UnknownChecklist {
                entity_type: entity_type.to_string(),
                checklist: checklist_key.to_string(),
            })?;
        self.gates
            .completion()
            .evaluate(entity_id, entity_type, checklist)
            .await
    }

    /// Completion of every checklist registered for the entity type
    pub async fn evaluate_progress(
        &self,
        entity_id: &str,
        entity_type: &str,
    ) -> Result<Vec<CompletionResult>> {
        let mut results = Vec::new();
        for checklist in self.registry.checklists_for(entity_type) {
            results.push(
                self.gates
                    .completion()
                    .evaluate(entity_id, entity_type, &checklist)
                    .await?,
            );
        }
        Ok(results)
    }

    /// Gate decision for `from -> to` using the entity type's checklists
    pub async fn evaluate_transition(
        &self,
        from: &str,
        to: &str,
        entity_id: &str,
        entity_type: &str,
    ) -> Result<TransitionDecision> {
        let checklists = self.registry.checklists_for(entity_type);
        self.gates
            .evaluate(from, to, entity_id, entity_type, &checklists)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{MissingReason, StoredDocument};
    use crate::store::InMemoryDocumentStore;

    fn engine(docs: Vec<StoredDocument>) -> ChecklistEngine {
        ChecklistEngine::new(
            Arc::new(ChecklistRegistry::builtin().unwrap()),
            Arc::new(InMemoryDocumentStore::with_documents(docs)),
            GatePolicy::FailFast,
        )
    }

    #[tokio::test]
    async fn test_pre_hiring_blocks_review_until_resume_reviewed() {
        let decision = engine(vec![])
            .evaluate_transition("new", "under_review", "e-1", "employee")
            .await
            .unwrap();
        assert!(!decision.allowed);
        assert!(decision.reason.unwrap().contains("Pre-hiring documents"));

        let reviewed = vec![StoredDocument::new("employee", "e-1", "resume").with_reviewed(true)];
        let decision = engine(reviewed)
            .evaluate_transition("new", "under_review", "e-1", "employee")
            .await
            .unwrap();
        assert!(decision.allowed);
    }

    #[tokio::test]
    async fn test_unknown_entity_type_has_no_gates() {
        let decision = engine(vec![])
            .evaluate_transition("draft", "final", "v-1", "violation")
            .await
            .unwrap();
        assert!(decision.allowed);
        assert!(decision.checklist_results.is_empty());
    }

    #[tokio::test]
    async fn test_evaluate_completion_by_key() {
        let result = engine(vec![])
            .evaluate_completion("t-1", "truck", "in_service")
            .await
            .unwrap();
        assert_eq!(result.total_required, 4);
        assert!(result
            .missing_items
            .iter()
            .all(|m| m.reason == MissingReason::NotUploaded));
    }

    #[tokio::test]
    async fn test_evaluate_completion_unknown_checklist() {
        let err = engine(vec![])
            .evaluate_completion("t-1", "truck", "annual_audit")
            .await
            .unwrap_err();
        assert!(matches!(err, DocgateError::UnknownChecklist { .. }));
    }

    #[tokio::test]
    async fn test_evaluate_progress_covers_every_checklist() {
        let results = engine(vec![])
            .evaluate_progress("e-1", "employee")
            .await
            .unwrap();
        let keys: Vec<&str> = results.iter().map(|r| r.checklist_key.as_str()).collect();
        assert_eq!(keys, vec!["pre_hiring", "onboarding"]);
    }
}
