//! Completion evaluation for one checklist against stored documents

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::errors::Result;
use crate::schemas::{
    percent, ChecklistDefinition, CompletionResult, MissingItem, MissingReason, StoredDocument,
};
use crate::store::DocumentStore;

use super::registry::ChecklistRegistry;

/// Keep only the current version of each document type.
///
/// Higher `version` wins; on equal versions the later `created_at` wins; on a
/// full tie the document seen first is kept.
pub fn latest_versions(documents: Vec<StoredDocument>) -> HashMap<String, StoredDocument> {
    let mut latest: HashMap<String, StoredDocument> = HashMap::new();
    for doc in documents {
        let replace = match latest.get(&doc.document_type) {
            None => true,
            Some(current) => {
                doc.version > current.version
                    || (doc.version == current.version && doc.created_at > current.created_at)
            }
        };
        if replace {
            latest.insert(doc.document_type.clone(), doc);
        }
    }
    latest
}

/// Score a checklist against the current document of each type.
///
/// Pure: the same inputs always produce the same result.
pub fn summarize(
    checklist: &ChecklistDefinition,
    latest: &HashMap<String, StoredDocument>,
) -> CompletionResult {
    let mut missing_items = Vec::new();
    let mut uploaded_count = 0;
    let mut reviewed_count = 0;
    let mut total_required = 0;

    for item in checklist.required_items() {
        total_required += 1;
        let document_type = item.document_type();
        let reason = match latest.get(document_type) {
            None => Some(MissingReason::NotUploaded),
            Some(doc) if !doc.was_reviewed => {
                uploaded_count += 1;
                Some(MissingReason::NotReviewed)
            }
            Some(_) => {
                uploaded_count += 1;
                reviewed_count += 1;
                None
            }
        };

        if let Some(reason) = reason {
            missing_items.push(MissingItem {
                document_type: document_type.to_string(),
                reason,
                label: checklist.label_for(document_type).to_string(),
                kind: item.kind(),
            });
        }
    }

    CompletionResult {
        checklist_key: checklist.key.clone(),
        checklist_name: checklist.name.clone(),
        is_complete: missing_items.is_empty(),
        missing_items,
        uploaded_count,
        reviewed_count,
        total_required,
        percent_complete: percent(reviewed_count, total_required),
    }
}

/// Computes completion of a checklist for one entity
#[derive(Clone)]
pub struct CompletionEvaluator {
    store: Arc<dyn DocumentStore>,
}

impl CompletionEvaluator {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        CompletionEvaluator { store }
    }

    /// Evaluate `checklist` for `(entity_type, entity_id)`.
    ///
    /// A checklist without required items is complete without touching the
    /// store. Store failures are returned unchanged.
    pub async fn evaluate(
        &self,
        entity_id: &str,
        entity_type: &str,
        checklist: &ChecklistDefinition,
    ) -> Result<CompletionResult> {
        let required = ChecklistRegistry::get_required_document_types(checklist);
        if required.is_empty() {
            debug!(checklist = %checklist.key, "Checklist has no required items");
            return Ok(summarize(checklist, &HashMap::new()));
        }

        let documents = self
            .store
            .fetch_documents(entity_type, entity_id, &required)
            .await?;
        let result = summarize(checklist, &latest_versions(documents));

        debug!(
            checklist = %checklist.key,
            entity_type,
            entity_id,
            reviewed = result.reviewed_count,
            required = result.total_required,
            percent = result.percent_complete,
            "Evaluated checklist completion"
        );
        Ok(result)
    }
}
