//! Transition gate evaluation
//!
//! A status change is allowed unless a checklist gating that exact
//! `(from, to)` pair is incomplete. Transitions nothing gates are always
//! allowed.

use tracing::{debug, info};

use crate::errors::Result;
use crate::schemas::{
    ChecklistDefinition, CompletionResult, GatePolicy, StatusTransition, TransitionDecision,
};

use super::completion::CompletionEvaluator;

/// Describe the incomplete gating checklists behind a denial
pub fn denial_reason(transition: &StatusTransition, blocking: &[&CompletionResult]) -> String {
    match blocking {
        [] => format!("transition {} is blocked", transition),
        [only] if only.missing_items.is_empty() => format!(
            "checklist '{}' must be complete before {} ({}% complete)",
            only.checklist_name, transition, only.percent_complete
        ),
        [only] => {
            let missing: Vec<&str> = only.missing_items.iter().map(|m| m.label.as_str()).collect();
            format!(
                "checklist '{}' must be complete before {} ({}% complete, missing: {})",
                only.checklist_name,
                transition,
                only.percent_complete,
                missing.join(", ")
            )
        }
        many => {
            let names: Vec<String> = many
                .iter()
                .map(|r| format!("'{}'", r.checklist_name))
                .collect();
            format!(
                "checklists {} must be complete before {}",
                names.join(", "),
                transition
            )
        }
    }
}

/// Decides whether a status change is permitted by its gating checklists
#[derive(Clone)]
pub struct TransitionGateEvaluator {
    completion: CompletionEvaluator,
    policy: GatePolicy,
}

impl TransitionGateEvaluator {
    pub fn new(completion: CompletionEvaluator, policy: GatePolicy) -> Self {
        TransitionGateEvaluator { completion, policy }
    }

    pub fn policy(&self) -> GatePolicy {
        self.policy
    }

    pub fn completion(&self) -> &CompletionEvaluator {
        &self.completion
    }

    /// Evaluate `from -> to` for an entity against `checklists`.
    ///
    /// Checklists are visited in slice order. Under `FailFast` the first
    /// incomplete gating checklist ends the evaluation; under `Aggregate`
    /// every gating checklist is evaluated first. The decision is advisory:
    /// nothing is written.
    pub async fn evaluate(
        &self,
        from: &str,
        to: &str,
        entity_id: &str,
        entity_type: &str,
        checklists: &[ChecklistDefinition],
    ) -> Result<TransitionDecision> {
        let transition = StatusTransition::new(from, to);
        let mut results: Vec<CompletionResult> = Vec::new();

        for checklist in checklists.iter().filter(|c| c.gates_transition(&transition)) {
            let result = self
                .completion
                .evaluate(entity_id, entity_type, checklist)
                .await?;
            let incomplete = !result.is_complete;
            results.push(result);

            if incomplete && self.policy == GatePolicy::FailFast {
                break;
            }
        }

        let blocking: Vec<&CompletionResult> = results.iter().filter(|r| !r.is_complete).collect();
        if blocking.is_empty() {
            debug!(
                %transition,
                entity_type,
                entity_id,
                gating = results.len(),
                "Transition allowed"
            );
            return Ok(TransitionDecision::allow(results));
        }

        let reason = denial_reason(&transition, &blocking);
        info!(%transition, entity_type, entity_id, reason = %reason, "Transition denied");
        Ok(TransitionDecision::deny(reason, results))
    }
}
