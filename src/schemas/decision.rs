//! Evaluation results - computed per request, never persisted

use serde::{Deserialize, Serialize};

use super::checklist::ItemKind;

/// Why a required item blocks completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MissingReason {
    /// No live document of this type exists
    NotUploaded,
    /// The latest version has not been accepted by a reviewer
    NotReviewed,
}

impl std::fmt::Display for MissingReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingReason::NotUploaded => write!(f, "not uploaded"),
            MissingReason::NotReviewed => write!(f, "not reviewed"),
        }
    }
}

/// A required item that is not yet satisfied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingItem {
    pub document_type: String,
    pub reason: MissingReason,
    pub label: String,
    pub kind: ItemKind,
}

/// Completion state of one checklist for one entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResult {
    pub checklist_key: String,
    pub checklist_name: String,
    pub is_complete: bool,
    pub missing_items: Vec<MissingItem>,
    /// Required items with a live document, reviewed or not
    pub uploaded_count: usize,
    /// Required items whose latest document is reviewed
    pub reviewed_count: usize,
    pub total_required: usize,
    pub percent_complete: u8,
}

impl CompletionResult {
    /// Missing items for a given reason, in checklist order
    pub fn missing_with(&self, reason: MissingReason) -> impl Iterator<Item = &MissingItem> {
        self.missing_items.iter().filter(move |m| m.reason == reason)
    }
}

/// Round-half-up percentage of `part` in `whole`; an empty whole is 100%.
pub fn percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 100;
    }
    let part = part.min(whole);
    ((part * 100 + whole / 2) / whole) as u8
}

/// Outcome of checking a proposed status change against its gates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDecision {
    pub allowed: bool,

    /// Human-readable denial reason (null when allowed)
    pub reason: Option<String>,

    /// Results for every gating checklist that was evaluated
    pub checklist_results: Vec<CompletionResult>,
}

impl TransitionDecision {
    pub fn allow(checklist_results: Vec<CompletionResult>) -> Self {
        TransitionDecision {
            allowed: true,
            reason: None,
            checklist_results,
        }
    }

    pub fn deny(reason: impl Into<String>, checklist_results: Vec<CompletionResult>) -> Self {
        TransitionDecision {
            allowed: false,
            reason: Some(reason.into()),
            checklist_results,
        }
    }

    /// Gating checklists that were found incomplete
    pub fn blocking(&self) -> impl Iterator<Item = &CompletionResult> {
        self.checklist_results.iter().filter(|r| !r.is_complete)
    }
}
