//! Domain logic for checklist completion and status transition gates

mod builtin;
mod completion;
mod engine;
mod gates;
mod registry;
mod transitions;


pub use builtin::builtin_checklists;
pub use completion::{latest_versions, summarize, CompletionEvaluator};
pub use engine::ChecklistEngine;
pub use gates::{denial_reason, TransitionGateEvaluator};
pub use registry::{ChecklistRegistry, TransitionGate};
pub use transitions::{StatusTransitionService, TransitionOutcome};
