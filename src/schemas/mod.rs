//! Schema types for docgate
//!
//! All types serialize to the JSON files kept under `.docgate/`.

mod checklist;
mod config;
mod decision;
mod document;
mod entity;

pub use checklist::{ChecklistDefinition, ChecklistItem, ItemKind, RegistryFile, StatusTransition};
pub use config::{Config, GatePolicy};
pub use decision::{percent, CompletionResult, MissingItem, MissingReason, TransitionDecision};
pub use document::StoredDocument;
pub use entity::EntityRecord;
