//! docgate - Checklist completion and status transition gates for fleet and HR records
//!
//! This library provides:
//! - Schema definitions for checklists, stored documents and evaluation results
//! - Completion evaluation of a checklist against an entity's documents
//! - Transition gating, with a compare-and-set status write path
//! - Document and entity store traits with in-memory and JSON-file backends
//! - Project configuration and registry loading

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod schemas;
pub mod store;

// Re-export commonly used types
pub use domain::{ChecklistEngine, ChecklistRegistry, CompletionEvaluator, TransitionGateEvaluator};
pub use errors::{DocgateError, Result};
pub use schemas::{ChecklistDefinition, ChecklistItem, CompletionResult, Config, TransitionDecision};
