//! Checklist definition registry
//!
//! Built once at startup and shared read-only. Definitions keep the order
//! they were registered in; gate evaluation depends on that order.

use std::collections::HashSet;

use crate::errors::{DocgateError, Result};
use crate::schemas::{ChecklistDefinition, RegistryFile, StatusTransition};

/// All checklists gating one status transition of an entity type
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionGate {
    pub from_status: String,
    pub to_status: String,
    pub gating_checklists: Vec<ChecklistDefinition>,
}

impl TransitionGate {
    pub fn transition(&self) -> StatusTransition {
        StatusTransition::new(&self.from_status, &self.to_status)
    }
}

/// Immutable mapping from entity type to its checklist definitions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChecklistRegistry {
    checklists: Vec<ChecklistDefinition>,
}

impl ChecklistRegistry {
    /// Build a registry, rejecting duplicate checklist keys within an entity
    /// type and duplicate document types within a checklist.
    pub fn from_definitions(checklists: Vec<ChecklistDefinition>) -> Result<Self> {
        let mut seen = HashSet::new();
        for checklist in &checklists {
            if checklist.key.trim().is_empty() {
                return Err(DocgateError::ConfigError(format!(
                    "checklist for entity type '{}' has an empty key",
                    checklist.entity_type
                )));
            }
            if !seen.insert((checklist.entity_type.as_str(), checklist.key.as_str())) {
                return Err(DocgateError::ConfigError(format!(
                    "duplicate checklist '{}' for entity type '{}'",
                    checklist.key, checklist.entity_type
                )));
            }

            let mut document_types = HashSet::new();
            for item in &checklist.items {
                if !document_types.insert(item.document_type()) {
                    return Err(DocgateError::ConfigError(format!(
                        "checklist '{}' lists document type '{}' more than once",
                        checklist.key,
                        item.document_type()
                    )));
                }
            }
        }

        Ok(ChecklistRegistry { checklists })
    }

    pub fn from_file(file: RegistryFile) -> Result<Self> {
        Self::from_definitions(file.checklists)
    }

    pub fn to_file(&self) -> RegistryFile {
        RegistryFile {
            schema_version: 1,
            checklists: self.checklists.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.checklists.is_empty()
    }

    pub fn all(&self) -> &[ChecklistDefinition] {
        &self.checklists
    }

    /// Entity types in first-registered order
    pub fn entity_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = Vec::new();
        for checklist in &self.checklists {
            if !types.contains(&checklist.entity_type.as_str()) {
                types.push(&checklist.entity_type);
            }
        }
        types
    }

    /// Checklists for an entity type, in registry order
    pub fn checklists_for(&self, entity_type: &str) -> Vec<ChecklistDefinition> {
        self.checklists
            .iter()
            .filter(|c| c.entity_type == entity_type)
            .cloned()
            .collect()
    }

    pub fn checklist(&self, entity_type: &str, key: &str) -> Option<&ChecklistDefinition> {
        self.checklists
            .iter()
            .find(|c| c.entity_type == entity_type && c.key == key)
    }

    /// Document types that must be complete for the checklist to be complete
    pub fn get_required_document_types(checklist: &ChecklistDefinition) -> Vec<String> {
        checklist
            .required_items()
            .map(|item| item.document_type().to_string())
            .collect()
    }

    /// Every document type referenced by any checklist of the entity type
    pub fn known_document_types(&self, entity_type: &str) -> HashSet<&str> {
        self.checklists
            .iter()
            .filter(|c| c.entity_type == entity_type)
            .flat_map(|c| c.items.iter().map(|item| item.document_type()))
            .collect()
    }

    /// Gates of an entity type, one per distinct transition, in the order
    /// transitions first appear.
    pub fn gates_for(&self, entity_type: &str) -> Vec<TransitionGate> {
        let mut gates: Vec<TransitionGate> = Vec::new();
        for checklist in self.checklists.iter().filter(|c| c.entity_type == entity_type) {
            for transition in &checklist.gates {
                match gates
                    .iter_mut()
                    .find(|g| g.from_status == transition.from && g.to_status == transition.to)
                {
                    Some(gate) => {
                        if !gate.gating_checklists.iter().any(|c| c.key == checklist.key) {
                            gate.gating_checklists.push(checklist.clone());
                        }
                    }
                    None => gates.push(TransitionGate {
                        from_status: transition.from.clone(),
                        to_status: transition.to.clone(),
                        gating_checklists: vec![checklist.clone()],
                    }),
                }
            }
        }
        gates
    }
}
