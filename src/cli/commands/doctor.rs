//! Doctor command - Validate config, checklists and stored documents

use std::collections::HashSet;
use std::path::Path;

use tracing::warn;

use crate::config::Project;
use crate::domain::ChecklistRegistry;
use crate::errors::Result;
use crate::fs::{read_documents, resolve_cwd};
use crate::schemas::StoredDocument;

/// Problems found in stored documents relative to the registry
pub fn diagnose(registry: &ChecklistRegistry, documents: &[StoredDocument]) -> Vec<String> {
    let mut problems = Vec::new();
    let mut seen_versions = HashSet::new();

    for doc in documents.iter().filter(|d| !d.is_deleted()) {
        let known = registry.known_document_types(&doc.entity_type);
        if known.is_empty() {
            problems.push(format!(
                "{}/{}: no checklists for entity type '{}'",
                doc.entity_type, doc.entity_id, doc.entity_type
            ));
        } else if !known.contains(doc.document_type.as_str()) {
            problems.push(format!(
                "{}/{}: document type '{}' is not on any checklist",
                doc.entity_type, doc.entity_id, doc.document_type
            ));
        }

        if doc.version == 0 {
            problems.push(format!(
                "{}/{}: '{}' has version 0",
                doc.entity_type, doc.entity_id, doc.document_type
            ));
        }

        let key = (
            doc.entity_type.as_str(),
            doc.entity_id.as_str(),
            doc.document_type.as_str(),
            doc.version,
        );
        if !seen_versions.insert(key) {
            problems.push(format!(
                "{}/{}: '{}' has more than one live version {}",
                doc.entity_type, doc.entity_id, doc.document_type, doc.version
            ));
        }
    }
    problems
}

/// Load everything a command would load and report what is wrong
pub async fn run(cwd: Option<&Path>) -> Result<()> {
    let project = Project::load(&resolve_cwd(cwd))?;
    let documents = read_documents(&project.root, &project.config)?;

    println!(
        "{} checklists across {} entity types, {} document records",
        project.registry.all().len(),
        project.registry.entity_types().len(),
        documents.len()
    );

    let problems = diagnose(&project.registry, &documents);
    if problems.is_empty() {
        println!("No problems found");
        return Ok(());
    }
    for problem in &problems {
        warn!(problem = %problem, "Document check failed");
        println!("  {}", problem);
    }
    println!("{} problem(s) found", problems.len());
    Ok(())
}
