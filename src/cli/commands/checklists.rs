//! Checklists command - List checklist definitions and their gates

use std::path::Path;

use crate::config::Project;
use crate::domain::ChecklistRegistry;
use crate::errors::Result;
use crate::fs::resolve_cwd;
use crate::schemas::ChecklistDefinition;

use super::print_json;

/// Render the registry as text, one block per entity type
pub fn render(registry: &ChecklistRegistry, entity_type: Option<&str>) -> String {
    let mut out = String::new();
    for current in registry.entity_types() {
        if entity_type.is_some_and(|wanted| wanted != current) {
            continue;
        }
        out.push_str(&format!("{}\n", current));
        for checklist in registry.checklists_for(current) {
            out.push_str(&format!("  {} ({})\n", checklist.name, checklist.key));
            for item in &checklist.items {
                let marker = if item.is_required() { "*" } else { "-" };
                out.push_str(&format!("    {} {}\n", marker, item.describe()));
            }
            for gate in &checklist.gates {
                out.push_str(&format!("    gates {}\n", gate));
            }
        }
    }
    out
}

/// List checklists, optionally for one entity type
pub async fn run(cwd: Option<&Path>, entity_type: Option<&str>, json: bool) -> Result<()> {
    let project = Project::load(&resolve_cwd(cwd))?;

    if json {
        let checklists: Vec<&ChecklistDefinition> = project
            .registry
            .all()
            .iter()
            .filter(|c| entity_type.map_or(true, |wanted| c.entity_type == wanted))
            .collect();
        return print_json(&checklists);
    }

    let text = render(&project.registry, entity_type);
    if text.is_empty() {
        println!("No checklists registered");
    } else {
        print!("{}", text);
    }
    Ok(())
}
