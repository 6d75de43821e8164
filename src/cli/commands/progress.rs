//! Progress command - Show checklist completion for an entity

use std::path::Path;

use crate::config::Project;
use crate::errors::Result;
use crate::fs::resolve_cwd;
use crate::schemas::CompletionResult;

use super::print_json;

/// One line per checklist plus one line per missing item
pub fn render(results: &[CompletionResult]) -> String {
    let mut out = String::new();
    for result in results {
        let status = if result.is_complete { "complete" } else { "incomplete" };
        out.push_str(&format!(
            "{:>3}% {} ({}) - {}/{} reviewed, {}\n",
            result.percent_complete,
            result.checklist_name,
            result.checklist_key,
            result.reviewed_count,
            result.total_required,
            status
        ));
        for missing in &result.missing_items {
            out.push_str(&format!("       {}: {}\n", missing.label, missing.reason));
        }
    }
    out
}

/// Show completion for one checklist or every checklist of the entity type
pub async fn run(
    cwd: Option<&Path>,
    entity_type: &str,
    entity_id: &str,
    checklist: Option<&str>,
    json: bool,
) -> Result<()> {
    let project = Project::load(&resolve_cwd(cwd))?;
    let engine = project.engine();

    let results = match checklist {
        Some(key) => vec![engine.evaluate_completion(entity_id, entity_type, key).await?],
        None => engine.evaluate_progress(entity_id, entity_type).await?,
    };

    if json {
        return print_json(&results);
    }
    if results.is_empty() {
        println!("No checklists registered for entity type '{}'", entity_type);
    } else {
        print!("{}", render(&results));
    }
    Ok(())
}
