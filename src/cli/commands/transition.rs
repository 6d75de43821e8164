//! Transition command - Check a status change against its gates

use std::path::Path;

use crate::config::Project;
use crate::errors::Result;
use crate::fs::resolve_cwd;

use super::print_json;
use super::progress;

/// Evaluate `from -> to` for an entity.
///
/// Returns whether the transition is allowed; nothing is written.
pub async fn run(
    cwd: Option<&Path>,
    entity_type: &str,
    entity_id: &str,
    from: &str,
    to: &str,
    json: bool,
) -> Result<bool> {
    let project = Project::load(&resolve_cwd(cwd))?;
    let decision = project
        .engine()
        .evaluate_transition(from, to, entity_id, entity_type)
        .await?;

    if json {
        print_json(&decision)?;
        return Ok(decision.allowed);
    }

    match &decision.reason {
        None if decision.checklist_results.is_empty() => {
            println!("Allowed: {} -> {} is not gated", from, to);
        }
        None => println!("Allowed: all gating checklists are complete"),
        Some(reason) => println!("Denied: {}", reason),
    }
    if !decision.checklist_results.is_empty() {
        print!("{}", progress::render(&decision.checklist_results));
    }
    Ok(decision.allowed)
}
