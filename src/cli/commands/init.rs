//! Init command - Create the .docgate project directory

use std::path::Path;

use tracing::info;

use crate::domain::ChecklistRegistry;
use crate::errors::Result;
use crate::fs::{
    get_checklists_path, get_config_path, get_docgate_dir, get_documents_path, resolve_cwd,
    write_documents, write_json, write_registry,
};
use crate::schemas::Config;

/// Initialize a project in the working directory.
///
/// Existing files are left alone unless `force` is set; the documents file
/// is never overwritten because it belongs to the document store.
pub async fn run(cwd: Option<&Path>, force: bool) -> Result<()> {
    let root = resolve_cwd(cwd);
    let config = Config::default();
    std::fs::create_dir_all(get_docgate_dir(&root))?;

    let config_path = get_config_path(&root);
    if force || !config_path.exists() {
        write_json(&config_path, &config)?;
        info!(path = %config_path.display(), "Wrote config");
    }

    let checklists_path = get_checklists_path(&root, &config);
    if force || !checklists_path.exists() {
        write_registry(&root, &config, &ChecklistRegistry::builtin()?.to_file())?;
        info!(path = %checklists_path.display(), "Wrote built-in checklists");
    }

    let documents_path = get_documents_path(&root, &config);
    if !documents_path.exists() {
        write_documents(&root, &config, &[])?;
        info!(path = %documents_path.display(), "Created empty document list");
    }

    println!("Initialized docgate project in {}", get_docgate_dir(&root).display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Project;
    use crate::fs::read_documents;
    use crate::schemas::StoredDocument;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_creates_project_files() {
        let temp = TempDir::new().unwrap();
        run(Some(temp.path()), false).await.unwrap();

        let project = Project::load(temp.path()).unwrap();
        assert!(project.registry.checklist("driver", "qualification").is_some());
        assert!(get_documents_path(temp.path(), &project.config).exists());
    }

    #[tokio::test]
    async fn test_init_keeps_documents_on_force() {
        let temp = TempDir::new().unwrap();
        run(Some(temp.path()), false).await.unwrap();

        let config = Config::default();
        let docs = vec![StoredDocument::new("truck", "t-1", "registration")];
        write_documents(temp.path(), &config, &docs).unwrap();

        run(Some(temp.path()), true).await.unwrap();
        assert_eq!(read_documents(temp.path(), &config).unwrap(), docs);
    }
}
