//! Path resolution utilities for docgate
//!
//! Locates the project root and builds paths to the files kept under
//! `.docgate/`.

use std::path::{Path, PathBuf};

use crate::errors::{DocgateError, Result};
use crate::schemas::Config;

/// Find the project root containing a .docgate directory.
///
/// Walks up the directory tree from the starting directory.
///
/// # Errors
/// * `ProjectNotFound` - If no ancestor contains .docgate
pub fn find_project_root(start_cwd: &Path) -> Result<PathBuf> {
    let mut current = start_cwd
        .canonicalize()
        .map_err(|e| DocgateError::ProjectNotFound(format!("Cannot resolve path: {}", e)))?;

    loop {
        if get_docgate_dir(&current).is_dir() {
            return Ok(current);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(DocgateError::ProjectNotFound(
                    "Could not find a .docgate directory (run `docgate init`)".to_string(),
                ));
            }
        }
    }
}

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the .docgate directory.
pub fn get_docgate_dir(root: &Path) -> PathBuf {
    root.join(".docgate")
}

/// Get the path to the config.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_docgate_dir(root).join("config.json")
}

/// Get the path to the checklist registry named by the config.
pub fn get_checklists_path(root: &Path, config: &Config) -> PathBuf {
    get_docgate_dir(root).join(&config.checklists_file)
}

/// Get the path to the stored documents file named by the config.
pub fn get_documents_path(root: &Path, config: &Config) -> PathBuf {
    get_docgate_dir(root).join(&config.documents_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_project() -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join(".docgate")).unwrap();
        temp
    }

    #[test]
    fn test_find_project_root_from_root() {
        let temp = setup_project();
        let root = find_project_root(temp.path()).unwrap();
        assert_eq!(root, temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_find_project_root_from_subdir() {
        let temp = setup_project();
        let subdir = temp.path().join("drivers").join("d-1");
        std::fs::create_dir_all(&subdir).unwrap();

        let root = find_project_root(&subdir).unwrap();
        assert_eq!(root, temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_find_project_root_not_found() {
        let temp = TempDir::new().unwrap();
        // A plain file named .docgate does not mark a project
        std::fs::write(temp.path().join(".docgate"), "").unwrap();

        let result = find_project_root(temp.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Could not find"));
    }

    #[test]
    fn test_project_paths() {
        let root = PathBuf::from("/srv/fleet");
        let config = Config::default();

        assert_eq!(get_docgate_dir(&root), PathBuf::from("/srv/fleet/.docgate"));
        assert_eq!(get_config_path(&root), PathBuf::from("/srv/fleet/.docgate/config.json"));
        assert_eq!(
            get_checklists_path(&root, &config),
            PathBuf::from("/srv/fleet/.docgate/checklists.json")
        );
        assert_eq!(
            get_documents_path(&root, &config),
            PathBuf::from("/srv/fleet/.docgate/documents.json")
        );
    }

    #[test]
    fn test_resolve_cwd_with_override() {
        let path = PathBuf::from("/custom/path");
        assert_eq!(resolve_cwd(Some(&path)), path);
    }

    #[test]
    fn test_resolve_cwd_without_override() {
        let resolved = resolve_cwd(None);
        assert!(!resolved.as_os_str().is_empty());
    }
}
