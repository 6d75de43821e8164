//! Configuration loading with defaults

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{ChecklistEngine, ChecklistRegistry};
use crate::errors::Result;
use crate::fs;
use crate::schemas::Config;
use crate::store::JsonDocumentStore;

/// Load configuration from the project, falling back to defaults.
///
/// If config.json exists, it will be read and merged with defaults.
/// If it doesn't exist, default configuration is returned.
pub fn load_config(root: &Path) -> Result<Config> {
    fs::read_config(root)
}

/// Load the checklist registry named by the config.
///
/// Projects without a registry file use the built-in checklists.
pub fn load_registry(root: &Path, config: &Config) -> Result<ChecklistRegistry> {
    match fs::read_registry(root, config)? {
        Some(file) => {
            let registry = ChecklistRegistry::from_file(file)?;
            debug!(checklists = registry.all().len(), "Loaded checklist registry");
            Ok(registry)
        }
        None => {
            info!("No checklist registry file, using built-in checklists");
            ChecklistRegistry::builtin()
        }
    }
}

/// Everything a command needs, loaded once at startup
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
    pub registry: Arc<ChecklistRegistry>,
}

impl Project {
    /// Locate the project above `cwd` and load its config and registry
    pub fn load(cwd: &Path) -> Result<Self> {
        let root = fs::find_project_root(cwd)?;
        let config = load_config(&root)?;
        let registry = Arc::new(load_registry(&root, &config)?);
        Ok(Project {
            root,
            config,
            registry,
        })
    }

    pub fn document_store(&self) -> JsonDocumentStore {
        JsonDocumentStore::new(fs::get_documents_path(&self.root, &self.config))
    }

    /// Engine over the project's registry and JSON document store
    pub fn engine(&self) -> ChecklistEngine {
        ChecklistEngine::new(
            self.registry.clone(),
            Arc::new(self.document_store()),
            self.config.gate_policy,
        )
    }
}
