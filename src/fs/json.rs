//! JSON file operations with schema validation
//!
//! Provides functions to read and write JSON files with serde validation.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::errors::{DocgateError, Result};
use crate::schemas::{Config, RegistryFile, StoredDocument};

use super::paths::{get_checklists_path, get_config_path, get_documents_path};

/// Read and deserialize a JSON file.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file is not valid JSON for `T`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DocgateError::FileNotFound(format!("File not found: {}", path.display()))
        } else {
            DocgateError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        DocgateError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

/// Write a value to a JSON file with pretty formatting.
///
/// Uses atomic write (write to temp file, then rename) to avoid partial writes.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let content =
        serde_json::to_string_pretty(data).map_err(|e| DocgateError::InvalidJson(e.to_string()))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()?;
    drop(file);

    fs::rename(&temp_path, path)?;
    debug!(path = %path.display(), "Wrote JSON file");

    Ok(())
}

/// Read the config.json file for a project, or defaults if it doesn't exist.
pub fn read_config(root: &Path) -> Result<Config> {
    let path = get_config_path(root);
    if !path.exists() {
        return Ok(Config::default());
    }
    read_json(&path)
}

/// Read the checklist registry file, or `None` if the project has none.
pub fn read_registry(root: &Path, config: &Config) -> Result<Option<RegistryFile>> {
    let path = get_checklists_path(root, config);
    if !path.exists() {
        return Ok(None);
    }
    read_json(&path).map(Some)
}

/// Write the checklist registry file.
pub fn write_registry(root: &Path, config: &Config, registry: &RegistryFile) -> Result<()> {
    write_json(&get_checklists_path(root, config), registry)
}

/// Read every stored document record, or an empty list if the file is missing.
pub fn read_documents(root: &Path, config: &Config) -> Result<Vec<StoredDocument>> {
    let path = get_documents_path(root, config);
    if !path.exists() {
        return Ok(Vec::new());
    }
    read_json(&path)
}

/// Write the stored document records.
pub fn write_documents(root: &Path, config: &Config, documents: &[StoredDocument]) -> Result<()> {
    write_json(&get_documents_path(root, config), &documents)
}
