//! File system utilities for docgate
//!
//! Provides path resolution and JSON file operations.

mod json;
mod paths;

pub use json::{
    read_config, read_documents, read_json, read_registry, write_documents, write_json,
    write_registry,
};
pub use paths::{
    find_project_root, get_checklists_path, get_config_path, get_docgate_dir, get_documents_path,
    resolve_cwd,
};
