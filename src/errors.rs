//! Error types for docgate
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

/// Result type alias for docgate operations
pub type Result<T> = std::result::Result<T, DocgateError>;

/// Main error type for all docgate operations
#[derive(Debug, Error)]
pub enum DocgateError {
    /// Project not found - no .docgate directory above the working directory
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Checklist configuration is inconsistent
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The entity being transitioned does not exist
    #[error("Entity not found: {entity_type}/{entity_id}")]
    NotFound {
        entity_type: String,
        entity_id: String,
    },

    /// No checklist with this key is registered for the entity type
    #[error("Unknown checklist '{checklist}' for entity type '{entity_type}'")]
    UnknownChecklist {
        entity_type: String,
        checklist: String,
    },

    /// The document store could not be read
    #[error("Document store read failed: {0}")]
    UpstreamRead(String),

    /// The entity changed between the gate decision and the status write
    #[error("Entity {entity_type}/{entity_id} changed concurrently (expected revision {expected}, found {actual})")]
    StaleRevision {
        entity_type: String,
        entity_id: String,
        expected: u64,
        actual: u64,
    },

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl DocgateError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            DocgateError::ProjectNotFound(_) => "PROJECT_NOT_FOUND",
            DocgateError::InvalidJson(_) => "INVALID_JSON",
            DocgateError::FileNotFound(_) => "FILE_NOT_FOUND",
            DocgateError::ConfigError(_) => "CONFIG_ERROR",
            DocgateError::NotFound { .. } => "NOT_FOUND",
            DocgateError::UnknownChecklist { .. } => "UNKNOWN_CHECKLIST",
            DocgateError::UpstreamRead(_) => "UPSTREAM_READ_FAILURE",
            DocgateError::StaleRevision { .. } => "STALE_REVISION",
            DocgateError::Io(_) => "IO_ERROR",
            DocgateError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        DocgateError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }

    /// Shorthand for an entity lookup miss
    pub fn not_found(entity_type: impl Into<String>, entity_id: impl Into<String>) -> Self {
        DocgateError::NotFound {
            entity_type: entity_type.into(),
            entity_id: entity_id.into(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &DocgateError) -> i32 {
    match error {
        DocgateError::NotFound { .. } | DocgateError::UnknownChecklist { .. } => 3,
        DocgateError::UpstreamRead(_) => 4,
        _ => 1,
    }
}
