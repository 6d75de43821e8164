//! CLI command implementations

pub mod checklists;
pub mod doctor;
pub mod init;
pub mod progress;
pub mod transition;

use crate::errors::{DocgateError, Result};
use serde::Serialize;

/// Print a value as pretty JSON on stdout
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| DocgateError::InvalidJson(e.to_string()))?;
    println!("{}", json);
    Ok(())
}
