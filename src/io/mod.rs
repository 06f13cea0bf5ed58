//! # Reading of divisions
//!
//! This module reads the standings of a division from its text representation.
use std::fs;
use std::path::Path;

use crate::data::league::League;
use crate::io::error::ImportError;

pub mod division;
pub mod error;

/// Import a division from a file.
///
/// The `import` function takes a file path and returns, if successful, the league it describes.
/// See `division::parse` for the format.
///
/// # Errors
///
/// When the path is empty, a file cannot be found or read, the contents are not well-formed, etc.
/// an error type is returned.
pub fn import(file_path: &Path) -> Result<League, ImportError> {
    if file_path.as_os_str().is_empty() {
        return Err(ImportError::InvalidArgument("file path is empty".to_string()));
    }

    let division = fs::read_to_string(file_path)?;
    tracing::debug!(path = %file_path.display(), bytes = division.len(), "read division file");

    division::parse(&division)
}
