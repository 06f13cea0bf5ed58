//! # Error reporting for reading of division files
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::error::Error;
use std::fmt;
use std::io;

use thiserror::Error;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The provided argument can't identify a file, for example because it is empty.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error(transparent)]
    IO(#[from] io::Error),
    /// Contents of the file could not be parsed into a division.
    ///
    /// This variant is only created for syntactically incorrect files.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The records are well-formed, but don't describe a single division.
    ///
    /// For example, a team name might appear twice.
    #[error(transparent)]
    Inconsistency(#[from] InconsistencyError),
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// It may hold a file location containing a line number and line, at which the error was caused.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParseError {
    description: String,
    location: Option<(u64, String)>,
}

impl ParseError {
    /// Create a new `ParseError` with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), location: None }
    }

    /// Create a new `ParseError` instance with a `FileLocation` as a cause.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `file_location`: A reference to a line number and line that caused the error.
    pub fn with_file_location(description: impl Into<String>, file_location: FileLocation) -> Self {
        let (line_number, line) = file_location;

        Self {
            description: description.into(),
            location: Some((line_number, line.to_string())),
        }
    }

    /// What went wrong, without the location.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Line number (one based) at which the problem was found, if known.
    pub fn line_number(&self) -> Option<u64> {
        self.location.as_ref().map(|&(line_number, _)| line_number)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed input: {}", self.description)?;
        if let Some((line_number, line)) = &self.location {
            write!(f, "\n\tCaused at line\t{}:\t{}", line_number, line)?;
        }

        Ok(())
    }
}

impl Error for ParseError {}

/// A `FileLocation` references a line in the file by the line number of the file as originally
/// read from the disk. It contains a reference to the line itself.
pub type FileLocation<'a> = (u64, &'a str);

/// An `InconsistencyError` is returned when the records don't form a valid division.
///
/// It is meant only for descriptions of divisions, and should not be used after the importing
/// process.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("malformed input: {description}")]
pub struct InconsistencyError {
    description: String,
}

impl InconsistencyError {
    /// Wrap a text in an `InconsistencyError`.
    ///
    /// # Arguments
    ///
    /// * `description`: A human-readable text meant for the end user.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into() }
    }
}
