//! Error types for DSM CSV validation.
//!
//! Two kinds of failure are kept apart:
//!
//! - [`CsvStructureError`] - the file was read but its shape or content
//!   violates the node-list or matrix schema. Carries a message only.
//! - Everything else in [`ValidateError`] - the file could not be opened,
//!   read or decoded, or the caller asked for an unusable delimiter.
//!
//! Conversion is automatic via `From` implementations, so `?` works across
//! the parser and validator layers.

use thiserror::Error;

// =============================================================================
// Structural Errors
// =============================================================================

/// A node list or matrix file whose structure is malformed.
///
/// The message names the offending file and the violation. Callers should
/// reject the file, not branch on the wording.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CsvStructureError {
    message: String,
}

impl CsvStructureError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The node file header has no `name` field.
    pub fn missing_name_column(source: &str) -> Self {
        Self::new(format!("{source} should have a header with a 'name' column."))
    }

    /// A node row has a blank `name` after trimming.
    pub fn empty_name(source: &str) -> Self {
        Self::new(format!(
            "'{source}' contains an empty value in the 'name' column."
        ))
    }

    /// Two node rows share the same trimmed `name`.
    pub fn duplicate_name(source: &str) -> Self {
        Self::new(format!(
            "'{source}' contains duplicate names in the 'name' column."
        ))
    }

    /// A matrix row whose length differs from the number of rows.
    pub fn not_square(source: &str) -> Self {
        Self::new(format!(
            "The matrix in '{source}' is not square. Each row should have the same number of \
             elements as the number of rows."
        ))
    }

    /// A matrix cell other than `0` or `1`. `row` and `column` are 1-based.
    pub fn not_binary(source: &str, value: &str, row: usize, column: usize) -> Self {
        Self::new(format!(
            "The matrix in '{source}' is not binary. Found '{value}' at row {row}, column {column}."
        ))
    }
}

// =============================================================================
// Validation Errors (top-level)
// =============================================================================

/// Errors returned by the validation entry points.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// The file is malformed.
    #[error("{0}")]
    Structure(#[from] CsvStructureError),

    /// Failed to open or read the file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV layer could not decode a record (e.g. invalid UTF-8).
    #[error("Invalid CSV format: {0}")]
    Csv(#[from] csv::Error),

    /// The delimiter cannot be used by a byte-oriented CSV reader.
    #[error("Unsupported delimiter {0:?}: expected one ASCII character, not a quote or newline")]
    Delimiter(char),
}

impl ValidateError {
    /// True when the input was read fine but is malformed.
    pub fn is_structural(&self) -> bool {
        matches!(self, ValidateError::Structure(_))
    }

    /// The structural violation, if that is what this error is.
    pub fn as_structure(&self) -> Option<&CsvStructureError> {
        match self {
            ValidateError::Structure(err) => Some(err),
            _ => None,
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for validation operations.
pub type ValidateResult<T> = Result<T, ValidateError>;
