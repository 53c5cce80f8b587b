//! Structural validation of DSM CSV files.
//!
//! Pre-flight checks run before node lists and matrices are handed to graph
//! tooling. They never transform data: a file either passes or is rejected
//! with the first violation found.
//!
//! # Validators
//!
//! ## Node list ([`nodes`])
//! - Header row required, with a column literally named `name`
//! - Every trimmed name is non-empty and unique
//!
//! ## Matrix ([`matrix`])
//! - No header, optional UTF-8 BOM
//! - R rows of exactly R cells, each cell `0` or `1`
//! - A blank line is a row with zero cells
//!
//! # Example
//!
//! ```rust,ignore
//! use dsmcheck::{validate_matrix_csv_structure, validate_node_csv_structure};
//!
//! validate_node_csv_structure("plant.nodes.csv", ';')?;
//! validate_matrix_csv_structure("plant_DSM.csv", ';')?;
//! ```

pub mod matrix;
pub mod nodes;

pub use matrix::{is_valid_matrix_csv, validate_matrix_csv_reader, validate_matrix_csv_structure};
pub use nodes::{
    is_valid_node_csv, validate_node_csv_reader, validate_node_csv_structure, NAME_COLUMN,
};

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ValidateError, ValidateResult};
use crate::models::{CsvKind, ValidationReport};
use crate::parser::DEFAULT_DELIMITER;

/// Options shared by both validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOptions {
    /// Field delimiter
    pub delimiter: char,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl ValidationOptions {
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Validate `path` as the given kind of file.
pub fn validate_file<P: AsRef<Path>>(
    path: P,
    kind: CsvKind,
    options: &ValidationOptions,
) -> ValidateResult<()> {
    match kind {
        CsvKind::Nodes => validate_node_csv_structure(path, options.delimiter),
        CsvKind::Matrix => validate_matrix_csv_structure(path, options.delimiter),
    }
}

/// Validate `path` and turn a structural outcome into a report.
///
/// I/O and decoding errors are still returned as errors.
pub fn check_file<P: AsRef<Path>>(
    path: P,
    kind: CsvKind,
    options: &ValidationOptions,
) -> ValidateResult<ValidationReport> {
    let path = path.as_ref();

    match validate_file(path, kind, options) {
        Ok(()) => Ok(ValidationReport::passed(path, kind, options.delimiter)),
        Err(ValidateError::Structure(err)) => {
            Ok(ValidationReport::failed(path, kind, options.delimiter, &err))
        }
        Err(err) => Err(err),
    }
}
