//! # dsmcheck - DSM CSV structural validation
//!
//! dsmcheck checks the CSV files that describe a design structure matrix
//! (DSM) before they are handed to graph sequencing tools: a node list
//! naming the elements, and a square binary matrix of their dependencies.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CSV File   │────▶│   Parser    │────▶│ Validation  │────▶│ Ok / Error  │
//! │ (UTF-8/BOM) │     │ (csv crate) │     │ (fail-fast) │     │  (report)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dsmcheck::{validate_node_csv_structure, ValidateError};
//!
//! match validate_node_csv_structure("plant.nodes.csv", ';') {
//!     Ok(()) => println!("node list is valid"),
//!     Err(ValidateError::Structure(err)) => eprintln!("rejected: {err}"),
//!     Err(err) => return Err(err.into()),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Structural and I/O error types
//! - [`models`] - File kinds and validation reports
//! - [`parser`] - CSV reader setup, BOM and delimiter handling
//! - [`validation`] - Node list and matrix validators

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Validation
pub mod validation;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{CsvStructureError, ValidateError, ValidateResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{CsvKind, ValidationReport};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{detect_delimiter, sniff_delimiter, DEFAULT_DELIMITER};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validation::{
    check_file,
    is_valid_matrix_csv,
    is_valid_node_csv,
    validate_file,
    validate_matrix_csv_reader,
    validate_matrix_csv_structure,
    validate_node_csv_reader,
    validate_node_csv_structure,
    ValidationOptions,
    NAME_COLUMN,
};
