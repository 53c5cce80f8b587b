//! Domain models for validation runs.
//!
//! - [`CsvKind`] - which schema a file is checked against
//! - [`ValidationReport`] - serializable outcome of checking one file

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::CsvStructureError;

// =============================================================================
// CsvKind
// =============================================================================

/// The two DSM file layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvKind {
    /// Header row with a `name` column, one node per row.
    Nodes,
    /// Headerless square binary adjacency matrix.
    Matrix,
}

impl CsvKind {
    pub fn label(&self) -> &'static str {
        match self {
            CsvKind::Nodes => "node list",
            CsvKind::Matrix => "matrix",
        }
    }
}

impl fmt::Display for CsvKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// ValidationReport
// =============================================================================

/// Outcome of validating one file.
///
/// Only structural outcomes are reports. I/O failures abort the run instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// File as given by the caller
    pub file: String,
    pub kind: CsvKind,
    /// Delimiter the file was read with
    pub delimiter: char,
    pub valid: bool,
    /// Structural violation, when invalid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationReport {
    pub fn passed(path: &Path, kind: CsvKind, delimiter: char) -> Self {
        Self {
            file: path.display().to_string(),
            kind,
            delimiter,
            valid: true,
            error: None,
        }
    }

    pub fn failed(path: &Path, kind: CsvKind, delimiter: char, error: &CsvStructureError) -> Self {
        Self {
            file: path.display().to_string(),
            kind,
            delimiter,
            valid: false,
            error: Some(error.message().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_serialization() {
        assert_eq!(serde_json::to_value(CsvKind::Nodes).unwrap(), json!("nodes"));
        assert_eq!(serde_json::to_value(CsvKind::Matrix).unwrap(), json!("matrix"));
    }

    #[test]
    fn test_passed_report_omits_error() {
        let report = ValidationReport::passed(Path::new("dsm.csv"), CsvKind::Matrix, ';');
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["file"], "dsm.csv");
        assert_eq!(value["kind"], "matrix");
        assert_eq!(value["delimiter"], ";");
        assert_eq!(value["valid"], true);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_failed_report_carries_message() {
        let err = CsvStructureError::duplicate_name("nodes.csv");
        let report = ValidationReport::failed(Path::new("nodes.csv"), CsvKind::Nodes, ',', &err);

        assert!(!report.valid);
        assert_eq!(
            report.error.as_deref(),
            Some("'nodes.csv' contains duplicate names in the 'name' column.")
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(CsvKind::Nodes.to_string(), "node list");
    }
}
