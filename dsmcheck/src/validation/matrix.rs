//! Binary adjacency matrix validation.
//!
//! A DSM matrix file has no header. Every row is data, the matrix must be
//! square (each row holds as many cells as there are rows) and every cell
//! must be the literal symbol `0` or `1`.

use csv::StringRecord;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{CsvStructureError, ValidateResult};
use crate::parser::{csv_reader, delimiter_byte, skip_bom, split_lines};

/// Validate the matrix at `path`.
///
/// The whole file is loaded before checking since the expected row length
/// is the total row count.
///
/// # Errors
/// - [`ValidateError::Structure`](crate::ValidateError::Structure) when a row
///   length differs from the row count or a cell is not `0`/`1`
/// - any other variant when the file cannot be read or decoded
pub fn validate_matrix_csv_structure<P: AsRef<Path>>(
    path: P,
    delimiter: char,
) -> ValidateResult<()> {
    let path = path.as_ref();
    let file = File::open(path)?;
    validate_matrix_csv_reader(file, &path.display().to_string(), delimiter)
}

/// Validate a matrix read from `reader`. `source` names it in messages.
pub fn validate_matrix_csv_reader<R: Read>(
    reader: R,
    source: &str,
    delimiter: char,
) -> ValidateResult<()> {
    debug!(source, ?delimiter, "validating matrix");

    let rows = read_rows(reader, delimiter)?;

    if let Err(err) = check_matrix(&rows, source) {
        warn!(violation = %err, "rejected matrix");
        return Err(err.into());
    }

    debug!(source, size = rows.len(), "matrix is square and binary");
    Ok(())
}

/// Quick check: true when the matrix validates.
pub fn is_valid_matrix_csv<P: AsRef<Path>>(path: P, delimiter: char) -> bool {
    validate_matrix_csv_structure(path, delimiter).is_ok()
}

/// Load every row, BOM stripped, fields untouched.
///
/// A blank line is a row with no cells. The CSV reader would skip it, so
/// lines are split first and each non-blank one is parsed on its own.
fn read_rows<R: Read>(reader: R, delimiter: char) -> ValidateResult<Vec<StringRecord>> {
    delimiter_byte(delimiter)?;

    let mut input = BufReader::new(reader);
    skip_bom(&mut input)?;

    let mut content = Vec::new();
    input.read_to_end(&mut content)?;

    let mut rows = Vec::new();
    for line in split_lines(&content) {
        if line.is_empty() {
            rows.push(StringRecord::new());
            continue;
        }
        let mut reader = csv_reader(line, delimiter, false)?;
        let row = reader.records().next().transpose()?.unwrap_or_default();
        rows.push(row);
    }

    Ok(rows)
}

/// Single row-major pass: a row's length is checked before its cells.
fn check_matrix(rows: &[StringRecord], source: &str) -> Result<(), CsvStructureError> {
    let size = rows.len();

    for (i, row) in rows.iter().enumerate() {
        if row.len() != size {
            return Err(CsvStructureError::not_square(source));
        }

        for (j, cell) in row.iter().enumerate() {
            if !is_binary_symbol(cell) {
                return Err(CsvStructureError::not_binary(source, cell, i + 1, j + 1));
            }
        }
    }

    Ok(())
}

/// Exact match only: no trimming, no numeric parsing.
fn is_binary_symbol(cell: &str) -> bool {
    matches!(cell, "0" | "1")
}
