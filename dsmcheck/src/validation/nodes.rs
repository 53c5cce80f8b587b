//! Node list validation.
//!
//! A node list is a delimited file with a header row. The `name` column
//! holds the node identifiers that label the matrix rows and columns, so
//! every trimmed name must be present and unique.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{CsvStructureError, ValidateError, ValidateResult};
use crate::parser::{csv_reader, utf8_bom_len};

/// Header label of the identifier column.
pub const NAME_COLUMN: &str = "name";

/// Validate the node list at `path`.
///
/// Records are streamed; validation stops at the first offending row.
///
/// # Errors
/// - [`ValidateError::Structure`](crate::ValidateError::Structure) when the
///   header lacks `name`, or a name is empty or duplicated
/// - any other variant when the file cannot be read or decoded
pub fn validate_node_csv_structure<P: AsRef<Path>>(
    path: P,
    delimiter: char,
) -> ValidateResult<()> {
    let path = path.as_ref();
    let file = File::open(path)?;
    validate_node_csv_reader(file, &path.display().to_string(), delimiter)
}

/// Validate a node list read from `reader`. `source` names it in messages.
///
/// Node lists are plain UTF-8: a byte-order mark is kept as part of the
/// first header field, so `\u{feff}name` does not count as `name`.
pub fn validate_node_csv_reader<R: Read>(
    reader: R,
    source: &str,
    delimiter: char,
) -> ValidateResult<()> {
    debug!(source, ?delimiter, "validating node list");

    let mut input = BufReader::new(reader);
    // The first header field carries the mark, so it can never be `name`.
    let leading_bom = utf8_bom_len(&mut input)? > 0;
    let mut reader = csv_reader(input, delimiter, true)?;

    // A repeated `name` header resolves to its last occurrence.
    let name_index = reader
        .headers()?
        .iter()
        .enumerate()
        .filter(|(index, field)| !(leading_bom && *index == 0) && *field == NAME_COLUMN)
        .map(|(index, _)| index)
        .last();

    let Some(name_index) = name_index else {
        return Err(reject(CsvStructureError::missing_name_column(source)));
    };

    let mut names = HashSet::new();

    for record in reader.records() {
        let record = record?;
        // A short row has no name cell at all.
        let name = record.get(name_index).unwrap_or("").trim();

        if name.is_empty() {
            return Err(reject(CsvStructureError::empty_name(source)));
        }
        if !names.insert(name.to_string()) {
            return Err(reject(CsvStructureError::duplicate_name(source)));
        }
    }

    debug!(source, nodes = names.len(), "node list is valid");
    Ok(())
}

/// Quick check: true when the node list validates.
pub fn is_valid_node_csv<P: AsRef<Path>>(path: P, delimiter: char) -> bool {
    validate_node_csv_structure(path, delimiter).is_ok()
}

fn reject(err: CsvStructureError) -> ValidateError {
    warn!(violation = %err, "rejected node list");
    err.into()
}
