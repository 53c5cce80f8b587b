//! CSV reading helpers shared by the validators.
//!
//! Wraps the `csv` crate with the settings both validators rely on: a
//! configurable single-byte delimiter, raw (untrimmed) fields and flexible
//! record lengths, so that ragged rows reach the validators as data instead
//! of surfacing as parse errors.

use csv::{Reader, ReaderBuilder, Trim};
use encoding_rs::{Encoding, UTF_8};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{ValidateError, ValidateResult};

/// Delimiter used by DSM tooling when none is given.
pub const DEFAULT_DELIMITER: char = ';';

/// Candidates tried by [`detect_delimiter`], in tie-break order.
const SEPARATORS: [char; 4] = [';', ',', '\t', '|'];

/// Convert a delimiter to the byte the CSV reader expects.
///
/// Only ASCII characters fit in one byte. Quotes and line breaks are
/// rejected as well since the reader gives them their own meaning.
pub fn delimiter_byte(delimiter: char) -> ValidateResult<u8> {
    if !delimiter.is_ascii() || matches!(delimiter, '"' | '\n' | '\r') {
        return Err(ValidateError::Delimiter(delimiter));
    }
    Ok(delimiter as u8)
}

/// Build a CSV reader over `reader`.
///
/// Fields are kept verbatim and rows may have any length.
pub fn csv_reader<R: Read>(
    reader: R,
    delimiter: char,
    has_headers: bool,
) -> ValidateResult<Reader<R>> {
    let delimiter = delimiter_byte(delimiter)?;
    Ok(ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(has_headers)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(reader))
}

/// Length of a leading UTF-8 byte-order mark, without consuming it.
///
/// Other BOMs count as no BOM; the bytes after them are not UTF-8 and the
/// CSV layer reports that as a decoding error.
pub fn utf8_bom_len<R: BufRead>(reader: &mut R) -> std::io::Result<usize> {
    Ok(match Encoding::for_bom(reader.fill_buf()?) {
        Some((encoding, len)) if encoding == UTF_8 => len,
        _ => 0,
    })
}

/// Consume a leading UTF-8 byte-order mark, if any.
pub fn skip_bom<R: BufRead>(reader: &mut R) -> std::io::Result<()> {
    let bom_len = utf8_bom_len(reader)?;
    reader.consume(bom_len);
    Ok(())
}

/// Split `content` into physical lines, keeping quoted line breaks inside
/// their field.
///
/// `\n`, `\r\n` and a lone `\r` end a line. Blank lines are kept as empty
/// slices; the terminator of the last line does not open a new one.
pub fn split_lines(content: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut i = 0;

    while i < content.len() {
        match content[i] {
            b'"' => in_quotes = !in_quotes,
            b'\n' | b'\r' if !in_quotes => {
                lines.push(&content[start..i]);
                if content[i] == b'\r' && content.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    if start < content.len() {
        lines.push(&content[start..]);
    }

    lines
}

/// Detect the delimiter by counting occurrences in the first line.
///
/// Falls back to [`DEFAULT_DELIMITER`] when no candidate occurs.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let mut best_sep = DEFAULT_DELIMITER;
    let mut best_count = 0;

    for &sep in &SEPARATORS {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Detect the delimiter of a file from its first line.
pub fn sniff_delimiter<P: AsRef<Path>>(path: P) -> ValidateResult<char> {
    let mut reader = BufReader::new(File::open(path.as_ref())?);
    skip_bom(&mut reader)?;

    let mut first_line = String::new();
    reader.read_line(&mut first_line)?;

    Ok(detect_delimiter(&first_line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_delimiter_byte_ascii() {
        assert_eq!(delimiter_byte(';').unwrap(), b';');
        assert_eq!(delimiter_byte('\t').unwrap(), b'\t');
    }

    #[test]
    fn test_delimiter_byte_rejects_multibyte() {
        let err = delimiter_byte('§').unwrap_err();
        assert!(matches!(err, ValidateError::Delimiter('§')));
    }

    #[test]
    fn test_delimiter_byte_rejects_quote_and_newline() {
        assert!(delimiter_byte('"').is_err());
        assert!(delimiter_byte('\n').is_err());
    }

    #[test]
    fn test_reader_keeps_raw_fields() {
        let mut reader = csv_reader(" a ; b\n1;2;3\n".as_bytes(), ';', false).unwrap();
        let rows: Vec<_> = reader.records().collect::<Result<_, _>>().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], " a ");
        assert_eq!(&rows[0][1], " b");
        assert_eq!(rows[1].len(), 3);
    }

    #[test]
    fn test_quoted_values() {
        let mut reader = csv_reader("\"0\";\"1\"\n".as_bytes(), ';', false).unwrap();
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[0], "0");
        assert_eq!(&row[1], "1");
    }

    #[test]
    fn test_skip_utf8_bom() {
        let mut cursor = Cursor::new(b"\xEF\xBB\xBFname\n".to_vec());
        skip_bom(&mut cursor).unwrap();

        let mut rest = String::new();
        cursor.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "name\n");
    }

    #[test]
    fn test_utf8_bom_len_does_not_consume() {
        let mut cursor = Cursor::new(b"\xEF\xBB\xBFname\n".to_vec());
        assert_eq!(utf8_bom_len(&mut cursor).unwrap(), 3);
        assert_eq!(cursor.position(), 0);

        let mut cursor = Cursor::new(b"name\n".to_vec());
        assert_eq!(utf8_bom_len(&mut cursor).unwrap(), 0);
    }

    #[test]
    fn test_skip_bom_without_bom() {
        let mut cursor = Cursor::new(b"name\n".to_vec());
        skip_bom(&mut cursor).unwrap();

        let mut rest = String::new();
        cursor.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "name\n");
    }

    #[test]
    fn test_detect_delimiter_semicolon() {
        assert_eq!(detect_delimiter("a;b;c\n1;2;3"), ';');
    }

    #[test]
    fn test_detect_delimiter_comma() {
        assert_eq!(detect_delimiter("a,b,c\n1,2,3"), ',');
    }

    #[test]
    fn test_detect_delimiter_tab() {
        assert_eq!(detect_delimiter("a\tb\tc\n1\t2\t3"), '\t');
    }

    #[test]
    fn test_detect_delimiter_pipe() {
        assert_eq!(detect_delimiter("a|b|c\n1|2|3"), '|');
    }

    #[test]
    fn test_detect_delimiter_tie_prefers_earlier_candidate() {
        assert_eq!(detect_delimiter("a;b,c"), ';');
        assert_eq!(detect_delimiter("a|b\tc"), '\t');
        assert_eq!(detect_delimiter("a,b;c|d,e"), ',');
    }

    #[test]
    fn test_split_lines_keeps_blank_lines() {
        let lines = split_lines(b"0;1\n\n1;0\n");
        assert_eq!(lines, vec![&b"0;1"[..], &b""[..], &b"1;0"[..]]);
    }

    #[test]
    fn test_split_lines_trailing_terminator() {
        assert_eq!(split_lines(b"0;1\n1;0\n").len(), 2);
        assert_eq!(split_lines(b"0;1\n1;0").len(), 2);
        assert_eq!(split_lines(b"0;1\n1;0\n\n").len(), 3);
        assert!(split_lines(b"").is_empty());
    }

    #[test]
    fn test_split_lines_mixed_terminators() {
        let lines = split_lines(b"0\r\n\r\n1\r2\n");
        assert_eq!(lines, vec![&b"0"[..], &b""[..], &b"1"[..], &b"2"[..]]);
    }

    #[test]
    fn test_split_lines_quoted_line_break() {
        let lines = split_lines(b"\"a\nb\";1\n0;1\n");
        assert_eq!(lines, vec![&b"\"a\nb\";1"[..], &b"0;1"[..]]);
    }

    #[test]
    fn test_detect_delimiter_single_column() {
        assert_eq!(detect_delimiter("name\nA\nB"), DEFAULT_DELIMITER);
    }

    #[test]
    fn test_sniff_delimiter_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\xEF\xBB\xBF0,1\n1,0\n").unwrap();

        assert_eq!(sniff_delimiter(file.path()).unwrap(), ',');
    }

    #[test]
    fn test_sniff_delimiter_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = sniff_delimiter(dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, ValidateError::Io(_)));
    }
}
