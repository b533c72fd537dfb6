//! Pure CSV transfer logic for bulk export and import.
//!
//! This module has zero I/O: it maps between `Vec<Todo>` and CSV bytes.
//! The `web` crate wires it to the HTTP surface and the database.
//!
//! The import side is deliberately lenient about field *values*: an
//! unparseable id coerces to 0 and an unrecognised done token coerces to
//! false, matching the original application's contract. Row *shape* is
//! strict: any data row without exactly [`CSV_FIELD_COUNT`] fields aborts
//! the whole parse.

use std::io::Cursor;

use crate::todo::Todo;
use crate::types::DbId;

/// Column header written on export and skipped on import.
pub const CSV_HEADER: [&str; 4] = ["ID", "Title", "Description", "Done"];

/// Number of fields every data row must have.
pub const CSV_FIELD_COUNT: usize = 4;

#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("CSV read failed: {0}")]
    Read(#[from] csv::Error),

    #[error("CSV write failed: {0}")]
    Write(String),

    #[error("Row {row}: expected {CSV_FIELD_COUNT} fields, got {got}")]
    FieldCount { row: usize, got: usize },
}

/// Encode `todos` as a CSV document: the [`CSV_HEADER`] row, then one row
/// per record with `done` rendered as `"1"`/`"0"`.
pub fn write_csv(todos: &[Todo]) -> Result<Vec<u8>, TransferError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for todo in todos {
        let id = todo.id.to_string();
        let done = if todo.done { "1" } else { "0" };
        writer.write_record([
            id.as_str(),
            todo.title.as_str(),
            todo.description.as_str(),
            done,
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| TransferError::Write(e.to_string()))
}

/// Decode a CSV document into todos.
///
/// The first row is treated as a header and skipped. Each data row must
/// have exactly four fields; a row with any other shape fails the whole
/// parse. Field values are coerced, never rejected: see [`parse_done`]
/// and the id handling below.
pub fn read_csv(data: &[u8]) -> Result<Vec<Todo>, TransferError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(Cursor::new(data));

    let mut todos = Vec::new();
    // Row numbers are 1-based counting the header, so data starts at 2.
    let mut row = 1;

    for result in reader.records() {
        row += 1;
        let record = result?;

        if record.len() != CSV_FIELD_COUNT {
            return Err(TransferError::FieldCount {
                row,
                got: record.len(),
            });
        }

        todos.push(Todo {
            // Unparseable ids coerce to 0 rather than failing the row.
            id: record[0].parse::<DbId>().unwrap_or(0),
            title: record[1].to_string(),
            description: record[2].to_string(),
            done: parse_done(&record[3]),
        });
    }

    Ok(todos)
}

/// Parse a done flag permissively.
///
/// Accepts the usual boolean spellings (`1`, `t`, `T`, `TRUE`, `true`,
/// `True`) as true; everything else, including garbage, is false.
pub fn parse_done(field: &str) -> bool {
    matches!(field, "1" | "t" | "T" | "TRUE" | "true" | "True")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Todo> {
        vec![
            Todo {
                id: 1,
                title: "Buy milk".to_string(),
                description: "2%".to_string(),
                done: false,
            },
            Todo {
                id: 2,
                title: "Call plumber".to_string(),
                description: "Kitchen sink, leaks when draining".to_string(),
                done: true,
            },
        ]
    }

    #[test]
    fn export_writes_header_and_numeric_done() {
        let bytes = write_csv(&sample()).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("ID,Title,Description,Done"));
        assert_eq!(lines.next(), Some("1,Buy milk,2%,0"));
        assert_eq!(
            lines.next(),
            Some("2,Call plumber,\"Kitchen sink, leaks when draining\",1")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn round_trip_preserves_all_fields() {
        let todos = sample();
        let bytes = write_csv(&todos).unwrap();
        let parsed = read_csv(&bytes).unwrap();
        assert_eq!(parsed, todos);
    }

    #[test]
    fn import_skips_header_row() {
        let parsed = read_csv(b"ID,Title,Description,Done\n5,Buy milk,2%,true\n").unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].id, 5);
        assert_eq!(parsed[0].title, "Buy milk");
        assert_eq!(parsed[0].description, "2%");
        assert!(parsed[0].done);
    }

    #[test]
    fn malformed_id_coerces_to_zero() {
        let parsed = read_csv(b"ID,Title,Description,Done\nnope,a,b,1\n").unwrap();
        assert_eq!(parsed[0].id, 0);
        assert!(parsed[0].done);
    }

    #[test]
    fn malformed_done_coerces_to_false() {
        let parsed = read_csv(b"ID,Title,Description,Done\n3,a,b,maybe\n").unwrap();
        assert_eq!(parsed[0].id, 3);
        assert!(!parsed[0].done);
    }

    #[test]
    fn done_token_table() {
        for token in ["1", "t", "T", "TRUE", "true", "True"] {
            assert!(parse_done(token), "token: {token}");
        }
        for token in ["0", "f", "F", "FALSE", "false", "False", "", "yes", "2"] {
            assert!(!parse_done(token), "token: {token}");
        }
    }

    #[test]
    fn wrong_field_count_aborts_whole_parse() {
        let err = read_csv(b"ID,Title,Description,Done\n1,a,b,0\n2,missing\n").unwrap_err();
        match err {
            TransferError::FieldCount { row, got } => {
                assert_eq!(row, 3);
                assert_eq!(got, 2);
            }
            other => panic!("expected FieldCount, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_parses_to_nothing() {
        assert!(read_csv(b"").unwrap().is_empty());
    }

    #[test]
    fn quoted_fields_with_commas_survive() {
        let todos = vec![Todo {
            id: 7,
            title: "a, b, and c".to_string(),
            description: "line\nbreak".to_string(),
            done: false,
        }];
        let bytes = write_csv(&todos).unwrap();
        assert_eq!(read_csv(&bytes).unwrap(), todos);
    }
}
