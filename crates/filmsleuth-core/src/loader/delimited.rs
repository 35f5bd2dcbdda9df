/// CSV / TSV reader.
///
/// Rows are read with `flexible(true)` so short or long rows do not abort
/// the load; a row that cannot be decoded at all is skipped and counted.
use super::columns::clean_header;
use super::{Table, TableRow};
use crate::error::LoadError;
use crate::model::RawValue;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Open and read a delimited file. The handle is closed before returning.
pub fn read_path(path: &Path, delimiter: u8) -> Result<Table, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_delimited(BufReader::new(file), delimiter)
}

/// Read delimited text from any reader. The first record is the header.
pub fn read_delimited<R: Read>(reader: R, delimiter: u8) -> Result<Table, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    // An empty input yields an empty header record, not an error.
    let headers: Vec<String> = rdr.headers()?.iter().map(clean_header).collect();

    let mut table = Table {
        headers,
        ..Table::default()
    };

    // Line of the last record seen; the header is line 1.
    let mut last_line = 1;
    for result in rdr.records() {
        match result {
            Ok(record) => {
                let line = record
                    .position()
                    .map_or(last_line + 1, |pos| pos.line() as usize);
                last_line = line;
                if record.iter().all(|c| c.trim().is_empty()) {
                    continue;
                }
                table.rows.push(TableRow {
                    line,
                    cells: record.iter().map(RawValue::from_text).collect(),
                });
            }
            Err(e) => {
                let line = e
                    .position()
                    .map_or(last_line + 1, |pos| pos.line() as usize);
                last_line = line;
                debug!("Skipping unreadable row {}: {}", line, e);
                table.unreadable_rows += 1;
            }
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_headers_and_rows() {
        let data = "Title,Genre,Vote_Average\nHeat,\"Crime, Drama\",8.3\nUp,Animation,8.2\n";
        let table = read_delimited(data.as_bytes(), b',').unwrap();
        assert_eq!(table.headers, vec!["Title", "Genre", "Vote_Average"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].cells[1], RawValue::from_text("Crime, Drama"));
    }

    #[test]
    fn header_carriage_returns_are_stripped() {
        let data = "Title,Genre\r\nHeat,Crime\r\n";
        let table = read_delimited(data.as_bytes(), b',').unwrap();
        assert_eq!(table.headers, vec!["Title", "Genre"]);
        assert_eq!(table.rows[0].cells[1], RawValue::from_text("Crime"));
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let table = read_delimited("".as_bytes(), b',').unwrap();
        assert!(table.headers.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn ragged_rows_do_not_abort() {
        let data = "Title,Year\nA\nB,2001,extra\n";
        let table = read_delimited(data.as_bytes(), b',').unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].cells.len(), 1);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let data = "Title,Year\n,\nA,2001\n";
        let table = read_delimited(data.as_bytes(), b',').unwrap();
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn invalid_utf8_row_is_counted_not_fatal() {
        let mut data = b"Title,Year\nA,2001\n".to_vec();
        data.extend_from_slice(b"\xff\xfe,2002\nB,2003\n");
        let table = read_delimited(data.as_slice(), b',').unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.unreadable_rows, 1);
    }

    #[test]
    fn lines_follow_the_file_not_the_row_count() {
        let data = "Title,Plot\nA,\"two\nlines\"\n\nB,short\n";
        let table = read_delimited(data.as_bytes(), b',').unwrap();
        let lines: Vec<usize> = table.rows.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![2, 5]);
    }

    #[test]
    fn tab_delimiter() {
        let data = "Title\tYear\nA\t2001\n";
        let table = read_delimited(data.as_bytes(), b'\t').unwrap();
        assert_eq!(table.rows[0].cells[1], RawValue::from_text("2001"));
    }
}
