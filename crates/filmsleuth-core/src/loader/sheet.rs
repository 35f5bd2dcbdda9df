/// Spreadsheet reader (`.xlsx`, `.xls`, `.xlsb`, `.ods`) backed by calamine.
///
/// The first row of the chosen sheet is the header. Cell types are kept
/// (numbers stay numbers, date cells stay serial dates) so cleaning can
/// interpret them without a round-trip through text.
use super::columns::clean_header;
use super::{Table, TableRow};
use crate::error::LoadError;
use crate::model::RawValue;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;
use tracing::debug;

/// Read one worksheet into a [`Table`]. The workbook handle is dropped
/// before returning.
pub fn read_workbook(path: &Path, sheet: Option<&str>) -> Result<Table, LoadError> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names();

    let sheet_name = match sheet {
        Some(wanted) => sheet_names
            .iter()
            .find(|name| name.as_str() == wanted)
            .cloned()
            .ok_or_else(|| LoadError::SheetNotFound(wanted.to_owned()))?,
        None => sheet_names.first().cloned().ok_or(LoadError::NoSheets)?,
    };
    debug!("Reading sheet `{}` of {}", sheet_name, path.display());

    let range = workbook.worksheet_range(&sheet_name)?;
    // Ranges start at the first used cell, which is not always A1.
    let first_line = range.start().map_or(1, |(row, _)| row as usize + 1);
    let mut rows = range.rows();

    let Some(header_row) = rows.next() else {
        return Ok(Table::default());
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| {
            convert_cell(cell)
                .as_text()
                .map(|t| clean_header(&t))
                .unwrap_or_default()
        })
        .collect();

    let mut table = Table {
        headers,
        ..Table::default()
    };
    for (offset, row) in rows.enumerate() {
        let cells: Vec<RawValue> = row.iter().map(convert_cell).collect();
        if cells.iter().all(RawValue::is_blank) {
            continue;
        }
        table.rows.push(TableRow {
            line: first_line + offset + 1,
            cells,
        });
    }

    Ok(table)
}

/// Map a calamine cell onto a [`RawValue`]. Error cells (`#N/A`, `#DIV/0!`)
/// carry no usable value and become `Empty`.
fn convert_cell(value: &Data) -> RawValue {
    match value {
        Data::Empty => RawValue::Empty,
        Data::String(s) => RawValue::from_text(s),
        Data::Float(f) => RawValue::Number(*f),
        Data::Int(i) => RawValue::Number(*i as f64),
        Data::Bool(b) => RawValue::Text(b.to_string()),
        Data::DateTime(dt) => RawValue::DateTime(dt.as_f64()),
        Data::DateTimeIso(s) => RawValue::from_text(s),
        Data::DurationIso(s) => RawValue::from_text(s),
        Data::Error(_) => RawValue::Empty,
    }
}
