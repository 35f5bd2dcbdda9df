/// Source file loading.
///
/// The dataset is read exactly once at startup. The file handle is opened,
/// drained, and dropped inside [`load_path`]; everything downstream works on
/// the in-memory [`RawDataset`].
///
/// Spreadsheet formats go through `calamine`, delimited text through `csv`.
/// Both readers produce the same header + cell grid, which [`ColumnMap`]
/// then maps onto [`RawRecord`] fields.
pub mod columns;
pub mod delimited;
pub mod sheet;

pub use columns::{ColumnMap, Field};

use crate::error::LoadError;
use crate::model::{RawRecord, RawValue};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Options controlling how the source file is read.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Worksheet to read; the first sheet when `None`. Ignored for CSV/TSV.
    pub sheet: Option<String>,
}

/// One data row with the 1-based source line it started on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRow {
    pub line: usize,
    pub cells: Vec<RawValue>,
}

/// Header row plus cell grid, before column mapping.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
    /// Rows the reader could not decode at all (e.g. invalid UTF-8).
    pub unreadable_rows: usize,
}

impl Table {
    /// Map the grid onto record fields.
    pub fn into_dataset(self, source: PathBuf) -> RawDataset {
        let columns = ColumnMap::from_headers(&self.headers);
        let missing = columns.missing_required();
        if !missing.is_empty() && !self.headers.is_empty() {
            warn!(
                "{}: no column found for {:?}; affected rows will be dropped",
                source.display(),
                missing
            );
        }

        let rows = self
            .rows
            .into_iter()
            .map(|row| columns.record(row.line, row.cells))
            .collect();

        RawDataset {
            source,
            headers: self.headers,
            rows,
            unreadable_rows: self.unreadable_rows,
        }
    }
}

/// Every row of the source file, mapped onto known fields.
#[derive(Debug, Clone, Default)]
pub struct RawDataset {
    pub source: PathBuf,
    /// Cleaned header names in file order.
    pub headers: Vec<String>,
    pub rows: Vec<RawRecord>,
    /// Rows skipped by the reader; counted as dropped by cleaning.
    pub unreadable_rows: usize,
}

impl RawDataset {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.unreadable_rows == 0
    }
}

/// Input formats recognised by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Workbook,
    Csv,
    Tsv,
}

impl SourceFormat {
    /// Detect the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "xla" | "ods" => Ok(Self::Workbook),
            "csv" => Ok(Self::Csv),
            "tsv" | "tab" => Ok(Self::Tsv),
            _ => Err(LoadError::UnsupportedFormat(ext)),
        }
    }
}

/// Load the dataset at `path`.
///
/// Fails only for whole-file problems (missing, unreadable, unsupported
/// format, unknown sheet). Individual bad rows are carried through and
/// dealt with by [`crate::pipeline::clean`].
pub fn load_path(path: impl AsRef<Path>, options: &LoadOptions) -> Result<RawDataset, LoadError> {
    let path = path.as_ref();
    let format = SourceFormat::from_path(path)?;

    // Surface a missing file as an I/O error naming the path, rather than
    // whatever the format-specific reader reports.
    std::fs::metadata(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table = match format {
        SourceFormat::Workbook => sheet::read_workbook(path, options.sheet.as_deref())?,
        SourceFormat::Csv => delimited::read_path(path, b',')?,
        SourceFormat::Tsv => delimited::read_path(path, b'\t')?,
    };

    let dataset = table.into_dataset(path.to_path_buf());
    info!(
        "Loaded {} rows ({} columns) from {}",
        dataset.rows.len(),
        dataset.headers.len(),
        path.display()
    );
    Ok(dataset)
}
