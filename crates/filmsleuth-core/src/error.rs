/// Error types for loading and exporting datasets.
///
/// Row-level problems are never errors: malformed rows are counted in
/// [`crate::pipeline::CleanReport`] instead. Only whole-file failures
/// surface here.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("failed to read delimited text: {0}")]
    Csv(#[from] csv::Error),

    #[error("unsupported file format `{0}` (expected xlsx, xls, ods, csv, or tsv)")]
    UnsupportedFormat(String),

    #[error("sheet `{0}` not found in workbook")]
    SheetNotFound(String),

    #[error("workbook contains no sheets")]
    NoSheets,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush export: {0}")]
    Io(#[from] std::io::Error),
}
