/// FilmSleuth Core: loading, cleaning, filtering, and aggregation.
///
/// This crate contains all business logic with zero UI dependencies.
/// Every transformation is a pure function over explicit arguments so the
/// pipeline can be exercised without a window (see the `--report` mode and
/// the integration tests).
///
/// # Modules
///
/// - [`model`]: Raw and cleaned record types plus display formatting.
/// - [`loader`]: Spreadsheet (calamine) and delimited-text (csv) readers.
/// - [`pipeline`]: `clean`, `filter`, and `aggregate`.
/// - [`analysis`]: Dashboard views: KPIs, trends, top titles, genre shares.
/// - [`export`]: Write a filtered subset back out as CSV.
/// - [`report`]: Serializable dataset summary.
pub mod analysis;
pub mod error;
pub mod export;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod report;

pub use error::{ExportError, LoadError};
