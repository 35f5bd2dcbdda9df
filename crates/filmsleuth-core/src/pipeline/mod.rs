/// The cleaning and aggregation pipeline.
///
/// ```text
/// RawDataset ──clean──▶ Cleaned ──filter(predicate)──▶ subset ──aggregate──▶ AggregateView
/// ```
///
/// All three stages are pure: they take their inputs as arguments, never
/// mutate them, and return fresh values. The dashboard calls `filter` and
/// `aggregate` again on every interaction.
pub mod aggregate;
pub mod clean;
pub mod dates;
pub mod fields;
pub mod filter;

pub use aggregate::{aggregate, AggregateEntry, AggregateView, GroupBy, GroupKey, Metric};
pub use clean::{clean, clean_dataset, explode_genres, CleanReport, Cleaned, GenreEntry};
pub use filter::{filter, Predicate};
