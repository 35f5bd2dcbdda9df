/// Serializable summary of a loaded dataset.
///
/// Printed as JSON by `FilmSleuth --report` and shown in the dashboard's
/// status bar.
use crate::analysis::{kpis, rating_by_year, Kpis, YearPoint};
use crate::model::CleanedRecord;
use crate::pipeline::{aggregate, CleanReport, Cleaned, GroupBy, Metric};
use serde::Serialize;

/// Number of genres listed in the report.
pub const REPORT_TOP_GENRES: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreCount {
    pub genre: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetReport {
    pub source: String,
    pub cleaning: CleanReport,
    pub kpis: Kpis,
    pub top_genres: Vec<GenreCount>,
    pub rating_by_year: Vec<YearPoint>,
}

impl DatasetReport {
    /// Summarise every cleaned record of `cleaned`.
    pub fn build(source: impl Into<String>, cleaned: &Cleaned) -> Self {
        let all: Vec<&CleanedRecord> = cleaned.records.iter().collect();
        let top_genres = aggregate(&all, GroupBy::Genre, Metric::Count)
            .top(REPORT_TOP_GENRES)
            .into_iter()
            .map(|e| GenreCount {
                genre: e.key.to_string(),
                count: e.count,
            })
            .collect();

        Self {
            source: source.into(),
            cleaning: cleaned.report.clone(),
            kpis: kpis(&all),
            top_genres,
            rating_by_year: rating_by_year(&all),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
