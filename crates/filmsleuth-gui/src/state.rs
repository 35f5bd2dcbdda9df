/// Dashboard state management.
///
/// Centralises all mutable state that the UI reads and writes. The cleaned
/// records are loaded once and never change; every filter change goes
/// through a setter that rebuilds the [`DashboardView`] synchronously, so
/// the displayed subset always equals `filter(records, predicate)`.
use crate::theme::ThemeMode;
use anyhow::Context;
use compact_str::CompactString;
use filmsleuth_core::analysis::{
    facets, genre_distribution, kpis, popularity_vs_rating, rating_by_year, top_popular_indices,
    Facets, GenreShare, Kpis, ScatterPoint, YearPoint,
};
use filmsleuth_core::export::{export_csv, DEFAULT_EXPORT_NAME};
use filmsleuth_core::loader::{load_path, LoadOptions};
use filmsleuth_core::model::{CleanedRecord, MediaType};
use filmsleuth_core::pipeline::{clean_dataset, Cleaned, Predicate};
use filmsleuth_core::report::DatasetReport;
use filmsleuth_core::ExportError;
use std::path::{Path, PathBuf};

/// Number of titles in the "Top 10 Popular" chart.
pub const TOP_POPULAR_COUNT: usize = 10;

/// Chart tabs in the central panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartTab {
    #[default]
    RatingByYear,
    TopPopular,
    GenreDistribution,
    PopularityVsRating,
    Data,
}

impl ChartTab {
    pub const ALL: [ChartTab; 5] = [
        ChartTab::RatingByYear,
        ChartTab::TopPopular,
        ChartTab::GenreDistribution,
        ChartTab::PopularityVsRating,
        ChartTab::Data,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::RatingByYear => "Rating by Year",
            Self::TopPopular => "Top 10 Popular",
            Self::GenreDistribution => "Genre Distribution",
            Self::PopularityVsRating => "Popularity vs Rating",
            Self::Data => "Data",
        }
    }
}

/// Everything the panels draw, computed from one filtered subset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardView {
    /// Indices into [`DashboardState::records`] of the matching records,
    /// in source order.
    pub indices: Vec<usize>,
    pub kpis: Kpis,
    pub rating_by_year: Vec<YearPoint>,
    /// Record indices of the most popular titles, most popular first.
    pub top_popular: Vec<usize>,
    pub genres: Vec<GenreShare>,
    /// One point per matching record; `index` is a record index.
    pub scatter: Vec<ScatterPoint>,
}

impl DashboardView {
    /// Compute a fresh view of `records` under `predicate`.
    pub fn compute(records: &[CleanedRecord], predicate: &Predicate) -> Self {
        let indices: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, r)| predicate.matches(r))
            .map(|(i, _)| i)
            .collect();
        let subset: Vec<&CleanedRecord> = indices.iter().map(|&i| &records[i]).collect();

        let top_popular = top_popular_indices(&subset, TOP_POPULAR_COUNT)
            .into_iter()
            .map(|pos| indices[pos])
            .collect();
        let mut scatter = popularity_vs_rating(&subset);
        for point in &mut scatter {
            point.index = indices[point.index];
        }

        Self {
            kpis: kpis(&subset),
            rating_by_year: rating_by_year(&subset),
            top_popular,
            genres: genre_distribution(&subset),
            scatter,
            indices,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// All dashboard state.
pub struct DashboardState {
    // ── Data (fixed after load) ────────────────────────
    pub records: Vec<CleanedRecord>,
    pub report: DatasetReport,
    pub facets: Facets,
    pub source: PathBuf,

    // ── Filters ────────────────────────────────────────
    predicate: Predicate,
    view: DashboardView,

    // ── UI state ───────────────────────────────────────
    pub theme: ThemeMode,
    pub tab: ChartTab,
    pub show_about: bool,
    /// Outcome of the last export, shown in the status bar.
    pub export_status: Option<Result<String, String>>,
}

impl DashboardState {
    /// Build state from an already-cleaned dataset. Every record is shown
    /// initially.
    pub fn new(source: PathBuf, cleaned: Cleaned, report: DatasetReport, theme: ThemeMode) -> Self {
        let predicate = Predicate::new();
        let view = DashboardView::compute(&cleaned.records, &predicate);
        Self {
            facets: facets(&cleaned.records),
            records: cleaned.records,
            report,
            source,
            predicate,
            view,
            theme,
            tab: ChartTab::default(),
            show_about: false,
            export_status: None,
        }
    }

    /// Load, clean, and summarise the dataset at `path`.
    pub fn from_path(path: &Path, options: &LoadOptions, theme: ThemeMode) -> anyhow::Result<Self> {
        let raw = load_path(path, options)
            .with_context(|| format!("failed to load dataset from {}", path.display()))?;
        let cleaned = clean_dataset(&raw);
        let report = DatasetReport::build(path.display().to_string(), &cleaned);
        Ok(Self::new(path.to_path_buf(), cleaned, report, theme))
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    /// The records currently displayed, in source order.
    pub fn filtered(&self) -> Vec<&CleanedRecord> {
        self.view.indices.iter().map(|&i| &self.records[i]).collect()
    }

    fn recompute(&mut self) {
        self.view = DashboardView::compute(&self.records, &self.predicate);
        tracing::debug!(
            "Filter applied: {} of {} records match",
            self.view.indices.len(),
            self.records.len()
        );
    }

    // ── Filter setters ───────────────────────────────────────────────────

    /// Add `genre` to the genre selection, or remove it if already selected.
    pub fn toggle_genre(&mut self, genre: &str) {
        toggle(&mut self.predicate.genres, genre);
        self.recompute();
    }

    pub fn toggle_country(&mut self, country: &str) {
        toggle(&mut self.predicate.countries, country);
        self.recompute();
    }

    /// Restrict to an inclusive year range. The full dataset span clears
    /// the restriction.
    pub fn set_year_range(&mut self, from: i32, to: i32) {
        let (from, to) = if from <= to { (from, to) } else { (to, from) };
        self.predicate.years = match self.facets.year_span() {
            Some(span) if span == (from, to) => None,
            _ => Some(from..=to),
        };
        self.recompute();
    }

    /// Minimum rating; `0.0` or below clears the restriction.
    pub fn set_min_rating(&mut self, min_rating: f64) {
        self.predicate.min_rating = (min_rating > 0.0).then_some(min_rating);
        self.recompute();
    }

    pub fn set_media_type(&mut self, media_type: Option<MediaType>) {
        self.predicate.media_type = media_type;
        self.recompute();
    }

    /// Clear every filter so all records show.
    pub fn reset_filters(&mut self) {
        self.predicate = Predicate::new();
        self.recompute();
    }

    /// Currently selected year range, or the dataset span when unrestricted.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        match &self.predicate.years {
            Some(range) => Some((*range.start(), *range.end())),
            None => self.facets.year_span(),
        }
    }

    pub fn min_rating(&self) -> f64 {
        self.predicate.min_rating.unwrap_or(0.0)
    }

    pub fn is_genre_selected(&self, genre: &str) -> bool {
        self.predicate.genres.contains(genre)
    }

    pub fn is_country_selected(&self, country: &str) -> bool {
        self.predicate.countries.contains(country)
    }

    // ── Theme ────────────────────────────────────────────────────────────

    /// Switch theme. The data view is left untouched.
    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.theme = theme;
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
    }

    // ── Export ───────────────────────────────────────────────────────────

    /// Default export location: next to the source file.
    pub fn default_export_path(&self) -> PathBuf {
        self.source
            .parent()
            .map(|dir| dir.join(DEFAULT_EXPORT_NAME))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_NAME))
    }

    /// Write the displayed subset to `path` as CSV.
    pub fn export_filtered(&mut self, path: &Path) -> Result<usize, ExportError> {
        let subset = self.filtered();
        let result = export_csv(&subset, path);
        self.export_status = Some(match &result {
            Ok(rows) => Ok(format!("Exported {rows} rows to {}", path.display())),
            Err(e) => {
                tracing::warn!("Export to {} failed: {e}", path.display());
                Err(format!("Export failed: {e}"))
            }
        });
        result
    }
}

fn toggle(set: &mut std::collections::BTreeSet<CompactString>, value: &str) {
    if !set.remove(value) {
        set.insert(CompactString::new(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filmsleuth_core::pipeline::{filter, CleanReport};

    fn state() -> DashboardState {
        let records = vec![
            CleanedRecord::new(2, "A", 2020, 8.0)
                .with_genres(["Drama", "Comedy"])
                .with_country("US"),
            CleanedRecord::new(3, "B", 2019, 6.0)
                .with_genres(["Horror"])
                .with_media_type(MediaType::Show),
        ];
        let cleaned = Cleaned {
            report: CleanReport {
                input_rows: 2,
                kept: 2,
                ..CleanReport::default()
            },
            records,
        };
        let report = DatasetReport::build("test.csv", &cleaned);
        DashboardState::new(PathBuf::from("test.csv"), cleaned, report, ThemeMode::Dark)
    }

    // ── ChartTab ─────────────────────────────────────────────────────────

    #[test]
    fn tab_labels_are_distinct() {
        let labels: std::collections::HashSet<&str> =
            ChartTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels.len(), ChartTab::ALL.len());
    }

    // ── Filters ──────────────────────────────────────────────────────────

    #[test]
    fn initial_view_shows_everything() {
        let s = state();
        assert_eq!(s.view().indices, vec![0, 1]);
        assert_eq!(s.year_range(), Some((2019, 2020)));
    }

    #[test]
    fn toggling_genre_twice_restores_view() {
        let mut s = state();
        let before = s.view().clone();
        s.toggle_genre("Drama");
        assert_eq!(s.view().indices, vec![0]);
        assert!(s.is_genre_selected("Drama"));
        s.toggle_genre("Drama");
        assert_eq!(s.view(), &before);
    }

    #[test]
    fn view_matches_core_filter() {
        let mut s = state();
        s.set_media_type(Some(MediaType::Show));
        let expected: Vec<&CleanedRecord> = filter(&s.records, s.predicate());
        assert_eq!(s.filtered(), expected);
    }

    #[test]
    fn full_span_clears_year_restriction() {
        let mut s = state();
        s.set_year_range(2020, 2020);
        assert_eq!(s.view().indices, vec![0]);
        s.set_year_range(2020, 2019);
        assert!(s.predicate().years.is_none());
        assert_eq!(s.view().indices.len(), 2);
    }

    #[test]
    fn zero_min_rating_clears_restriction() {
        let mut s = state();
        s.set_min_rating(7.0);
        assert_eq!(s.view().kpis.total, 1);
        s.set_min_rating(0.0);
        assert!(s.predicate().min_rating.is_none());
    }

    #[test]
    fn theme_toggle_leaves_view_alone() {
        let mut s = state();
        s.toggle_country("US");
        let before = s.view().clone();
        s.toggle_theme();
        assert_eq!(s.theme, ThemeMode::Light);
        assert_eq!(s.view(), &before);
    }

    #[test]
    fn export_path_sits_beside_source() {
        let s = state();
        assert_eq!(s.default_export_path(), PathBuf::from(DEFAULT_EXPORT_NAME));
    }
}
