/// A validated, normalised title record.
///
/// Produced once by [`crate::pipeline::clean`] and held for the lifetime of
/// the process. Aggregate views borrow these records; nothing mutates them
/// after cleaning.
use compact_str::CompactString;
use std::fmt;

/// Label used for missing countries and for titles without any genre tag.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Whether a title is a film or a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MediaType {
    Movie,
    Show,
}

impl MediaType {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::Show => "TV Show",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Normalised running time.
///
/// Films are measured in minutes, series in seasons; the two units are
/// never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Runtime {
    Minutes(u32),
    Seasons(u32),
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minutes(m) => write!(f, "{m} min"),
            Self::Seasons(1) => f.write_str("1 Season"),
            Self::Seasons(s) => write!(f, "{s} Seasons"),
        }
    }
}

/// One title after validation, imputation, and normalisation.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedRecord {
    /// 1-based source row, kept for diagnostics and stable ordering.
    pub row: usize,
    pub title: String,
    /// Individual genre tags, deduplicated, in source order.
    pub genres: Vec<CompactString>,
    /// Release year parsed from the free-form date column.
    pub year: i32,
    /// Production country, or [`UNKNOWN_LABEL`].
    pub country: CompactString,
    /// Critic/user score (vote average).
    pub rating: f64,
    /// Popularity score; `0.0` when the source had none.
    pub popularity: f64,
    /// Number of votes behind `rating`; `0` when the source had none.
    pub vote_count: u64,
    pub runtime: Option<Runtime>,
    pub media_type: MediaType,
    /// Original language code, when present.
    pub language: Option<CompactString>,
    pub overview: Option<String>,
}

impl CleanedRecord {
    /// Create a record with the required fields and neutral defaults for
    /// everything else.
    pub fn new(row: usize, title: impl Into<String>, year: i32, rating: f64) -> Self {
        Self {
            row,
            title: title.into(),
            genres: Vec::new(),
            year,
            country: CompactString::new(UNKNOWN_LABEL),
            rating,
            popularity: 0.0,
            vote_count: 0,
            runtime: None,
            media_type: MediaType::Movie,
            language: None,
            overview: None,
        }
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.genres = genres
            .into_iter()
            .map(|g| CompactString::new(g.as_ref()))
            .collect();
        self
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = CompactString::new(country);
        self
    }

    pub fn with_popularity(mut self, popularity: f64) -> Self {
        self.popularity = popularity;
        self
    }

    pub fn with_vote_count(mut self, vote_count: u64) -> Self {
        self.vote_count = vote_count;
        self
    }

    pub fn with_media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = media_type;
        self
    }

    /// `true` if this title carries the given genre tag (exact match).
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    /// Genre tags joined for display and export, e.g. `"Drama, Comedy"`.
    pub fn genre_label(&self) -> String {
        self.genres.join(", ")
    }
}
