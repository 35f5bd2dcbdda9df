/// Conjunctive record filtering.
///
/// A [`Predicate`] is the only filter state the dashboard holds; views are
/// always recomputed from `filter(records, predicate)`.
use crate::model::{CleanedRecord, MediaType};
use compact_str::CompactString;
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// Conjunction of optional clauses. An unset clause (empty set / `None`)
/// matches every record, so `Predicate::default()` matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    /// Record country must be one of these.
    pub countries: BTreeSet<CompactString>,
    /// Record must carry at least one of these genre tags.
    pub genres: BTreeSet<CompactString>,
    /// Release year must fall in this inclusive range.
    pub years: Option<RangeInclusive<i32>>,
    /// Rating must be at least this value.
    pub min_rating: Option<f64>,
    pub media_type: Option<MediaType>,
}

impl Predicate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.countries.insert(CompactString::new(country));
        self
    }

    pub fn with_genre(mut self, genre: &str) -> Self {
        self.genres.insert(CompactString::new(genre));
        self
    }

    /// Restrict to an inclusive year range. Reversed bounds are swapped.
    pub fn with_years(mut self, from: i32, to: i32) -> Self {
        self.years = Some(from.min(to)..=from.max(to));
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    pub fn with_media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = Some(media_type);
        self
    }

    /// `true` if no clause is set.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
            && self.genres.is_empty()
            && self.years.is_none()
            && self.min_rating.is_none()
            && self.media_type.is_none()
    }

    /// Evaluate the predicate against one record.
    pub fn matches(&self, record: &CleanedRecord) -> bool {
        if !self.countries.is_empty() && !self.countries.contains(record.country.as_str()) {
            return false;
        }
        if !self.genres.is_empty()
            && !record
                .genres
                .iter()
                .any(|g| self.genres.contains(g.as_str()))
        {
            return false;
        }
        if let Some(ref years) = self.years {
            if !years.contains(&record.year) {
                return false;
            }
        }
        if let Some(min) = self.min_rating {
            if record.rating < min {
                return false;
            }
        }
        if let Some(media_type) = self.media_type {
            if record.media_type != media_type {
                return false;
            }
        }
        true
    }
}

/// Select the records matching `predicate`, preserving input order.
///
/// An empty result is a valid outcome. Filtering an already-filtered subset
/// with the same predicate returns the same subset.
pub fn filter<'a, I>(records: I, predicate: &Predicate) -> Vec<&'a CleanedRecord>
where
    I: IntoIterator<Item = &'a CleanedRecord>,
{
    records
        .into_iter()
        .filter(|r| predicate.matches(r))
        .collect()
}
