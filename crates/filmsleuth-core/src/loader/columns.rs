/// Header normalisation and column-to-field mapping.
///
/// Source files name their columns inconsistently (`Vote_Average`,
/// `vote average`, `Genre\r`, ...). Each known field carries a list of
/// aliases in priority order; the first alias present in the header row wins.
use crate::model::{RawRecord, RawValue};

/// The record fields a column can feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Genre,
    ReleaseDate,
    Country,
    Rating,
    Popularity,
    VoteCount,
    Duration,
    MediaType,
    Overview,
    Language,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Title,
        Field::Genre,
        Field::ReleaseDate,
        Field::Country,
        Field::Rating,
        Field::Popularity,
        Field::VoteCount,
        Field::Duration,
        Field::MediaType,
        Field::Overview,
        Field::Language,
    ];

    /// Normalised header keys accepted for this field, highest priority first.
    ///
    /// Plain `rating` is last for [`Field::Rating`]: some catalogues use it
    /// for maturity ratings (`TV-MA`), so a numeric score column is preferred
    /// whenever one exists.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Title => &["title", "original_title", "name"],
            Self::Genre => &["genre", "genres", "listed_in"],
            Self::ReleaseDate => &[
                "release_date",
                "released",
                "release_year",
                "year",
                "date_added",
                "date",
            ],
            Self::Country => &["country", "countries", "production_country"],
            Self::Rating => &[
                "vote_average",
                "average_rating",
                "avg_rating",
                "imdb_score",
                "score",
                "user_rating",
                "rating",
            ],
            Self::Popularity => &["popularity", "popularity_score"],
            Self::VoteCount => &["vote_count", "votes", "num_votes"],
            Self::Duration => &["duration", "runtime", "runtime_minutes"],
            Self::MediaType => &["type", "media_type", "kind"],
            Self::Overview => &["overview", "description", "plot"],
            Self::Language => &["original_language", "language"],
        }
    }

    /// Fields whose absence makes every row unusable.
    pub fn is_required(self) -> bool {
        matches!(self, Self::Title | Self::Rating | Self::ReleaseDate)
    }
}

/// Strip stray carriage returns, BOMs, and surrounding whitespace from a
/// header as it appears in the file.
pub fn clean_header(raw: &str) -> String {
    raw.replace(['\r', '\u{feff}'], "").trim().to_owned()
}

/// Lower-case, underscore-separated key used for alias matching.
pub fn header_key(raw: &str) -> String {
    clean_header(raw)
        .chars()
        .map(|c| match c {
            ' ' | '-' | '.' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Resolved mapping from column position to record field.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    slots: Vec<Option<Field>>,
}

impl ColumnMap {
    /// Resolve a header row.
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Self {
        let keys: Vec<String> = headers.iter().map(|h| header_key(h.as_ref())).collect();
        let mut slots: Vec<Option<Field>> = vec![None; keys.len()];

        for field in Field::ALL {
            let found = field.aliases().iter().find_map(|alias| {
                keys.iter()
                    .enumerate()
                    .position(|(i, k)| slots[i].is_none() && k == alias)
            });
            if let Some(i) = found {
                slots[i] = Some(field);
            }
        }

        // A header that merely mentions "genre" (e.g. `Main Genre`) still
        // feeds the genre field when no exact alias matched.
        if !slots.contains(&Some(Field::Genre)) {
            if let Some(i) = keys
                .iter()
                .enumerate()
                .position(|(i, k)| slots[i].is_none() && k.contains("genre"))
            {
                slots[i] = Some(Field::Genre);
            }
        }

        Self { slots }
    }

    /// Column index feeding `field`, if any.
    pub fn column_of(&self, field: Field) -> Option<usize> {
        self.slots.iter().position(|s| *s == Some(field))
    }

    /// Required fields with no matching column.
    pub fn missing_required(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.column_of(*f).is_none())
            .collect()
    }

    /// Build a [`RawRecord`] from one row of cells. Cells beyond the header
    /// width and cells in unmapped columns are ignored.
    pub fn record<I>(&self, row: usize, cells: I) -> RawRecord
    where
        I: IntoIterator<Item = RawValue>,
    {
        let mut record = RawRecord::new(row);
        for (slot, value) in self.slots.iter().zip(cells) {
            let Some(field) = slot else {
                continue;
            };
            let target = match field {
                Field::Title => &mut record.title,
                Field::Genre => &mut record.genre,
                Field::ReleaseDate => &mut record.release_date,
                Field::Country => &mut record.country,
                Field::Rating => &mut record.rating,
                Field::Popularity => &mut record.popularity,
                Field::VoteCount => &mut record.vote_count,
                Field::Duration => &mut record.duration,
                Field::MediaType => &mut record.media_type,
                Field::Overview => &mut record.overview,
                Field::Language => &mut record.language,
            };
            *target = value;
        }
        record
    }
}
