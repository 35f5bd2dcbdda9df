/// Row validation, imputation, and normalisation.
///
/// Drop/impute policy:
///
/// | Field          | Missing            | Malformed          |
/// |----------------|--------------------|--------------------|
/// | title          | drop row           | n/a                |
/// | rating         | drop row           | drop row           |
/// | release date   | drop row           | drop row           |
/// | country        | `"Unknown"`        | n/a                |
/// | popularity     | `0.0`              | `0.0`              |
/// | vote count     | `0`                | `0`                |
/// | duration       | `None`             | `None`             |
///
/// Dropping is per-row and never aborts the whole load.
use super::dates::parse_year;
use super::fields::{parse_country, parse_media_type, parse_runtime, split_genres};
use crate::loader::RawDataset;
use crate::model::{CleanedRecord, RawRecord, RawValue, UNKNOWN_LABEL};
use compact_str::CompactString;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Why a row was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DropReason {
    MissingTitle,
    MissingRating,
    InvalidRating,
    InvalidDate,
}

/// Counts produced by a cleaning pass.
///
/// Invariants: `dropped == input_rows - kept`, and the per-reason counts
/// (including `unreadable`) sum to `dropped`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    pub input_rows: usize,
    pub kept: usize,
    pub dropped: usize,
    pub missing_title: usize,
    pub missing_rating: usize,
    pub invalid_rating: usize,
    pub invalid_date: usize,
    /// Rows the reader could not decode (only set by [`clean_dataset`]).
    pub unreadable: usize,
}

impl CleanReport {
    fn record_drop(&mut self, reason: DropReason) {
        self.dropped += 1;
        match reason {
            DropReason::MissingTitle => self.missing_title += 1,
            DropReason::MissingRating => self.missing_rating += 1,
            DropReason::InvalidRating => self.invalid_rating += 1,
            DropReason::InvalidDate => self.invalid_date += 1,
        }
    }
}

/// Output of [`clean`]: the surviving records and what happened to the rest.
#[derive(Debug, Clone, Default)]
pub struct Cleaned {
    pub records: Vec<CleanedRecord>,
    pub report: CleanReport,
}

/// Validate and normalise raw rows.
///
/// Never fails: malformed rows are dropped individually, logged at `debug`,
/// and counted in the returned [`CleanReport`]. Output order follows input
/// order.
pub fn clean(raw_rows: &[RawRecord]) -> Cleaned {
    let mut report = CleanReport {
        input_rows: raw_rows.len(),
        ..CleanReport::default()
    };
    let mut records = Vec::with_capacity(raw_rows.len());

    for raw in raw_rows {
        match clean_row(raw) {
            Ok(record) => records.push(record),
            Err(reason) => {
                debug!("Dropping row {}: {:?}", raw.row, reason);
                report.record_drop(reason);
            }
        }
    }

    report.kept = records.len();
    debug_assert_eq!(report.dropped, report.input_rows - report.kept);

    info!(
        "Cleaned {} rows: kept {}, dropped {}",
        report.input_rows, report.kept, report.dropped
    );
    if report.dropped > 0 {
        warn!(
            "Dropped rows -- missing title: {}, missing rating: {}, invalid rating: {}, invalid date: {}",
            report.missing_title, report.missing_rating, report.invalid_rating, report.invalid_date
        );
    }

    Cleaned { records, report }
}

/// Clean a loaded dataset, folding rows the reader could not decode into the
/// drop counts.
pub fn clean_dataset(dataset: &RawDataset) -> Cleaned {
    let mut cleaned = clean(&dataset.rows);
    let unreadable = dataset.unreadable_rows;
    cleaned.report.unreadable = unreadable;
    cleaned.report.input_rows += unreadable;
    cleaned.report.dropped += unreadable;
    cleaned
}

fn clean_row(raw: &RawRecord) -> Result<CleanedRecord, DropReason> {
    let title = raw
        .title
        .as_text()
        .map(|t| t.into_owned())
        .ok_or(DropReason::MissingTitle)?;

    if raw.rating.is_blank() {
        return Err(DropReason::MissingRating);
    }
    let rating = raw
        .rating
        .as_f64()
        .filter(|r| *r >= 0.0)
        .ok_or(DropReason::InvalidRating)?;

    let year = parse_year(&raw.release_date).ok_or(DropReason::InvalidDate)?;

    let runtime = parse_runtime(&raw.duration);
    if runtime.is_none() && !raw.duration.is_blank() {
        debug!("Row {}: unrecognised duration {:?}", raw.row, raw.duration);
    }

    Ok(CleanedRecord {
        row: raw.row,
        title,
        genres: split_genres(&raw.genre),
        year,
        country: parse_country(&raw.country)
            .unwrap_or_else(|| CompactString::new(UNKNOWN_LABEL)),
        rating,
        popularity: raw.popularity.as_f64().unwrap_or(0.0),
        vote_count: parse_count(&raw.vote_count),
        runtime,
        media_type: parse_media_type(&raw.media_type, runtime),
        language: raw.language.as_text().map(|l| CompactString::new(l.as_ref())),
        overview: raw.overview.as_text().map(|o| o.into_owned()),
    })
}

fn parse_count(value: &RawValue) -> u64 {
    value
        .as_f64()
        .filter(|v| *v >= 0.0)
        .map(|v| v.round() as u64)
        .unwrap_or(0)
}

/// One (record, genre) pair.
#[derive(Debug, Clone, Copy)]
pub struct GenreEntry<'a> {
    pub record: &'a CleanedRecord,
    pub genre: &'a str,
}

/// Explode records into one entry per genre tag.
///
/// A record without tags yields a single entry under [`UNKNOWN_LABEL`], so
/// every record is represented at least once.
pub fn explode_genres<'a, I>(records: I) -> Vec<GenreEntry<'a>>
where
    I: IntoIterator<Item = &'a CleanedRecord>,
{
    let mut entries = Vec::new();
    for record in records {
        if record.genres.is_empty() {
            entries.push(GenreEntry {
                record,
                genre: UNKNOWN_LABEL,
            });
        } else {
            entries.extend(record.genres.iter().map(|g| GenreEntry {
                record,
                genre: g.as_str(),
            }));
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MediaType, Runtime};

    fn text(s: &str) -> RawValue {
        RawValue::from_text(s)
    }

    fn row(
        n: usize,
        title: &str,
        genre: &str,
        rating: RawValue,
        country: &str,
        date: &str,
    ) -> RawRecord {
        RawRecord {
            title: text(title),
            genre: text(genre),
            rating,
            country: text(country),
            release_date: text(date),
            ..RawRecord::new(n)
        }
    }

    /// The worked example: the second row is dropped for its missing
    /// rating, the first keeps both genres.
    #[test]
    fn worked_example() {
        let raw = vec![
            row(2, "Film A", "Drama,Comedy", RawValue::Number(8.0), "US", "2020-05-01"),
            row(3, "Film B", "", RawValue::Empty, "FR", "bad-date"),
        ];
        let cleaned = clean(&raw);

        assert_eq!(cleaned.records.len(), 1);
        let r = &cleaned.records[0];
        assert_eq!(r.genres, vec!["Drama", "Comedy"]);
        assert_eq!(r.rating, 8.0);
        assert_eq!(r.country, "US");
        assert_eq!(r.year, 2020);

        assert_eq!(cleaned.report.input_rows, 2);
        assert_eq!(cleaned.report.kept, 1);
        assert_eq!(cleaned.report.dropped, 1);
        assert_eq!(cleaned.report.missing_rating, 1);

        let pairs = explode_genres(&cleaned.records);
        let genres: Vec<&str> = pairs.iter().map(|p| p.genre).collect();
        assert_eq!(genres, vec!["Drama", "Comedy"]);
        assert!(pairs.iter().all(|p| p.record.rating == 8.0 && p.record.year == 2020));
    }

    #[test]
    fn missing_title_is_dropped() {
        let raw = vec![row(2, "  ", "Drama", RawValue::Number(7.0), "US", "2020")];
        let cleaned = clean(&raw);
        assert!(cleaned.records.is_empty());
        assert_eq!(cleaned.report.missing_title, 1);
    }

    #[test]
    fn non_numeric_rating_is_dropped() {
        let raw = vec![
            row(2, "A", "Drama", text("TV-MA"), "US", "2020"),
            row(3, "B", "Drama", RawValue::Number(-1.0), "US", "2020"),
        ];
        let cleaned = clean(&raw);
        assert!(cleaned.records.is_empty());
        assert_eq!(cleaned.report.invalid_rating, 2);
    }

    #[test]
    fn decimal_comma_rating_is_dropped() {
        let raw = vec![
            row(2, "Amelie", "Romance", text("7,5"), "France", "2001"),
            row(3, "Heat", "Crime", text("8.3"), "US", "1995"),
        ];
        let cleaned = clean(&raw);
        assert_eq!(cleaned.records.len(), 1);
        assert_eq!(cleaned.records[0].title, "Heat");
        assert_eq!(cleaned.report.invalid_rating, 1);
        assert!(cleaned.records.iter().all(|r| r.rating <= 10.0));
    }

    #[test]
    fn unparseable_date_is_dropped() {
        let raw = vec![row(2, "A", "Drama", RawValue::Number(7.0), "US", "someday")];
        let cleaned = clean(&raw);
        assert!(cleaned.records.is_empty());
        assert_eq!(cleaned.report.invalid_date, 1);
    }

    #[test]
    fn missing_country_becomes_unknown() {
        let raw = vec![row(2, "A", "Drama", RawValue::Number(7.0), "", "2020")];
        let cleaned = clean(&raw);
        assert_eq!(cleaned.records[0].country, UNKNOWN_LABEL);
    }

    #[test]
    fn optional_numbers_are_imputed() {
        let mut r = row(2, "A", "Drama", RawValue::Number(7.0), "US", "2020");
        r.popularity = text("not a number");
        r.vote_count = RawValue::Empty;
        let cleaned = clean(&[r]);
        assert_eq!(cleaned.records[0].popularity, 0.0);
        assert_eq!(cleaned.records[0].vote_count, 0);
    }

    #[test]
    fn runtime_and_media_type_are_normalised() {
        let mut r = row(2, "Dark", "Sci-Fi", RawValue::Number(8.7), "Germany", "2017");
        r.duration = text("3 Seasons");
        let mut m = row(3, "Heat", "Crime", RawValue::Number(8.3), "US", "1995");
        m.duration = text("2h 50m");
        m.media_type = text("Movie");
        let cleaned = clean(&[r, m]);
        assert_eq!(cleaned.records[0].runtime, Some(Runtime::Seasons(3)));
        assert_eq!(cleaned.records[0].media_type, MediaType::Show);
        assert_eq!(cleaned.records[1].runtime, Some(Runtime::Minutes(170)));
        assert_eq!(cleaned.records[1].media_type, MediaType::Movie);
    }

    /// Output size never exceeds input and the drop count balances.
    #[test]
    fn drop_count_balances() {
        let raw = vec![
            row(2, "A", "Drama", RawValue::Number(7.0), "US", "2020"),
            row(3, "", "Drama", RawValue::Number(7.0), "US", "2020"),
            row(4, "C", "Drama", RawValue::Empty, "US", "2020"),
            row(5, "D", "Drama", text("x"), "US", "2020"),
            row(6, "E", "Drama", RawValue::Number(6.0), "US", "?"),
            row(7, "F", "", RawValue::Number(6.0), "", "1999"),
        ];
        let cleaned = clean(&raw);
        let rep = &cleaned.report;
        assert!(cleaned.records.len() <= raw.len());
        assert_eq!(rep.dropped, rep.input_rows - rep.kept);
        assert_eq!(
            rep.missing_title + rep.missing_rating + rep.invalid_rating + rep.invalid_date,
            rep.dropped
        );
        assert_eq!(rep.kept, 2);
    }

    #[test]
    fn empty_input_is_empty_output() {
        let cleaned = clean(&[]);
        assert!(cleaned.records.is_empty());
        assert_eq!(cleaned.report, CleanReport::default());
    }

    #[test]
    fn unreadable_rows_count_as_dropped() {
        let dataset = RawDataset {
            rows: vec![row(2, "A", "Drama", RawValue::Number(7.0), "US", "2020")],
            unreadable_rows: 2,
            ..RawDataset::default()
        };
        let cleaned = clean_dataset(&dataset);
        assert_eq!(cleaned.report.input_rows, 3);
        assert_eq!(cleaned.report.kept, 1);
        assert_eq!(cleaned.report.dropped, 2);
        assert_eq!(cleaned.report.unreadable, 2);
    }

    #[test]
    fn untagged_records_explode_to_unknown() {
        let records = vec![CleanedRecord::new(2, "A", 2020, 7.0)];
        let pairs = explode_genres(&records);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].genre, UNKNOWN_LABEL);
    }
}
