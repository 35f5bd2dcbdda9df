/// CSV export of a filtered subset.
///
/// Genres are re-joined with `", "` and the release year is written instead
/// of the free-form source date.
use crate::error::ExportError;
use crate::model::CleanedRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const EXPORT_HEADER: [&str; 9] = [
    "Title",
    "Genre",
    "Release_Year",
    "Country",
    "Vote_Average",
    "Popularity",
    "Vote_Count",
    "Duration",
    "Type",
];

/// Default file name offered by the dashboard's download button.
pub const DEFAULT_EXPORT_NAME: &str = "filtered_movies.csv";

/// Write `subset` as CSV to `writer`, returning the number of data rows.
///
/// An empty subset writes only the header.
pub fn write_csv<W: Write>(subset: &[&CleanedRecord], writer: W) -> Result<usize, ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(EXPORT_HEADER)?;
    for record in subset {
        let runtime = record.runtime.map(|r| r.to_string()).unwrap_or_default();
        wtr.write_record([
            record.title.as_str(),
            record.genre_label().as_str(),
            record.year.to_string().as_str(),
            record.country.as_str(),
            record.rating.to_string().as_str(),
            record.popularity.to_string().as_str(),
            record.vote_count.to_string().as_str(),
            runtime.as_str(),
            record.media_type.label(),
        ])?;
    }
    wtr.flush()?;
    Ok(subset.len())
}

/// Write `subset` to a CSV file at `path`, replacing any existing file.
pub fn export_csv(subset: &[&CleanedRecord], path: &Path) -> Result<usize, ExportError> {
    let file = File::create(path)?;
    let rows = write_csv(subset, BufWriter::new(file))?;
    tracing::info!("Exported {rows} rows to {}", path.display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MediaType, Runtime};

    fn to_string(subset: &[&CleanedRecord]) -> String {
        let mut buf = Vec::new();
        write_csv(subset, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_subset_writes_header_only() {
        assert_eq!(
            to_string(&[]),
            "Title,Genre,Release_Year,Country,Vote_Average,Popularity,Vote_Count,Duration,Type\n"
        );
    }

    #[test]
    fn genres_are_rejoined_and_quoted() {
        let mut r = CleanedRecord::new(2, "Heat", 1995, 8.3)
            .with_genres(["Crime", "Drama"])
            .with_country("US")
            .with_popularity(42.5)
            .with_vote_count(1200)
            .with_media_type(MediaType::Movie);
        r.runtime = Some(Runtime::Minutes(170));
        let out = to_string(&[&r]);
        let line = out.lines().nth(1).unwrap();
        assert_eq!(line, "Heat,\"Crime, Drama\",1995,US,8.3,42.5,1200,170 min,Movie");
    }

    #[test]
    fn export_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_NAME);
        let r = CleanedRecord::new(2, "Alien", 1979, 8.5);
        assert_eq!(export_csv(&[&r], &path).unwrap(), 1);
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
    }
}
