/// Distinct values offered by each filter control.
use crate::model::CleanedRecord;
use compact_str::CompactString;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Facets {
    /// Ascending.
    pub years: Vec<i32>,
    /// Lexicographic; excludes the "Unknown" placeholder for untagged records.
    pub genres: Vec<CompactString>,
    pub countries: Vec<CompactString>,
}

impl Facets {
    /// Earliest and latest year, `None` for an empty dataset.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        Some((*self.years.first()?, *self.years.last()?))
    }
}

pub fn facets(records: &[CleanedRecord]) -> Facets {
    let mut years = BTreeSet::new();
    let mut genres = BTreeSet::new();
    let mut countries = BTreeSet::new();
    for record in records {
        years.insert(record.year);
        genres.extend(record.genres.iter().cloned());
        countries.insert(record.country.clone());
    }
    Facets {
        years: years.into_iter().collect(),
        genres: genres.into_iter().collect(),
        countries: countries.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_sorted_values() {
        let records = vec![
            CleanedRecord::new(2, "A", 2021, 8.0)
                .with_genres(["Drama", "Comedy"])
                .with_country("US"),
            CleanedRecord::new(3, "B", 2019, 6.0)
                .with_genres(["Comedy"])
                .with_country("FR"),
            CleanedRecord::new(4, "C", 2021, 6.0),
        ];
        let f = facets(&records);
        assert_eq!(f.years, vec![2019, 2021]);
        assert_eq!(f.genres, vec!["Comedy", "Drama"]);
        assert_eq!(f.countries, vec!["FR", "US", "Unknown"]);
        assert_eq!(f.year_span(), Some((2019, 2021)));
    }

    #[test]
    fn empty_dataset_has_no_span() {
        assert_eq!(facets(&[]).year_span(), None);
    }
}
