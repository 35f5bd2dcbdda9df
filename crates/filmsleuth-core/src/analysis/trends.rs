/// Mean rating per release year, for the line chart.
use crate::model::CleanedRecord;
use crate::pipeline::{aggregate, GroupBy, Metric};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearPoint {
    pub year: i32,
    pub mean_rating: f64,
    /// Titles released that year.
    pub titles: u64,
}

/// Mean rating per year, years ascending.
pub fn rating_by_year(subset: &[&CleanedRecord]) -> Vec<YearPoint> {
    aggregate(subset, GroupBy::Year, Metric::MeanRating)
        .sorted_by_key()
        .into_iter()
        .filter_map(|e| {
            e.key.as_year().map(|year| YearPoint {
                year,
                mean_rating: e.value,
                titles: e.count,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_ascend_with_means() {
        let records = vec![
            CleanedRecord::new(2, "A", 2021, 6.0),
            CleanedRecord::new(3, "B", 2019, 9.0),
            CleanedRecord::new(4, "C", 2021, 8.0),
        ];
        let subset: Vec<&CleanedRecord> = records.iter().collect();
        let points = rating_by_year(&subset);
        assert_eq!(
            points,
            vec![
                YearPoint { year: 2019, mean_rating: 9.0, titles: 1 },
                YearPoint { year: 2021, mean_rating: 7.0, titles: 2 },
            ]
        );
    }

    #[test]
    fn empty_subset_has_no_points() {
        assert!(rating_by_year(&[]).is_empty());
    }
}
