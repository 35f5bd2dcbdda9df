/// Genre distribution for the pie chart.
///
/// Counts (record, genre) pairs over the subset and computes each genre's
/// share of all pairs. Records with no genre tags are left out entirely, so
/// "Unknown" never appears here.
use crate::model::CleanedRecord;
use compact_str::CompactString;
use serde::Serialize;
use std::collections::HashMap;

/// Count and percentage for one genre.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreShare {
    pub genre: CompactString,
    pub count: u64,
    /// Share of all genre pairs in the subset, 0..=100.
    pub percent: f64,
}

/// Per-genre counts in descending order; ties keep first appearance.
pub fn genre_distribution(subset: &[&CleanedRecord]) -> Vec<GenreShare> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut shares: Vec<GenreShare> = Vec::new();
    let mut total = 0u64;

    for record in subset {
        for genre in &record.genres {
            let slot = *index.entry(genre.as_str()).or_insert_with(|| {
                shares.push(GenreShare {
                    genre: genre.clone(),
                    count: 0,
                    percent: 0.0,
                });
                shares.len() - 1
            });
            shares[slot].count += 1;
            total += 1;
        }
    }

    for share in &mut shares {
        share.percent = share.count as f64 * 100.0 / total as f64;
    }
    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_exploded_pairs() {
        let records = vec![
            CleanedRecord::new(2, "A", 2020, 8.0).with_genres(["Drama", "Comedy"]),
            CleanedRecord::new(3, "B", 2020, 6.0).with_genres(["Comedy"]),
            CleanedRecord::new(4, "C", 2020, 6.0),
        ];
        let subset: Vec<&CleanedRecord> = records.iter().collect();
        let dist = genre_distribution(&subset);
        assert_eq!(dist.len(), 2);
        assert_eq!(dist[0].genre, "Comedy");
        assert_eq!(dist[0].count, 2);
        assert!((dist[0].percent - 66.666).abs() < 0.01);
        assert_eq!(dist[1].genre, "Drama");
        let total: f64 = dist.iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn untagged_subset_is_empty() {
        let records = vec![CleanedRecord::new(2, "A", 2020, 8.0)];
        let subset: Vec<&CleanedRecord> = records.iter().collect();
        assert!(genre_distribution(&subset).is_empty());
    }
}
