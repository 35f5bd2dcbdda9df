/// Top-N most popular titles.
///
/// Ranks a filtered subset by popularity for the bar chart. Ties keep their
/// order in the subset.
use crate::model::CleanedRecord;

/// Positions within `subset` of the `n` most popular records.
pub fn top_popular_indices(subset: &[&CleanedRecord], n: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }
    let mut order: Vec<usize> = (0..subset.len()).collect();
    order.sort_by(|&a, &b| subset[b].popularity.total_cmp(&subset[a].popularity));
    order.truncate(n);
    order
}

/// The `n` most popular records of `subset`, most popular first.
pub fn top_popular<'a>(subset: &[&'a CleanedRecord], n: usize) -> Vec<&'a CleanedRecord> {
    top_popular_indices(subset, n)
        .into_iter()
        .map(|i| subset[i])
        .collect()
}
