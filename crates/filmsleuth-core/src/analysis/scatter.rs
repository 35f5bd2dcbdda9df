/// Popularity vs. rating scatter series.
///
/// Marker size is scaled linearly from vote count into
/// [`MIN_MARKER_SIZE`, `MAX_MARKER_SIZE`].
use crate::model::CleanedRecord;

pub const MIN_MARKER_SIZE: f32 = 5.0;
pub const MAX_MARKER_SIZE: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    /// Position of the record within the subset.
    pub index: usize,
    pub popularity: f64,
    pub rating: f64,
    pub year: i32,
    pub marker_size: f32,
}

/// One point per record of `subset`.
///
/// When every vote count is equal there is nothing to scale against and all
/// markers get the minimum size.
pub fn popularity_vs_rating(subset: &[&CleanedRecord]) -> Vec<ScatterPoint> {
    let (lo, hi) = subset
        .iter()
        .map(|r| r.vote_count)
        .fold((u64::MAX, 0u64), |(lo, hi), v| (lo.min(v), hi.max(v)));

    subset
        .iter()
        .enumerate()
        .map(|(index, r)| {
            let marker_size = if hi > lo {
                let t = (r.vote_count - lo) as f64 / (hi - lo) as f64;
                MIN_MARKER_SIZE + (MAX_MARKER_SIZE - MIN_MARKER_SIZE) * t as f32
            } else {
                MIN_MARKER_SIZE
            };
            ScatterPoint {
                index,
                popularity: r.popularity,
                rating: r.rating,
                year: r.year,
                marker_size,
            }
        })
        .collect()
}
