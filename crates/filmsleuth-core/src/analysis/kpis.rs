/// Headline figures shown above the charts.
use crate::model::{format::round2, CleanedRecord};
use serde::Serialize;

/// Total titles plus mean rating and popularity, rounded to two decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Kpis {
    pub total: usize,
    pub avg_rating: f64,
    pub avg_popularity: f64,
}

/// Compute the KPIs of `subset`. An empty subset reports zeros.
pub fn kpis(subset: &[&CleanedRecord]) -> Kpis {
    if subset.is_empty() {
        return Kpis::default();
    }
    let n = subset.len() as f64;
    let rating: f64 = subset.iter().map(|r| r.rating).sum();
    let popularity: f64 = subset.iter().map(|r| r.popularity).sum();
    Kpis {
        total: subset.len(),
        avg_rating: round2(rating / n),
        avg_popularity: round2(popularity / n),
    }
}
