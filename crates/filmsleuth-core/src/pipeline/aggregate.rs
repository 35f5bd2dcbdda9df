/// Group-by aggregation over a filtered subset.
///
/// An [`AggregateView`] is a fresh value computed from a subset; nothing is
/// updated in place. Entries keep first-appearance order so rankings are
/// stable: when two groups tie, the one seen first in the input wins.
use super::clean::explode_genres;
use crate::model::CleanedRecord;
use compact_str::CompactString;
use std::collections::HashMap;
use std::fmt;

/// Grouping dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupBy {
    Country,
    Genre,
    Year,
}

/// Summary statistic computed per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Count,
    MeanRating,
    MeanPopularity,
}

/// Key of one group.
///
/// Years order numerically and before any text label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupKey {
    Year(i32),
    Label(CompactString),
}

impl GroupKey {
    /// Text form of a label key, `None` for years.
    pub fn as_label(&self) -> Option<&str> {
        match self {
            Self::Label(l) => Some(l.as_str()),
            Self::Year(_) => None,
        }
    }

    pub fn as_year(&self) -> Option<i32> {
        match self {
            Self::Year(y) => Some(*y),
            Self::Label(_) => None,
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year(y) => write!(f, "{y}"),
            Self::Label(l) => f.write_str(l),
        }
    }
}

/// One group's statistic.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateEntry {
    pub key: GroupKey,
    /// The requested metric.
    pub value: f64,
    /// Number of contributing records (or genre pairs).
    pub count: u64,
}

/// Mapping from group key to statistic, in first-appearance order.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateView {
    pub group_by: GroupBy,
    pub metric: Metric,
    pub entries: Vec<AggregateEntry>,
}

impl AggregateView {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Statistic for `key`, if that group exists.
    pub fn get(&self, key: &GroupKey) -> Option<f64> {
        self.entries.iter().find(|e| &e.key == key).map(|e| e.value)
    }

    /// Statistic for a text label key.
    pub fn get_label(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.key.as_label() == Some(label))
            .map(|e| e.value)
    }

    /// Sum of contributing counts across all groups.
    pub fn total_count(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entries by descending value; ties keep first-appearance order.
    pub fn ranked(&self) -> Vec<&AggregateEntry> {
        let mut ranked: Vec<&AggregateEntry> = self.entries.iter().collect();
        // `sort_by` is stable, which is what breaks ties by input order.
        ranked.sort_by(|a, b| b.value.total_cmp(&a.value));
        ranked
    }

    /// The `n` highest-valued entries.
    pub fn top(&self, n: usize) -> Vec<&AggregateEntry> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// Entries ordered by key (years ascending, labels lexicographic).
    pub fn sorted_by_key(&self) -> Vec<&AggregateEntry> {
        let mut sorted: Vec<&AggregateEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| a.key.cmp(&b.key));
        sorted
    }
}

#[derive(Default)]
struct Accumulator {
    count: u64,
    rating_sum: f64,
    popularity_sum: f64,
}

impl Accumulator {
    fn add(&mut self, record: &CleanedRecord) {
        self.count += 1;
        self.rating_sum += record.rating;
        self.popularity_sum += record.popularity;
    }

    fn finish(&self, metric: Metric) -> f64 {
        let n = self.count as f64;
        match metric {
            Metric::Count => n,
            Metric::MeanRating => self.rating_sum / n,
            Metric::MeanPopularity => self.popularity_sum / n,
        }
    }
}

/// Group `subset` by `group_by` and compute `metric` for each group.
///
/// Genre grouping runs over exploded (record, genre) pairs, so a record
/// tagged "Drama, Comedy" counts once under each tag and untagged records
/// count under "Unknown". An empty subset yields an empty view.
pub fn aggregate(subset: &[&CleanedRecord], group_by: GroupBy, metric: Metric) -> AggregateView {
    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut groups: Vec<(GroupKey, Accumulator)> = Vec::new();

    let mut add = |key: GroupKey, record: &CleanedRecord| {
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            groups.push((key, Accumulator::default()));
            groups.len() - 1
        });
        groups[slot].1.add(record);
    };

    match group_by {
        GroupBy::Country => {
            for record in subset {
                add(GroupKey::Label(record.country.clone()), *record);
            }
        }
        GroupBy::Year => {
            for record in subset {
                add(GroupKey::Year(record.year), *record);
            }
        }
        GroupBy::Genre => {
            for entry in explode_genres(subset.iter().copied()) {
                add(GroupKey::Label(CompactString::new(entry.genre)), entry.record);
            }
        }
    }

    let entries = groups
        .into_iter()
        .map(|(key, acc)| AggregateEntry {
            key,
            value: acc.finish(metric),
            count: acc.count,
        })
        .collect();

    AggregateView {
        group_by,
        metric,
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<CleanedRecord> {
        vec![
            CleanedRecord::new(2, "A", 2020, 8.0)
                .with_genres(["Drama", "Comedy"])
                .with_country("US")
                .with_popularity(100.0),
            CleanedRecord::new(3, "B", 2020, 6.0)
                .with_genres(["Comedy"])
                .with_country("FR")
                .with_popularity(50.0),
            CleanedRecord::new(4, "C", 2018, 7.0)
                .with_genres(["Horror"])
                .with_country("US")
                .with_popularity(10.0),
        ]
    }

    /// The worked example: one "Drama,Comedy" record counts once per tag.
    #[test]
    fn genre_count_of_worked_example() {
        let records = vec![CleanedRecord::new(2, "A", 2020, 8.0)
            .with_genres(["Drama", "Comedy"])
            .with_country("US")];
        let subset: Vec<&CleanedRecord> = records.iter().collect();
        let view = aggregate(&subset, GroupBy::Genre, Metric::Count);
        assert_eq!(view.len(), 2);
        assert_eq!(view.get_label("Drama"), Some(1.0));
        assert_eq!(view.get_label("Comedy"), Some(1.0));
    }

    #[test]
    fn country_counts_sum_to_subset_size() {
        let records = sample();
        let subset: Vec<&CleanedRecord> = records.iter().collect();
        for group_by in [GroupBy::Country, GroupBy::Year] {
            let view = aggregate(&subset, group_by, Metric::Count);
            let sum: f64 = view.entries.iter().map(|e| e.value).sum();
            assert_eq!(sum as usize, subset.len(), "{group_by:?}");
            assert_eq!(view.total_count() as usize, subset.len());
        }
    }

    #[test]
    fn genre_counts_sum_to_exploded_pairs() {
        let records = sample();
        let subset: Vec<&CleanedRecord> = records.iter().collect();
        let view = aggregate(&subset, GroupBy::Genre, Metric::Count);
        assert_eq!(
            view.total_count() as usize,
            explode_genres(subset.iter().copied()).len()
        );
    }

    #[test]
    fn mean_rating_per_year() {
        let records = sample();
        let subset: Vec<&CleanedRecord> = records.iter().collect();
        let view = aggregate(&subset, GroupBy::Year, Metric::MeanRating);
        assert_eq!(view.get(&GroupKey::Year(2020)), Some(7.0));
        assert_eq!(view.get(&GroupKey::Year(2018)), Some(7.0));
        let years: Vec<i32> = view
            .sorted_by_key()
            .iter()
            .filter_map(|e| e.key.as_year())
            .collect();
        assert_eq!(years, vec![2018, 2020]);
    }

    #[test]
    fn mean_popularity_per_country() {
        let records = sample();
        let subset: Vec<&CleanedRecord> = records.iter().collect();
        let view = aggregate(&subset, GroupBy::Country, Metric::MeanPopularity);
        assert_eq!(view.get_label("US"), Some(55.0));
        assert_eq!(view.get_label("FR"), Some(50.0));
    }

    #[test]
    fn empty_subset_is_empty_view() {
        let view = aggregate(&[], GroupBy::Genre, Metric::MeanRating);
        assert!(view.is_empty());
        assert!(view.ranked().is_empty());
    }

    /// Drama and Horror both count 1; Drama appears first in the input so
    /// it must rank ahead of Horror.
    #[test]
    fn ranking_ties_keep_input_order() {
        let records = sample();
        let subset: Vec<&CleanedRecord> = records.iter().collect();
        let view = aggregate(&subset, GroupBy::Genre, Metric::Count);
        let ranked: Vec<String> = view.ranked().iter().map(|e| e.key.to_string()).collect();
        assert_eq!(ranked, vec!["Comedy", "Drama", "Horror"]);
        assert_eq!(view.top(1)[0].key, GroupKey::Label("Comedy".into()));
    }

    #[test]
    fn aggregation_is_deterministic() {
        let records = sample();
        let subset: Vec<&CleanedRecord> = records.iter().collect();
        let a = aggregate(&subset, GroupBy::Genre, Metric::MeanRating);
        let b = aggregate(&subset, GroupBy::Genre, Metric::MeanRating);
        assert_eq!(a, b);
    }
}
