/// Display formatting for KPI values and chart labels.
///
/// All internal statistics are `f64`/`u64`; strings are only produced at the
/// display boundary.

/// Format a count with thousand separators, e.g. `9,827`.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Format a score (rating or popularity) with two decimals.
///
/// Non-finite values render as "-" so a chart never
/// shows "NaN".
pub fn format_score(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        "-".to_owned()
    }
}

/// Format a share of a whole as a percentage with one decimal.
pub fn format_percent(percent: f64) -> String {
    if percent.is_finite() {
        format!("{percent:.1}%")
    } else {
        "-".to_owned()
    }
}

/// Round to two decimals, the precision used for all displayed means.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(9_827), "9,827");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(7.0), "7.00");
        assert_eq!(format_score(6.456), "6.46");
        assert_eq!(format_score(f64::NAN), "-");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.345), "12.3%");
        assert_eq!(format_percent(100.0), "100.0%");
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(6.4567), 6.46);
        assert_eq!(round2(0.0), 0.0);
    }
}
