/// Per-field normalisers used by [`super::clean`].
use crate::model::{MediaType, RawValue, Runtime};
use compact_str::CompactString;

/// Separators accepted between genre tags.
const GENRE_SEPARATORS: [char; 2] = [',', '|'];

/// Split a multi-valued genre cell into individual tags.
///
/// Tags are trimmed (stray `\r` included), empties discarded, and repeats
/// removed with the first occurrence kept.
pub fn split_genres(value: &RawValue) -> Vec<CompactString> {
    let Some(text) = value.as_text() else {
        return Vec::new();
    };

    let mut tags: Vec<CompactString> = Vec::new();
    for part in text.split(GENRE_SEPARATORS) {
        let tag = part.trim_matches(|c: char| c.is_whitespace() || c == '\r');
        if tag.is_empty() || tags.iter().any(|t| t == tag) {
            continue;
        }
        tags.push(CompactString::new(tag));
    }
    tags
}

/// Normalise a duration cell.
///
/// Accepts `"90 min"`, `"1h 30m"`, `"2 hours"`, bare minute counts, and
/// season counts (`"3 Seasons"`). Returns `None` for anything else and for
/// zero durations.
pub fn parse_runtime(value: &RawValue) -> Option<Runtime> {
    if let RawValue::Number(n) = value {
        return (n.is_finite() && *n >= 1.0 && *n < u32::MAX as f64)
            .then(|| Runtime::Minutes(n.round() as u32));
    }

    let text = value.as_text()?.to_ascii_lowercase();

    if text.contains("season") {
        let count: u32 = leading_number(&text)?.round() as u32;
        return (count > 0).then_some(Runtime::Seasons(count));
    }

    let mut minutes = 0.0f64;
    let mut rest = text.as_str();
    let mut saw_any = false;
    while !rest.trim_start().is_empty() {
        rest = rest.trim_start();
        let num_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if num_len == 0 {
            return None;
        }
        let amount: f64 = rest[..num_len].parse().ok()?;
        rest = rest[num_len..].trim_start();

        let unit_len = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        let unit = &rest[..unit_len];
        rest = &rest[unit_len..];

        let factor = match unit {
            "" | "m" | "min" | "mins" | "minute" | "minutes" => 1.0,
            "h" | "hr" | "hrs" | "hour" | "hours" => 60.0,
            _ => return None,
        };
        minutes += amount * factor;
        saw_any = true;
    }

    let minutes = minutes.round();
    (saw_any && minutes >= 1.0 && minutes < u32::MAX as f64)
        .then(|| Runtime::Minutes(minutes as u32))
}

fn leading_number(text: &str) -> Option<f64> {
    let t = text.trim_start();
    let len = t
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(t.len());
    t[..len].parse().ok()
}

/// Classify a title as film or series.
///
/// An explicit type column wins; otherwise a season-based runtime implies a
/// series. Everything else is a film.
pub fn parse_media_type(value: &RawValue, runtime: Option<Runtime>) -> MediaType {
    if let Some(text) = value.as_text() {
        let t = text.to_ascii_lowercase();
        if t.contains("show") || t.contains("series") || t == "tv" {
            return MediaType::Show;
        }
        if t.contains("movie") || t.contains("film") {
            return MediaType::Movie;
        }
    }
    match runtime {
        Some(Runtime::Seasons(_)) => MediaType::Show,
        _ => MediaType::Movie,
    }
}

/// Country label, first entry of a comma-separated list.
pub fn parse_country(value: &RawValue) -> Option<CompactString> {
    let text = value.as_text()?;
    text.split(',')
        .map(str::trim)
        .find(|c| !c.is_empty())
        .map(CompactString::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> RawValue {
        RawValue::from_text(s)
    }

    // ── split_genres ─────────────────────────────────────────────────────

    #[test]
    fn splits_comma_and_pipe_lists() {
        assert_eq!(split_genres(&text("Drama,Comedy")), vec!["Drama", "Comedy"]);
        assert_eq!(
            split_genres(&text("Action| Adventure |Sci-Fi")),
            vec!["Action", "Adventure", "Sci-Fi"]
        );
    }

    #[test]
    fn strips_carriage_returns_and_empties() {
        assert_eq!(
            split_genres(&text("Drama, ,Comedy\r")),
            vec!["Drama", "Comedy"]
        );
        assert!(split_genres(&text("")).is_empty());
        assert!(split_genres(&RawValue::Empty).is_empty());
        assert!(split_genres(&text(" , ")).is_empty());
    }

    #[test]
    fn removes_duplicate_tags() {
        assert_eq!(
            split_genres(&text("Drama, Drama, Comedy")),
            vec!["Drama", "Comedy"]
        );
    }

    // ── parse_runtime ────────────────────────────────────────────────────

    #[test]
    fn minute_forms() {
        assert_eq!(parse_runtime(&text("90 min")), Some(Runtime::Minutes(90)));
        assert_eq!(parse_runtime(&text("90")), Some(Runtime::Minutes(90)));
        assert_eq!(parse_runtime(&text("1h 30m")), Some(Runtime::Minutes(90)));
        assert_eq!(parse_runtime(&text("2 hours")), Some(Runtime::Minutes(120)));
        assert_eq!(parse_runtime(&text("1.5h")), Some(Runtime::Minutes(90)));
        assert_eq!(
            parse_runtime(&RawValue::Number(142.0)),
            Some(Runtime::Minutes(142))
        );
    }

    #[test]
    fn season_forms() {
        assert_eq!(parse_runtime(&text("1 Season")), Some(Runtime::Seasons(1)));
        assert_eq!(parse_runtime(&text("3 Seasons")), Some(Runtime::Seasons(3)));
    }

    #[test]
    fn malformed_runtime_is_none() {
        assert_eq!(parse_runtime(&text("long")), None);
        assert_eq!(parse_runtime(&text("90 parsecs")), None);
        assert_eq!(parse_runtime(&text("0 min")), None);
        assert_eq!(parse_runtime(&text("Seasons")), None);
        assert_eq!(parse_runtime(&RawValue::Empty), None);
    }

    // ── parse_media_type ─────────────────────────────────────────────────

    #[test]
    fn media_type_from_column() {
        assert_eq!(parse_media_type(&text("TV Show"), None), MediaType::Show);
        assert_eq!(parse_media_type(&text("Movie"), None), MediaType::Movie);
        assert_eq!(parse_media_type(&text("Mini-Series"), None), MediaType::Show);
    }

    #[test]
    fn media_type_inferred_from_seasons() {
        assert_eq!(
            parse_media_type(&RawValue::Empty, Some(Runtime::Seasons(2))),
            MediaType::Show
        );
        assert_eq!(
            parse_media_type(&RawValue::Empty, Some(Runtime::Minutes(90))),
            MediaType::Movie
        );
        assert_eq!(parse_media_type(&RawValue::Empty, None), MediaType::Movie);
    }

    // ── parse_country ────────────────────────────────────────────────────

    #[test]
    fn first_listed_country_is_used() {
        assert_eq!(
            parse_country(&text("United States, India")).as_deref(),
            Some("United States")
        );
        assert_eq!(parse_country(&text(", France")).as_deref(), Some("France"));
        assert_eq!(parse_country(&text("  ")), None);
    }
}
