/// Release-year extraction from free-form date cells.
///
/// Source files mix bare years, ISO dates, US and European day orders,
/// long-form month names, and spreadsheet serial dates. Anything that does
/// not resolve to a plausible year yields `None` and the row is dropped.
use crate::model::RawValue;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime};

/// Earliest accepted release year.
pub const MIN_YEAR: i32 = 1850;
/// Latest accepted release year.
pub const MAX_YEAR: i32 = 2100;

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Extract a release year from a raw cell.
pub fn parse_year(value: &RawValue) -> Option<i32> {
    let year = match value {
        RawValue::Empty => None,
        RawValue::Number(n) => whole_year(*n),
        RawValue::DateTime(serial) => serial_to_date(*serial).map(|d| d.year()),
        RawValue::Text(s) => parse_year_text(s.trim()),
    }?;
    (MIN_YEAR..=MAX_YEAR).contains(&year).then_some(year)
}

fn whole_year(n: f64) -> Option<i32> {
    (n.is_finite() && n.fract() == 0.0 && n.abs() < 100_000.0).then_some(n as i32)
}

/// Convert a spreadsheet serial day number (1899-12-30 epoch) to a date.
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_signed(Duration::try_days(serial.floor() as i64)?)
}

fn parse_year_text(s: &str) -> Option<i32> {
    if s.is_empty() {
        return None;
    }

    // Bare year, possibly exported as a float ("2020.0").
    if let Ok(n) = s.parse::<f64>() {
        return whole_year(n);
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d.year());
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.year());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.year());
    }

    // Year-month only ("2020-05").
    if s.len() == 7 && s.as_bytes()[4] == b'-' {
        if let Ok(d) = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d") {
            return Some(d.year());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> RawValue {
        RawValue::from_text(s)
    }

    #[test]
    fn bare_years() {
        assert_eq!(parse_year(&text("2020")), Some(2020));
        assert_eq!(parse_year(&text("2020.0")), Some(2020));
        assert_eq!(parse_year(&RawValue::Number(1999.0)), Some(1999));
    }

    #[test]
    fn iso_and_slashed_dates() {
        assert_eq!(parse_year(&text("2020-05-01")), Some(2020));
        assert_eq!(parse_year(&text("2020/05/01")), Some(2020));
        assert_eq!(parse_year(&text("05/01/2020")), Some(2020));
        assert_eq!(parse_year(&text("25-12-2019")), Some(2019));
        assert_eq!(parse_year(&text("2021-03")), Some(2021));
    }

    #[test]
    fn long_form_dates() {
        assert_eq!(parse_year(&text("September 25, 2021")), Some(2021));
        assert_eq!(parse_year(&text(" Sep 5, 2018")), Some(2018));
        assert_eq!(parse_year(&text("1 May 2020")), Some(2020));
    }

    #[test]
    fn datetimes() {
        assert_eq!(parse_year(&text("2022-01-02T03:04:05")), Some(2022));
        assert_eq!(parse_year(&text("2022-01-02 03:04:05")), Some(2022));
        assert_eq!(parse_year(&text("2022-01-02T03:04:05Z")), Some(2022));
    }

    /// 43952 is 2020-05-01 in spreadsheet serial form.
    #[test]
    fn spreadsheet_serial_dates() {
        assert_eq!(parse_year(&RawValue::DateTime(43952.0)), Some(2020));
        assert_eq!(
            serial_to_date(43952.0),
            NaiveDate::from_ymd_opt(2020, 5, 1)
        );
        assert_eq!(parse_year(&RawValue::DateTime(0.0)), None);
    }

    #[test]
    fn unparseable_or_implausible() {
        assert_eq!(parse_year(&text("bad-date")), None);
        assert_eq!(parse_year(&text("")), None);
        assert_eq!(parse_year(&RawValue::Empty), None);
        assert_eq!(parse_year(&text("20201")), None);
        assert_eq!(parse_year(&RawValue::Number(2020.5)), None);
        assert_eq!(parse_year(&RawValue::Number(43952.0)), None);
        assert_eq!(parse_year(&text("1700")), None);
    }
}
