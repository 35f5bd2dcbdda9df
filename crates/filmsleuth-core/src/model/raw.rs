/// Unprocessed rows exactly as the loader read them.
///
/// Every field is a [`RawValue`] so the cleaning step, not the loader,
/// decides what counts as missing or malformed.
use std::borrow::Cow;

/// Cell tokens that spreadsheet exports commonly use for "no value".
const NULL_TOKENS: &[&str] = &["nan", "null", "none", "n/a", "na", "#n/a"];

/// A single cell value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RawValue {
    /// Blank cell or absent column.
    #[default]
    Empty,
    /// Free text (all CSV cells arrive as text).
    Text(String),
    /// Numeric spreadsheet cell.
    Number(f64),
    /// Spreadsheet date cell, as a serial day number (1899-12-30 epoch).
    DateTime(f64),
}

impl RawValue {
    /// Build a value from a text cell, mapping empty strings to `Empty`.
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            Self::Empty
        } else {
            Self::Text(text.to_owned())
        }
    }

    /// `true` when the cell carries no usable value.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => {
                let t = s.trim();
                t.is_empty() || NULL_TOKENS.iter().any(|n| t.eq_ignore_ascii_case(n))
            }
            Self::Number(n) | Self::DateTime(n) => !n.is_finite(),
        }
    }

    /// Trimmed textual form of the cell, or `None` if blank.
    ///
    /// Whole numbers render without a fractional part so a title such as
    /// `1917` stored as a numeric cell reads back as "1917", not "1917.0".
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        if self.is_blank() {
            return None;
        }
        match self {
            Self::Empty => None,
            Self::Text(s) => Some(Cow::Borrowed(s.trim())),
            Self::Number(n) | Self::DateTime(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    Some(Cow::Owned(format!("{}", *n as i64)))
                } else {
                    Some(Cow::Owned(n.to_string()))
                }
            }
        }
    }

    /// Numeric form of the cell. Text is parsed leniently: surrounding
    /// whitespace is ignored, as are well-formed thousands separators
    /// (`12,345.6`). Any other comma, such as a decimal comma in `7,5`,
    /// makes the cell non-numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Text(_) if self.is_blank() => None,
            Self::Text(s) => {
                let t = s.trim();
                let digits = if t.contains(',') {
                    Cow::Owned(strip_thousands(t)?)
                } else {
                    Cow::Borrowed(t)
                };
                digits.parse::<f64>().ok().filter(|v| v.is_finite())
            }
            _ => None,
        }
    }
}

/// Remove commas from `text` when they group the integer part in threes
/// (`1,234,567` or `-12,345.50`). Returns `None` for any other comma use.
fn strip_thousands(text: &str) -> Option<String> {
    let unsigned = text.strip_prefix(['-', '+']).unwrap_or(text);
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };
    if fraction.is_some_and(|f| f.is_empty() || !f.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }

    let mut groups = integer.split(',');
    let lead = groups.next()?;
    let lead_ok = (1..=3).contains(&lead.len()) && lead.bytes().all(|b| b.is_ascii_digit());
    let rest_ok = groups.all(|g| g.len() == 3 && g.bytes().all(|b| b.is_ascii_digit()));
    (lead_ok && rest_ok).then(|| text.replace(',', ""))
}

/// One row of the source file, mapped onto the known columns.
///
/// Columns the file does not have stay `RawValue::Empty`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    /// 1-based row number in the source (the header is row 1).
    pub row: usize,
    pub title: RawValue,
    pub genre: RawValue,
    pub release_date: RawValue,
    pub country: RawValue,
    pub rating: RawValue,
    pub popularity: RawValue,
    pub vote_count: RawValue,
    pub duration: RawValue,
    pub media_type: RawValue,
    pub overview: RawValue,
    pub language: RawValue,
}

impl RawRecord {
    /// Create an empty record for the given source row.
    pub fn new(row: usize) -> Self {
        Self {
            row,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection_covers_null_tokens() {
        assert!(RawValue::Empty.is_blank());
        assert!(RawValue::from_text("").is_blank());
        assert!(RawValue::from_text("   ").is_blank());
        assert!(RawValue::from_text("NaN").is_blank());
        assert!(RawValue::from_text("N/A").is_blank());
        assert!(RawValue::Number(f64::NAN).is_blank());
        assert!(!RawValue::from_text("Drama").is_blank());
        assert!(!RawValue::Number(0.0).is_blank());
    }

    /// A numeric title cell must read back without a trailing ".0".
    #[test]
    fn whole_numbers_render_as_integers() {
        assert_eq!(RawValue::Number(1917.0).as_text().as_deref(), Some("1917"));
        assert_eq!(RawValue::Number(7.5).as_text().as_deref(), Some("7.5"));
    }

    #[test]
    fn text_is_trimmed() {
        assert_eq!(
            RawValue::from_text("  Inception \r").as_text().as_deref(),
            Some("Inception")
        );
    }

    #[test]
    fn numeric_parsing_is_lenient() {
        assert_eq!(RawValue::from_text(" 8.3 ").as_f64(), Some(8.3));
        assert_eq!(RawValue::from_text("12,345").as_f64(), Some(12345.0));
        assert_eq!(RawValue::from_text("1,234,567.5").as_f64(), Some(1234567.5));
        assert_eq!(RawValue::Number(4.0).as_f64(), Some(4.0));
        assert_eq!(RawValue::from_text("great").as_f64(), None);
        assert_eq!(RawValue::from_text("nan").as_f64(), None);
        assert_eq!(RawValue::from_text("inf").as_f64(), None);
        assert_eq!(RawValue::Empty.as_f64(), None);
    }

    #[test]
    fn only_thousands_commas_are_ignored() {
        assert_eq!(RawValue::from_text("-12,345.25").as_f64(), Some(-12345.25));
        assert_eq!(RawValue::from_text("7,5").as_f64(), None);
        assert_eq!(RawValue::from_text("1,23").as_f64(), None);
        assert_eq!(RawValue::from_text("1234,567").as_f64(), None);
        assert_eq!(RawValue::from_text(",500").as_f64(), None);
        assert_eq!(RawValue::from_text("1,000.").as_f64(), None);
    }
}
