//! Cell-level parsing for date and price columns.
//!
//! Vendors disagree on formats, so dates are tried against a short list of
//! layouts and prices tolerate thousands separators (`"1,234.50"`).

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date-only layouts, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%b %d, %Y", "%d.%m.%Y"];

/// Date-time layouts whose date part is kept.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parses a calendar date from a CSV cell.
///
/// Accepts ISO dates, US `month/day/year`, `"Jan 02, 2024"`, European
/// `day.month.year`, naive date-times and RFC 3339 timestamps (the time of day
/// is discarded).
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim().trim_matches('"').trim();
    if s.is_empty() {
        return None;
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

/// Parses a price cell, stripping quotes and thousands separators.
pub fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .trim_matches('"')
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Returns `true` if a cell carries no value.
pub fn is_blank(raw: &str) -> bool {
    let s = raw.trim().trim_matches('"').trim();
    s.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_supported_date_layouts() {
        assert_eq!(parse_date("2024-03-08"), Some(ymd(2024, 3, 8)));
        assert_eq!(parse_date("03/08/2024"), Some(ymd(2024, 3, 8)));
        assert_eq!(parse_date("Mar 08, 2024"), Some(ymd(2024, 3, 8)));
        assert_eq!(parse_date("08.03.2024"), Some(ymd(2024, 3, 8)));
        assert_eq!(parse_date("2024-03-08 16:00:00"), Some(ymd(2024, 3, 8)));
        assert_eq!(parse_date("2024-03-08T21:00:00Z"), Some(ymd(2024, 3, 8)));
        assert_eq!(parse_date(" \"2024-03-08\" "), Some(ymd(2024, 3, 8)));
    }

    #[test]
    fn rejects_garbage_dates() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2024-13-40"), None);
    }

    #[test]
    fn parses_prices_with_separators() {
        assert_eq!(parse_price("182.52"), Some(182.52));
        assert_eq!(parse_price("1,234.50"), Some(1234.5));
        assert_eq!(parse_price(" \"15,001.0\" "), Some(15001.0));
        assert_eq!(parse_price("-3"), Some(-3.0));
        assert_eq!(parse_price("0"), Some(0.0));
    }

    #[test]
    fn rejects_non_numeric_prices() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("n/a"), None);
        assert_eq!(parse_price("12.3.4"), None);
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("  "));
        assert!(is_blank("\"\""));
        assert!(!is_blank("0"));
    }
}
