//! Project date parsing and "Month Year" display.
//!
//! Dates in `projects.json` are written by hand, so parsing is lenient:
//!
//! - `2024-03-15` → March 2024
//! - `2024-03` → March 2024
//! - `2024` → January 2024
//! - `2024-03-15T10:00:00Z` / `2024-03-15T10:00:00+02:00` → March 2024
//! - `2024-03-15T10:00:00` → March 2024
//!
//! Display is best-effort: anything unparseable renders as `Invalid Date`
//! rather than failing the build.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Caption shown for dates that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Parse a project date in any of the accepted forms.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    // Partial dates: fill in the missing day (and month) with 1
    let mut parts = raw.splitn(3, '-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = match parts.next() {
        Some(m) => m.parse::<u32>().ok()?,
        None => 1,
    };
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Render a project date as `"<Month> <Year>"`, e.g. `"March 2024"`.
pub fn format_month_year(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%B %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_date() {
        assert_eq!(format_month_year("2024-03-15"), "March 2024");
    }

    #[test]
    fn month_only() {
        assert_eq!(format_month_year("2023-11"), "November 2023");
    }

    #[test]
    fn year_only_defaults_to_january() {
        assert_eq!(format_month_year("2021"), "January 2021");
    }

    #[test]
    fn rfc3339_uses_own_offset() {
        // Late evening on the last of the month stays in that month
        assert_eq!(format_month_year("2024-01-31T23:30:00-05:00"), "January 2024");
        assert_eq!(format_month_year("2024-07-04T12:00:00Z"), "July 2024");
    }

    #[test]
    fn naive_timestamp() {
        assert_eq!(format_month_year("2022-12-01T08:15:00"), "December 2022");
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        assert_eq!(format_month_year("  2020-02-29 "), "February 2020");
    }

    #[test]
    fn garbage_is_invalid_date() {
        assert_eq!(format_month_year("soon"), INVALID_DATE);
        assert_eq!(format_month_year(""), INVALID_DATE);
        assert_eq!(format_month_year("2024-13"), INVALID_DATE);
        assert_eq!(format_month_year("2024-02-30"), INVALID_DATE);
    }

    #[test]
    fn parse_date_orders_chronologically() {
        let a = parse_date("2023-05").unwrap();
        let b = parse_date("2023-05-20").unwrap();
        assert!(a < b);
    }
}
