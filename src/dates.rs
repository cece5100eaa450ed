//! Date utilities for the ledger
//!
//! All dates are exchanged as `DD/MM/YYYY` text. Two matching paths exist
//! on purpose and must not be unified:
//!
//! - the strict path ([`parse_date`], [`text_in_range`]) requires a full
//!   calendar parse of every operand and treats any parse failure as
//!   "does not match";
//! - the loose path ([`matches_month`], [`matches_year`]) compares the raw
//!   text suffix and never parses, so a malformed stored date can still
//!   match a monthly or yearly filter.
//!
//! Daily queries are a third case: exact string equality on the stored
//! text (see `services::period`).

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::error::{LedgerError, LedgerResult};

/// The single date format used everywhere: zero-padded day/month, 4-digit year
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Strictly parse `DD/MM/YYYY` text into a calendar date
///
/// Zero padding is required: `1/1/2024` is rejected even though chrono
/// would accept it, because the stored text and the parsed date must
/// round-trip exactly.
pub fn parse_date(text: &str) -> LedgerResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| LedgerError::bad_date(text))?;
    if format_date(date) != text {
        return Err(LedgerError::bad_date(text));
    }
    Ok(date)
}

/// Format a calendar date as zero-padded `DD/MM/YYYY` text
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Calendar-correct day addition (crosses month/year boundaries, leap years)
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Inclusive range check on parsed dates: `start <= date <= end`
pub fn in_range(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    start <= date && date <= end
}

/// Strict-path range check on date text
///
/// All three operands must parse; any failure means "not in range", so an
/// unparseable bound silently yields an empty query result rather than an
/// error.
pub fn text_in_range(date_text: &str, start_text: &str, end_text: &str) -> bool {
    match (
        parse_date(date_text),
        parse_date(start_text),
        parse_date(end_text),
    ) {
        (Ok(date), Ok(start), Ok(end)) => in_range(date, start, end),
        _ => false,
    }
}

/// Loose-path monthly check: raw text suffix match against `MM/YYYY`
pub fn matches_month(date_text: &str, month_year: &str) -> bool {
    date_text.ends_with(month_year)
}

/// Loose-path yearly check: raw text suffix match against `YYYY`
pub fn matches_year(date_text: &str, year: &str) -> bool {
    date_text.ends_with(year)
}

/// End of the week starting at `start_text`: start + 6 days
///
/// Falls back to returning the input unchanged when it does not parse; the
/// subsequent strict-path range query then matches nothing.
pub fn week_end_text(start_text: &str) -> String {
    match parse_date(start_text) {
        Ok(start) => format_date(add_days(start, 6)),
        Err(_) => start_text.to_string(),
    }
}

/// Today's wall-clock date as ledger text
pub fn today_text() -> String {
    format_date(Local::now().date_naive())
}

/// The current wall-clock month as `MM/YYYY` text
pub fn current_month_text() -> String {
    let today = Local::now().date_naive();
    format!("{:02}/{:04}", today.month(), today.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32, month: u32, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!(parse_date("15/06/2024").unwrap(), d(15, 6, 2024));
        assert_eq!(parse_date("01/01/2024").unwrap(), d(1, 1, 2024));
        assert_eq!(parse_date("29/02/2024").unwrap(), d(29, 2, 2024)); // leap year
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_date("2024-06-15").is_err());
        assert!(parse_date("31/02/2024").is_err());
        assert!(parse_date("29/02/2023").is_err()); // not a leap year
        assert!(parse_date("15/06/24").is_err());
        assert!(parse_date("").is_err());
        assert!(parse_date("garbage").is_err());
    }

    #[test]
    fn test_parse_requires_zero_padding() {
        assert!(parse_date("1/1/2024").is_err());
        assert!(parse_date("1/01/2024").is_err());
    }

    #[test]
    fn test_format_round_trip() {
        let date = d(5, 3, 2024);
        assert_eq!(format_date(date), "05/03/2024");
        assert_eq!(parse_date(&format_date(date)).unwrap(), date);
    }

    #[test]
    fn test_add_days_within_month() {
        assert_eq!(add_days(d(1, 1, 2024), 6), d(7, 1, 2024));
    }

    #[test]
    fn test_add_days_crosses_boundaries() {
        assert_eq!(add_days(d(30, 1, 2024), 3), d(2, 2, 2024));
        assert_eq!(add_days(d(30, 12, 2024), 5), d(4, 1, 2025));
        // Feb 2024 is a leap month
        assert_eq!(add_days(d(28, 2, 2024), 1), d(29, 2, 2024));
        assert_eq!(add_days(d(28, 2, 2023), 1), d(1, 3, 2023));
    }

    #[test]
    fn test_in_range_inclusive_both_ends() {
        let date = d(15, 6, 2024);
        assert!(in_range(date, date, date));
        assert!(in_range(date, d(1, 6, 2024), d(30, 6, 2024)));
        assert!(in_range(d(1, 6, 2024), d(1, 6, 2024), d(30, 6, 2024)));
        assert!(in_range(d(30, 6, 2024), d(1, 6, 2024), d(30, 6, 2024)));
        assert!(!in_range(d(1, 7, 2024), d(1, 6, 2024), d(30, 6, 2024)));
    }

    #[test]
    fn test_week_window_excludes_day_seven() {
        let start = d(1, 1, 2024);
        assert!(!in_range(add_days(start, 7), start, add_days(start, 6)));
    }

    #[test]
    fn test_text_in_range() {
        assert!(text_in_range("15/06/2024", "01/06/2024", "30/06/2024"));
        assert!(text_in_range("01/06/2024", "01/06/2024", "01/06/2024"));
        assert!(!text_in_range("01/07/2024", "01/06/2024", "30/06/2024"));
    }

    #[test]
    fn test_text_in_range_parse_failure_is_false() {
        assert!(!text_in_range("not-a-date", "01/06/2024", "30/06/2024"));
        assert!(!text_in_range("15/06/2024", "junk", "30/06/2024"));
        assert!(!text_in_range("15/06/2024", "01/06/2024", "junk"));
    }

    #[test]
    fn test_suffix_match_ignores_parseability() {
        // The loose path matches raw text even when the date is malformed
        assert!(matches_month("99/06/2024", "06/2024"));
        assert!(matches_year("99/06/2024", "2024"));
        // but the same text never passes the strict path
        assert!(!text_in_range("99/06/2024", "01/06/2024", "30/06/2024"));
    }

    #[test]
    fn test_suffix_match_basics() {
        assert!(matches_month("15/06/2024", "06/2024"));
        assert!(!matches_month("15/06/2024", "07/2024"));
        assert!(matches_year("15/06/2024", "2024"));
        assert!(!matches_year("15/06/2024", "2023"));
    }

    #[test]
    fn test_week_end_text() {
        assert_eq!(week_end_text("01/01/2024"), "07/01/2024");
        assert_eq!(week_end_text("30/12/2024"), "05/01/2025");
        // Unparseable start falls back to the input
        assert_eq!(week_end_text("bogus"), "bogus");
    }

    #[test]
    fn test_current_month_text_shape() {
        let month = current_month_text();
        assert_eq!(month.len(), 7);
        assert_eq!(&month[2..3], "/");
    }
}
