//! Calendar-date parsing shared by filtering, activity checks and formatting.
//!
//! Campaign dates are stored as `M/D/YYYY` strings. They are split on `/`
//! rather than handed to a general date parser so that the interpretation of
//! every component is fixed. ISO `YYYY-MM-DD` is the only other form accepted.

use chrono::{Datelike, NaiveDate};

pub fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    if let Some([month, day, year]) = split_components(text, '/') {
        return build_date(year, month, day);
    }

    if let Some([year, month, day]) = split_components(text, '-') {
        return build_date(year, month, day);
    }

    None
}

/// Renders a date the way the creation form stores it (`MM/DD/YYYY`).
pub fn format_form_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.month(), date.day(), date.year())
}

fn split_components(text: &str, separator: char) -> Option<[&str; 3]> {
    let mut parts = text.split(separator);
    let first = parts.next()?;
    let second = parts.next()?;
    let third = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    Some([first, second, third])
}

fn build_date(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year = parse_number(year, 4, 4)?;
    let month = parse_number(month, 1, 2)?;
    let day = parse_number(day, 1, 2)?;

    NaiveDate::from_ymd_opt(year as i32, month, day)
}

fn parse_number(text: &str, min_digits: usize, max_digits: usize) -> Option<u32> {
    if text.len() < min_digits || text.len() > max_digits {
        return None;
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn parses_month_day_year() {
        assert_eq!(parse_calendar_date("9/19/2021"), Some(date(2021, 9, 19)));
        assert_eq!(parse_calendar_date("11/1/2022"), Some(date(2022, 11, 1)));
        assert_eq!(parse_calendar_date("03/05/2021"), Some(date(2021, 3, 5)));
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_calendar_date("2024-01-01"), Some(date(2024, 1, 1)));
        assert_eq!(parse_calendar_date("2024-12-31"), Some(date(2024, 12, 31)));
    }

    #[test]
    fn rejects_malformed_dates() {
        assert_eq!(parse_calendar_date(""), None);
        assert_eq!(parse_calendar_date("not a date"), None);
        assert_eq!(parse_calendar_date("13/1/2024"), None);
        assert_eq!(parse_calendar_date("2/30/2024"), None);
        assert_eq!(parse_calendar_date("1/1/24"), None);
        assert_eq!(parse_calendar_date("1/1/2024/1"), None);
        assert_eq!(parse_calendar_date("+1/1/2024"), None);
        assert_eq!(parse_calendar_date("2024/01/01"), None);
    }

    #[test]
    fn form_dates_are_zero_padded() {
        assert_eq!(format_form_date(date(2024, 3, 7)), "03/07/2024");
        assert_eq!(
            parse_calendar_date(&format_form_date(date(2025, 11, 30))),
            Some(date(2025, 11, 30))
        );
    }
}
