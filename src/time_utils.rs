// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for log dates.
//!
//! Log dates are local calendar days written as `YYYY-MM-DD`, which sort
//! correctly as plain strings.

use chrono::{Local, NaiveDate};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's date in the server's local time zone.
pub fn today() -> String {
    format_date(Local::now().date_naive())
}

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    // chrono accepts unpadded fields, which would break string ordering.
    if raw.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// "Today", "Yesterday" or e.g. "Jan 15, 2024", relative to `today`.
pub fn display_date(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if today.pred_opt() == Some(date) {
        "Yesterday".to_string()
    } else {
        date.format("%b %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_and_parse() {
        assert_eq!(format_date(ymd(2024, 1, 5)), "2024-01-05");
        assert_eq!(parse_date("2024-01-05"), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_date("2024-1-5"), None);
        assert_eq!(parse_date("2024-02-30"), None);
        assert_eq!(parse_date("yesterday"), None);
    }

    #[test]
    fn test_today_is_well_formed() {
        assert!(parse_date(&today()).is_some());
    }

    #[test]
    fn test_display_date() {
        let today = ymd(2024, 3, 1);
        assert_eq!(display_date(ymd(2024, 3, 1), today), "Today");
        assert_eq!(display_date(ymd(2024, 2, 29), today), "Yesterday");
        assert_eq!(display_date(ymd(2024, 1, 15), today), "Jan 15, 2024");
    }
}
