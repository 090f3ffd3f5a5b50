// Date utility functions

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Full English day name, e.g. "Monday"
pub fn day_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// `YYYY-MM-DD`
pub fn date_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date_string(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

/// `count` consecutive days starting at `start`
pub fn consecutive_days(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    (0..count)
        .filter_map(|offset| start.checked_add_signed(Duration::days(offset as i64)))
        .collect()
}
