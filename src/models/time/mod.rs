// Time module
// Wall-clock time of day with minute granularity, written as "HH:MM"

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::LayoutError;

/// Minutes since midnight.
///
/// Hours are not wrapped at 24 so that grids running past midnight can
/// express times such as `25:30`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime(u32);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    pub const fn from_hm(hour: u32, minute: u32) -> Self {
        Self(hour * 60 + minute)
    }

    pub const fn minutes(self) -> u32 {
        self.0
    }

    pub const fn hour(self) -> u32 {
        self.0 / 60
    }

    pub const fn minute(self) -> u32 {
        self.0 % 60
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = LayoutError;

    /// Parse `"HH:MM"`. One-digit hours are accepted; minutes must be two digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LayoutError::InvalidTime(s.to_string());

        let (hours, minutes) = s.trim().split_once(':').ok_or_else(invalid)?;
        if hours.is_empty() || minutes.len() != 2 {
            return Err(invalid());
        }
        if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let hours: u32 = hours.parse().map_err(|_| invalid())?;
        let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
        if minutes >= 60 {
            return Err(invalid());
        }

        hours
            .checked_mul(60)
            .and_then(|m| m.checked_add(minutes))
            .map(ClockTime)
            .ok_or_else(invalid)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("00:00", 0 ; "midnight")]
    #[test_case("09:15", 555 ; "morning")]
    #[test_case("10:15", 615 ; "quarter past ten")]
    #[test_case("23:45", 1425 ; "last quarter of the day")]
    #[test_case("25:30", 1530 ; "past midnight")]
    #[test_case("7:05", 425 ; "single digit hour")]
    fn test_parse_valid(input: &str, expected: u32) {
        let time: ClockTime = input.parse().unwrap();
        assert_eq!(time.minutes(), expected);
    }

    #[test_case("" ; "empty")]
    #[test_case("1015" ; "missing colon")]
    #[test_case("10:60" ; "minute overflow")]
    #[test_case("10:5" ; "short minutes")]
    #[test_case("aa:bb" ; "not numeric")]
    #[test_case("-1:00" ; "negative hour")]
    #[test_case(":30" ; "missing hour")]
    fn test_parse_invalid(input: &str) {
        let result = input.parse::<ClockTime>();
        assert_eq!(result, Err(LayoutError::InvalidTime(input.to_string())));
    }

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(ClockTime::from_hm(9, 5).to_string(), "09:05");
        assert_eq!(ClockTime::MIDNIGHT.to_string(), "00:00");
    }

    #[test]
    fn test_display_does_not_wrap_past_midnight() {
        assert_eq!(ClockTime::from_hm(25, 30).to_string(), "25:30");
    }

    #[test]
    fn test_serde_uses_hh_mm_strings() {
        let json = serde_json::to_string(&ClockTime::from_hm(14, 30)).unwrap();
        assert_eq!(json, "\"14:30\"");

        let parsed: ClockTime = serde_json::from_str("\"08:45\"").unwrap();
        assert_eq!(parsed, ClockTime::from_hm(8, 45));

        assert!(serde_json::from_str::<ClockTime>("\"8h45\"").is_err());
    }

    #[test]
    fn test_ordering_follows_minutes() {
        assert!(ClockTime::from_hm(9, 0) < ClockTime::from_hm(9, 15));
        assert!(ClockTime::from_hm(23, 59) < ClockTime::from_hm(24, 0));
    }
}
