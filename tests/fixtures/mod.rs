// Test fixtures - reusable test data
// Provides consistent venues, events and grids across all test files

#![allow(dead_code)]

use chrono::NaiveDate;
use venue_timetable::models::event::Event;
use venue_timetable::models::settings::GridConfig;
use venue_timetable::models::time::ClockTime;
use venue_timetable::models::venue::{Venue, VenueId};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Friday, March 14 2025
    pub fn festival_friday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    /// Saturday, March 15 2025
    pub fn festival_saturday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }
}

/// Sample venue lists
pub mod venues {
    use super::*;

    /// `count` venues with ids 1..=count in column order
    pub fn numbered(count: i64) -> Vec<Venue> {
        (1..=count).map(|id| Venue::new(id, format!("V{}", id))).collect()
    }

    /// Venues whose ids are not in column order
    pub fn festival_stages() -> Vec<Venue> {
        vec![
            Venue::new(40, "Main Stage"),
            Venue::new(12, "Tent"),
            Venue::new(7, "Club"),
            Venue::new(33, "Courtyard"),
        ]
    }
}

/// Sample events
pub mod events {
    use super::*;

    pub fn at(
        id: i64,
        start: (u32, u32),
        end: (u32, u32),
        venue_ids: &[VenueId],
        date: NaiveDate,
    ) -> Event {
        Event {
            id,
            name: format!("Event {}", id),
            start_time: ClockTime::from_hm(start.0, start.1),
            end_time: ClockTime::from_hm(end.0, end.1),
            venue_ids: venue_ids.to_vec(),
            date,
        }
    }

    /// A festival day on `festival_stages`
    pub fn festival_day() -> Vec<Event> {
        let day = dates::festival_friday();
        vec![
            at(1, (12, 0), (13, 0), &[40], day),
            at(2, (12, 30), (14, 0), &[12, 7], day),
            at(3, (13, 0), (15, 30), &[40, 12, 7, 33], day),
            at(4, (16, 0), (17, 15), &[40, 7], day),
            at(5, (18, 0), (23, 45), &[33], day),
            at(6, (12, 0), (13, 0), &[40], dates::festival_saturday()),
        ]
    }
}

/// Sample grid configurations
pub mod grids {
    use super::*;

    pub fn quarter_hours(slot_height_px: f32, venue_column_width_px: f32) -> GridConfig {
        GridConfig {
            start_hour: 0,
            end_hour: 24,
            interval_minutes: 15,
            slot_height_px,
            venue_column_width_px,
            ..GridConfig::default()
        }
    }

    pub fn afternoon() -> GridConfig {
        GridConfig {
            start_hour: 12,
            end_hour: 24,
            interval_minutes: 30,
            ..GridConfig::default()
        }
    }
}
