//! Time-slot rows of the timetable.
//!
//! Slots are derived on every call from `(start_hour, end_hour,
//! interval_minutes)`; nothing is cached.

use crate::models::time::ClockTime;

/// Start times of every slot on the grid.
///
/// The slot count is `floor((end_hour - start_hour) * 60 / interval_minutes)`:
/// a trailing partial interval is dropped. Hours are absolute, so a grid
/// running to 26 ends with `25:45` rather than wrapping to `01:45`.
/// An empty grid is returned for a zero interval, for `end_hour <= start_hour`,
/// or when the hours do not fit in minutes.
pub fn slot_times(start_hour: u32, end_hour: u32, interval_minutes: u32) -> Vec<ClockTime> {
    if interval_minutes == 0 || end_hour <= start_hour {
        log::warn!(
            "Empty time grid: start_hour={} end_hour={} interval_minutes={}",
            start_hour,
            end_hour,
            interval_minutes
        );
        return Vec::new();
    }

    let (Some(grid_start), Some(grid_end)) = (start_hour.checked_mul(60), end_hour.checked_mul(60))
    else {
        log::warn!(
            "Empty time grid: start_hour={} end_hour={} is out of range",
            start_hour,
            end_hour
        );
        return Vec::new();
    };

    // Every slot starts before grid_end, so the sums below cannot overflow
    let slot_count = (grid_end - grid_start) / interval_minutes;

    (0..slot_count)
        .map(|i| ClockTime::from_minutes(grid_start + i * interval_minutes))
        .collect()
}

/// Slot labels as `"HH:MM"` strings.
pub fn generate_slots(start_hour: u32, end_hour: u32, interval_minutes: u32) -> Vec<String> {
    slot_times(start_hour, end_hour, interval_minutes)
        .into_iter()
        .map(|time| time.to_string())
        .collect()
}

/// Index of the slot containing `time`, counted from the grid start.
///
/// Uses floor division, so times before the grid start give negative indices.
pub fn slot_index_of(time: ClockTime, start_hour: u32, interval_minutes: u32) -> i64 {
    let offset = time.minutes() as i64 - start_hour as i64 * 60;
    offset.div_euclid(interval_minutes.max(1) as i64)
}
