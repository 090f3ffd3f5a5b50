// Property-based tests for the timetable layout
// Checks slot counting, grouping and anchoring with random grids and venue sets

use chrono::NaiveDate;
use proptest::prelude::*;
use venue_timetable::models::event::Event;
use venue_timetable::models::settings::GridConfig;
use venue_timetable::models::time::ClockTime;
use venue_timetable::models::venue::Venue;
use venue_timetable::services::layout::{group_adjacent, is_anchor, place_event};
use venue_timetable::services::time_grid::{generate_slots, slot_times};

fn numbered_venues(count: i64) -> Vec<Venue> {
    (1..=count).map(|id| Venue::new(id, format!("V{}", id))).collect()
}

fn event(start: u32, end: u32, venue_ids: Vec<i64>) -> Event {
    Event {
        id: 1,
        name: "Generated".to_string(),
        start_time: ClockTime::from_minutes(start),
        end_time: ClockTime::from_minutes(end),
        venue_ids,
        date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
    }
}

proptest! {
    /// Property: slot count is floor(hours * 60 / interval)
    #[test]
    fn prop_slot_count(
        start_hour in 0..24u32,
        span in 1..12u32,
        interval in 1..180u32,
    ) {
        let end_hour = start_hour + span;
        let slots = generate_slots(start_hour, end_hour, interval);
        prop_assert_eq!(slots.len() as u32, span * 60 / interval);
        prop_assert_eq!(slots, generate_slots(start_hour, end_hour, interval));
    }

    /// Property: labels are "HH:MM" and strictly increase by the interval
    #[test]
    fn prop_slots_step_by_interval(
        start_hour in 0..24u32,
        span in 1..8u32,
        interval in 1..120u32,
    ) {
        let times = slot_times(start_hour, start_hour + span, interval);
        for pair in times.windows(2) {
            prop_assert_eq!(pair[1].minutes() - pair[0].minutes(), interval);
        }
        for label in generate_slots(start_hour, start_hour + span, interval) {
            prop_assert_eq!(label.len(), 5);
            prop_assert_eq!(&label[2..3], ":");
        }
    }

    /// Property: groups partition the input and each group is a run of
    /// consecutive positions
    #[test]
    fn prop_groups_are_adjacent_runs(
        ids in proptest::collection::btree_set(1..=12i64, 0..12),
    ) {
        let venues = numbered_venues(12);
        let ids: Vec<i64> = ids.into_iter().collect();
        let groups = group_adjacent(&ids, &venues).unwrap();

        let flattened: Vec<i64> = groups.iter().flatten().copied().collect();
        prop_assert_eq!(&flattened, &ids);

        for group in &groups {
            for pair in group.windows(2) {
                prop_assert_eq!(pair[1], pair[0] + 1);
            }
        }
        for pair in groups.windows(2) {
            let last = *pair[0].last().unwrap();
            let first = pair[1][0];
            prop_assert!(first > last + 1);
        }
    }

    /// Property: an event in a contiguous block of venues anchors at exactly
    /// one (slot, venue) cell, its start slot and its lowest venue
    #[test]
    fn prop_single_anchor(
        first_venue in 1..=6i64,
        width in 1..=3i64,
        start_slot in 0..90u32,
        length in 1..6u32,
    ) {
        let venues = numbered_venues(8);
        let venue_ids: Vec<i64> = (first_venue..first_venue + width).rev().collect();
        let start = start_slot * 15;
        let event = event(start, start + length * 15, venue_ids);

        let mut anchors = Vec::new();
        for slot in slot_times(0, 24, 15) {
            for venue in &venues {
                if is_anchor(&event, slot, venue, &venues).unwrap() {
                    anchors.push((slot.minutes(), venue.id));
                }
            }
        }

        prop_assert_eq!(anchors, vec![(start, first_venue)]);
    }

    /// Property: height depends only on the row span, width only on the group
    #[test]
    fn prop_geometry_is_separable(
        start_slot in 0..80u32,
        length in 1..10u32,
        width in 1..=4i64,
    ) {
        let venues = numbered_venues(4);
        let grid = GridConfig::default();
        let start = start_slot * 15;
        let event = event(start, start + length * 15, (1..=width).collect());

        let placement = place_event(&event, &venues[0], &venues, &grid).unwrap();
        prop_assert_eq!(placement.slots_spanned, length as i64);
        prop_assert_eq!(placement.height_px, length as f32 * grid.slot_height_px);
        prop_assert_eq!(placement.width_px, width as f32 * grid.venue_column_width_px);
        prop_assert_eq!(placement.spans_single_slot, length == 1);
        prop_assert_eq!(placement.is_multi_venue, width > 1);
        prop_assert_eq!(placement.clone(), place_event(&event, &venues[0], &venues, &grid).unwrap());
    }
}
