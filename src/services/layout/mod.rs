//! Whole-grid timetable layout.
//!
//! Walks every (slot, venue) cell, asks the placement resolver which events
//! anchor there, and records their box geometry. The result is plain data
//! for a renderer to paint; this module keeps no state between builds.

pub mod placement;
pub mod venue_groups;

use serde::Serialize;

use crate::error::{LayoutError, Result};
use crate::models::event::{Event, EventId};
use crate::models::settings::GridConfig;
use crate::models::time::ClockTime;
use crate::models::venue::{position_index, Venue, VenueId};
use crate::services::time_grid::slot_times;

pub use placement::{events_for_slot_and_venue, is_anchor, place_event, EventPlacement};
pub use venue_groups::{anchor_of, group_adjacent, group_containing, VenueGroup};

/// Boxes anchored in one venue cell of a slot row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueCell {
    pub venue_id: VenueId,
    pub placements: Vec<EventPlacement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotRow {
    pub time: ClockTime,
    pub cells: Vec<VenueCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimetableLayout {
    venues: Vec<Venue>,
    rows: Vec<SlotRow>,
    table_width_px: f32,
    skipped_event_ids: Vec<EventId>,
}

impl TimetableLayout {
    /// Lay out `events` on the grid described by `grid`.
    ///
    /// `events` should already be filtered to the day being shown. Fails if
    /// the grid is invalid or an event references a venue not in `venues`.
    /// Events that get no box are listed in
    /// [`TimetableLayout::skipped_event_ids`]: those covering no full slot,
    /// starting off a slot boundary, or starting outside the grid hours.
    pub fn build(venues: &[Venue], events: &[Event], grid: &GridConfig) -> Result<Self> {
        grid.validate()?;
        validate_references(venues, events)?;

        let mut skipped_event_ids = Vec::new();
        let mut rows = Vec::new();

        for time in slot_times(grid.start_hour, grid.end_hour, grid.interval_minutes) {
            let mut cells = Vec::with_capacity(venues.len());

            for venue in venues {
                let mut placements = Vec::new();
                for event in events_for_slot_and_venue(events, time, venue, venues)? {
                    let placement = place_event(event, venue, venues, grid)?;
                    if placement.is_renderable() {
                        placements.push(placement);
                    } else {
                        log::warn!(
                            "Skipping event {} '{}': {} does not cover a full slot",
                            event.id,
                            event.name,
                            event.time_range_label()
                        );
                        if !skipped_event_ids.contains(&event.id) {
                            skipped_event_ids.push(event.id);
                        }
                    }
                }
                cells.push(VenueCell {
                    venue_id: venue.id,
                    placements,
                });
            }

            rows.push(SlotRow { time, cells });
        }

        for event in events {
            let drawn = rows
                .iter()
                .flat_map(|row| row.cells.iter())
                .flat_map(|cell| cell.placements.iter())
                .any(|placement| placement.event_id == event.id);
            if !drawn && !skipped_event_ids.contains(&event.id) {
                log::warn!(
                    "Skipping event {} '{}': {} does not start on a grid slot",
                    event.id,
                    event.name,
                    event.time_range_label()
                );
                skipped_event_ids.push(event.id);
            }
        }

        let layout = Self {
            venues: venues.to_vec(),
            rows,
            table_width_px: grid.total_table_width(venues.len()),
            skipped_event_ids,
        };

        log::debug!(
            "Built timetable layout: {} slots x {} venues, {} boxes",
            layout.rows.len(),
            venues.len(),
            layout.anchor_count()
        );

        Ok(layout)
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn rows(&self) -> &[SlotRow] {
        &self.rows
    }

    pub fn slots(&self) -> impl Iterator<Item = ClockTime> + '_ {
        self.rows.iter().map(|row| row.time)
    }

    /// Every box on the grid, top to bottom then left to right
    pub fn placements(&self) -> impl Iterator<Item = &EventPlacement> {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .flat_map(|cell| cell.placements.iter())
    }

    pub fn anchor_count(&self) -> usize {
        self.placements().count()
    }

    /// Boxes belonging to one event (one per venue group)
    pub fn placements_for_event(&self, event_id: EventId) -> Vec<&EventPlacement> {
        self.placements()
            .filter(|placement| placement.event_id == event_id)
            .collect()
    }

    pub fn table_width_px(&self) -> f32 {
        self.table_width_px
    }

    pub fn skipped_event_ids(&self) -> &[EventId] {
        &self.skipped_event_ids
    }
}

/// Check that every venue referenced by an event exists in `venues`.
pub fn validate_references(venues: &[Venue], events: &[Event]) -> Result<()> {
    let positions = position_index(venues);
    for event in events {
        if let Some(&venue_id) = event
            .venue_ids
            .iter()
            .find(|venue_id| !positions.contains_key(*venue_id))
        {
            log::warn!(
                "Event {} '{}' references unknown venue {}",
                event.id,
                event.name,
                venue_id
            );
            return Err(LayoutError::UnknownVenue { venue_id });
        }
    }
    Ok(())
}
