//! Decides which (slot, venue) cell draws an event and how large the box is.
//!
//! An event is drawn once per group of adjacent venues: at its start slot,
//! in the group's anchor venue. The box is as tall as the slots it covers
//! and as wide as its venue group.

use serde::Serialize;

use super::venue_groups::{anchor_of, group_adjacent, group_containing};
use crate::error::{LayoutError, Result};
use crate::models::event::{Event, EventId};
use crate::models::settings::GridConfig;
use crate::models::time::ClockTime;
use crate::models::venue::{position_index, Venue, VenueId};
use crate::services::palette::{event_color, hover_color};
use crate::services::time_grid::slot_index_of;

/// Geometry of one event box, anchored at one venue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventPlacement {
    pub event_id: EventId,
    /// Venue whose cell the box is drawn from (the group anchor)
    pub anchor_venue_id: VenueId,
    pub start_slot_index: i64,
    /// Exclusive
    pub end_slot_index: i64,
    pub slots_spanned: i64,
    /// Offset from the top of the first slot row
    pub top_px: f32,
    /// Offset from the left edge of the first venue column
    pub left_px: f32,
    pub height_px: f32,
    pub width_px: f32,
    /// Renderers may let single-slot boxes fill the cell instead of using
    /// `height_px`, since rendered rows can differ from the nominal height.
    pub spans_single_slot: bool,
    /// False means the box can fill the cell width
    pub is_multi_venue: bool,
    pub spanned_venue_ids: Vec<VenueId>,
    pub color: String,
    /// Shade of `color` for a hovered box
    pub hover_color: String,
}

impl EventPlacement {
    /// A box needs to cover at least one slot to be drawn. Events whose end
    /// is not after their start, or that end before the next slot boundary,
    /// report `false`.
    pub fn is_renderable(&self) -> bool {
        self.slots_spanned >= 1
    }
}

/// True if `event` should be drawn in the cell at (`slot`, `venue`).
///
/// Holds only at the event's start slot, for a venue the event occupies,
/// when that venue anchors its adjacent group.
pub fn is_anchor(event: &Event, slot: ClockTime, venue: &Venue, venues: &[Venue]) -> Result<bool> {
    if event.start_time != slot {
        return Ok(false);
    }

    if !event.occupies(venue.id) {
        return Ok(false);
    }

    let groups = group_adjacent(&event.venue_ids, venues)?;
    let anchor = group_containing(venue.id, &groups).and_then(|group| anchor_of(group));
    Ok(anchor == Some(venue.id))
}

/// Events to draw in the cell at (`slot`, `venue`).
pub fn events_for_slot_and_venue<'a>(
    events: &'a [Event],
    slot: ClockTime,
    venue: &Venue,
    venues: &[Venue],
) -> Result<Vec<&'a Event>> {
    let mut anchored = Vec::new();
    for event in events {
        if is_anchor(event, slot, venue, venues)? {
            anchored.push(event);
        }
    }
    Ok(anchored)
}

/// Compute the box for `event` in the venue group containing `venue`.
///
/// Malformed time ranges are not rejected here; check
/// [`EventPlacement::is_renderable`] before drawing.
pub fn place_event(
    event: &Event,
    venue: &Venue,
    venues: &[Venue],
    grid: &GridConfig,
) -> Result<EventPlacement> {
    let not_in_event = || LayoutError::VenueNotInEvent {
        event_id: event.id,
        venue_id: venue.id,
    };

    if !event.occupies(venue.id) {
        return Err(not_in_event());
    }

    let start_slot_index = slot_index_of(event.start_time, grid.start_hour, grid.interval_minutes);
    let end_slot_index = slot_index_of(event.end_time, grid.start_hour, grid.interval_minutes);
    let slots_spanned = end_slot_index - start_slot_index;

    let groups = group_adjacent(&event.venue_ids, venues)?;
    let group = group_containing(venue.id, &groups).ok_or_else(not_in_event)?;
    let anchor_venue_id = anchor_of(group).ok_or_else(not_in_event)?;
    let anchor_position = position_index(venues)
        .get(&anchor_venue_id)
        .copied()
        .ok_or(LayoutError::UnknownVenue {
            venue_id: anchor_venue_id,
        })?;

    log::debug!(
        "Placing event {} at venue {}: slots {}..{}, group {:?}",
        event.id,
        anchor_venue_id,
        start_slot_index,
        end_slot_index,
        group
    );

    Ok(EventPlacement {
        event_id: event.id,
        anchor_venue_id,
        start_slot_index,
        end_slot_index,
        slots_spanned,
        top_px: start_slot_index as f32 * grid.slot_height_px,
        left_px: anchor_position as f32 * grid.venue_column_width_px,
        height_px: slots_spanned as f32 * grid.slot_height_px,
        width_px: group.len() as f32 * grid.venue_column_width_px,
        spans_single_slot: slots_spanned == 1,
        is_multi_venue: group.len() > 1,
        spanned_venue_ids: group.clone(),
        color: event_color(event.id).to_string(),
        hover_color: hover_color(event.id),
    })
}
