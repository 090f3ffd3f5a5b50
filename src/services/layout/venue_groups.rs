//! Grouping of an event's venues into runs of adjacent columns.
//!
//! Two venues are adjacent when their positions in the ordered venue list
//! differ by exactly one. Ids and names play no part.

use crate::error::{LayoutError, Result};
use crate::models::venue::{position_index, Venue, VenueId};

/// A run of adjacent venue ids, ordered by column position.
pub type VenueGroup = Vec<VenueId>;

/// Split `venue_ids` into maximal runs of adjacent venues.
///
/// Ids are processed in column order, not input order, and duplicates are
/// collapsed. Every id must be present in `venues`.
pub fn group_adjacent(venue_ids: &[VenueId], venues: &[Venue]) -> Result<Vec<VenueGroup>> {
    if venue_ids.is_empty() {
        return Ok(Vec::new());
    }

    let positions = position_index(venues);
    let mut located = venue_ids
        .iter()
        .map(|&venue_id| {
            positions
                .get(&venue_id)
                .map(|&position| (position, venue_id))
                .ok_or(LayoutError::UnknownVenue { venue_id })
        })
        .collect::<Result<Vec<_>>>()?;

    located.sort_unstable();
    located.dedup();

    let mut groups: Vec<VenueGroup> = Vec::new();
    let mut previous: Option<usize> = None;

    for (position, venue_id) in located {
        let extends_run = previous.is_some_and(|prev| position == prev + 1);
        match groups.last_mut() {
            Some(group) if extends_run => group.push(venue_id),
            _ => groups.push(vec![venue_id]),
        }
        previous = Some(position);
    }

    Ok(groups)
}

/// The group that holds `venue_id`, if any.
pub fn group_containing(venue_id: VenueId, groups: &[VenueGroup]) -> Option<&VenueGroup> {
    groups.iter().find(|group| group.contains(&venue_id))
}

/// Anchor rule: only the lowest-position member of a group draws the event
/// box; the box then stretches across the rest of the group.
pub fn anchor_of(group: &[VenueId]) -> Option<VenueId> {
    group.first().copied()
}
