// Venue module
// A timetable column; its position in the ordered venue list defines adjacency

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub type VenueId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
}

impl Venue {
    pub fn new(id: VenueId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Map each venue id to its column position in `venues`.
///
/// If an id appears twice the later position wins, matching how the
/// table assigns columns left to right.
pub fn position_index(venues: &[Venue]) -> HashMap<VenueId, usize> {
    venues
        .iter()
        .enumerate()
        .map(|(index, venue)| (venue.id, index))
        .collect()
}
