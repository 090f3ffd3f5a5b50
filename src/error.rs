// Layout error types
// Raised when venue/event/grid input cannot be laid out

use thiserror::Error;

use crate::models::event::EventId;
use crate::models::venue::VenueId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// An event references a venue that is not part of the supplied venue list.
    #[error("Venue {venue_id} is not in the venue list")]
    UnknownVenue { venue_id: VenueId },

    #[error("Event {event_id} does not occupy venue {venue_id}")]
    VenueNotInEvent { event_id: EventId, venue_id: VenueId },

    #[error("Invalid time '{0}': expected HH:MM")]
    InvalidTime(String),

    #[error("Invalid grid configuration: {0}")]
    InvalidGrid(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
