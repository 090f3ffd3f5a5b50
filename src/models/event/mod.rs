// Event module
// A booked event occupying one or more venues over a time-of-day range

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::time::ClockTime;
use crate::models::venue::VenueId;

pub type EventId = i64;

/// Booked event shown as a box in the timetable.
///
/// The event occupies `[start_time, end_time)` in every venue listed in
/// `venue_ids` on `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    #[serde(deserialize_with = "one_or_many")]
    pub venue_ids: Vec<VenueId>,
    pub date: NaiveDate,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Arguments
    /// * `id` - Event identifier, also used to pick the palette colour
    /// * `name` - Display name (required, non-empty)
    /// * `start_time` / `end_time` - Time-of-day range, end exclusive
    /// * `venue_ids` - Venues occupied at the same time (at least one)
    /// * `date` - Calendar day the event belongs to
    ///
    /// # Returns
    /// Returns `Result<Event, String>` with validation
    ///
    /// # Examples
    /// ```
    /// use venue_timetable::models::event::Event;
    /// use venue_timetable::models::time::ClockTime;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
    /// let event = Event::new(
    ///     1,
    ///     "Meeting",
    ///     ClockTime::from_hm(10, 0),
    ///     ClockTime::from_hm(13, 30),
    ///     vec![1, 2],
    ///     date,
    /// )
    /// .unwrap();
    /// assert_eq!(event.duration_minutes(), 210);
    /// ```
    pub fn new(
        id: EventId,
        name: impl Into<String>,
        start_time: ClockTime,
        end_time: ClockTime,
        venue_ids: Vec<VenueId>,
        date: NaiveDate,
    ) -> Result<Self, String> {
        let event = Self {
            id,
            name: name.into(),
            start_time,
            end_time,
            venue_ids,
            date,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events field by field
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Event name cannot be empty".to_string());
        }

        if self.venue_ids.is_empty() {
            return Err("Event must occupy at least one venue".to_string());
        }

        if self.end_time <= self.start_time {
            return Err("Event end time must be after start time".to_string());
        }

        Ok(())
    }

    /// Length of the event in minutes (zero for malformed ranges)
    pub fn duration_minutes(&self) -> u32 {
        self.end_time.minutes().saturating_sub(self.start_time.minutes())
    }

    /// Check whether the event occupies the given venue
    pub fn occupies(&self, venue_id: VenueId) -> bool {
        self.venue_ids.contains(&venue_id)
    }

    /// Label shown on the event box, e.g. `"09:00 - 10:15"`
    pub fn time_range_label(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}

/// Accept either `"venueIds": 3` or `"venueIds": [3, 4]`.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<VenueId>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(VenueId),
        Many(Vec<VenueId>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(id) => vec![id],
        OneOrMany::Many(ids) => ids,
    })
}

/// Builder for creating events
pub struct EventBuilder {
    id: Option<EventId>,
    name: Option<String>,
    start_time: Option<ClockTime>,
    end_time: Option<ClockTime>,
    venue_ids: Vec<VenueId>,
    date: Option<NaiveDate>,
}

impl EventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self {
            id: None,
            name: None,
            start_time: None,
            end_time: None,
            venue_ids: Vec::new(),
            date: None,
        }
    }

    pub fn id(mut self, id: EventId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn start_time(mut self, start_time: ClockTime) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn end_time(mut self, end_time: ClockTime) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Add a single venue to the event
    pub fn venue(mut self, venue_id: VenueId) -> Self {
        self.venue_ids.push(venue_id);
        self
    }

    /// Replace the venue list
    pub fn venues(mut self, venue_ids: impl IntoIterator<Item = VenueId>) -> Self {
        self.venue_ids = venue_ids.into_iter().collect();
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, String> {
        let id = self.id.ok_or("Event id is required")?;
        let name = self.name.ok_or("Event name is required")?;
        let start_time = self.start_time.ok_or("Event start time is required")?;
        let end_time = self.end_time.ok_or("Event end time is required")?;
        let date = self.date.ok_or("Event date is required")?;

        Event::new(id, name, start_time, end_time, self.venue_ids, date)
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
