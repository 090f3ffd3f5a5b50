// Dataset module
// Venue and event lists loaded from JSON, plus a bundled sample

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::event::Event;
use crate::models::time::ClockTime;
use crate::models::venue::Venue;

/// Everything a timetable needs apart from the grid config.
///
/// JSON layout:
/// ```json
/// {
///   "venues": [{ "id": 1, "name": "Venue 1" }],
///   "events": [{ "id": 1, "name": "Event 1", "startTime": "09:00",
///                "endTime": "10:15", "venueIds": [1], "date": "2025-03-14" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub venues: Vec<Venue>,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Dataset {
    pub fn from_json(text: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(text).context("Failed to parse dataset JSON")?;
        dataset.check_events();
        Ok(dataset)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset {}", path.display()))?;
        let dataset = Self::from_json(&text)
            .with_context(|| format!("Invalid dataset {}", path.display()))?;
        log::info!(
            "Loaded {} venues and {} events from {}",
            dataset.venues.len(),
            dataset.events.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Four venues and five events on `date`, one of them spanning two venues.
    pub fn sample(date: NaiveDate) -> Self {
        let venues = (1..=4)
            .map(|id| Venue::new(id, format!("Venue {}", id)))
            .collect();

        let event = |id, name: &str, start: (u32, u32), end: (u32, u32), venue_ids: Vec<i64>| Event {
            id,
            name: name.to_string(),
            start_time: ClockTime::from_hm(start.0, start.1),
            end_time: ClockTime::from_hm(end.0, end.1),
            venue_ids,
            date,
        };

        let events = vec![
            event(1, "Event 1", (9, 0), (10, 15), vec![1]),
            event(2, "Meeting", (10, 0), (13, 30), vec![1, 2]),
            event(3, "Event 3", (9, 15), (10, 0), vec![2]),
            event(4, "Event 4", (14, 30), (15, 45), vec![3]),
            event(5, "Event 5", (16, 0), (17, 30), vec![2]),
        ];

        Self { venues, events }
    }

    /// Log events that fail model validation. They are kept: the layout
    /// decides what it can draw.
    fn check_events(&self) {
        for event in &self.events {
            if let Err(reason) = event.validate() {
                log::warn!("Event {} '{}': {}", event.id, event.name, reason);
            }
        }
    }
}
