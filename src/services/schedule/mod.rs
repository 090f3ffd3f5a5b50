// Schedule module
// Day tabs and the selected date, owned by the caller and passed in explicitly

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::event::Event;
use crate::utils::date::{consecutive_days, date_string, day_name};

/// Number of day tabs shown above the timetable
pub const TAB_COUNT: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayTab {
    pub date: NaiveDate,
    pub day_name: &'static str,
    /// `YYYY-MM-DD`
    pub date_string: String,
}

impl DayTab {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            day_name: day_name(date),
            date_string: date_string(date),
        }
    }
}

/// One tab per day for a week starting at `from`.
pub fn week_tabs(from: NaiveDate) -> Vec<DayTab> {
    consecutive_days(from, TAB_COUNT)
        .into_iter()
        .map(DayTab::new)
        .collect()
}

/// A week of day tabs with one of them selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySelection {
    tabs: Vec<DayTab>,
    selected: usize,
}

impl DaySelection {
    /// Tabs for the week starting at `from`, with the first tab selected
    pub fn new(from: NaiveDate) -> Self {
        Self {
            tabs: week_tabs(from),
            selected: 0,
        }
    }

    pub fn tabs(&self) -> &[DayTab] {
        &self.tabs
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.tabs.iter().any(|tab| tab.date == date)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_tab(&self) -> Option<&DayTab> {
        self.tabs.get(self.selected)
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_tab().map(|tab| tab.date)
    }

    /// Select the tab showing `date`. Dates outside the week fall back to
    /// the first tab. Returns the selected index.
    pub fn select_date(&mut self, date: NaiveDate) -> usize {
        self.selected = match self.tabs.iter().position(|tab| tab.date == date) {
            Some(index) => index,
            None => {
                log::debug!("{} is not in the visible week, selecting first tab", date);
                0
            }
        };
        self.selected
    }

    /// Select by tab index; out-of-range indices are ignored.
    pub fn select_index(&mut self, index: usize) -> bool {
        if index < self.tabs.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// Events on the selected day
    pub fn events_for_selected<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        match self.selected_date() {
            Some(date) => events_on(events, date),
            None => Vec::new(),
        }
    }
}

/// Events whose `date` is `date`, in their original order
pub fn events_on(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    events.iter().filter(|event| event.date == date).collect()
}
