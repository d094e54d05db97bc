use crate::models::shift::Shift;
use crate::utils::date::days_between;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeSet;

/// Explicit calendar configuration for the projection step: window
/// bounds, holiday set and the "current date" marker all travel
/// together instead of living in process-wide globals.
#[derive(Debug, Clone)]
pub struct CalendarWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub today: NaiveDate,
    pub holidays: BTreeSet<NaiveDate>,
}

impl CalendarWindow {
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        today: NaiveDate,
        holidays: BTreeSet<NaiveDate>,
    ) -> Self {
        Self {
            start,
            end,
            today,
            holidays,
        }
    }

    /// Every day of the window, chronological.
    pub fn days(&self) -> Vec<NaiveDate> {
        days_between(self.start, self.end)
    }

    /// The full two-level column axis: every day x every shift,
    /// chronological, then M, P, N.
    pub fn columns(&self) -> Vec<(NaiveDate, Shift)> {
        let mut out = Vec::new();
        for day in self.days() {
            for shift in Shift::ALL {
                out.push((day, shift));
            }
        }
        out
    }

    pub fn is_holiday(&self, day: NaiveDate) -> bool {
        self.holidays.contains(&day)
    }

    pub fn is_weekend(&self, day: NaiveDate) -> bool {
        matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
    }
}
