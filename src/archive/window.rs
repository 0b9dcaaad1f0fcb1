//! Half-open date-time window applied while assembling a month.
//!
//! The same `[start, end)` window is checked at three granularities: whole
//! months (can the file contribute anything), days (is the day's summary
//! emitted) and individual interval timestamps. A day spans its own midnight
//! through the next one inclusive.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::file_name::MonthAnchor;

/// Window `[start, end)`; a missing bound is unbounded on that side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimeWindow {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl DateTimeWindow {
    pub fn new(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Self {
        Self { start, end }
    }

    /// Window with no bounds
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Everything at or after `start`
    pub fn since(start: NaiveDateTime) -> Self {
        Self::new(Some(start), None)
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Record-level check: `start <= ts < end`
    pub fn includes(&self, ts: NaiveDateTime) -> bool {
        self.start.is_none_or(|start| ts >= start) && self.end.is_none_or(|end| ts < end)
    }

    /// Day-level check: the closed span `[date 00:00, date+1 00:00]` meets the window
    ///
    /// The closing instant belongs to the day because an interval stamped
    /// minute 1440 ends at the next midnight but stays with its own day.
    pub fn includes_day(&self, date: NaiveDate) -> bool {
        self.overlaps_span(date, date)
    }

    /// Month-level check: some day of the month passes [`Self::includes_day`]
    pub fn includes_month(&self, anchor: MonthAnchor) -> bool {
        self.overlaps_span(anchor.first_day(), anchor.last_day())
    }

    fn overlaps_span(&self, first: NaiveDate, last: NaiveDate) -> bool {
        let opens = first.and_time(NaiveTime::MIN);
        let closes = last
            .succ_opt()
            .map_or(NaiveDateTime::MAX, |next| next.and_time(NaiveTime::MIN));
        self.start.is_none_or(|start| closes >= start) && self.end.is_none_or(|end| opens < end)
    }
}
