//! Tests for monthly archive assembly
//!
//! Archives are laid out in memory with the builder from the decoder tests.


use crate::archive::MonthAnchor;
use chrono::{NaiveDate, NaiveDateTime};

pub fn feb_2012() -> MonthAnchor {
    MonthAnchor::new(2012, 2).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day).and_hms_opt(hour, minute, 0).unwrap()
}
