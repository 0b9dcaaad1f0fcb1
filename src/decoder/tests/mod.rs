//! Tests for the record layout decoder
//!
//! Provides a small archive builder shared with the archive assembly tests.

pub mod packed_time_tests;
pub mod proptests;
pub mod units_tests;

use crate::constants::{
    DAY_INDEX_ENTRY_SIZE, DAY_INDEX_OFFSET, HEADER_SIZE, RECORD_SIZE, TOTAL_RECORDS_OFFSET,
    interval, record_tags, summary1, summary2,
};

/// One 88-byte record slot under construction
#[derive(Debug, Clone)]
pub struct Slot(pub [u8; RECORD_SIZE]);

impl Slot {
    pub fn tagged(tag: u8) -> Self {
        let mut bytes = [0u8; RECORD_SIZE];
        bytes[0] = tag;
        Slot(bytes)
    }

    pub fn u8_at(mut self, offset: usize, value: u8) -> Self {
        self.0[offset] = value;
        self
    }

    pub fn i16_at(mut self, offset: usize, value: i16) -> Self {
        self.0[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
        self
    }

    pub fn u16_at(mut self, offset: usize, value: u16) -> Self {
        self.0[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
        self
    }

    pub fn fill(mut self, offset: usize, len: usize, value: u8) -> Self {
        self.0[offset..offset + len].fill(value);
        self
    }

    /// Apply a closure to the raw bytes
    pub fn with(mut self, f: impl FnOnce(&mut [u8; RECORD_SIZE])) -> Self {
        f(&mut self.0);
        self
    }
}

/// Summary 1 slot with every time of extreme marked "no data"
pub fn summary1_slot() -> Slot {
    Slot::tagged(record_tags::SUMMARY_1)
        .i16_at(summary1::DATA_SPAN, 1440)
        .fill(summary1::TIME_VALUES, summary1::TIME_VALUES_LEN, 0xFF)
}

/// Summary 2 slot with every time of extreme marked "no data"
pub fn summary2_slot() -> Slot {
    Slot::tagged(record_tags::SUMMARY_2)
        .fill(summary2::TIME_VALUES, summary2::TIME_VALUES_LEN, 0xFF)
}

/// Interval slot ending `packed_time` minutes past midnight, extra sensors absent
pub fn interval_slot(packed_time: i16) -> Slot {
    Slot::tagged(record_tags::INTERVAL)
        .u8_at(interval::ARCHIVE_INTERVAL, 30)
        .i16_at(interval::PACKED_TIME, packed_time)
        .i16_at(interval::OUT_TEMP, 455)
        .i16_at(interval::BAROMETER, 29972)
        .i16_at(interval::OUT_HUM, 509)
        .u8_at(interval::WIND_DIRECTION, 255)
        .u8_at(interval::HI_WIND_DIRECTION, 255)
        .u8_at(interval::UV, 255)
        .u8_at(interval::HI_UV, 255)
        .u8_at(interval::ET, 255)
        .fill(interval::LEAF_TEMP, interval::LEAF_SENSORS, 255)
        .fill(interval::SOIL_TEMP, 30, 255)
}

/// Builder laying out a header and consecutive day slots
#[derive(Debug, Clone, Default)]
pub struct ArchiveBuilder {
    days: Vec<(u32, Vec<Slot>)>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a day with explicit slots, stored after all previously added days
    pub fn with_day(mut self, day: u32, slots: Vec<Slot>) -> Self {
        self.days.push((day, slots));
        self
    }

    /// Add a day with default summaries and one interval per packed time
    pub fn with_simple_day(self, day: u32, packed_times: &[i16]) -> Self {
        let mut slots = vec![summary1_slot(), summary2_slot()];
        slots.extend(packed_times.iter().map(|&t| interval_slot(t)));
        self.with_day(day, slots)
    }

    pub fn build(&self) -> Vec<u8> {
        let mut buf = vec![0u8; HEADER_SIZE];
        buf[..8].copy_from_slice(b"WDAT5.0\0");

        let mut slot = 0usize;
        for (day, slots) in &self.days {
            set_day_index(&mut buf, *day, slots.len() as i16, slot as i32);
            for s in slots {
                buf.extend_from_slice(&s.0);
            }
            slot += slots.len();
        }
        buf[TOTAL_RECORDS_OFFSET..TOTAL_RECORDS_OFFSET + 4]
            .copy_from_slice(&(slot as i32).to_le_bytes());
        buf
    }
}

/// Overwrite the day index entry for `day`
pub fn set_day_index(buf: &mut [u8], day: u32, records_in_day: i16, start_pos: i32) {
    let base = DAY_INDEX_OFFSET + day as usize * DAY_INDEX_ENTRY_SIZE;
    buf[base..base + 2].copy_from_slice(&records_in_day.to_le_bytes());
    buf[base + 2..base + 6].copy_from_slice(&start_pos.to_le_bytes());
}
