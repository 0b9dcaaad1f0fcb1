//! Error handling for WLK archive decoding.
//!
//! Structural errors carry the byte offset and the values observed there so a
//! corrupted file can be diagnosed. Sentinel field values are never errors;
//! they resolve to `None` in the decoded output.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WlkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "Malformed record at offset {offset}: expected record type {expected_tag}, found {observed_tag}"
    )]
    MalformedRecord {
        offset: usize,
        expected_tag: u8,
        observed_tag: u8,
    },

    #[error(
        "Truncated buffer: {needed} bytes requested at offset {offset}, buffer holds {available}"
    )]
    TruncatedBuffer {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error(
        "Invalid day index for day {day}: records_in_day={records_in_day}, start_pos={start_pos}"
    )]
    InvalidDayIndex {
        day: u32,
        records_in_day: i16,
        start_pos: i32,
    },

    #[error("Invalid interval time at offset {offset}: {packed_time} minutes past midnight")]
    InvalidIntervalTime { offset: usize, packed_time: i16 },

    #[error("File name does not identify an archive month: {name}")]
    InvalidFileName { name: String },

    #[error("Invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl WlkError {
    /// True for errors that describe a damaged archive rather than a caller mistake
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::MalformedRecord { .. }
                | Self::TruncatedBuffer { .. }
                | Self::InvalidDayIndex { .. }
                | Self::InvalidIntervalTime { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, WlkError>;
