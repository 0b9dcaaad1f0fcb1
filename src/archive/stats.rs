//! Decode statistics and result structures for monthly archives

use serde::{Deserialize, Serialize};

use crate::error::{Result, WlkError};
use crate::models::DailyWeatherData;

/// Decoded days of one month plus the error that stopped decoding, if any
#[derive(Debug)]
pub struct DecodeResult {
    /// Completed days in ascending day order
    pub days: Vec<DailyWeatherData>,

    /// Basic decode statistics
    pub stats: DecodeStats,

    /// Structural failure that aborted the rest of the file
    pub error: Option<WlkError>,
}

impl DecodeResult {
    /// True if the whole file was decoded
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Discard partial output on failure
    pub fn into_result(self) -> Result<Vec<DailyWeatherData>> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.days),
        }
    }
}

/// Simple decode statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeStats {
    /// Day index entries with at least one record
    pub populated_days: usize,

    /// Days emitted to the output
    pub days_decoded: usize,

    /// Populated days skipped because they fall outside the window
    pub days_outside_window: usize,

    /// Interval records emitted to the output
    pub intervals_decoded: usize,

    /// Interval records read but outside the window
    pub intervals_outside_window: usize,
}

impl DecodeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total interval records read from the buffer
    pub fn intervals_read(&self) -> usize {
        self.intervals_decoded + self.intervals_outside_window
    }
}
