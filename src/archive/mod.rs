//! Monthly archive assembly.
//!
//! Walks one month's day index, decodes each populated day's summary and
//! interval records, resolves absolute timestamps from the file's calendar
//! month and applies the configured date-time window.

pub mod file_name;
pub mod stats;
pub mod window;

#[cfg(test)]
pub mod tests;

pub use file_name::MonthAnchor;
pub use stats::{DecodeResult, DecodeStats};
pub use window::DateTimeWindow;

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{debug, info, warn};

use crate::config::DecoderConfig;
use crate::constants::{MINUTES_PER_DAY, RECORD_SIZE};
use crate::decoder::{
    DayIndex, UnitConverter, read_header, read_interval, read_summary1, read_summary2,
    resolve_daily_summary, resolve_interval,
};
use crate::error::{Result, WlkError};
use crate::models::DailyWeatherData;

/// Absolute end time of an interval stamped `packed_time` minutes past midnight
///
/// Minute 1440 closes the day and is attributed to 00:00 of the next day.
pub fn interval_timestamp(
    date: NaiveDate,
    packed_time: i16,
    offset: usize,
) -> Result<NaiveDateTime> {
    let invalid = || WlkError::InvalidIntervalTime {
        offset,
        packed_time,
    };
    if !(0..=MINUTES_PER_DAY).contains(&packed_time) {
        return Err(invalid());
    }

    let hour = (packed_time / 60) as u32;
    let minute = (packed_time % 60) as u32;
    if hour == 24 {
        let next = date.succ_opt().ok_or_else(invalid)?;
        return Ok(next.and_time(NaiveTime::MIN));
    }

    NaiveTime::from_hms_opt(hour, minute, 0)
        .map(|time| date.and_time(time))
        .ok_or_else(invalid)
}

/// One decoded day before window filtering of the day itself
struct DayOutcome {
    data: DailyWeatherData,
    intervals_outside_window: usize,
}

/// Decoder for a single month's archive buffer
#[derive(Debug, Clone, Default)]
pub struct ArchiveDecoder {
    config: DecoderConfig,
    converter: UnitConverter,
}

impl ArchiveDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        let converter = UnitConverter::new(config.unit_system);
        Self { config, converter }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a buffer whose month is taken from its `YYYY-MM.wlk` file name
    pub fn decode_named(&self, buf: &[u8], file_name: impl AsRef<Path>) -> Result<DecodeResult> {
        let anchor = MonthAnchor::from_file_name(file_name)?;
        Ok(self.decode(buf, anchor))
    }

    /// Decode every populated day of the month in `buf`
    ///
    /// A structural error stops decoding; days completed before it are kept
    /// in the result alongside the error.
    pub fn decode(&self, buf: &[u8], anchor: MonthAnchor) -> DecodeResult {
        let mut result = DecodeResult {
            days: Vec::new(),
            stats: DecodeStats::new(),
            error: None,
        };

        let window = &self.config.window;
        if !window.includes_month(anchor) {
            debug!("Month {} lies outside {:?}, skipping", anchor, window);
            return result;
        }

        let header = match read_header(buf) {
            Ok(header) => header,
            Err(error) => {
                warn!("Failed to read header for {}: {}", anchor, error);
                result.error = Some(error);
                return result;
            }
        };
        debug!(
            "Header for {}: id={:?}, total_records={}",
            anchor, header.id_code, header.total_records
        );

        for (day, entry) in header.populated_days() {
            result.stats.populated_days += 1;

            let outcome = match self.decode_day(buf, anchor, day, entry) {
                Ok(outcome) => outcome,
                Err(error) => {
                    warn!("Aborting {} at day {}: {}", anchor, day, error);
                    result.error = Some(error);
                    break;
                }
            };

            if !window.includes_day(outcome.data.date()) {
                result.stats.days_outside_window += 1;
                result.stats.intervals_outside_window +=
                    outcome.data.records.len() + outcome.intervals_outside_window;
                continue;
            }

            result.stats.days_decoded += 1;
            result.stats.intervals_decoded += outcome.data.records.len();
            result.stats.intervals_outside_window += outcome.intervals_outside_window;
            result.days.push(outcome.data);
        }

        info!(
            "Decoded {}: {} days, {} interval records",
            anchor, result.stats.days_decoded, result.stats.intervals_decoded
        );
        result
    }

    fn decode_day(
        &self,
        buf: &[u8],
        anchor: MonthAnchor,
        day: u32,
        entry: DayIndex,
    ) -> Result<DayOutcome> {
        let date = anchor.date(day)?;
        let mut offset = entry.first_record_offset(day)?;

        let summary1 = read_summary1(buf, offset)?;
        offset += RECORD_SIZE;
        let summary2 = read_summary2(buf, offset)?;

        let interval_count = entry.interval_count();
        debug!(
            "Day {}: summary at offset {}, {} interval records",
            date,
            offset - RECORD_SIZE,
            interval_count
        );

        let mut records = Vec::with_capacity(interval_count);
        let mut intervals_outside_window = 0;
        for _ in 0..interval_count {
            offset += RECORD_SIZE;
            let raw = read_interval(buf, offset)?;
            let timestamp = interval_timestamp(date, raw.packed_time, offset)?;

            if self.config.window.includes(timestamp) {
                records.push(resolve_interval(timestamp, &raw, &self.converter));
            } else {
                intervals_outside_window += 1;
            }
        }

        let summary = resolve_daily_summary(date, &summary1, &summary2, &self.converter);
        Ok(DayOutcome {
            data: DailyWeatherData::new(summary, records),
            intervals_outside_window,
        })
    }
}

/// Decode one month with the given configuration
pub fn decode_month(buf: &[u8], anchor: MonthAnchor, config: &DecoderConfig) -> DecodeResult {
    ArchiveDecoder::new(config.clone()).decode(buf, anchor)
}
