//! Record layout decoder for WLK monthly archives
//!
//! A monthly file is a 212-byte header followed by 88-byte record slots. The
//! header's day index points at each day's two summary records, which are
//! followed by that day's archive interval records.
//!
//! ## Architecture
//!
//! - [`layout`] - Little-endian field readers, header block and slot offsets
//! - [`records`] - Tag-validated copies of the three record types
//! - [`packed_time`] - 12-bit packed times of extremes
//! - [`units`] - Sentinel-aware conversion of raw readings
//! - [`resolve`] - Raw records to unit-resolved output records
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wlk_reader::decoder::{read_header, read_summary1};
//!
//! # fn example(buf: &[u8]) -> wlk_reader::Result<()> {
//! let header = read_header(buf)?;
//! for (day, entry) in header.populated_days() {
//!     let summary = read_summary1(buf, entry.first_record_offset(day)?)?;
//!     println!("day {} spans {} minutes", day, summary.data_span);
//! }
//! # Ok(())
//! # }
//! ```

pub mod layout;
pub mod packed_time;
pub mod records;
pub mod resolve;
pub mod units;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use layout::{DayIndex, HeaderBlock, read_header, slot_offset};
pub use packed_time::decode_time;
pub use records::{
    DailySummary1, DailySummary2, IntervalRecord, read_interval, read_summary1, read_summary2,
};
pub use resolve::{resolve_daily_summary, resolve_interval};
pub use units::UnitConverter;
