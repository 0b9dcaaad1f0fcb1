//! WLK Reader Library
//!
//! A Rust library for decoding the monthly `.wlk` archive files written by
//! WeatherLink weather-station dataloggers into unit-converted daily
//! summaries and interval time series.
//!
//! This library provides tools for:
//! - Reading the fixed 212-byte header and its day index
//! - Validating and decoding the 88-byte summary and interval record slots
//! - Decoding the bit-packed 12-bit times of daily extremes
//! - Converting raw fixed-point readings to imperial or metric quantities,
//!   with logger sentinels resolved to `None`
//! - Assembling a month into per-day results with absolute timestamps and an
//!   optional date-time window
//!
//! # Example
//!
//! ```rust,no_run
//! use wlk_reader::{ArchiveDecoder, DecoderConfig, MonthAnchor};
//!
//! # fn example(bytes: &[u8]) -> wlk_reader::Result<()> {
//! let decoder = ArchiveDecoder::new(DecoderConfig::default().with_metric());
//! let days = decoder.decode(bytes, MonthAnchor::new(2012, 2)?).into_result()?;
//! for day in &days {
//!     println!("{}: {} records", day.date(), day.records.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod cli;
pub mod config;
pub mod constants;
pub mod decoder;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use archive::{
    ArchiveDecoder, DateTimeWindow, DecodeResult, DecodeStats, MonthAnchor, decode_month,
};
pub use config::DecoderConfig;
pub use decoder::UnitConverter;
pub use error::{Result, WlkError};
pub use models::{DailySummary, DailyWeatherData, UnitSystem, WeatherDataRecord};
