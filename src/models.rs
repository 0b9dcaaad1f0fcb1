//! Decoded output records for WLK archives.
//!
//! These are owned, unit-resolved value objects. They outlive the archive
//! buffer and never carry sentinel values: every reading is either a physical
//! quantity or `None`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::constants::{interval, summary2};

/// Unit system used when resolving raw readings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitSystem {
    /// Values as stored by the logger: °F, inHg, mph, miles, inches, Langleys
    #[default]
    Imperial,
    /// °C, hPa, m/s, km, mm, J/m²
    Metric,
}

impl UnitSystem {
    pub fn is_metric(&self) -> bool {
        matches!(self, UnitSystem::Metric)
    }
}

/// A single extreme reading and the time of day it occurred
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedReading<T> {
    pub value: Option<T>,
    pub time: Option<NaiveTime>,
}

impl<T> TimedReading<T> {
    pub fn new(value: Option<T>, time: Option<NaiveTime>) -> Self {
        Self { value, time }
    }
}

/// Daily high, low and average for one measured quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRange<T> {
    pub high: TimedReading<T>,
    pub low: TimedReading<T>,
    /// Not every quantity has an integrated daily average
    pub average: Option<T>,
}

/// Peak wind speed with its direction in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindPeak {
    pub speed: Option<f64>,
    pub direction: Option<f64>,
    pub time: Option<NaiveTime>,
}

/// Per-day statistics combined from both daily summary records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,

    /// Minutes of the day covered by interval records
    pub data_span_minutes: Option<i32>,

    pub outside_temperature: DailyRange<f64>,
    pub inside_temperature: DailyRange<f64>,
    pub wind_chill: DailyRange<f64>,
    pub dew_point: DailyRange<f64>,
    pub outside_humidity: DailyRange<i32>,
    pub inside_humidity: DailyRange<i32>,
    pub pressure: DailyRange<f64>,
    pub heat_index: DailyRange<f64>,
    pub thsw_index: DailyRange<f64>,
    pub thw_index: DailyRange<f64>,
    /// Wet bulb values are not calculated by current loggers
    pub wet_bulb: DailyRange<f64>,

    pub max_wind: WindPeak,
    pub max_avg_10min_wind: WindPeak,
    pub avg_wind_speed: Option<f64>,
    pub wind_run: Option<f64>,
    pub num_wind_packets: u16,
    /// Minutes the wind blew from each of the 16 compass points
    pub wind_direction_distribution: [u16; summary2::DIRECTION_BINS],

    pub daily_rain: Option<f64>,
    pub max_rain_rate: TimedReading<f64>,
    pub daily_et: Option<f64>,

    /// Daily UV dose in MED
    pub daily_uv_dose: Option<f64>,
    pub max_uv: TimedReading<f64>,

    /// Highest solar radiation in W/m²
    pub max_solar_radiation: TimedReading<f64>,
    pub daily_solar_energy: Option<f64>,
    /// Minutes with average solar radiation above 150 W/m²
    pub sunlight_minutes: Option<i32>,

    pub heating_degree_days: Option<f64>,
    pub cooling_degree_days: Option<f64>,

    /// Bitmapped weather conditions, unused by current loggers
    pub today_weather: u16,
}

/// One archive interval resolved to an absolute timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherDataRecord {
    /// End of the archive interval
    pub timestamp: NaiveDateTime,
    pub archive_interval_minutes: u8,
    pub icon_flags: u8,
    pub more_flags: u8,
    pub num_wind_samples: Option<i32>,

    pub outside_temperature: Option<f64>,
    pub max_outside_temperature: Option<f64>,
    pub min_outside_temperature: Option<f64>,
    pub inside_temperature: Option<f64>,
    pub pressure: Option<f64>,
    pub outside_humidity: Option<i32>,
    pub inside_humidity: Option<i32>,

    pub precipitation: Option<f64>,
    pub max_precipitation_rate: Option<f64>,

    pub wind_speed: Option<f64>,
    pub max_wind_speed: Option<f64>,
    pub wind_direction: Option<f64>,
    pub max_wind_direction: Option<f64>,

    pub solar_radiation: Option<f64>,
    pub max_solar_radiation: Option<f64>,
    pub extra_radiation: Option<f64>,
    pub uv: Option<f64>,
    pub max_uv: Option<f64>,
    pub et: Option<f64>,
    pub forecast: u8,

    pub leaf_temperature: [Option<f64>; interval::LEAF_SENSORS],
    pub leaf_wetness: [Option<i32>; interval::LEAF_SENSORS],
    pub soil_temperature: [Option<f64>; interval::SOIL_SENSORS],
    /// Centibars of dryness
    pub soil_moisture: [Option<i32>; interval::SOIL_SENSORS],
    pub extra_temperature: [Option<f64>; interval::EXTRA_TEMP_SENSORS],
    pub extra_humidity: [Option<i32>; interval::EXTRA_HUM_SENSORS],
    /// Reserved sensor slots, passed through raw
    pub new_sensors: [i16; interval::NEW_SENSOR_COUNT],
}

/// A day's summary together with its interval records in archive order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyWeatherData {
    pub summary: DailySummary,
    pub records: Vec<WeatherDataRecord>,
}

impl DailyWeatherData {
    pub fn new(summary: DailySummary, records: Vec<WeatherDataRecord>) -> Self {
        Self { summary, records }
    }

    pub fn date(&self) -> NaiveDate {
        self.summary.date
    }
}
