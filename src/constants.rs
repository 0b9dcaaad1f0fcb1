//! Format constants for WLK archive decoding
//!
//! This module contains the fixed byte layout of a monthly archive file,
//! the sentinel values used by the datalogger, and the conversion factors
//! used when resolving raw readings into physical quantities.

// =============================================================================
// File Layout
// =============================================================================

/// Size of the header block at the start of every monthly file
pub const HEADER_SIZE: usize = 212;

/// Size of every record slot following the header
pub const RECORD_SIZE: usize = 88;

/// Length of the ASCII identifier at the start of the header
pub const ID_CODE_LEN: usize = 16;

/// Offset of the total record count in the header
pub const TOTAL_RECORDS_OFFSET: usize = 16;

/// Offset of the first day index entry in the header
pub const DAY_INDEX_OFFSET: usize = 20;

/// Size of one day index entry (i16 records in day + i32 start position)
pub const DAY_INDEX_ENTRY_SIZE: usize = 6;

/// Number of day index entries (entry 0 is unused)
pub const DAY_INDEX_ENTRIES: usize = 32;

/// Summary records stored ahead of the interval records of each day
pub const SUMMARY_RECORDS_PER_DAY: i16 = 2;

/// Record type tags stored in the first byte of each slot
pub mod record_tags {
    /// Archive interval (weather data) record
    pub const INTERVAL: u8 = 1;

    /// Daily summary record 1 (temperature, humidity, pressure, wind, rain, UV)
    pub const SUMMARY_1: u8 = 2;

    /// Daily summary record 2 (solar, heat indices, direction bins, degree days)
    pub const SUMMARY_2: u8 = 3;
}

/// Byte offsets of fields inside a daily summary 1 slot
pub mod summary1 {
    pub const DATA_SPAN: usize = 2;
    pub const HI_OUT_TEMP: usize = 4;
    pub const LOW_OUT_TEMP: usize = 6;
    pub const HI_IN_TEMP: usize = 8;
    pub const LOW_IN_TEMP: usize = 10;
    pub const AVG_OUT_TEMP: usize = 12;
    pub const AVG_IN_TEMP: usize = 14;
    pub const HI_CHILL: usize = 16;
    pub const LOW_CHILL: usize = 18;
    pub const HI_DEW: usize = 20;
    pub const LOW_DEW: usize = 22;
    pub const AVG_CHILL: usize = 24;
    pub const AVG_DEW: usize = 26;
    pub const HI_OUT_HUM: usize = 28;
    pub const LOW_OUT_HUM: usize = 30;
    pub const HI_IN_HUM: usize = 32;
    pub const LOW_IN_HUM: usize = 34;
    pub const AVG_OUT_HUM: usize = 36;
    pub const HI_BAR: usize = 38;
    pub const LOW_BAR: usize = 40;
    pub const AVG_BAR: usize = 42;
    pub const HI_SPEED: usize = 44;
    pub const AVG_SPEED: usize = 46;
    pub const WIND_RUN: usize = 48;
    pub const HI_10MIN_SPEED: usize = 50;
    pub const DIR_HI_SPEED: usize = 52;
    pub const HI_10MIN_DIR: usize = 53;
    pub const RAIN_TOTAL: usize = 54;
    pub const HI_RAIN_RATE: usize = 56;
    pub const UV_DOSE: usize = 58;
    pub const HI_UV: usize = 60;
    pub const TIME_VALUES: usize = 61;
    pub const TIME_VALUES_LEN: usize = 27;

    /// Number of packed time slots in `TIME_VALUES`
    pub const TIME_SLOTS: usize = 18;

    /// Time slot indices
    pub mod time {
        pub const HI_OUT_TEMP: usize = 0;
        pub const LOW_OUT_TEMP: usize = 1;
        pub const HI_IN_TEMP: usize = 2;
        pub const LOW_IN_TEMP: usize = 3;
        pub const HI_CHILL: usize = 4;
        pub const LOW_CHILL: usize = 5;
        pub const HI_DEW: usize = 6;
        pub const LOW_DEW: usize = 7;
        pub const HI_OUT_HUM: usize = 8;
        pub const LOW_OUT_HUM: usize = 9;
        pub const HI_IN_HUM: usize = 10;
        pub const LOW_IN_HUM: usize = 11;
        pub const HI_BAR: usize = 12;
        pub const LOW_BAR: usize = 13;
        pub const HI_SPEED: usize = 14;
        pub const HI_10MIN_SPEED: usize = 15;
        pub const HI_RAIN_RATE: usize = 16;
        pub const HI_UV: usize = 17;
    }
}

/// Byte offsets of fields inside a daily summary 2 slot
pub mod summary2 {
    pub const TODAY_WEATHER: usize = 2;
    pub const NUM_WIND_PACKETS: usize = 4;
    pub const HI_SOLAR: usize = 6;
    pub const DAILY_SOLAR_ENERGY: usize = 8;
    pub const MIN_SUN_LIGHT: usize = 10;
    pub const DAILY_ET_TOTAL: usize = 12;
    pub const HI_HEAT: usize = 14;
    pub const LOW_HEAT: usize = 16;
    pub const AVG_HEAT: usize = 18;
    pub const HI_THSW: usize = 20;
    pub const LOW_THSW: usize = 22;
    pub const HI_THW: usize = 24;
    pub const LOW_THW: usize = 26;
    pub const HEAT_DD65: usize = 28;
    pub const HI_WET_BULB: usize = 30;
    pub const LOW_WET_BULB: usize = 32;
    pub const AVG_WET_BULB: usize = 34;
    pub const DIR_BINS: usize = 36;
    pub const DIR_BINS_LEN: usize = 24;
    pub const TIME_VALUES: usize = 60;
    pub const TIME_VALUES_LEN: usize = 15;
    pub const COOL_DD65: usize = 75;

    /// Number of 12-bit direction bin counters in `DIR_BINS`
    pub const DIRECTION_BINS: usize = 16;

    /// Number of packed time slots in `TIME_VALUES`
    pub const TIME_SLOTS: usize = 9;

    /// Time slot indices
    pub mod time {
        pub const HI_SOLAR: usize = 0;
        pub const HI_HEAT: usize = 1;
        pub const LOW_HEAT: usize = 2;
        pub const HI_THSW: usize = 3;
        pub const LOW_THSW: usize = 4;
        pub const HI_THW: usize = 5;
        pub const LOW_THW: usize = 6;
        pub const HI_WET_BULB: usize = 7;
        pub const LOW_WET_BULB: usize = 8;
    }
}

/// Byte offsets of fields inside an archive interval slot
pub mod interval {
    pub const ARCHIVE_INTERVAL: usize = 1;
    pub const ICON_FLAGS: usize = 2;
    pub const MORE_FLAGS: usize = 3;
    pub const PACKED_TIME: usize = 4;
    pub const OUT_TEMP: usize = 6;
    pub const HI_OUT_TEMP: usize = 8;
    pub const LOW_OUT_TEMP: usize = 10;
    pub const IN_TEMP: usize = 12;
    pub const BAROMETER: usize = 14;
    pub const OUT_HUM: usize = 16;
    pub const IN_HUM: usize = 18;
    pub const RAIN: usize = 20;
    pub const HI_RAIN_RATE: usize = 22;
    pub const WIND_SPEED: usize = 24;
    pub const HI_WIND_SPEED: usize = 26;
    pub const WIND_DIRECTION: usize = 28;
    pub const HI_WIND_DIRECTION: usize = 29;
    pub const NUM_WIND_SAMPLES: usize = 30;
    pub const SOLAR_RAD: usize = 32;
    pub const HI_SOLAR_RAD: usize = 34;
    pub const UV: usize = 36;
    pub const HI_UV: usize = 37;
    pub const LEAF_TEMP: usize = 38;
    pub const EXTRA_RAD: usize = 42;
    pub const NEW_SENSORS: usize = 44;
    pub const FORECAST: usize = 56;
    pub const ET: usize = 57;
    pub const SOIL_TEMP: usize = 58;
    pub const SOIL_MOISTURE: usize = 64;
    pub const LEAF_WETNESS: usize = 70;
    pub const EXTRA_TEMP: usize = 74;
    pub const EXTRA_HUM: usize = 81;

    pub const LEAF_SENSORS: usize = 4;
    pub const NEW_SENSOR_COUNT: usize = 6;
    pub const SOIL_SENSORS: usize = 6;
    pub const EXTRA_TEMP_SENSORS: usize = 7;
    pub const EXTRA_HUM_SENSORS: usize = 7;
}

// =============================================================================
// Sentinels
// =============================================================================

/// Missing value marker for 16-bit fields
pub const MISSING_I16: i16 = i16::MIN;

/// Missing value marker for single-byte sensor fields
pub const MISSING_BYTE: u8 = 255;

/// Wind direction code meaning calm or undefined
pub const CALM_DIRECTION: u8 = 255;

/// Packed 12-bit time values meaning "no data"
pub const PACKED_TIME_SENTINELS: &[u16] = &[0x0FFF, 0x07FF, 0x1000, 0x0800];

/// Offset applied to whole-degree temperatures stored in a single byte
pub const BYTE_TEMPERATURE_OFFSET: i16 = 90;

/// Minutes in a day; a packed time of this value marks the end-of-day boundary
pub const MINUTES_PER_DAY: i16 = 1440;

// =============================================================================
// Conversion Factors
// =============================================================================

/// Hectopascals per inch of mercury
pub const HPA_PER_INHG: f64 = 33.8639;

/// Kilometres per statute mile
pub const KM_PER_MILE: f64 = 1.609344;

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Metres per second per mile per hour
pub const MPS_PER_MPH: f64 = 0.44704;

/// J/m² per stored tenth-of-a-Langley unit
pub const J_PER_M2_PER_TENTH_LANGLEY: f64 = 418.4;

/// Degrees of arc per wind direction code
pub const DEGREES_PER_DIRECTION_CODE: f64 = 22.5;

/// Rain collector tip sizes keyed by the high nibble of the interval rain field
pub mod rain_collector {
    /// 0.1 inch per tip
    pub const TENTH_INCH: u16 = 0x0;
    /// 0.01 inch per tip
    pub const HUNDREDTH_INCH: u16 = 0x1;
    /// 0.2 mm per tip
    pub const FIFTH_MM: u16 = 0x2;
    /// 1.0 mm per tip
    pub const ONE_MM: u16 = 0x3;
    /// 0.1 mm per tip
    pub const TENTH_MM: u16 = 0x6;

    /// Mask selecting the tip count in the rain field
    pub const TIP_MASK: u16 = 0x0FFF;
}
