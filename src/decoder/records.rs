//! Raw record slots copied out of the archive buffer.
//!
//! Each reader checks the slot's leading type tag, then copies the fixed-width
//! fields into a plain struct. Values are still raw logger integers here; see
//! [`super::resolve`] for conversion.

use crate::constants::{RECORD_SIZE, interval, record_tags, summary1, summary2};
use crate::error::{Result, WlkError};

use super::layout::{read_bytes, read_i16_le, read_u16_le, read_u8, slice_at};

/// Verify the slot at `offset` is complete and carries `expected_tag`
fn check_tag(buf: &[u8], offset: usize, expected_tag: u8) -> Result<()> {
    slice_at(buf, offset, RECORD_SIZE)?;
    let observed_tag = read_u8(buf, offset)?;
    if observed_tag != expected_tag {
        return Err(WlkError::MalformedRecord {
            offset,
            expected_tag,
            observed_tag,
        });
    }
    Ok(())
}

/// Daily summary record 1 (tag 2)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySummary1 {
    pub data_span: i16,
    pub hi_out_temp: i16,
    pub low_out_temp: i16,
    pub hi_in_temp: i16,
    pub low_in_temp: i16,
    pub avg_out_temp: i16,
    pub avg_in_temp: i16,
    pub hi_chill: i16,
    pub low_chill: i16,
    pub hi_dew: i16,
    pub low_dew: i16,
    pub avg_chill: i16,
    pub avg_dew: i16,
    pub hi_out_hum: i16,
    pub low_out_hum: i16,
    pub hi_in_hum: i16,
    pub low_in_hum: i16,
    pub avg_out_hum: i16,
    pub hi_bar: i16,
    pub low_bar: i16,
    pub avg_bar: i16,
    pub hi_speed: i16,
    pub avg_speed: i16,
    pub wind_run: i16,
    pub hi_10min_speed: i16,
    pub dir_hi_speed: u8,
    pub hi_10min_dir: u8,
    pub rain_total: i16,
    pub hi_rain_rate: i16,
    pub uv_dose: i16,
    pub hi_uv: u8,
    pub time_values: [u8; summary1::TIME_VALUES_LEN],
}

/// Daily summary record 2 (tag 3)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySummary2 {
    pub today_weather: u16,
    pub num_wind_packets: u16,
    pub hi_solar: i16,
    pub daily_solar_energy: i16,
    pub min_sun_light: i16,
    pub daily_et_total: i16,
    pub hi_heat: i16,
    pub low_heat: i16,
    pub avg_heat: i16,
    pub hi_thsw: i16,
    pub low_thsw: i16,
    pub hi_thw: i16,
    pub low_thw: i16,
    pub heat_dd65: i16,
    pub hi_wet_bulb: i16,
    pub low_wet_bulb: i16,
    pub avg_wet_bulb: i16,
    pub dir_bins: [u8; summary2::DIR_BINS_LEN],
    pub time_values: [u8; summary2::TIME_VALUES_LEN],
    pub cool_dd65: i16,
}

/// Archive interval record (tag 1)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalRecord {
    pub archive_interval: u8,
    pub icon_flags: u8,
    pub more_flags: u8,
    /// Minutes past midnight at the end of the interval
    pub packed_time: i16,
    pub out_temp: i16,
    pub hi_out_temp: i16,
    pub low_out_temp: i16,
    pub in_temp: i16,
    pub barometer: i16,
    pub out_hum: i16,
    pub in_hum: i16,
    /// Tip count in the low 12 bits, collector type in the high nibble
    pub rain: u16,
    /// Tips per hour
    pub hi_rain_rate: i16,
    pub wind_speed: i16,
    pub hi_wind_speed: i16,
    pub wind_direction: u8,
    pub hi_wind_direction: u8,
    pub num_wind_samples: i16,
    pub solar_rad: i16,
    pub hi_solar_rad: i16,
    pub uv: u8,
    pub hi_uv: u8,
    pub leaf_temp: [u8; interval::LEAF_SENSORS],
    pub extra_rad: i16,
    pub new_sensors: [i16; interval::NEW_SENSOR_COUNT],
    pub forecast: u8,
    pub et: u8,
    pub soil_temp: [u8; interval::SOIL_SENSORS],
    pub soil_moisture: [u8; interval::SOIL_SENSORS],
    pub leaf_wetness: [u8; interval::LEAF_SENSORS],
    pub extra_temp: [u8; interval::EXTRA_TEMP_SENSORS],
    pub extra_hum: [u8; interval::EXTRA_HUM_SENSORS],
}

/// Read the daily summary 1 record at `offset`
pub fn read_summary1(buf: &[u8], offset: usize) -> Result<DailySummary1> {
    use summary1::*;

    check_tag(buf, offset, record_tags::SUMMARY_1)?;
    let i16_at = |field: usize| read_i16_le(buf, offset + field);

    Ok(DailySummary1 {
        data_span: i16_at(DATA_SPAN)?,
        hi_out_temp: i16_at(HI_OUT_TEMP)?,
        low_out_temp: i16_at(LOW_OUT_TEMP)?,
        hi_in_temp: i16_at(HI_IN_TEMP)?,
        low_in_temp: i16_at(LOW_IN_TEMP)?,
        avg_out_temp: i16_at(AVG_OUT_TEMP)?,
        avg_in_temp: i16_at(AVG_IN_TEMP)?,
        hi_chill: i16_at(HI_CHILL)?,
        low_chill: i16_at(LOW_CHILL)?,
        hi_dew: i16_at(HI_DEW)?,
        low_dew: i16_at(LOW_DEW)?,
        avg_chill: i16_at(AVG_CHILL)?,
        avg_dew: i16_at(AVG_DEW)?,
        hi_out_hum: i16_at(HI_OUT_HUM)?,
        low_out_hum: i16_at(LOW_OUT_HUM)?,
        hi_in_hum: i16_at(HI_IN_HUM)?,
        low_in_hum: i16_at(LOW_IN_HUM)?,
        avg_out_hum: i16_at(AVG_OUT_HUM)?,
        hi_bar: i16_at(HI_BAR)?,
        low_bar: i16_at(LOW_BAR)?,
        avg_bar: i16_at(AVG_BAR)?,
        hi_speed: i16_at(HI_SPEED)?,
        avg_speed: i16_at(AVG_SPEED)?,
        wind_run: i16_at(WIND_RUN)?,
        hi_10min_speed: i16_at(HI_10MIN_SPEED)?,
        dir_hi_speed: read_u8(buf, offset + DIR_HI_SPEED)?,
        hi_10min_dir: read_u8(buf, offset + HI_10MIN_DIR)?,
        rain_total: i16_at(RAIN_TOTAL)?,
        hi_rain_rate: i16_at(HI_RAIN_RATE)?,
        uv_dose: i16_at(UV_DOSE)?,
        hi_uv: read_u8(buf, offset + HI_UV)?,
        time_values: read_bytes(buf, offset + TIME_VALUES)?,
    })
}

/// Read the daily summary 2 record at `offset`
pub fn read_summary2(buf: &[u8], offset: usize) -> Result<DailySummary2> {
    use summary2::*;

    check_tag(buf, offset, record_tags::SUMMARY_2)?;
    let i16_at = |field: usize| read_i16_le(buf, offset + field);

    Ok(DailySummary2 {
        today_weather: read_u16_le(buf, offset + TODAY_WEATHER)?,
        num_wind_packets: read_u16_le(buf, offset + NUM_WIND_PACKETS)?,
        hi_solar: i16_at(HI_SOLAR)?,
        daily_solar_energy: i16_at(DAILY_SOLAR_ENERGY)?,
        min_sun_light: i16_at(MIN_SUN_LIGHT)?,
        daily_et_total: i16_at(DAILY_ET_TOTAL)?,
        hi_heat: i16_at(HI_HEAT)?,
        low_heat: i16_at(LOW_HEAT)?,
        avg_heat: i16_at(AVG_HEAT)?,
        hi_thsw: i16_at(HI_THSW)?,
        low_thsw: i16_at(LOW_THSW)?,
        hi_thw: i16_at(HI_THW)?,
        low_thw: i16_at(LOW_THW)?,
        heat_dd65: i16_at(HEAT_DD65)?,
        hi_wet_bulb: i16_at(HI_WET_BULB)?,
        low_wet_bulb: i16_at(LOW_WET_BULB)?,
        avg_wet_bulb: i16_at(AVG_WET_BULB)?,
        dir_bins: read_bytes(buf, offset + DIR_BINS)?,
        time_values: read_bytes(buf, offset + TIME_VALUES)?,
        cool_dd65: i16_at(COOL_DD65)?,
    })
}

/// Read the archive interval record at `offset`
pub fn read_interval(buf: &[u8], offset: usize) -> Result<IntervalRecord> {
    use interval::*;

    check_tag(buf, offset, record_tags::INTERVAL)?;
    let i16_at = |field: usize| read_i16_le(buf, offset + field);
    let u8_at = |field: usize| read_u8(buf, offset + field);

    let mut new_sensors = [0i16; NEW_SENSOR_COUNT];
    for (i, value) in new_sensors.iter_mut().enumerate() {
        *value = i16_at(NEW_SENSORS + i * 2)?;
    }

    Ok(IntervalRecord {
        archive_interval: u8_at(ARCHIVE_INTERVAL)?,
        icon_flags: u8_at(ICON_FLAGS)?,
        more_flags: u8_at(MORE_FLAGS)?,
        packed_time: i16_at(PACKED_TIME)?,
        out_temp: i16_at(OUT_TEMP)?,
        hi_out_temp: i16_at(HI_OUT_TEMP)?,
        low_out_temp: i16_at(LOW_OUT_TEMP)?,
        in_temp: i16_at(IN_TEMP)?,
        barometer: i16_at(BAROMETER)?,
        out_hum: i16_at(OUT_HUM)?,
        in_hum: i16_at(IN_HUM)?,
        rain: read_u16_le(buf, offset + RAIN)?,
        hi_rain_rate: i16_at(HI_RAIN_RATE)?,
        wind_speed: i16_at(WIND_SPEED)?,
        hi_wind_speed: i16_at(HI_WIND_SPEED)?,
        wind_direction: u8_at(WIND_DIRECTION)?,
        hi_wind_direction: u8_at(HI_WIND_DIRECTION)?,
        num_wind_samples: i16_at(NUM_WIND_SAMPLES)?,
        solar_rad: i16_at(SOLAR_RAD)?,
        hi_solar_rad: i16_at(HI_SOLAR_RAD)?,
        uv: u8_at(UV)?,
        hi_uv: u8_at(HI_UV)?,
        leaf_temp: read_bytes(buf, offset + LEAF_TEMP)?,
        extra_rad: i16_at(EXTRA_RAD)?,
        new_sensors,
        forecast: u8_at(FORECAST)?,
        et: u8_at(ET)?,
        soil_temp: read_bytes(buf, offset + SOIL_TEMP)?,
        soil_moisture: read_bytes(buf, offset + SOIL_MOISTURE)?,
        leaf_wetness: read_bytes(buf, offset + LEAF_WETNESS)?,
        extra_temp: read_bytes(buf, offset + EXTRA_TEMP)?,
        extra_hum: read_bytes(buf, offset + EXTRA_HUM)?,
    })
}
