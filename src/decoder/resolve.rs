//! Resolution of raw records into unit-converted output records.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::constants::summary2;
use crate::models::{DailyRange, DailySummary, TimedReading, WeatherDataRecord, WindPeak};

use super::packed_time::{decode_time, unpack_slot};
use super::records::{DailySummary1, DailySummary2, IntervalRecord};
use super::units::UnitConverter;

/// Build the day's summary from both summary records
pub fn resolve_daily_summary(
    date: NaiveDate,
    s1: &DailySummary1,
    s2: &DailySummary2,
    conv: &UnitConverter,
) -> DailySummary {
    use crate::constants::summary1::time as t1;
    use crate::constants::summary2::time as t2;

    let time1 = |slot: usize| decode_time(slot, &s1.time_values);
    let time2 = |slot: usize| decode_time(slot, &s2.time_values);

    let temperature_range = |hi: i16,
                          hi_t: Option<NaiveTime>,
                          lo: i16,
                          lo_t: Option<NaiveTime>,
                          avg: Option<i16>| DailyRange {
        high: TimedReading::new(conv.temperature(hi), hi_t),
        low: TimedReading::new(conv.temperature(lo), lo_t),
        average: avg.and_then(|a| conv.temperature(a)),
    };
    let humidity_range = |hi: i16,
                          hi_t: Option<NaiveTime>,
                          lo: i16,
                          lo_t: Option<NaiveTime>,
                          avg: Option<i16>| DailyRange {
        high: TimedReading::new(conv.humidity(hi), hi_t),
        low: TimedReading::new(conv.humidity(lo), lo_t),
        average: avg.and_then(|a| conv.humidity(a)),
    };

    let mut wind_direction_distribution = [0u16; summary2::DIRECTION_BINS];
    for (bin, minutes) in wind_direction_distribution.iter_mut().enumerate() {
        *minutes = unpack_slot(bin, &s2.dir_bins).unwrap_or(0);
    }

    DailySummary {
        date,
        data_span_minutes: conv.count(s1.data_span),
        outside_temperature: temperature_range(
            s1.hi_out_temp,
            time1(t1::HI_OUT_TEMP),
            s1.low_out_temp,
            time1(t1::LOW_OUT_TEMP),
            Some(s1.avg_out_temp),
        ),
        inside_temperature: temperature_range(
            s1.hi_in_temp,
            time1(t1::HI_IN_TEMP),
            s1.low_in_temp,
            time1(t1::LOW_IN_TEMP),
            Some(s1.avg_in_temp),
        ),
        wind_chill: temperature_range(
            s1.hi_chill,
            time1(t1::HI_CHILL),
            s1.low_chill,
            time1(t1::LOW_CHILL),
            Some(s1.avg_chill),
        ),
        dew_point: temperature_range(
            s1.hi_dew,
            time1(t1::HI_DEW),
            s1.low_dew,
            time1(t1::LOW_DEW),
            Some(s1.avg_dew),
        ),
        outside_humidity: humidity_range(
            s1.hi_out_hum,
            time1(t1::HI_OUT_HUM),
            s1.low_out_hum,
            time1(t1::LOW_OUT_HUM),
            Some(s1.avg_out_hum),
        ),
        inside_humidity: humidity_range(
            s1.hi_in_hum,
            time1(t1::HI_IN_HUM),
            s1.low_in_hum,
            time1(t1::LOW_IN_HUM),
            None,
        ),
        pressure: DailyRange {
            high: TimedReading::new(conv.pressure(s1.hi_bar), time1(t1::HI_BAR)),
            low: TimedReading::new(conv.pressure(s1.low_bar), time1(t1::LOW_BAR)),
            average: conv.pressure(s1.avg_bar),
        },
        heat_index: temperature_range(
            s2.hi_heat,
            time2(t2::HI_HEAT),
            s2.low_heat,
            time2(t2::LOW_HEAT),
            Some(s2.avg_heat),
        ),
        thsw_index: temperature_range(
            s2.hi_thsw,
            time2(t2::HI_THSW),
            s2.low_thsw,
            time2(t2::LOW_THSW),
            None,
        ),
        thw_index: temperature_range(
            s2.hi_thw,
            time2(t2::HI_THW),
            s2.low_thw,
            time2(t2::LOW_THW),
            None,
        ),
        wet_bulb: temperature_range(
            s2.hi_wet_bulb,
            time2(t2::HI_WET_BULB),
            s2.low_wet_bulb,
            time2(t2::LOW_WET_BULB),
            Some(s2.avg_wet_bulb),
        ),
        max_wind: WindPeak {
            speed: conv.wind_speed(s1.hi_speed),
            direction: conv.wind_direction(s1.dir_hi_speed),
            time: time1(t1::HI_SPEED),
        },
        max_avg_10min_wind: WindPeak {
            speed: conv.wind_speed(s1.hi_10min_speed),
            direction: conv.wind_direction(s1.hi_10min_dir),
            time: time1(t1::HI_10MIN_SPEED),
        },
        avg_wind_speed: conv.wind_speed(s1.avg_speed),
        wind_run: conv.wind_run(s1.wind_run),
        num_wind_packets: s2.num_wind_packets,
        wind_direction_distribution,
        daily_rain: conv.precipitation(s1.rain_total),
        max_rain_rate: TimedReading::new(
            conv.rain_rate(s1.hi_rain_rate),
            time1(t1::HI_RAIN_RATE),
        ),
        daily_et: conv.precipitation(s2.daily_et_total),
        daily_uv_dose: conv.uv(s1.uv_dose),
        max_uv: TimedReading::new(conv.byte_uv(s1.hi_uv), time1(t1::HI_UV)),
        max_solar_radiation: TimedReading::new(
            conv.solar_radiation(s2.hi_solar),
            time2(t2::HI_SOLAR),
        ),
        daily_solar_energy: conv.solar_energy(s2.daily_solar_energy),
        sunlight_minutes: conv.count(s2.min_sun_light),
        heating_degree_days: conv.degree_days(s2.heat_dd65),
        cooling_degree_days: conv.degree_days(s2.cool_dd65),
        today_weather: s2.today_weather,
    }
}

/// Build an output record for an interval ending at `timestamp`
pub fn resolve_interval(
    timestamp: NaiveDateTime,
    rec: &IntervalRecord,
    conv: &UnitConverter,
) -> WeatherDataRecord {
    WeatherDataRecord {
        timestamp,
        archive_interval_minutes: rec.archive_interval,
        icon_flags: rec.icon_flags,
        more_flags: rec.more_flags,
        num_wind_samples: conv.count(rec.num_wind_samples),
        outside_temperature: conv.temperature(rec.out_temp),
        max_outside_temperature: conv.temperature(rec.hi_out_temp),
        min_outside_temperature: conv.temperature(rec.low_out_temp),
        inside_temperature: conv.temperature(rec.in_temp),
        pressure: conv.pressure(rec.barometer),
        outside_humidity: conv.humidity(rec.out_hum),
        inside_humidity: conv.humidity(rec.in_hum),
        precipitation: conv.rain_tips(rec.rain),
        max_precipitation_rate: conv.rain_tip_rate(rec.rain, rec.hi_rain_rate),
        wind_speed: conv.wind_speed(rec.wind_speed),
        max_wind_speed: conv.wind_speed(rec.hi_wind_speed),
        wind_direction: conv.wind_direction(rec.wind_direction),
        max_wind_direction: conv.wind_direction(rec.hi_wind_direction),
        solar_radiation: conv.solar_radiation(rec.solar_rad),
        max_solar_radiation: conv.solar_radiation(rec.hi_solar_rad),
        extra_radiation: conv.solar_radiation(rec.extra_rad),
        uv: conv.byte_uv(rec.uv),
        max_uv: conv.byte_uv(rec.hi_uv),
        et: conv.byte_precipitation(rec.et),
        forecast: rec.forecast,
        leaf_temperature: rec.leaf_temp.map(|b| conv.byte_temperature(b)),
        leaf_wetness: rec.leaf_wetness.map(|b| conv.byte_count(b)),
        soil_temperature: rec.soil_temp.map(|b| conv.byte_temperature(b)),
        soil_moisture: rec.soil_moisture.map(|b| conv.byte_count(b)),
        extra_temperature: rec.extra_temp.map(|b| conv.byte_temperature(b)),
        extra_humidity: rec.extra_hum.map(|b| conv.byte_humidity(b)),
        new_sensors: rec.new_sensors,
    }
}
