//! Tests for raw value conversion

use crate::constants::MISSING_I16;
use crate::decoder::units::{UnitConverter, round_tenths};
use crate::models::UnitSystem;

fn imperial() -> UnitConverter {
    UnitConverter::new(UnitSystem::Imperial)
}

fn metric() -> UnitConverter {
    UnitConverter::new(UnitSystem::Metric)
}

fn assert_close(actual: Option<f64>, expected: f64, tolerance: f64) {
    let value = actual.unwrap_or_else(|| panic!("expected {}, got None", expected));
    assert!(
        (value - expected).abs() < tolerance,
        "expected {} ± {}, got {}",
        expected,
        tolerance,
        value
    );
}

#[test]
fn test_default_is_imperial() {
    assert_eq!(UnitConverter::default().unit_system(), UnitSystem::Imperial);
    assert_eq!(metric().unit_system(), UnitSystem::Metric);
}

#[test]
fn test_pressure() {
    assert_close(imperial().pressure(29972), 29.972, 1e-9);
    assert_close(metric().pressure(29972), 1015.0, 0.05);
}

#[test]
fn test_temperature() {
    assert_close(imperial().temperature(-65), -6.5, 1e-9);
    assert_close(metric().temperature(-65), -21.389, 0.001);
    assert_close(imperial().temperature(455), 45.5, 1e-9);
    assert_close(metric().temperature(455), 7.5, 1e-9);
    assert_close(metric().temperature(320), 0.0, 1e-9);
}

#[test]
fn test_byte_temperature_offset() {
    assert_close(imperial().byte_temperature(160), 70.0, 1e-9);
    assert_close(metric().byte_temperature(160), 21.111, 0.001);
    assert_close(imperial().byte_temperature(90), 0.0, 1e-9);
    assert_close(imperial().byte_temperature(0), -90.0, 1e-9);
    assert_eq!(imperial().byte_temperature(255), None);
}

#[test]
fn test_wind_direction_codes() {
    let conv = imperial();
    assert_eq!(conv.wind_direction(0), Some(0.0));
    assert_eq!(conv.wind_direction(4), Some(90.0));
    assert_eq!(conv.wind_direction(7), Some(157.5));
    assert_eq!(conv.wind_direction(15), Some(337.5));
    assert_eq!(conv.wind_direction(255), None);
    // direction is unit independent
    assert_eq!(metric().wind_direction(7), Some(157.5));
}

#[test]
fn test_humidity_rounds_half_away_from_zero() {
    let conv = imperial();
    assert_eq!(conv.humidity(509), Some(51));
    assert_eq!(conv.humidity(505), Some(51));
    assert_eq!(conv.humidity(504), Some(50));
    assert_eq!(conv.humidity(1000), Some(100));
    assert_eq!(conv.humidity(0), Some(0));
    assert_eq!(metric().humidity(509), Some(51));

    assert_eq!(round_tenths(-15), -2);
    assert_eq!(round_tenths(-14), -1);
    assert_eq!(round_tenths(15), 2);
}

#[test]
fn test_byte_humidity_and_counts() {
    let conv = imperial();
    assert_eq!(conv.byte_humidity(64), Some(64));
    assert_eq!(conv.byte_humidity(255), None);
    assert_eq!(conv.byte_count(12), Some(12));
    assert_eq!(conv.byte_count(255), None);
    assert_eq!(conv.count(1440), Some(1440));
    assert_eq!(conv.count(MISSING_I16), None);
}

#[test]
fn test_wind_speed_and_run() {
    assert_close(imperial().wind_speed(100), 10.0, 1e-9);
    assert_close(metric().wind_speed(100), 4.4704, 1e-9);
    assert_close(imperial().wind_run(125), 12.5, 1e-9);
    assert_close(metric().wind_run(125), 20.1168, 1e-6);
}

#[test]
fn test_precipitation_and_rain_rate() {
    assert_close(imperial().precipitation(1000), 1.0, 1e-9);
    assert_close(metric().precipitation(1000), 25.4, 1e-9);
    // rain rate is stored in hundredths, not thousandths
    assert_close(imperial().rain_rate(150), 1.5, 1e-9);
    assert_close(metric().rain_rate(150), 38.1, 1e-9);
    assert_close(imperial().byte_precipitation(20), 0.02, 1e-9);
    assert_eq!(imperial().byte_precipitation(255), None);
}

#[test]
fn test_solar_energy_tenth_langleys() {
    assert_close(imperial().solar_energy(100), 10.0, 1e-9);
    assert_close(metric().solar_energy(100), 41840.0, 1e-6);
    assert_eq!(imperial().solar_radiation(812), Some(812.0));
    assert_eq!(metric().solar_radiation(812), Some(812.0));
}

#[test]
fn test_degree_days_are_a_difference() {
    assert_close(imperial().degree_days(180), 18.0, 1e-9);
    assert_close(metric().degree_days(180), 10.0, 1e-9);
    assert_close(metric().degree_days(0), 0.0, 1e-9);
}

#[test]
fn test_uv() {
    assert_close(imperial().uv(45), 4.5, 1e-9);
    assert_close(imperial().byte_uv(67), 6.7, 1e-9);
    assert_eq!(imperial().byte_uv(255), None);
}

#[test]
fn test_rain_tips_per_collector() {
    // 0.01 in collector, 5 tips
    assert_close(imperial().rain_tips(0x1005), 0.05, 1e-9);
    assert_close(metric().rain_tips(0x1005), 1.27, 1e-9);
    // 0.1 in collector
    assert_close(imperial().rain_tips(0x0003), 0.3, 1e-9);
    // 0.2 mm collector, 10 tips
    assert_close(metric().rain_tips(0x200A), 2.0, 1e-9);
    assert_close(imperial().rain_tips(0x200A), 2.0 / 25.4, 1e-9);
    // 1 mm and 0.1 mm collectors
    assert_close(metric().rain_tips(0x3002), 2.0, 1e-9);
    assert_close(metric().rain_tips(0x6004), 0.4, 1e-9);
    assert_close(metric().rain_tips(0x1000), 0.0, 1e-9);
}

#[test]
fn test_rain_tips_unknown_collector() {
    assert_eq!(imperial().rain_tips(0x4001), None);
    assert_eq!(metric().rain_tips(0xF001), None);
    assert_eq!(imperial().rain_tip_rate(0x5000, 10), None);
}

#[test]
fn test_rain_tip_rate() {
    assert_close(imperial().rain_tip_rate(0x1000, 120), 1.2, 1e-9);
    assert_close(metric().rain_tip_rate(0x3000, 6), 6.0, 1e-9);
    assert_eq!(imperial().rain_tip_rate(0x1000, MISSING_I16), None);
}

#[test]
fn test_sentinels_in_both_systems() {
    for conv in [imperial(), metric()] {
        assert_eq!(conv.pressure(MISSING_I16), None);
        assert_eq!(conv.temperature(MISSING_I16), None);
        assert_eq!(conv.humidity(MISSING_I16), None);
        assert_eq!(conv.wind_speed(MISSING_I16), None);
        assert_eq!(conv.wind_run(MISSING_I16), None);
        assert_eq!(conv.precipitation(MISSING_I16), None);
        assert_eq!(conv.rain_rate(MISSING_I16), None);
        assert_eq!(conv.degree_days(MISSING_I16), None);
        assert_eq!(conv.uv(MISSING_I16), None);
        assert_eq!(conv.solar_energy(MISSING_I16), None);
        assert_eq!(conv.solar_radiation(MISSING_I16), None);
        assert_eq!(conv.byte_temperature(255), None);
        assert_eq!(conv.wind_direction(255), None);
    }
}
