use crate::archive::interval_timestamp;
use crate::constants::{MINUTES_PER_DAY, MISSING_I16, summary1, summary2};
use crate::decoder::packed_time::{decode_time, encode_time, unpack_slot};
use crate::decoder::units::{UnitConverter, round_tenths};
use crate::models::UnitSystem;
use chrono::{NaiveDate, NaiveTime, Timelike};
use proptest::prelude::*;

fn arb_unit_system() -> impl Strategy<Value = UnitSystem> {
    prop_oneof![Just(UnitSystem::Imperial), Just(UnitSystem::Metric)]
}

proptest! {
    /// Property: any time of day survives encode then decode in every slot
    #[test]
    fn prop_time_roundtrip(
        hour in 0u32..24,
        minute in 0u32..60,
        index in 0usize..summary1::TIME_SLOTS,
        fill in any::<u8>(),
    ) {
        let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
        let mut bytes = [fill; summary1::TIME_VALUES_LEN];
        encode_time(index, Some(time), &mut bytes);

        let decoded = decode_time(index, &bytes).unwrap();
        prop_assert_eq!(decoded.hour(), hour);
        prop_assert_eq!(decoded.minute(), minute);
    }

    /// Property: writing one slot never disturbs its triplet neighbour
    #[test]
    fn prop_neighbour_untouched(
        minutes in 0u32..1440,
        index in 0usize..summary2::TIME_SLOTS,
        fill in any::<u8>(),
    ) {
        let mut bytes = [fill; summary2::TIME_VALUES_LEN];
        let neighbour = index ^ 1;
        let before = unpack_slot(neighbour, &bytes);

        let time = NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).unwrap();
        encode_time(index, Some(time), &mut bytes);
        prop_assert_eq!(unpack_slot(neighbour, &bytes), before);
    }

    /// Property: the missing marker is None whatever the unit system
    #[test]
    fn prop_missing_is_none(unit_system in arb_unit_system()) {
        let conv = UnitConverter::new(unit_system);
        prop_assert!(conv.temperature(MISSING_I16).is_none());
        prop_assert!(conv.pressure(MISSING_I16).is_none());
        prop_assert!(conv.humidity(MISSING_I16).is_none());
        prop_assert!(conv.wind_speed(MISSING_I16).is_none());
        prop_assert!(conv.precipitation(MISSING_I16).is_none());
        prop_assert!(conv.solar_energy(MISSING_I16).is_none());
        prop_assert!(conv.degree_days(MISSING_I16).is_none());
        prop_assert!(conv.wind_direction(255).is_none());
        prop_assert!(conv.byte_temperature(255).is_none());
    }

    /// Property: present values always convert
    #[test]
    fn prop_present_is_some(
        raw in (i16::MIN + 1)..=i16::MAX,
        unit_system in arb_unit_system(),
    ) {
        let conv = UnitConverter::new(unit_system);
        prop_assert!(conv.temperature(raw).is_some());
        prop_assert!(conv.pressure(raw).is_some());
        prop_assert!(conv.humidity(raw).is_some());
    }

    /// Property: integer rounding agrees with rounding half away from zero
    #[test]
    fn prop_round_tenths(raw in -20_000i32..20_000) {
        let expected = (f64::from(raw) / 10.0).round() as i32;
        prop_assert_eq!(round_tenths(raw), expected);
    }

    /// Property: interval times inside the day land on the record's date
    #[test]
    fn prop_interval_timestamp(packed in 0i16..MINUTES_PER_DAY) {
        let date = NaiveDate::from_ymd_opt(2012, 2, 29).unwrap();
        let ts = interval_timestamp(date, packed, 0).unwrap();
        prop_assert_eq!(ts.date(), date);
        prop_assert_eq!((ts.hour() * 60 + ts.minute()) as i16, packed);
    }

    /// Property: packed times past the end of day are rejected
    #[test]
    fn prop_interval_timestamp_out_of_range(packed in (MINUTES_PER_DAY + 1)..=i16::MAX) {
        let date = NaiveDate::from_ymd_opt(2012, 2, 1).unwrap();
        prop_assert!(interval_timestamp(date, packed, 0).is_err());
        prop_assert!(interval_timestamp(date, -packed, 0).is_err());
    }
}
