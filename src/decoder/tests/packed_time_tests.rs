//! Tests for packed time decoding

use chrono::NaiveTime;

use crate::constants::{PACKED_TIME_SENTINELS, summary1};
use crate::decoder::packed_time::{
    decode_time, encode_time, is_sentinel, minutes_to_time, pack_slot, unpack_slot,
};

fn hm(hour: u32, minute: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0)
}

#[test]
fn test_even_and_odd_slots_share_triplet() {
    // slot 0: 0x2C | (0x1 << 8) = 300; slot 1: 0x5A | (0x3 << 8) = 858
    let bytes = [0x2C, 0x5A, 0x31];

    assert_eq!(unpack_slot(0, &bytes), Some(300));
    assert_eq!(unpack_slot(1, &bytes), Some(858));
    assert_eq!(decode_time(0, &bytes), hm(5, 0));
    assert_eq!(decode_time(1, &bytes), hm(14, 18));
}

#[test]
fn test_second_triplet_addressing() {
    let mut bytes = [0u8; 6];
    bytes[3] = 0x0F; // slot 2 low byte
    bytes[4] = 0x3B; // slot 3 low byte
    bytes[5] = 0x20; // slot 2 high nibble 0, slot 3 high nibble 2

    assert_eq!(unpack_slot(2, &bytes), Some(15));
    assert_eq!(unpack_slot(3, &bytes), Some(0x23B));
    assert_eq!(decode_time(3, &bytes), hm(9, 31));
}

#[test]
fn test_sentinels_are_no_data() {
    for &sentinel in PACKED_TIME_SENTINELS {
        assert!(is_sentinel(sentinel));
        if sentinel > 0x0FFF {
            // wider than a slot, cannot be stored
            continue;
        }

        let mut bytes = [0u8; 3];
        pack_slot(0, sentinel, &mut bytes);
        pack_slot(1, sentinel, &mut bytes);
        assert_eq!(decode_time(0, &bytes), None, "sentinel {:#06x}", sentinel);
        assert_eq!(decode_time(1, &bytes), None, "sentinel {:#06x}", sentinel);
    }
    assert!(!is_sentinel(0x05A0));
}

#[test]
fn test_all_ones_bytes_mean_no_data() {
    let bytes = [0xFF; summary1::TIME_VALUES_LEN];
    for index in 0..summary1::TIME_SLOTS {
        assert_eq!(decode_time(index, &bytes), None);
    }
}

#[test]
fn test_end_of_day_boundary_maps_to_midnight() {
    assert_eq!(minutes_to_time(1440), hm(0, 0));
    assert_eq!(minutes_to_time(0), hm(0, 0));
    assert_eq!(minutes_to_time(1439), hm(23, 59));
    assert_eq!(minutes_to_time(1500), None);
}

#[test]
fn test_index_past_buffer_is_none() {
    let bytes = [0u8; 3];
    assert_eq!(unpack_slot(2, &bytes), None);
    assert_eq!(decode_time(5, &bytes), None);
}

#[test]
fn test_pack_slot_preserves_neighbour() {
    let mut bytes = [0u8; 3];
    pack_slot(0, 0xABC, &mut bytes);
    pack_slot(1, 0x123, &mut bytes);
    pack_slot(0, 0x456, &mut bytes);

    assert_eq!(unpack_slot(0, &bytes), Some(0x456));
    assert_eq!(unpack_slot(1, &bytes), Some(0x123));
}

#[test]
fn test_encode_time_last_summary1_slot() {
    let mut bytes = [0xFFu8; summary1::TIME_VALUES_LEN];
    encode_time(summary1::time::HI_UV, hm(13, 45), &mut bytes);

    assert_eq!(decode_time(summary1::time::HI_UV, &bytes), hm(13, 45));
    assert_eq!(decode_time(summary1::time::HI_RAIN_RATE, &bytes), None);
}

#[test]
fn test_encode_none_writes_sentinel() {
    let mut bytes = [0u8; 3];
    encode_time(1, None, &mut bytes);
    assert_eq!(unpack_slot(1, &bytes), Some(0x0FFF));
    assert_eq!(decode_time(0, &bytes), hm(0, 0));
}
