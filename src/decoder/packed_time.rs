//! Packed 12-bit time values used by the daily summary records.
//!
//! Two 12-bit "minutes past midnight" values share a 3-byte triplet: the
//! first two bytes hold the low 8 bits of each value and the third byte holds
//! both high nibbles (low nibble for the even slot, high nibble for the odd
//! slot). Direction bin counters in summary 2 use the same packing.

use chrono::NaiveTime;

use crate::constants::PACKED_TIME_SENTINELS;

/// Byte offset of the triplet holding `index`
#[inline]
fn triplet_index(index: usize) -> usize {
    (index / 2) * 3
}

/// Extract the raw 12-bit value at `index`
///
/// Returns `None` if `bytes` is too short to hold the triplet.
pub fn unpack_slot(index: usize, bytes: &[u8]) -> Option<u16> {
    let t = triplet_index(index);
    let triplet = bytes.get(t..t + 3)?;

    let packed = if index % 2 == 0 {
        u16::from(triplet[0]) + ((u16::from(triplet[2]) & 0x0F) << 8)
    } else {
        u16::from(triplet[1]) + ((u16::from(triplet[2]) & 0xF0) << 4)
    };
    Some(packed)
}

/// Store a 12-bit value at `index`, leaving the neighbouring slot untouched
///
/// Values wider than 12 bits are truncated. Does nothing if `bytes` is too
/// short to hold the triplet.
pub fn pack_slot(index: usize, value: u16, bytes: &mut [u8]) {
    let t = triplet_index(index);
    let Some(triplet) = bytes.get_mut(t..t + 3) else {
        return;
    };

    let low = (value & 0xFF) as u8;
    let high = ((value >> 8) & 0x0F) as u8;
    if index % 2 == 0 {
        triplet[0] = low;
        triplet[2] = (triplet[2] & 0xF0) | high;
    } else {
        triplet[1] = low;
        triplet[2] = (triplet[2] & 0x0F) | (high << 4);
    }
}

/// True if the packed value is one of the "no data" markers
#[inline]
pub fn is_sentinel(packed: u16) -> bool {
    PACKED_TIME_SENTINELS.contains(&packed)
}

/// Convert minutes past midnight into a time of day
///
/// Minute 1440 is the end-of-day boundary and maps to 00:00. Anything past it
/// is not a time of day.
pub fn minutes_to_time(minutes: u16) -> Option<NaiveTime> {
    let hour = u32::from(minutes / 60);
    let minute = u32::from(minutes % 60);
    let hour = if hour == 24 { 0 } else { hour };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Decode the time of day stored in slot `index`
pub fn decode_time(index: usize, bytes: &[u8]) -> Option<NaiveTime> {
    let packed = unpack_slot(index, bytes)?;
    if is_sentinel(packed) {
        return None;
    }
    minutes_to_time(packed)
}

/// Encode a time of day into slot `index`
pub fn encode_time(index: usize, time: Option<NaiveTime>, bytes: &mut [u8]) {
    use chrono::Timelike;

    let packed = match time {
        Some(t) => (t.hour() * 60 + t.minute()) as u16,
        None => 0x0FFF,
    };
    pack_slot(index, packed, bytes);
}
