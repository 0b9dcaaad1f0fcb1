//! Fixed layout of a monthly archive: byte readers, header and slot offsets.

use crate::constants::{
    DAY_INDEX_ENTRIES, DAY_INDEX_ENTRY_SIZE, DAY_INDEX_OFFSET, HEADER_SIZE, ID_CODE_LEN,
    RECORD_SIZE, SUMMARY_RECORDS_PER_DAY, TOTAL_RECORDS_OFFSET,
};
use crate::error::{Result, WlkError};

/// Borrow `width` bytes at `offset`, failing if they run past the buffer
#[inline]
pub fn slice_at(buf: &[u8], offset: usize, width: usize) -> Result<&[u8]> {
    offset
        .checked_add(width)
        .and_then(|end| buf.get(offset..end))
        .ok_or(WlkError::TruncatedBuffer {
            offset,
            needed: width,
            available: buf.len(),
        })
}

#[inline]
fn array_at<const N: usize>(buf: &[u8], offset: usize) -> Result<[u8; N]> {
    let bytes = slice_at(buf, offset, N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    Ok(out)
}

#[inline]
pub fn read_u8(buf: &[u8], offset: usize) -> Result<u8> {
    Ok(array_at::<1>(buf, offset)?[0])
}

#[inline]
pub fn read_i16_le(buf: &[u8], offset: usize) -> Result<i16> {
    Ok(i16::from_le_bytes(array_at(buf, offset)?))
}

#[inline]
pub fn read_u16_le(buf: &[u8], offset: usize) -> Result<u16> {
    Ok(u16::from_le_bytes(array_at(buf, offset)?))
}

#[inline]
pub fn read_i32_le(buf: &[u8], offset: usize) -> Result<i32> {
    Ok(i32::from_le_bytes(array_at(buf, offset)?))
}

/// Copy a fixed-size byte array out of the buffer
#[inline]
pub fn read_bytes<const N: usize>(buf: &[u8], offset: usize) -> Result<[u8; N]> {
    array_at(buf, offset)
}

/// Byte offset of record slot `slot`
pub fn slot_offset(slot: usize) -> usize {
    HEADER_SIZE + RECORD_SIZE * slot
}

/// Index entry for one day of the month
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayIndex {
    /// Records stored for the day, including both summary records
    pub records_in_day: i16,
    /// Slot of the day's first summary record
    pub start_pos: i32,
}

impl DayIndex {
    pub fn is_populated(&self) -> bool {
        self.records_in_day > 0
    }

    /// Number of interval records following the two summaries
    pub fn interval_count(&self) -> usize {
        usize::try_from(self.records_in_day.saturating_sub(SUMMARY_RECORDS_PER_DAY)).unwrap_or(0)
    }

    /// Check the entry against the layout invariants and return the byte
    /// offset of the day's first summary record
    pub fn first_record_offset(&self, day: u32) -> Result<usize> {
        let invalid = || WlkError::InvalidDayIndex {
            day,
            records_in_day: self.records_in_day,
            start_pos: self.start_pos,
        };

        if self.records_in_day < SUMMARY_RECORDS_PER_DAY {
            return Err(invalid());
        }
        let slot = usize::try_from(self.start_pos).map_err(|_| invalid())?;
        Ok(slot_offset(slot))
    }
}

/// Header block at offset 0 of every monthly file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderBlock {
    /// File identifier, trailing NULs removed
    pub id_code: String,
    pub total_records: i32,
    /// Indexed by day of month; entry 0 is unused
    pub day_index: [DayIndex; DAY_INDEX_ENTRIES],
}

impl HeaderBlock {
    /// Populated days in ascending order with their index entries
    pub fn populated_days(&self) -> impl Iterator<Item = (u32, DayIndex)> + '_ {
        self.day_index
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, entry)| entry.is_populated())
            .map(|(day, entry)| (day as u32, *entry))
    }
}

/// Read the header block
pub fn read_header(buf: &[u8]) -> Result<HeaderBlock> {
    slice_at(buf, 0, HEADER_SIZE)?;

    let id_bytes = slice_at(buf, 0, ID_CODE_LEN)?;
    let id_code = String::from_utf8_lossy(id_bytes)
        .trim_end_matches('\0')
        .to_string();

    let total_records = read_i32_le(buf, TOTAL_RECORDS_OFFSET)?;

    let mut day_index = [DayIndex::default(); DAY_INDEX_ENTRIES];
    for (i, entry) in day_index.iter_mut().enumerate() {
        let base = DAY_INDEX_OFFSET + i * DAY_INDEX_ENTRY_SIZE;
        *entry = DayIndex {
            records_in_day: read_i16_le(buf, base)?,
            start_pos: read_i32_le(buf, base + 2)?,
        };
    }

    Ok(HeaderBlock {
        id_code,
        total_records,
        day_index,
    })
}
