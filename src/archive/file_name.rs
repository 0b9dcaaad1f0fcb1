//! Calendar month of an archive file.
//!
//! Monthly archives are named `YYYY-MM.wlk`; the header itself carries no
//! year or month, so the anchor supplies them.

use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WlkError};

/// File extension used by monthly archives
pub const ARCHIVE_EXTENSION: &str = "wlk";

/// Year and month a monthly archive covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthAnchor {
    pub year: i32,
    pub month: u32,
}

impl MonthAnchor {
    /// Create an anchor, rejecting months outside 1-12
    pub fn new(year: i32, month: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|_| Self { year, month })
            .ok_or(WlkError::InvalidDate {
                year,
                month,
                day: 1,
            })
    }

    /// Parse `YYYY-MM`
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.len() != 7 {
            return None;
        }
        NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d")
            .ok()
            .map(Self::from)
    }

    /// Derive the anchor from a `YYYY-MM.wlk` file name or path
    pub fn from_file_name(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let invalid = || WlkError::InvalidFileName {
            name: path.display().to_string(),
        };

        let is_archive = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(ARCHIVE_EXTENSION));
        if !is_archive {
            return Err(invalid());
        }

        path.file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(Self::parse)
            .ok_or_else(invalid)
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next()
            .first_day()
            .pred_opt()
            .unwrap_or(NaiveDate::MAX)
    }

    /// The following calendar month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Date of `day` within this month
    pub fn date(&self, day: u32) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day).ok_or(WlkError::InvalidDate {
            year: self.year,
            month: self.month,
            day,
        })
    }
}

impl From<NaiveDate> for MonthAnchor {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl std::fmt::Display for MonthAnchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
