//! Configuration management and validation.
//!
//! Provides the decoder configuration: the target unit system and the
//! optional date-time window applied while assembling a month.

use crate::archive::window::DateTimeWindow;
use crate::error::{Result, WlkError};
use crate::models::UnitSystem;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Global configuration for WLK decoding
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Unit system for resolved readings
    pub unit_system: UnitSystem,

    /// Date-time window restricting which days and records are emitted
    pub window: DateTimeWindow,
}

impl DecoderConfig {
    /// Create configuration with a specific unit system
    pub fn with_unit_system(mut self, unit_system: UnitSystem) -> Self {
        self.unit_system = unit_system;
        self
    }

    /// Convert readings to metric units
    pub fn with_metric(self) -> Self {
        self.with_unit_system(UnitSystem::Metric)
    }

    /// Restrict output to the window
    pub fn with_window(mut self, window: DateTimeWindow) -> Self {
        self.window = window;
        self
    }

    /// Restrict output to `[start, end)`, either bound optional
    pub fn with_range(
        self,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    ) -> Self {
        self.with_window(DateTimeWindow::new(start, end))
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if let (Some(start), Some(end)) = (self.window.start, self.window.end) {
            if start >= end {
                return Err(WlkError::Configuration {
                    message: format!("window start {} is not before end {}", start, end),
                });
            }
        }

        debug!(
            "Decoder configuration: units={:?}, window={:?}",
            self.unit_system, self.window
        );
        Ok(())
    }
}
