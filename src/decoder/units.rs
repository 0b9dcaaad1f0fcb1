//! Sentinel-aware conversion of raw fixed-point readings.
//!
//! The logger stores every reading as a scaled integer in imperial units.
//! [`UnitConverter`] turns those integers into physical values in the
//! configured [`UnitSystem`], resolving each family's sentinel to `None`.
//! No conversion fails; missing data is always representable.

use crate::constants::{
    BYTE_TEMPERATURE_OFFSET, CALM_DIRECTION, DEGREES_PER_DIRECTION_CODE, HPA_PER_INHG,
    J_PER_M2_PER_TENTH_LANGLEY, KM_PER_MILE, MISSING_BYTE, MISSING_I16, MM_PER_INCH,
    MPS_PER_MPH, rain_collector,
};
use crate::models::UnitSystem;

/// Round a tenths value to the nearest whole unit, ties away from zero
#[inline]
pub(crate) fn round_tenths(raw: i32) -> i32 {
    if raw >= 0 {
        (raw + 5) / 10
    } else {
        (raw - 5) / 10
    }
}

#[inline]
fn present(raw: i16) -> Option<f64> {
    (raw != MISSING_I16).then_some(f64::from(raw))
}

#[inline]
fn present_byte(raw: u8) -> Option<u8> {
    (raw != MISSING_BYTE).then_some(raw)
}

/// Converter from raw field values to physical quantities
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitConverter {
    unit_system: UnitSystem,
}

impl UnitConverter {
    pub fn new(unit_system: UnitSystem) -> Self {
        Self { unit_system }
    }

    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    #[inline]
    fn metric(&self) -> bool {
        self.unit_system.is_metric()
    }

    /// Thousandths of an inch of mercury to inHg or hPa
    pub fn pressure(&self, raw: i16) -> Option<f64> {
        let inhg = present(raw)? / 1e3;
        Some(if self.metric() { inhg * HPA_PER_INHG } else { inhg })
    }

    /// Tenths of a mile to miles or kilometres
    pub fn wind_run(&self, raw: i16) -> Option<f64> {
        let miles = present(raw)? / 1e1;
        Some(if self.metric() { miles * KM_PER_MILE } else { miles })
    }

    /// Thousandths of an inch to inches or millimetres (rain, ET)
    pub fn precipitation(&self, raw: i16) -> Option<f64> {
        let inches = present(raw)? / 1e3;
        Some(if self.metric() { inches * MM_PER_INCH } else { inches })
    }

    /// Hundredths of an inch per hour to in/h or mm/h
    pub fn rain_rate(&self, raw: i16) -> Option<f64> {
        let inches = present(raw)? / 1e2;
        Some(if self.metric() { inches * MM_PER_INCH } else { inches })
    }

    /// Tenths of a degree Fahrenheit to °F or °C
    pub fn temperature(&self, raw: i16) -> Option<f64> {
        let fahrenheit = present(raw)? / 1e1;
        Some(if self.metric() {
            (fahrenheit - 32.0) * 5.0 / 9.0
        } else {
            fahrenheit
        })
    }

    /// Whole degrees Fahrenheit offset by 90, as stored by extra sensors
    pub fn byte_temperature(&self, raw: u8) -> Option<f64> {
        let whole = i16::from(present_byte(raw)?) - BYTE_TEMPERATURE_OFFSET;
        self.temperature(whole * 10)
    }

    /// Tenths of a °F·day to °F·day or °C·day
    pub fn degree_days(&self, raw: i16) -> Option<f64> {
        let fahrenheit_days = present(raw)? / 1e1;
        Some(if self.metric() {
            fahrenheit_days * 5.0 / 9.0
        } else {
            fahrenheit_days
        })
    }

    /// Tenths of a percent to a whole percent, ties rounded up
    pub fn humidity(&self, raw: i16) -> Option<i32> {
        (raw != MISSING_I16).then(|| round_tenths(i32::from(raw)))
    }

    /// Whole percent stored in a byte
    pub fn byte_humidity(&self, raw: u8) -> Option<i32> {
        present_byte(raw).map(i32::from)
    }

    /// Tenths of a mile per hour to mph or m/s
    pub fn wind_speed(&self, raw: i16) -> Option<f64> {
        let mph = present(raw)? / 1e1;
        Some(if self.metric() { mph * MPS_PER_MPH } else { mph })
    }

    /// Direction code 0-15 to degrees; 255 means calm
    pub fn wind_direction(&self, raw: u8) -> Option<f64> {
        (raw != CALM_DIRECTION).then(|| f64::from(raw) * DEGREES_PER_DIRECTION_CODE)
    }

    /// Tenths of a UV index (or of a MED for doses)
    pub fn uv(&self, raw: i16) -> Option<f64> {
        present(raw).map(|v| v / 1e1)
    }

    /// Tenths of a UV index stored in a byte
    pub fn byte_uv(&self, raw: u8) -> Option<f64> {
        present_byte(raw).map(|v| f64::from(v) / 1e1)
    }

    /// Tenths of a Langley to Langleys or J/m²
    pub fn solar_energy(&self, raw: i16) -> Option<f64> {
        let tenths = present(raw)?;
        Some(if self.metric() {
            tenths * J_PER_M2_PER_TENTH_LANGLEY
        } else {
            tenths / 1e1
        })
    }

    /// Instantaneous solar radiation in W/m², identical in both systems
    pub fn solar_radiation(&self, raw: i16) -> Option<f64> {
        present(raw)
    }

    /// Thousandths of an inch stored in a byte
    pub fn byte_precipitation(&self, raw: u8) -> Option<f64> {
        self.precipitation(i16::from(present_byte(raw)?))
    }

    /// Plain count stored in a byte (soil moisture, leaf wetness)
    pub fn byte_count(&self, raw: u8) -> Option<i32> {
        present_byte(raw).map(i32::from)
    }

    /// Plain count stored in 16 bits
    pub fn count(&self, raw: i16) -> Option<i32> {
        (raw != MISSING_I16).then_some(i32::from(raw))
    }

    /// Interval rain field (tip count + collector type) to inches or millimetres
    pub fn rain_tips(&self, raw: u16) -> Option<f64> {
        let tips = raw & rain_collector::TIP_MASK;
        let collector = raw >> 12;
        self.tips_to_depth(collector, f64::from(tips))
    }

    /// Tips per hour for the collector encoded in `rain_field` to in/h or mm/h
    pub fn rain_tip_rate(&self, rain_field: u16, tips_per_hour: i16) -> Option<f64> {
        let rate = present(tips_per_hour)?;
        self.tips_to_depth(rain_field >> 12, rate)
    }

    fn tips_to_depth(&self, collector: u16, tips: f64) -> Option<f64> {
        let (size, in_inches) = match collector {
            rain_collector::TENTH_INCH => (0.1, true),
            rain_collector::HUNDREDTH_INCH => (0.01, true),
            rain_collector::FIFTH_MM => (0.2, false),
            rain_collector::ONE_MM => (1.0, false),
            rain_collector::TENTH_MM => (0.1, false),
            _ => return None,
        };
        let depth = tips * size;
        Some(match (in_inches, self.metric()) {
            (true, true) => depth * MM_PER_INCH,
            (false, false) => depth / MM_PER_INCH,
            _ => depth,
        })
    }
}
