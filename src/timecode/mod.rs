/*!
 * Exact, unit based timecodes.
 *
 * Two concrete representations share the same capability set:
 * - `DecimalTimecode`: `HH:MM:SS,mmm`, counted in milliseconds (SRT)
 * - `FrameTimecode`: `HH:MM:SS:FF`, counted in frames at a given fps
 *
 * Both are immutable `Copy` values. Every operation returns a new value.
 * Mixing the two representations is a type error; mixing frame timecodes
 * with different frame rates is a checked runtime failure.
 */

use std::cmp::Ordering;

use crate::errors::TimecodeError;

pub mod decimal;
pub mod frame;

pub use decimal::DecimalTimecode;
pub use frame::{FrameTimecode, DEFAULT_FPS};

/// Result alias for timecode operations
pub type Result<T> = std::result::Result<T, TimecodeError>;

const SECONDS_PER_MINUTE: u64 = 60;
const MINUTES_PER_HOUR: u64 = 60;

/// Structured hours/minutes/seconds/sub-second view of a unit count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fields {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    /// Frames or milliseconds, depending on the representation
    pub subsecond: u64,
}

impl Fields {
    /// Decompose a unit count by integer division
    pub fn from_units(total: u64, units_per_second: u64) -> Self {
        let subsecond = total % units_per_second;
        let total_seconds = total / units_per_second;
        let seconds = total_seconds % SECONDS_PER_MINUTE;
        let total_minutes = total_seconds / SECONDS_PER_MINUTE;
        let minutes = total_minutes % MINUTES_PER_HOUR;
        let hours = total_minutes / MINUTES_PER_HOUR;

        Self {
            hours,
            minutes,
            seconds,
            subsecond,
        }
    }

    /// Exact inverse of [`Fields::from_units`] for validated fields.
    ///
    /// Fails with `Overflow` when the total does not fit a signed 64-bit count.
    pub fn to_units(&self, units_per_second: u64) -> Result<i64> {
        let overflow = || TimecodeError::Overflow {
            operation: "field conversion",
        };

        let total = self
            .hours
            .checked_mul(MINUTES_PER_HOUR)
            .and_then(|m| m.checked_add(self.minutes))
            .and_then(|m| m.checked_mul(SECONDS_PER_MINUTE))
            .and_then(|s| s.checked_add(self.seconds))
            .and_then(|s| s.checked_mul(units_per_second))
            .and_then(|u| u.checked_add(self.subsecond))
            .ok_or_else(overflow)?;

        i64::try_from(total).map_err(|_| overflow())
    }

    /// Check minute/second/sub-second ranges. Hours are unbounded.
    pub fn validate(&self, units_per_second: u64, subsecond_name: &'static str) -> Result<()> {
        if self.minutes >= MINUTES_PER_HOUR {
            return Err(TimecodeError::InvalidFields {
                field: "minutes",
                range: "0-59".to_string(),
                value: self.minutes,
            });
        }
        if self.seconds >= SECONDS_PER_MINUTE {
            return Err(TimecodeError::InvalidFields {
                field: "seconds",
                range: "0-59".to_string(),
                value: self.seconds,
            });
        }
        if self.subsecond >= units_per_second {
            return Err(TimecodeError::InvalidFields {
                field: subsecond_name,
                range: format!("0-{}", units_per_second - 1),
                value: self.subsecond,
            });
        }
        Ok(())
    }
}

/// Capability set shared by every timecode representation.
///
/// Implementors supply the scale and the unit count; arithmetic, ordering and
/// rounding are derived from those.
pub trait Timecode: Copy + Sized {
    /// Elementary units in one second (frames per second or 1000)
    fn units_per_second(&self) -> u64;

    /// Total elementary units since the origin
    fn to_units(&self) -> i64;

    /// Build a value on the same scale from a unit count already known to be
    /// non-negative
    fn rescaled(&self, total: i64) -> Self;

    /// Fails when two values cannot be combined or compared
    fn ensure_compatible(&self, _other: &Self) -> Result<()> {
        Ok(())
    }

    /// Build a value on the same scale from a possibly negative unit count
    fn with_units(&self, total: i64) -> Result<Self> {
        if total < 0 {
            return Err(TimecodeError::NegativeInput(total));
        }
        Ok(self.rescaled(total))
    }

    fn fields(&self) -> Fields {
        Fields::from_units(self.to_units().unsigned_abs(), self.units_per_second())
    }

    fn hours(&self) -> u64 {
        self.fields().hours
    }

    fn minutes(&self) -> u64 {
        self.fields().minutes
    }

    fn seconds(&self) -> u64 {
        self.fields().seconds
    }

    fn checked_add(&self, other: &Self) -> Result<Self> {
        self.ensure_compatible(other)?;
        let total = self
            .to_units()
            .checked_add(other.to_units())
            .ok_or(TimecodeError::Overflow { operation: "add" })?;
        self.with_units(total)
    }

    fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.ensure_compatible(other)?;
        let difference = self.to_units() - other.to_units();
        if difference < 0 {
            return Err(TimecodeError::NegativeResult {
                minuend: self.to_units(),
                subtrahend: other.to_units(),
            });
        }
        self.with_units(difference)
    }

    /// Total ordering by unit count, failing on incompatible scales
    fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        self.ensure_compatible(other)?;
        Ok(self.to_units().cmp(&other.to_units()))
    }

    /// Round to the nearest whole second.
    ///
    /// Rounds up iff the sub-second part is at least half a second
    /// (`fps / 2` frames or 500 ms), otherwise truncates. Rounding up past the
    /// largest representable count fails with `Overflow`.
    fn round_to_seconds(&self) -> Result<Self> {
        let overflow = TimecodeError::Overflow { operation: "round" };
        let units_per_second = i64::try_from(self.units_per_second()).map_err(|_| overflow.clone())?;
        let total = self.to_units();
        let subsecond = total % units_per_second;
        let floor = total - subsecond;

        if subsecond * 2 >= units_per_second {
            let ceiling = floor.checked_add(units_per_second).ok_or(overflow)?;
            Ok(self.rescaled(ceiling))
        } else {
            Ok(self.rescaled(floor))
        }
    }

    /// `HH:MM:SS` of the value rounded to whole seconds
    fn format_rounded(&self) -> Result<String> {
        let fields = self.round_to_seconds()?.fields();
        Ok(format!("{:02}:{:02}:{:02}", fields.hours, fields.minutes, fields.seconds))
    }
}
