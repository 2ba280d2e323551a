use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Fields, Result, Timecode};
use crate::errors::TimecodeError;

// @module: Millisecond based timecode (SRT `HH:MM:SS,mmm`)

// @const: Fixed width SRT timestamp
static DECIMAL_TIMECODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2}),([0-9]{3})$").expect("valid timecode regex")
});

const MILLIS_PER_SECOND: u64 = 1000;
const EXPECTED_PATTERN: &str = "HH:MM:SS,mmm";

/// A non-negative duration counted in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DecimalTimecode {
    millis: i64,
}

impl DecimalTimecode {
    /// Create from structured fields, rejecting out of range values
    pub fn new(hours: u64, minutes: u64, seconds: u64, milliseconds: u64) -> Result<Self> {
        let fields = Fields {
            hours,
            minutes,
            seconds,
            subsecond: milliseconds,
        };
        fields.validate(MILLIS_PER_SECOND, "milliseconds")?;
        Self::from_units(fields.to_units(MILLIS_PER_SECOND)?)
    }

    /// Create from a total millisecond count
    pub fn from_units(total: i64) -> Result<Self> {
        if total < 0 {
            return Err(TimecodeError::NegativeInput(total));
        }
        Ok(Self { millis: total })
    }

    /// Whole seconds, used for block lengths
    pub fn from_seconds(seconds: u32) -> Self {
        Self {
            millis: i64::from(seconds) * MILLIS_PER_SECOND as i64,
        }
    }

    /// Parse `HH:MM:SS,mmm`. Surrounding whitespace is ignored.
    pub fn from_string(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let caps = DECIMAL_TIMECODE_REGEX
            .captures(trimmed)
            .ok_or_else(|| invalid_format(input))?;

        let number = |i: usize| -> Result<u64> {
            caps[i].parse::<u64>().map_err(|_| invalid_format(input))
        };

        Self::new(number(1)?, number(2)?, number(3)?, number(4)?)
    }

    pub fn milliseconds(&self) -> u64 {
        self.fields().subsecond
    }
}

fn invalid_format(input: &str) -> TimecodeError {
    TimecodeError::InvalidFormat {
        input: input.to_string(),
        expected: EXPECTED_PATTERN,
    }
}

impl Timecode for DecimalTimecode {
    fn units_per_second(&self) -> u64 {
        MILLIS_PER_SECOND
    }

    fn to_units(&self) -> i64 {
        self.millis
    }

    fn rescaled(&self, total: i64) -> Self {
        Self { millis: total }
    }
}

impl FromStr for DecimalTimecode {
    type Err = TimecodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

impl fmt::Display for DecimalTimecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self.fields();
        write!(
            f,
            "{:02}:{:02}:{:02},{:03}",
            fields.hours, fields.minutes, fields.seconds, fields.subsecond
        )
    }
}
