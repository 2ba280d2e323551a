use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{Fields, Result, Timecode};
use crate::errors::TimecodeError;

// @module: Frame based timecode (`HH:MM:SS:FF`)

static FRAME_TIMECODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2}):([0-9]{2})$").expect("valid timecode regex")
});

/// PAL frame rate
pub const DEFAULT_FPS: u32 = 25;

const EXPECTED_PATTERN: &str = "HH:MM:SS:FF";

/// A non-negative duration counted in frames at a fixed frame rate.
///
/// Two values are equal only when both the frame count and the frame rate
/// match. Ordering across frame rates is undefined (`partial_cmp` returns
/// `None`, `try_cmp` fails).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameTimecode {
    total_frames: i64,
    fps: u32,
}

impl FrameTimecode {
    /// Create from structured fields, rejecting out of range values
    pub fn new(hours: u64, minutes: u64, seconds: u64, frames: u64, fps: u32) -> Result<Self> {
        validate_fps(fps)?;
        let fields = Fields {
            hours,
            minutes,
            seconds,
            subsecond: frames,
        };
        fields.validate(u64::from(fps), "frames")?;
        Self::from_units(fields.to_units(u64::from(fps))?, fps)
    }

    /// Create from a total frame count
    pub fn from_units(total: i64, fps: u32) -> Result<Self> {
        validate_fps(fps)?;
        if total < 0 {
            return Err(TimecodeError::NegativeInput(total));
        }
        Ok(Self {
            total_frames: total,
            fps,
        })
    }

    /// Parse `HH:MM:SS:FF` at the given frame rate.
    ///
    /// Material mastered at a higher frame rate (e.g. 50 fps logged into a
    /// 25 fps project) carries frame numbers that do not exist at `fps`.
    /// Such a frame field is clamped to 0, i.e. the value is truncated to its
    /// whole second. This lossy repair is intended for archival logs where
    /// frame accuracy is not needed; every other deviation is rejected.
    pub fn from_string(input: &str, fps: u32) -> Result<Self> {
        validate_fps(fps)?;
        let trimmed = input.trim();
        let caps = FRAME_TIMECODE_REGEX
            .captures(trimmed)
            .ok_or_else(|| TimecodeError::InvalidFormat {
                input: input.to_string(),
                expected: EXPECTED_PATTERN,
            })?;

        let number = |i: usize| -> Result<u64> {
            caps[i]
                .parse::<u64>()
                .map_err(|_| TimecodeError::InvalidFormat {
                    input: input.to_string(),
                    expected: EXPECTED_PATTERN,
                })
        };

        let mut frames = number(4)?;
        if frames >= u64::from(fps) {
            debug!(
                "Frame {} out of range at {} fps in '{}', clamping to 0",
                frames, fps, trimmed
            );
            frames = 0;
        }

        Self::new(number(1)?, number(2)?, number(3)?, frames, fps)
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Sub-second frame number
    pub fn frames(&self) -> u64 {
        self.fields().subsecond
    }
}

fn validate_fps(fps: u32) -> Result<()> {
    if fps == 0 {
        return Err(TimecodeError::InvalidFields {
            field: "fps",
            range: "greater than 0".to_string(),
            value: 0,
        });
    }
    Ok(())
}

impl Timecode for FrameTimecode {
    fn units_per_second(&self) -> u64 {
        u64::from(self.fps)
    }

    fn to_units(&self) -> i64 {
        self.total_frames
    }

    fn rescaled(&self, total: i64) -> Self {
        Self {
            total_frames: total,
            fps: self.fps,
        }
    }

    fn ensure_compatible(&self, other: &Self) -> Result<()> {
        if self.fps != other.fps {
            return Err(TimecodeError::FrameRateMismatch {
                left: self.fps,
                right: other.fps,
            });
        }
        Ok(())
    }
}

impl PartialOrd for FrameTimecode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl FromStr for FrameTimecode {
    type Err = TimecodeError;

    /// Parses at [`DEFAULT_FPS`]
    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s, DEFAULT_FPS)
    }
}

impl fmt::Display for FrameTimecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self.fields();
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            fields.hours, fields.minutes, fields.seconds, fields.subsecond
        )
    }
}
