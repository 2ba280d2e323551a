/*!
 * Error types for the srtblocks application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors raised by timecode construction, parsing and arithmetic
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimecodeError {
    /// The text does not follow the fixed-width timecode pattern
    #[error("Invalid timecode format: '{input}'. Expected {expected}")]
    InvalidFormat {
        /// Offending input
        input: String,
        /// Human readable pattern, e.g. `HH:MM:SS,mmm`
        expected: &'static str,
    },

    /// A structured field is outside its allowed range
    #[error("Invalid timecode field: {field} must be {range}, got {value}")]
    InvalidFields {
        field: &'static str,
        range: String,
        value: u64,
    },

    /// Frame based timecodes with different frame rates were combined
    #[error("Frame rate mismatch: {left} fps vs {right} fps")]
    FrameRateMismatch { left: u32, right: u32 },

    /// Subtraction would produce a negative duration
    #[error("Cannot have negative timecode result: {minuend} - {subtrahend}")]
    NegativeResult { minuend: i64, subtrahend: i64 },

    /// A negative unit count was passed to a unit based constructor
    #[error("Total units cannot be negative: {0}")]
    NegativeInput(i64),

    /// The unit count does not fit a signed 64-bit value
    #[error("Timecode overflow during {operation}")]
    Overflow { operation: &'static str },
}

/// Errors that can occur during subtitle processing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubtitleError {
    /// Block with too few lines. Recovered by skipping the block.
    #[error("Malformed block with {lines} non-empty line(s)")]
    MalformedBlock { lines: usize },

    /// The first line of a block is not an integer
    #[error("Invalid subtitle index: '{line}'")]
    InvalidIndex { line: String },

    /// The second line of a block is not `TIMECODE --> TIMECODE`
    #[error("Invalid timecode line in block {index}: '{line}'")]
    InvalidTimecodeLine { index: usize, line: String },

    /// The cue ends before it begins
    #[error("Invalid time range in block {index}: end {end} is before begin {begin}")]
    InvalidTimeRange {
        index: usize,
        begin: String,
        end: String,
    },

    /// Timecode failure while building or merging cues
    #[error("Timecode error: {0}")]
    Timecode(#[from] TimecodeError),
}
