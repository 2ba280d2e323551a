/*!
 * Tests for error types and conversions
 */

use srtblocks::errors::{SubtitleError, TimecodeError};

#[test]
fn test_timecodeError_invalidFormat_shouldShowExpectedPattern() {
    let error = TimecodeError::InvalidFormat {
        input: "1:2:3".to_string(),
        expected: "HH:MM:SS,mmm",
    };
    let display = format!("{}", error);
    assert!(display.contains("1:2:3"));
    assert!(display.contains("HH:MM:SS,mmm"));
}

#[test]
fn test_timecodeError_frameRateMismatch_shouldShowBothRates() {
    let display = TimecodeError::FrameRateMismatch { left: 25, right: 50 }.to_string();
    assert!(display.contains("25"));
    assert!(display.contains("50"));
}

#[test]
fn test_subtitleError_invalidTimecodeLine_shouldIdentifyBlock() {
    let error = SubtitleError::InvalidTimecodeLine {
        index: 12,
        line: "00:00:01 -> 00:00:02".to_string(),
    };
    let display = error.to_string();
    assert!(display.contains("block 12"));
    assert!(display.contains("00:00:01 -> 00:00:02"));
}

#[test]
fn test_subtitleError_fromTimecodeError_shouldWrapCorrectly() {
    let error: SubtitleError = TimecodeError::NegativeInput(-5).into();
    assert!(matches!(error, SubtitleError::Timecode(TimecodeError::NegativeInput(-5))));
    assert!(error.to_string().contains("Timecode error"));
}

#[test]
fn test_timecodeError_overflow_shouldNameOperation() {
    let display = TimecodeError::Overflow { operation: "add" }.to_string();
    assert!(display.contains("overflow"));
    assert!(display.contains("add"));
}
