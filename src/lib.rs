/*!
 * # srtblocks - SubRip block merger
 *
 * A Rust library that folds consecutive SubRip (SRT) cues into larger time
 * blocks until each block reaches a minimum duration.
 *
 * ## Features
 *
 * - Exact timecode arithmetic for millisecond (`HH:MM:SS,mmm`) and
 *   frame based (`HH:MM:SS:FF`) timecodes
 * - Strict SRT parsing with single-line text normalization
 * - Greedy block merging with consecutive renumbering
 * - Single file or whole directory processing
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `timecode`: Timecode values and arithmetic
 * - `subtitle_processor`: SRT parsing and formatting
 * - `block_merger`: Block consolidation
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod block_merger;
pub mod errors;
pub mod file_utils;
pub mod subtitle_processor;
pub mod timecode;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use block_merger::{merge_blocks, BlockMerger, MergeSummary};
pub use errors::{SubtitleError, TimecodeError};
pub use subtitle_processor::{format_srt, parse_srt_string, Cue, SubtitleCollection};
pub use timecode::{DecimalTimecode, FrameTimecode, Timecode};
