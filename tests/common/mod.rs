/*!
 * Common test utilities for the srtblocks test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use srtblocks::{Cue, DecimalTimecode};

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Three cues lasting 10s, 20s and 40s
pub const SAMPLE_SRT: &str = "1
00:00:00,000 --> 00:00:10,000
First line
continued...

2
00:00:10,000 --> 00:00:30,000
Second cue

3
00:00:30,000 --> 00:01:10,000
Third cue
";

/// Creates a sample subtitle file for testing
pub fn create_test_subtitle(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_SRT)
}

/// Cue spanning whole seconds
pub fn cue(index: usize, begin_secs: u32, end_secs: u32, text: &str) -> Cue {
    Cue::new(
        index,
        DecimalTimecode::from_seconds(begin_secs),
        DecimalTimecode::from_seconds(end_secs),
        text,
    )
}

/// Install a test logger once; later calls are no-ops
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
