use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SubtitleError;
use crate::file_utils::FileManager;
use crate::timecode::{DecimalTimecode, Timecode};

// @module: SRT parsing and formatting

// @const: SRT timing line, both sides fixed width
static TIMECODE_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2}:[0-9]{2}:[0-9]{2},[0-9]{3}) --> ([0-9]{2}:[0-9]{2}:[0-9]{2},[0-9]{3})$")
        .expect("valid timecode line regex")
});

/// Minimum number of non-empty lines in a usable block: index, timing, text
const MIN_BLOCK_LINES: usize = 3;

/// Marker removed from cue text during normalization
const ELLIPSIS_MARKER: &str = "...";

// @struct: Single subtitle cue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    // @field: Sequence number, renumbered on output
    pub index: usize,

    // @field: Start time
    pub begin: DecimalTimecode,

    // @field: End time, never before `begin`
    pub end: DecimalTimecode,

    // @field: Single line display text
    pub text: String,
}

impl Cue {
    /// Creates a cue without validation - used by tests and the merger
    pub fn new(index: usize, begin: DecimalTimecode, end: DecimalTimecode, text: impl Into<String>) -> Self {
        Cue {
            index,
            begin,
            end,
            text: text.into(),
        }
    }

    // @creates: Validated cue
    // @validates: end >= begin
    pub fn new_validated(
        index: usize,
        begin: DecimalTimecode,
        end: DecimalTimecode,
        text: impl Into<String>,
    ) -> Result<Self, SubtitleError> {
        if end < begin {
            return Err(SubtitleError::InvalidTimeRange {
                index,
                begin: begin.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self::new(index, begin, end, text))
    }

    /// Parse a single trimmed SRT block.
    ///
    /// Returns `MalformedBlock` for blocks with fewer than three non-empty
    /// lines; callers decide whether that is fatal.
    pub fn parse_block(block: &str) -> Result<Self, SubtitleError> {
        let lines: Vec<&str> = block
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.len() < MIN_BLOCK_LINES {
            return Err(SubtitleError::MalformedBlock { lines: lines.len() });
        }

        let index = lines[0]
            .parse::<usize>()
            .map_err(|_| SubtitleError::InvalidIndex {
                line: lines[0].to_string(),
            })?;

        let caps = TIMECODE_LINE_REGEX
            .captures(lines[1])
            .ok_or_else(|| SubtitleError::InvalidTimecodeLine {
                index,
                line: lines[1].to_string(),
            })?;

        let begin = DecimalTimecode::from_string(&caps[1])?;
        let end = DecimalTimecode::from_string(&caps[2])?;
        let text = normalize_text(&lines[2..]);

        Self::new_validated(index, begin, end, text)
    }

    /// Duration of the cue
    pub fn duration(&self) -> Result<DecimalTimecode, SubtitleError> {
        Ok(self.end.checked_sub(&self.begin)?)
    }
}

/// Join text lines with single spaces and strip ellipsis markers
fn normalize_text(lines: &[&str]) -> String {
    lines
        .join(" ")
        .replace(ELLIPSIS_MARKER, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.index)?;
        writeln!(f, "{} --> {}", self.begin, self.end)?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)
    }
}

/// Parse SRT text into cues, in file order.
///
/// Blocks are separated by one or more blank lines. Blocks with too few lines
/// are skipped with a warning; any other failure aborts the whole parse.
pub fn parse_srt_string(content: &str) -> Result<Vec<Cue>, SubtitleError> {
    let content = FileManager::strip_bom(content);
    let mut cues = Vec::new();

    for block in split_blocks(content) {
        match Cue::parse_block(&block) {
            Ok(cue) => cues.push(cue),
            Err(SubtitleError::MalformedBlock { lines }) => {
                warn!("Skipping malformed subtitle block with {} line(s): {:?}", lines, block);
            }
            Err(e) => return Err(e),
        }
    }

    debug!("Parsed {} subtitle cues", cues.len());
    Ok(cues)
}

/// Split on runs of blank (whitespace only) lines
fn split_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }

    blocks
}

/// Format cues as SRT text, one block per cue followed by a blank line
pub fn format_srt(cues: &[Cue]) -> String {
    cues.iter().map(|cue| cue.to_string()).collect()
}

/// Collection of subtitle cues with their source
#[derive(Debug)]
pub struct SubtitleCollection {
    /// Source filename
    pub source_file: PathBuf,

    /// List of subtitle cues
    pub entries: Vec<Cue>,
}

impl SubtitleCollection {
    /// Create a new, empty subtitle collection
    pub fn new(source_file: PathBuf) -> Self {
        SubtitleCollection {
            source_file,
            entries: Vec::new(),
        }
    }

    /// Read and parse an SRT file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = FileManager::read_to_string(path).await?;
        let entries = parse_srt_string(&content)
            .with_context(|| format!("Failed to parse subtitle file: {}", path.display()))?;

        Ok(SubtitleCollection {
            source_file: path.to_path_buf(),
            entries,
        })
    }

    /// Render the whole collection as SRT text
    pub fn to_srt_string(&self) -> String {
        format_srt(&self.entries)
    }

    /// Write subtitles to an SRT file, creating parent directories
    pub async fn write_to_srt<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        FileManager::write_to_file(path, &self.to_srt_string()).await
    }
}

impl fmt::Display for SubtitleCollection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Subtitle Collection")?;
        writeln!(f, "Source: {:?}", self.source_file)?;
        writeln!(f, "Entries: {}", self.entries.len())?;
        Ok(())
    }
}
