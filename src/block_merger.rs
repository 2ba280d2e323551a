/*!
 * Greedy consolidation of subtitle cues into time blocks.
 *
 * Cues are consumed in order. Each block starts from the next unconsumed cue
 * and keeps absorbing the following cues (text appended, end extended) until
 * its duration reaches the target length or the input runs out. Only the last
 * block may be shorter than the target.
 */

use std::collections::VecDeque;

use log::debug;

use crate::errors::SubtitleError;
use crate::subtitle_processor::Cue;
use crate::timecode::DecimalTimecode;

/// Statistics about a finished merge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeSummary {
    /// Number of cues fed to the merger
    pub input_cues: usize,
    /// Number of blocks produced
    pub output_blocks: usize,
    /// Whether the last block ended below the target length
    pub short_final_block: bool,
}

/// Merged cues together with their summary
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub cues: Vec<Cue>,
    pub summary: MergeSummary,
}

/// Merges consecutive cues until each block lasts at least `target`
#[derive(Debug, Clone, Copy)]
pub struct BlockMerger {
    target: DecimalTimecode,
}

impl BlockMerger {
    pub fn new(target: DecimalTimecode) -> Self {
        Self { target }
    }

    pub fn target(&self) -> DecimalTimecode {
        self.target
    }

    /// Merge `cues` and renumber the result `0, 1, 2, ...`.
    ///
    /// Fails only if a cue ends before it begins.
    pub fn merge(&self, cues: Vec<Cue>) -> Result<MergeOutcome, SubtitleError> {
        let input_cues = cues.len();
        let mut pending: VecDeque<Cue> = cues.into();
        let mut merged: Vec<Cue> = Vec::new();

        while let Some(mut current) = pending.pop_front() {
            let mut absorbed = 0;
            while current.duration()? < self.target {
                let Some(next) = pending.pop_front() else {
                    break;
                };
                absorb(&mut current, next);
                absorbed += 1;
            }

            debug!(
                "Block {}: {} --> {} ({} cue(s) absorbed)",
                merged.len(),
                current.begin,
                current.end,
                absorbed
            );
            merged.push(current);
        }

        let short_final_block = match merged.last() {
            Some(last) => last.duration()? < self.target,
            None => false,
        };

        for (i, cue) in merged.iter_mut().enumerate() {
            cue.index = i;
        }

        let summary = MergeSummary {
            input_cues,
            output_blocks: merged.len(),
            short_final_block,
        };

        Ok(MergeOutcome {
            cues: merged,
            summary,
        })
    }
}

/// Merge `cues` into blocks of at least `target` length
pub fn merge_blocks(cues: Vec<Cue>, target: DecimalTimecode) -> Result<Vec<Cue>, SubtitleError> {
    Ok(BlockMerger::new(target).merge(cues)?.cues)
}

// Takes ownership of `next`; only its end and text survive.
fn absorb(current: &mut Cue, next: Cue) {
    if !next.text.is_empty() {
        if !current.text.is_empty() {
            current.text.push(' ');
        }
        current.text.push_str(&next.text);
    }
    current.end = next.end;
}
