use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::{Config, DEFAULT_OUTPUT_DIR_NAME};
use crate::block_merger::{BlockMerger, MergeSummary};
use crate::file_utils::FileManager;
use crate::subtitle_processor::{self, SubtitleCollection};
use crate::timecode::DecimalTimecode;

// @module: Application controller for subtitle block merging

/// Result of processing one subtitle file
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Merged output was written
    Written {
        output_path: PathBuf,
        summary: MergeSummary,
    },
    /// Output already existed and overwriting was not requested
    Skipped { output_path: PathBuf },
}

/// Counts from a directory run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FolderReport {
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Main application controller: parse, merge and write subtitle files
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Parsed minimum block length
    block_length: DecimalTimecode,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        let block_length = config.block_length()?;

        Ok(Self {
            config,
            block_length,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn block_length(&self) -> DecimalTimecode {
        self.block_length
    }

    /// Run the in-memory pipeline: SRT text in, merged SRT text out
    pub fn merge_srt_string(&self, content: &str) -> Result<(String, MergeSummary)> {
        let cues = subtitle_processor::parse_srt_string(content)?;
        let outcome = BlockMerger::new(self.block_length).merge(cues)?;
        Ok((subtitle_processor::format_srt(&outcome.cues), outcome.summary))
    }

    /// Directory the merged file for `input_file` is written to
    pub fn output_dir_for(&self, input_file: &Path) -> PathBuf {
        match &self.config.output_dir {
            Some(dir) => PathBuf::from(dir),
            None => input_file
                .parent()
                .unwrap_or(Path::new("."))
                .join(DEFAULT_OUTPUT_DIR_NAME),
        }
    }

    /// Merge a single SRT file
    pub async fn run(&self, input_file: &Path, force_overwrite: bool) -> Result<RunOutcome> {
        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let output_dir = self.output_dir_for(input_file);
        let output_path =
            FileManager::generate_output_path(input_file, &output_dir, &self.config.output_suffix);

        if output_path.exists() && !force_overwrite {
            warn!(
                "Skipping {:?}, output already exists (use -f to force overwrite)",
                output_path
            );
            return Ok(RunOutcome::Skipped { output_path });
        }

        let collection = SubtitleCollection::from_file(input_file).await?;
        debug!("{}", collection);

        let outcome = BlockMerger::new(self.block_length)
            .merge(collection.entries)
            .with_context(|| format!("Failed to merge subtitle file: {}", input_file.display()))?;

        let merged = SubtitleCollection {
            source_file: input_file.to_path_buf(),
            entries: outcome.cues,
        };
        merged.write_to_srt(&output_path).await?;

        let summary = outcome.summary;
        info!(
            "Merged {} cues into {} blocks of at least {}: {:?}",
            summary.input_cues, summary.output_blocks, self.block_length, output_path
        );
        if summary.short_final_block {
            debug!("Final block is shorter than {}", self.block_length);
        }

        Ok(RunOutcome::Written {
            output_path,
            summary,
        })
    }

    /// Merge every SRT file below `input_dir`, continuing past failures
    pub async fn run_folder(&self, input_dir: &Path, force_overwrite: bool) -> Result<FolderReport> {
        let start_time = std::time::Instant::now();

        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let output_marker = format!(".{}.srt", self.config.output_suffix);
        let subtitle_files: Vec<PathBuf> = FileManager::find_files(input_dir, "srt")?
            .into_iter()
            .filter(|path| !path.to_string_lossy().ends_with(&output_marker))
            .collect();

        if subtitle_files.is_empty() {
            return Err(anyhow!("No subtitle files found in directory: {:?}", input_dir));
        }

        let folder_pb = ProgressBar::new(subtitle_files.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(style.progress_chars("█▓▒░"));

        let mut report = FolderReport::default();

        for subtitle_file in &subtitle_files {
            let file_name = subtitle_file
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            folder_pb.set_message(format!("Processing: {}", file_name));

            match self.run(subtitle_file, force_overwrite).await {
                Ok(RunOutcome::Written { .. }) => report.processed += 1,
                Ok(RunOutcome::Skipped { .. }) => report.skipped += 1,
                Err(e) => {
                    error!("Error processing file {}: {:#}", file_name, e);
                    report.failed += 1;
                }
            }

            folder_pb.inc(1);
        }

        folder_pb.finish_with_message("Folder processing complete");

        info!(
            "Folder processing completed in {:.1}s: {} processed, {} skipped, {} errors",
            start_time.elapsed().as_secs_f64(),
            report.processed,
            report.skipped,
            report.failed
        );

        Ok(report)
    }
}
