// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use srtblocks::app_config::{Config, LogLevel};
use srtblocks::app_controller::{Controller, RunOutcome};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for srtblocks
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// srtblocks - merge SubRip cues into longer time blocks
#[derive(Parser, Debug)]
#[command(name = "srtblocks")]
#[command(version)]
#[command(about = "Merge consecutive SRT cues into blocks of a minimum duration")]
#[command(long_about = "srtblocks reads SubRip (.srt) files and merges consecutive cues until every
block lasts at least the configured block length.

EXAMPLES:
    srtblocks talk.srt                          # Merge using default config
    srtblocks -b 00:01:00,000 talk.srt          # One minute blocks
    srtblocks -o out/ -f /subtitles/            # Process a directory, overwrite outputs
    srtblocks completions bash > srtblocks.bash # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. If the config file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input subtitle file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Minimum block length (HH:MM:SS,mmm)
    #[arg(short, long)]
    block_length: Option<String>,

    /// Output directory (default: "merged" next to each input file)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation, filtered by the global max level
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour and emoji for log level
    fn decoration(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "❌"),
            Level::Warn => ("1;33", "🚧"),
            Level::Info => ("1;32", " "),
            Level::Debug => ("1;36", "🔍"),
            Level::Trace => ("1;35", "📋"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (colour, emoji) = Self::decoration(record.level());
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {} {}\x1B[0m",
                colour,
                now,
                emoji,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Info until the config is loaded; the real level is applied afterwards
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "srtblocks", &mut std::io::stdout());
        return Ok(());
    }

    let input_path = cli
        .input_path
        .clone()
        .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

    if let Some(level) = &cli.log_level {
        log::set_max_level(LogLevel::from(level.clone()).to_level_filter());
    }

    let mut config = Config::load_or_create(&cli.config_path)?;
    apply_overrides(&mut config, &cli);
    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config)?;

    if input_path.is_file() {
        match controller.run(&input_path, cli.force_overwrite).await? {
            RunOutcome::Written { output_path, .. } => info!("Success: {:?}", output_path),
            RunOutcome::Skipped { .. } => {}
        }
    } else if input_path.is_dir() {
        let report = controller.run_folder(&input_path, cli.force_overwrite).await?;
        if report.failed > 0 {
            return Err(anyhow!("{} file(s) failed to process", report.failed));
        }
    } else {
        return Err(anyhow!("Input path does not exist: {:?}", input_path));
    }

    Ok(())
}

// Command line options take precedence over the config file
fn apply_overrides(config: &mut Config, cli: &CommandLineOptions) {
    if let Some(block_length) = &cli.block_length {
        config.block_length = block_length.clone();
    }

    if let Some(output_dir) = &cli.output_dir {
        config.output_dir = Some(output_dir.to_string_lossy().to_string());
    }

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }
}
