//! HMD Log Ingest CLI Application
//!
//! Command-line front end for the hmd-log-ingest library. Converts one
//! HMD orientation log into a standardized Parquet table.

use anyhow::{Context, Result};
use clap::Parser;
use hmd_log_ingest::{IngestConfig, Ingestor};
use std::path::PathBuf;

mod config;

/// HMD Log Ingest - Parse log files and save as parquet
#[derive(Parser, Debug)]
#[command(name = "hmd-log-cli")]
#[command(about = "Parse HMD orientation log files and save as parquet", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the log file to parse
    #[arg(value_name = "FILE")]
    log_file_path: PathBuf,

    /// Enable debugging statements output
    #[arg(long)]
    debugging: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.debugging, args.quiet);

    log::info!("HMD Log Ingest CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using ingest library v{}", hmd_log_ingest::VERSION);

    let config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => IngestConfig::new(),
    };
    log::debug!("Output directory: {:?}", config.output_dir);

    let ingestor = Ingestor::new(config);
    let summary = ingestor
        .ingest_file(&args.log_file_path)
        .with_context(|| format!("Failed to ingest log file: {:?}", args.log_file_path))?;

    if !args.quiet {
        println!("✓ {}", summary);
    }

    Ok(())
}

/// Initialize logging based on verbosity level
///
/// `--debugging` raises the level to at least Debug. Output goes to stdout.
fn init_logging(verbose: u8, debugging: bool, quiet: bool) {
    use env_logger::{Builder, Target};
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match (verbose, debugging) {
            (0, false) => LevelFilter::Warn,
            (0, true) | (1, _) => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .target(Target::Stdout)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
