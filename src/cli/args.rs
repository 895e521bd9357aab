//! Command-line argument definitions using clap.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::download::DEFAULT_CONCURRENCY;

/// Bootleg social media downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "bootleg",
    version,
    about = "Batch-download media from social media posts",
    long_about = "A CLI tool to download the images and videos behind a list of \
                  social media URLs, preserving the original capture timestamps."
)]
pub struct Args {
    /// Path to the input file: a TOML config or a plain URL list,
    /// depending on --format.
    #[arg(short, long)]
    pub file: PathBuf,

    /// Destination root directory for downloads.
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// How to interpret the input file.
    #[arg(long, value_enum, default_value_t = InputFormat::Config)]
    pub format: InputFormat,

    /// Maximum number of downloads in flight at once.
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: NonZeroUsize,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// Input file interpretation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum InputFormat {
    /// TOML configuration with urls and api_tokens.
    Config,
    /// Plain text file with one URL per line.
    List,
}
