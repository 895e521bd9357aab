//! Bootleg - batch downloader for social media posts.
//!
//! Resolves social-media URLs into platform media identifiers and downloads
//! the image and video assets behind them, preserving the original capture
//! timestamps and bounding how many downloads run at once.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use indicatif::ProgressBar;
//!
//! use bootleg::download::{resolve_all, run_queue};
//! use bootleg::downloaders::{Downloader, InstagramDownloader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let downloaders: Vec<Box<dyn Downloader>> =
//!         vec![Box::new(InstagramDownloader::new(None)?)];
//!     let urls = vec!["https://www.instagram.com/p/CF2iwCfsSVI/".to_string()];
//!
//!     let (tasks, _unresolved) = resolve_all(&downloaders, &urls).await?;
//!     let progress = ProgressBar::hidden();
//!     run_queue(tasks, Path::new("downloads"), 1, &progress).await;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod download;
pub mod downloaders;
pub mod error;
pub mod input;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use config::{ApiTokens, Config};
pub use download::{resolve_all, run_queue, stream_to_file, TaskOutcome};
pub use downloaders::{DownloadOptions, Downloader, InstagramDownloader};
pub use error::{Error, Result};
pub use media::{Media, MediaKind};
