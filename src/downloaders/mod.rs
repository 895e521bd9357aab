//! Platform downloader contract and registry.

mod instagram;

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::Result;
use crate::media::Media;

pub use instagram::InstagramDownloader;

/// Options passed to a downloader's [`Downloader::download`] call.
///
/// Constructed per task by the orchestrator and consumed exactly once.
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    /// The media to download.
    pub media: Media,

    /// The base directory to download to.
    pub directory: PathBuf,

    /// Whether files that already exist on disk should be downloaded again.
    pub download_existing: bool,
}

/// A downloader for a social media platform.
#[async_trait]
pub trait Downloader: Send + Sync {
    /// Platform name, used for config keys and log output.
    fn name(&self) -> &'static str;

    /// Check whether this downloader can handle the given URL.
    ///
    /// Never errors: malformed or non-matching URLs return `false`.
    fn can_download(&self, url: &str) -> bool;

    /// Resolve a URL into one or more platform media identifiers.
    async fn resolve_ids(&self, url: &str) -> Result<Vec<Media>>;

    /// Download a piece of media. On success every asset belonging to the
    /// media has been fully written to disk before the call returns.
    async fn download(&self, options: &DownloadOptions) -> Result<()>;
}

/// Find the first downloader that can handle `url`, in registration order.
pub fn find_downloader<'a>(
    downloaders: &'a [Box<dyn Downloader>],
    url: &str,
) -> Option<&'a dyn Downloader> {
    downloaders
        .iter()
        .find(|downloader| downloader.can_download(url))
        .map(|downloader| downloader.as_ref())
}
