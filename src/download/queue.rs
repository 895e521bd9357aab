//! Bounded-concurrency download orchestration.

use std::num::NonZeroUsize;
use std::path::Path;

use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;

use crate::downloaders::{find_downloader, DownloadOptions, Downloader};
use crate::error::{Error, Result};
use crate::media::Media;

/// Concurrency used when none is configured.
pub const DEFAULT_CONCURRENCY: NonZeroUsize = NonZeroUsize::MIN;

/// One resolved unit of work: a media identifier plus the downloader that
/// produced it.
pub struct ResolvedTask<'a> {
    pub downloader: &'a dyn Downloader,
    pub media: Media,
    pub source_url: String,
}

impl std::fmt::Debug for ResolvedTask<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedTask")
            .field("media", &self.media)
            .field("source_url", &self.source_url)
            .finish_non_exhaustive()
    }
}

/// The captured result of one download task.
pub struct TaskOutcome {
    pub source_url: String,
    pub media: Media,
    pub result: Result<()>,
}

impl TaskOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Resolve every URL into download tasks, in source order.
///
/// A URL with no matching downloader fails the whole run. A URL whose
/// resolution fails is logged and counted; its siblings are still processed.
pub async fn resolve_all<'a>(
    downloaders: &'a [Box<dyn Downloader>],
    urls: &[String],
) -> Result<(Vec<ResolvedTask<'a>>, usize)> {
    let mut tasks = Vec::new();
    let mut failures = 0;

    for url in urls {
        let downloader =
            find_downloader(downloaders, url).ok_or_else(|| Error::NoDownloader(url.clone()))?;

        match downloader.resolve_ids(url).await {
            Ok(medias) => {
                for media in medias {
                    tasks.push(ResolvedTask {
                        downloader,
                        media,
                        source_url: url.clone(),
                    });
                }
            }
            Err(e) => {
                tracing::error!("Failed to resolve {}: {}", url, e);
                failures += 1;
            }
        }
    }

    Ok((tasks, failures))
}

/// Run download tasks with at most `concurrency` in flight at once.
///
/// Task failures are captured per task and logged with the source URL and
/// media id; they never abort sibling tasks. The progress bar is incremented
/// once per completed download. Returns once every task has finished.
pub async fn run_queue(
    tasks: Vec<ResolvedTask<'_>>,
    directory: &Path,
    concurrency: usize,
    progress: &ProgressBar,
) -> Vec<TaskOutcome> {
    let concurrency = concurrency.max(1);

    stream::iter(tasks.into_iter().map(|task| async move {
        let options = DownloadOptions {
            media: task.media.clone(),
            directory: directory.to_path_buf(),
            download_existing: false,
        };

        let result = task.downloader.download(&options).await;
        match &result {
            Ok(()) => progress.inc(1),
            Err(e) => tracing::error!(
                "Failed to download {} from {}: {}",
                task.media,
                task.source_url,
                e
            ),
        }

        TaskOutcome {
            source_url: task.source_url,
            media: task.media,
            result,
        }
    }))
    .buffer_unordered(concurrency)
    .collect()
    .await
}
