//! Instagram downloader.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future;
use futures::TryStreamExt;
use reqwest::cookie::Jar;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::download::stream_to_file;
use crate::downloaders::{DownloadOptions, Downloader};
use crate::error::{Error, Result};
use crate::media::{Media, MediaKind};

/// Platform name, matching the config key under `[api_tokens]`.
const PLATFORM: &str = "instagram";

/// Base URL for post metadata requests.
const API_BASE: &str = "https://www.instagram.com";

/// Post metadata response shape (`?__a=1`).
#[derive(Debug, Deserialize)]
struct PostResponse {
    graphql: Graphql,
}

#[derive(Debug, Deserialize)]
struct Graphql {
    shortcode_media: ShortcodeMedia,
}

#[derive(Debug, Deserialize)]
struct ShortcodeMedia {
    taken_at_timestamp: i64,
    shortcode: String,
    display_url: String,
    #[serde(default)]
    video_url: Option<String>,
    #[serde(default)]
    is_video: bool,
    #[serde(default)]
    edge_sidecar_to_children: Option<SidecarChildren>,
    owner: Owner,
}

#[derive(Debug, Deserialize)]
struct SidecarChildren {
    edges: Vec<SidecarEdge>,
}

#[derive(Debug, Deserialize)]
struct SidecarEdge {
    node: PostNode,
}

/// A single image or video belonging to a post.
#[derive(Debug, Deserialize)]
struct PostNode {
    shortcode: String,
    display_url: String,
    #[serde(default)]
    video_url: Option<String>,
    #[serde(default)]
    is_video: bool,
}

#[derive(Debug, Deserialize)]
struct Owner {
    username: String,
}

fn host_matches(url: &Url) -> bool {
    matches!(url.host_str(), Some(host) if host.eq_ignore_ascii_case("instagram.com")
        || host.eq_ignore_ascii_case("www.instagram.com"))
}

/// Downloader for Instagram posts.
///
/// An optional session credential is installed into the client's cookie jar
/// at construction and shared read-only by every request afterwards.
pub struct InstagramDownloader {
    client: Client,
    api_base: String,
}

impl InstagramDownloader {
    /// Create a downloader, optionally authenticated with a session token.
    pub fn new(session: Option<String>) -> Result<Self> {
        Self::with_api_base(session, API_BASE)
    }

    /// Create a downloader that fetches post metadata from a custom base URL.
    ///
    /// Used by tests to point the downloader at a local server.
    pub fn with_api_base(session: Option<String>, api_base: &str) -> Result<Self> {
        let jar = Jar::default();
        if let Some(token) = session {
            let origin = Url::parse(api_base)?;
            jar.add_cookie_str(&format!("sessionid={}", token), &origin);
        }

        let client = Client::builder().cookie_provider(Arc::new(jar)).build()?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Download every asset of a post: fetch the metadata, expand sidecar
    /// children, and fetch each child concurrently.
    async fn download_post(&self, options: &DownloadOptions) -> Result<()> {
        let url = format!("{}/p/{}/?__a=1", self.api_base, options.media.id);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api(format!(
                "Failed to fetch post {}: HTTP {}",
                options.media.id, status
            )));
        }

        let text = response.text().await?;
        let post: PostResponse = serde_json::from_str(&text).map_err(|e| {
            // Truncate by chars, not bytes: the body may be arbitrary HTML
            let snippet: String = text.chars().take(500).collect();
            Error::Api(format!(
                "Failed to parse post metadata: {} - Response: {}",
                e, snippet
            ))
        })?;

        let media = post.graphql.shortcode_media;
        let taken_at = media.taken_at_timestamp;

        let post_dir = options
            .directory
            .join(&media.owner.username)
            .join(&media.shortcode);
        tokio::fs::create_dir_all(&post_dir).await?;

        let children: Vec<PostNode> = match media.edge_sidecar_to_children {
            // Multiple media for this post
            Some(sidecar) => sidecar.edges.into_iter().map(|edge| edge.node).collect(),
            // Single media for this post
            None => vec![PostNode {
                shortcode: media.shortcode.clone(),
                display_url: media.display_url,
                video_url: media.video_url,
                is_video: media.is_video,
            }],
        };

        future::try_join_all(children.iter().map(|child| {
            self.download_child(child, &post_dir, taken_at, options.download_existing)
        }))
        .await?;

        Ok(())
    }

    /// Download a single child of a post: always the display image, plus the
    /// video when the child carries one.
    async fn download_child(
        &self,
        child: &PostNode,
        post_dir: &Path,
        taken_at: i64,
        download_existing: bool,
    ) -> Result<()> {
        tracing::debug!("Downloading {} (video: {})", child.shortcode, child.is_video);

        self.download_asset(
            &child.display_url,
            &post_dir.join(format!("{}.jpg", child.shortcode)),
            taken_at,
            download_existing,
        )
        .await?;

        if let Some(video_url) = &child.video_url {
            self.download_asset(
                video_url,
                &post_dir.join(format!("{}.mp4", child.shortcode)),
                taken_at,
                download_existing,
            )
            .await?;
        }

        Ok(())
    }

    /// Stream one asset to disk and stamp it with the post's capture time.
    async fn download_asset(
        &self,
        url: &str,
        path: &Path,
        taken_at: i64,
        download_existing: bool,
    ) -> Result<()> {
        if !download_existing && path.exists() {
            tracing::debug!("Skipping existing file: {}", path.display());
            return Ok(());
        }

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Download(format!(
                "Failed to download {}: HTTP {}",
                url, status
            )));
        }

        let stream = response.bytes_stream().map_err(Error::from);
        stream_to_file(stream, path, Some(taken_at)).await
    }
}

#[async_trait]
impl Downloader for InstagramDownloader {
    fn name(&self) -> &'static str {
        PLATFORM
    }

    fn can_download(&self, url: &str) -> bool {
        Url::parse(url).map(|parsed| host_matches(&parsed)).unwrap_or(false)
    }

    async fn resolve_ids(&self, url: &str) -> Result<Vec<Media>> {
        let parsed = Url::parse(url)?;

        if !host_matches(&parsed) {
            return Err(Error::WrongHost {
                platform: PLATFORM,
                host: parsed.host_str().unwrap_or_default().to_string(),
            });
        }

        // The path always starts with '/'; the first real segment is the
        // category token.
        let mut segments = parsed.path().split('/');
        segments.next();
        let category = segments.next().unwrap_or_default();
        let rest: Vec<&str> = segments.collect();

        let mut result = Vec::new();

        if rest.get(1).is_none() {
            // Bare handle: the category token is a profile name. The
            // identifier is built but profile downloads are rejected.
            result.push(Media::new(MediaKind::Profile, category));

            return Err(Error::UnsupportedProfile(category.to_string()));
        }

        match category {
            "p" => result.push(Media::new(MediaKind::Post, rest[0])),
            "stories" => result.push(Media::new(MediaKind::Story, rest[1])),
            "reel" => result.push(Media::new(MediaKind::Reel, rest[0])),
            _ => return Err(Error::UnexpectedMediaType(url.to_string())),
        }

        Ok(result)
    }

    async fn download(&self, options: &DownloadOptions) -> Result<()> {
        match options.media.kind {
            MediaKind::Post => self.download_post(options).await,
            kind => Err(Error::NotImplemented { kind }),
        }
    }
}
