//! Media identifier representation.

use std::fmt;

/// The kind of content a media identifier points at.
///
/// The set of kinds is the union of what the supported platforms expose;
/// each downloader only ever produces (and recognizes) its own subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Post,
    Profile,
    Reel,
    Story,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MediaKind::Post => "post",
            MediaKind::Profile => "profile",
            MediaKind::Reel => "reel",
            MediaKind::Story => "story",
        };
        f.write_str(name)
    }
}

/// A platform-scoped identifier for a single downloadable unit.
///
/// Immutable once resolved; owned by the orchestrator until handed to a
/// downloader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    /// The kind of media on the platform.
    pub kind: MediaKind,

    /// The platform's opaque ID for this media (e.g. a shortcode).
    pub id: String,
}

impl Media {
    pub fn new(kind: MediaKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

impl fmt::Display for Media {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.id)
    }
}
