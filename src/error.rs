//! Error types for the bootleg application.

use thiserror::Error;

use crate::media::MediaKind;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Resolution errors
    #[error("No downloader can handle {0}")]
    NoDownloader(String),

    #[error("URL host '{host}' does not belong to {platform}")]
    WrongHost { platform: &'static str, host: String },

    #[error("Downloading profile '{0}' is not supported")]
    UnsupportedProfile(String),

    #[error("Unexpected media type in {0}")]
    UnexpectedMediaType(String),

    // Download errors
    #[error("Downloading {kind} media is not implemented")]
    NotImplemented { kind: MediaKind },

    #[error("API error: {0}")]
    Api(String),

    #[error("Download failed: {0}")]
    Download(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 2;
    pub const RESOLVE_ERROR: i32 = 3;
    pub const DOWNLOAD_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
