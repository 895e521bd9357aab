//! Configuration validation logic.

use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_urls(&config.urls)
}

/// Validate that every entry is a fully-qualified, parseable URL.
pub fn validate_urls<S: AsRef<str>, I: IntoIterator<Item = S>>(urls: I) -> Result<()> {
    for url in urls {
        let url = url.as_ref();
        if Url::parse(url).is_err() {
            return Err(Error::ConfigValidation {
                field: "urls".to_string(),
                message: format!("'{}' is not a valid URL", url),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_urls() {
        assert!(validate_urls(&[
            "https://www.instagram.com/p/CF2iwCfsSVI/",
            "https://instagram.com/reel/abc/",
        ])
        .is_ok());
    }

    #[test]
    fn accepts_empty_list() {
        assert!(validate_urls(Vec::<String>::new()).is_ok());
    }

    #[test]
    fn rejects_relative_and_malformed_urls() {
        assert!(validate_urls(&["/p/CF2iwCfsSVI/"]).is_err());
        assert!(validate_urls(&["not a url"]).is_err());
        assert!(validate_urls(&[""]).is_err());
    }
}
