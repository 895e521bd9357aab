//! Configuration loading and validation.

mod loader;
mod validation;

pub use loader::{ApiTokens, Config};
pub use validation::{validate_config, validate_urls};
