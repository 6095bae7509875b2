//! Console configuration.
//!
//! The service base URL is resolved in order: the `PROMOTIONS_SERVICE_URL`
//! environment variable, then a `config.toml` file in the working
//! directory, then a localhost default.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Base URL used when nothing else is configured.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8080";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Promotion service connection settings
    pub service: ServiceConfig,
}

/// Connection settings for the promotion REST service
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    /// Base URL of the service (scheme and host, no `/promotions` path)
    pub url: String,
}

/// Loads console configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Resolves the service base URL from the environment, config.toml, or the
/// default, in that order.
///
/// # Errors
/// Returns an error only when a config.toml exists but cannot be parsed.
pub fn service_url() -> Result<String> {
    if let Ok(url) = std::env::var("PROMOTIONS_SERVICE_URL") {
        return Ok(url);
    }
    if Path::new("config.toml").exists() {
        return Ok(load_config("config.toml")?.service.url);
    }
    Ok(DEFAULT_SERVICE_URL.to_string())
}
