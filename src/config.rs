//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A `.env` file in the working directory is honoured (loaded via
//! `dotenvy` in `main.rs`).
//!
//! ## Variables
//!
//! - `PORT` - Listening port (default: `5000`)
//! - `HOST` - Bind address (default: `0.0.0.0`)
//! - `BASE_URL` - Public origin used to build short URLs
//!   (default: `http://localhost:{PORT}`)
//! - `DATA_FILE` - Path of the JSON data file (default: `data.json`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default data file path.
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Public origin short URLs are built on, without trailing slash.
    pub base_url: String,
    pub data_file: PathBuf,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(v) => v
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got '{}'", v))?,
            Err(_) => DEFAULT_PORT,
        };

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let base_url = env::var("BASE_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| default_base_url(port));

        let data_file = env::var("DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE));

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            host,
            port,
            base_url,
            data_file,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `port` is 0
    /// - `base_url` is not an http(s) URL
    /// - `data_file` is empty
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("PORT must be between 1 and 65535");
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.data_file.as_os_str().is_empty() {
            anyhow::bail!("DATA_FILE must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Socket address string to bind, `host:port`.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Data file: {}", self.data_file.display());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn default_base_url(port: u16) -> String {
    format!("http://localhost:{}", port)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is unparseable or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
