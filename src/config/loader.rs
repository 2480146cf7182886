use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/termfolio/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("termfolio").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - At least one phrase, and no blank phrase
    /// - All typewriter timings are non-zero
    /// - Contact endpoint and recipient are set, request timeout is non-zero
    /// - The bind address parses
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.phrases.is_empty() {
            return Err(invalid("At least one typewriter phrase must be configured"));
        }

        if let Some(index) = self.site.phrases.iter().position(|p| p.is_empty()) {
            return Err(invalid(format!("Typewriter phrase #{} is empty", index + 1)));
        }

        let tw = &self.typewriter;
        for (name, value) in [
            ("type_ms", tw.type_ms),
            ("delete_ms", tw.delete_ms),
            ("hold_ms", tw.hold_ms),
            ("pause_ms", tw.pause_ms),
        ] {
            if value == 0 {
                return Err(invalid(format!("typewriter.{} must be greater than zero", name)));
            }
        }

        if self.contact.endpoint.trim().is_empty() {
            return Err(invalid("contact.endpoint must not be empty"));
        }

        if self.contact.timeout_seconds == 0 {
            return Err(invalid("contact.timeout_seconds must be greater than zero"));
        }

        if self.server.recipient.trim().is_empty() {
            return Err(invalid("server.recipient must not be empty"));
        }

        if self.server.bind_addr.parse::<SocketAddr>().is_err() {
            return Err(invalid(format!(
                "Invalid bind address '{}'",
                self.server.bind_addr
            )));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        message: message.into(),
    }
}
