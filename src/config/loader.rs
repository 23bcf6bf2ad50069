use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, SourceKind};

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
    /// Uses `~/.config/car-gallery/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("car-gallery").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
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
    /// - The auto-advance period and layout metrics are non-zero
    /// - The selected source kind has the fields it needs
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gallery.interval_ms == 0 {
            return Err(invalid("gallery.interval_ms must be greater than zero"));
        }
        if self.viewport.compact_breakpoint == 0 {
            return Err(invalid("viewport.compact_breakpoint must be greater than zero"));
        }
        if self.viewport.cell_width_px == 0 {
            return Err(invalid("viewport.cell_width_px must be greater than zero"));
        }

        match self.source.kind {
            SourceKind::Firestore => {
                if self.source.project_id.trim().is_empty() {
                    return Err(invalid("source.project_id is required for the firestore source"));
                }
                if self.source.collection.trim().is_empty() {
                    return Err(invalid("source.collection is required for the firestore source"));
                }
                if self.source.page_size == 0 {
                    return Err(invalid("source.page_size must be greater than zero"));
                }
                if self.source.timeout_seconds == 0 {
                    return Err(invalid("source.timeout_seconds must be greater than zero"));
                }
            }
            SourceKind::File => {
                let missing = self
                    .source
                    .path
                    .as_deref()
                    .map_or(true, |p| p.trim().is_empty());
                if missing {
                    return Err(invalid("source.path is required for the file source"));
                }
            }
        }

        Ok(())
    }
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::ValidationError {
        message: message.to_string(),
    }
}
