//! Application configuration structures.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Database settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Sentiment indicator word lists
    #[serde(default)]
    pub lexicon: LexiconConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        self.server.bind_addr.parse::<SocketAddr>().map_err(|e| {
            AppError::validation(format!(
                "server.bind_addr '{}' is not a valid socket address: {e}",
                self.server.bind_addr
            ))
        })?;
        if self.server.max_review_length == 0 {
            return Err(AppError::validation(
                "server.max_review_length must be > 0",
            ));
        }
        if self.storage.database_path.as_os_str().is_empty() {
            return Err(AppError::validation("storage.database_path is empty"));
        }
        if self.lexicon.negative.iter().any(|w| w.is_empty())
            || self.lexicon.positive.iter().any(|w| w.is_empty())
        {
            // An empty indicator is a substring of every text.
            return Err(AppError::validation(
                "lexicon indicator words must not be empty strings",
            ));
        }
        Ok(())
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    #[serde(default = "defaults::bind_addr")]
    pub bind_addr: String,

    /// Maximum accepted review length in characters
    #[serde(default = "defaults::max_review_length")]
    pub max_review_length: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: defaults::bind_addr(),
            max_review_length: defaults::max_review_length(),
        }
    }
}

/// Database settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path to the SQLite database file
    #[serde(default = "defaults::database_path")]
    pub database_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: defaults::database_path(),
        }
    }
}

/// Indicator word lists used for sentiment matching.
///
/// These are data, not algorithm: extending either list changes which texts
/// match, never how matching works.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Substrings marking a review as negative
    #[serde(default = "defaults::negative_indicators")]
    pub negative: Vec<String>,

    /// Substrings marking a review as positive
    #[serde(default = "defaults::positive_indicators")]
    pub positive: Vec<String>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            negative: defaults::negative_indicators(),
            positive: defaults::positive_indicators(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    // Server defaults
    pub fn bind_addr() -> String {
        "127.0.0.1:8000".into()
    }
    pub fn max_review_length() -> usize {
        1000
    }

    // Storage defaults
    pub fn database_path() -> PathBuf {
        PathBuf::from("reviews.db")
    }

    // Lexicon defaults
    pub fn negative_indicators() -> Vec<String> {
        vec!["плох".into(), "ненавиж".into()]
    }
    pub fn positive_indicators() -> Vec<String> {
        vec!["хорош".into(), "люблю".into()]
    }
}
