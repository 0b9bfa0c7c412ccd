// src/config.rs

//! Configuration loading utilities.
//!
//! Loads the TOML configuration file and applies environment overrides here,
//! at the edge, so core logic never reads ambient state.

use std::path::Path;

use crate::error::{AppError, Result};
use crate::models::Config;

/// Environment variable overriding `storage.database_path`.
pub const ENV_DB_PATH: &str = "DB_PATH";

/// Environment variable overriding `server.bind_addr`.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";

/// Environment variable overriding `server.max_review_length`.
pub const ENV_MAX_REVIEW_LENGTH: &str = "MAX_REVIEW_LENGTH";

/// Load configuration from a TOML file, falling back to defaults if the file
/// is missing or malformed, then apply environment overrides.
pub fn load(path: &Path) -> Result<Config> {
    let mut config = Config::load_or_default(path);
    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Apply `DB_PATH`, `BIND_ADDR` and `MAX_REVIEW_LENGTH` overrides.
pub fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Ok(path) = std::env::var(ENV_DB_PATH) {
        config.storage.database_path = path.into();
    }
    if let Ok(addr) = std::env::var(ENV_BIND_ADDR) {
        config.server.bind_addr = addr;
    }
    if let Ok(raw) = std::env::var(ENV_MAX_REVIEW_LENGTH) {
        config.server.max_review_length = raw.parse().map_err(|_| {
            AppError::config(format!(
                "{ENV_MAX_REVIEW_LENGTH} must be a positive integer (got '{raw}')"
            ))
        })?;
    }
    Ok(())
}
