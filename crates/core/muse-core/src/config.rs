//! Configuration management and environment variable loading

use crate::{MuseError, Result};
use std::env;

/// Load environment variables from a .env file
///
/// Looks in the current directory and its parents. A missing file is not an
/// error; a file that fails to parse is.
///
/// # Example
///
/// ```no_run
/// use muse_core::load_env;
///
/// load_env().ok();
/// let level = std::env::var("MUSE_LOG_LEVEL").unwrap_or_default();
/// ```
pub fn load_env() -> Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::info!("Loaded environment from: {}", path.display());
            Ok(())
        }
        Err(dotenvy::Error::LineParse(line, pos)) => Err(MuseError::config(format!(
            "Failed to parse .env file at line {}, position {}",
            line, pos
        ))),
        Err(dotenvy::Error::Io(_)) => {
            tracing::debug!("No .env file found - using system environment variables only");
            Ok(())
        }
        Err(e) => Err(MuseError::config(format!("Failed to load .env file: {}", e))),
    }
}

/// Get environment variable as boolean
///
/// Accepts `true/false`, `1/0`, `yes/no`, `on/off`. Anything else falls back
/// to `default`.
pub fn get_env_bool(key: &str, default: bool) -> bool {
    env::var(key)
        .ok()
        .and_then(|v| parse_bool(&v))
        .unwrap_or(default)
}

/// Parse a boolean setting value the way `get_env_bool` does
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
