//! Logging setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable consulted when `RUST_LOG` is not set
pub const LOG_LEVEL_ENV: &str = "MUSE_LOG_LEVEL";

/// Default filter directive
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Initialize the global logging system
///
/// `RUST_LOG` wins when present, then `MUSE_LOG_LEVEL`, then `info`. Calling
/// this more than once is harmless; later calls leave the first subscriber in
/// place and return `false`.
pub fn init_logging() -> bool {
    let level = std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        let _first = init_logging();
        assert!(!init_logging());
        tracing::info!("logging initialized for tests");
    }
}
