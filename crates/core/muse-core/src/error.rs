//! Error types for Muse

use thiserror::Error;

/// Main error type for Muse operations
#[derive(Debug, Error)]
pub enum MuseError {
    /// No profile is stored under the given id
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    /// A motivation id could not be resolved inside a profile's tree
    #[error("Motivation '{motivation_id}' not found in profile '{profile_id}'")]
    MotivationNotFound {
        /// Profile that was searched
        profile_id: String,
        /// Motivation id that did not resolve
        motivation_id: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Runtime error (lock poisoning, lifecycle misuse)
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Convenient Result type using MuseError
pub type Result<T> = std::result::Result<T, MuseError>;

impl MuseError {
    /// Create a profile-not-found error
    pub fn profile_not_found(id: impl Into<String>) -> Self {
        MuseError::ProfileNotFound(id.into())
    }

    /// Create a motivation-not-found error
    pub fn motivation_not_found(
        profile_id: impl Into<String>,
        motivation_id: impl Into<String>,
    ) -> Self {
        MuseError::MotivationNotFound {
            profile_id: profile_id.into(),
            motivation_id: motivation_id.into(),
        }
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        MuseError::Config(msg.into())
    }

    /// Create a runtime error
    pub fn runtime(msg: impl Into<String>) -> Self {
        MuseError::Runtime(msg.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        MuseError::Other(msg.into())
    }

    /// Whether this error signals an absent profile or motivation
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MuseError::ProfileNotFound(_)
                | MuseError::MotivationNotFound { .. }
        )
    }
}
