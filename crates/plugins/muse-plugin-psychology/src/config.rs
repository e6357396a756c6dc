//! Psychology engine configuration

use muse_core::{get_env_bool, load_env, parse_bool, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Run conflict detection when a new profile arrives without conflicts
pub const ENV_AUTO_DETECT_CONFLICTS: &str = "PSYCHOLOGY_AUTO_DETECT_CONFLICTS";
/// Run archetype classification for archetypes a new profile leaves open
pub const ENV_AUTO_CLASSIFY_ARCHETYPES: &str = "PSYCHOLOGY_AUTO_CLASSIFY_ARCHETYPES";
/// Pretty-print exported profiles
pub const ENV_PRETTY_EXPORT: &str = "PSYCHOLOGY_PRETTY_EXPORT";

/// Configuration for the profile repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PsychologyConfig {
    /// Detect conflicts for profiles created without any
    pub auto_detect_conflicts: bool,
    /// Classify archetypes the caller did not specify
    pub auto_classify_archetypes: bool,
    /// Pretty-print exports
    pub pretty_export: bool,
}

impl Default for PsychologyConfig {
    fn default() -> Self {
        Self {
            auto_detect_conflicts: true,
            auto_classify_archetypes: true,
            pretty_export: true,
        }
    }
}

impl PsychologyConfig {
    /// Read settings from the process environment, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            auto_detect_conflicts: get_env_bool(ENV_AUTO_DETECT_CONFLICTS, defaults.auto_detect_conflicts),
            auto_classify_archetypes: get_env_bool(
                ENV_AUTO_CLASSIFY_ARCHETYPES,
                defaults.auto_classify_archetypes,
            ),
            pretty_export: get_env_bool(ENV_PRETTY_EXPORT, defaults.pretty_export),
        }
    }

    /// Load `.env` (if any) and then read settings from the environment
    pub fn load() -> Result<Self> {
        load_env()?;
        Ok(Self::from_env())
    }

    /// Overlay explicit plugin settings on top of this configuration
    pub fn merged_with(mut self, settings: &HashMap<String, String>) -> Self {
        let read = |key: &str, current: bool| {
            settings
                .get(key)
                .and_then(|v| parse_bool(v))
                .unwrap_or(current)
        };
        self.auto_detect_conflicts = read(ENV_AUTO_DETECT_CONFLICTS, self.auto_detect_conflicts);
        self.auto_classify_archetypes = read(ENV_AUTO_CLASSIFY_ARCHETYPES, self.auto_classify_archetypes);
        self.pretty_export = read(ENV_PRETTY_EXPORT, self.pretty_export);
        self
    }

    /// Disable conflict detection
    pub fn without_conflict_detection(mut self) -> Self {
        self.auto_detect_conflicts = false;
        self
    }

    /// Disable archetype classification
    pub fn without_archetype_classification(mut self) -> Self {
        self.auto_classify_archetypes = false;
        self
    }

    /// JSON schema describing these settings, as plugins publish it
    pub fn schema() -> serde_json::Value {
        serde_json::json!({
            ENV_AUTO_DETECT_CONFLICTS: {"type": "boolean", "default": true, "description": "Detect internal conflicts for profiles created without any"},
            ENV_AUTO_CLASSIFY_ARCHETYPES: {"type": "boolean", "default": true, "description": "Suggest Enneagram/Jungian archetypes the caller did not specify"},
            ENV_PRETTY_EXPORT: {"type": "boolean", "default": true, "description": "Pretty-print exported profile JSON"}
        })
    }
}
