//! Muse Psychology Plugin
//!
//! A Character Psychology Engine for fiction writers.
//!
//! # Overview
//!
//! Each character gets a structured psychological profile:
//!
//! - **MotivationTree**: hierarchical drives (primary, secondary, hidden,
//!   unconscious) stored in an arena, with cached size and depth.
//!
//! - **InternalConflicts**: pairs of motivations where one fears what the
//!   other desires, scored into minor/moderate/major/defining severity.
//!
//! - **Inner life**: fears with situational triggers, wants versus needs,
//!   wounds, and habitual defense mechanisms.
//!
//! - **Archetypes**: Jungian and Enneagram typing, suggested from keyword
//!   evidence when the author leaves them open.
//!
//! - **Behavior prediction**: given a situation, which fears fire, which
//!   defenses engage, which conflicts are live, and how confident the engine is.
//!
//! All analyses are deterministic and synchronous. The async surface is only
//! the plugin/service lifecycle.
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use muse_plugin_psychology::*;
//!
//! let mut repo = ProfileRepository::new();
//! let tree = MotivationTree::from_roots(
//!     "char-1",
//!     vec![Motivation::new("Protect family", MotivationLevel::Primary, 90.0)],
//!     MotivationLevel::Primary,
//! );
//! let profile = repo.create_profile(
//!     "char-1",
//!     "Mara",
//!     ProfileDraft::default()
//!         .with_motivation_tree(tree)
//!         .with_fear(Fear::new("Crowds", 75.0).with_trigger("crowd")),
//! );
//!
//! let prediction = repo.predict_behavior_for_character(&profile.id, "She walks into a crowded room")?;
//! assert!(prediction.is_defensive());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use muse_core::{resolve_setting, Plugin, Result, Service};
use std::collections::HashMap;
use std::sync::Arc;

/// Core types for the psychology engine
pub mod types;
/// Tree, conflict, archetype and behavior analyses
pub mod analysis;
/// Profile repository and its service wrapper
pub mod services;
/// Engine configuration
pub mod config;

pub use analysis::*;
pub use config::PsychologyConfig;
pub use services::*;
pub use types::*;

/// Psychology Plugin
///
/// Owns one [`PsychologyService`]; every call to `services()` hands out a
/// handle to the same profile store.
pub struct PsychologyPlugin {
    service: PsychologyService,
}

impl PsychologyPlugin {
    /// Create the plugin with configuration read from the environment
    pub fn new() -> Self {
        Self::with_config(PsychologyConfig::from_env())
    }

    /// Create the plugin after loading `.env` into the environment
    pub fn from_env() -> Result<Self> {
        Ok(Self::with_config(PsychologyConfig::load()?))
    }

    /// Create the plugin with an explicit configuration
    pub fn with_config(config: PsychologyConfig) -> Self {
        Self {
            service: PsychologyService::new(config),
        }
    }

    /// Handle to the plugin's service
    pub fn service(&self) -> PsychologyService {
        self.service.clone()
    }
}

impl Default for PsychologyPlugin {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Plugin for PsychologyPlugin {
    fn name(&self) -> &str {
        "psychology"
    }

    fn description(&self) -> &str {
        "Character psychology engine - motivations, conflicts, fears, archetypes and behavior prediction"
    }

    fn priority(&self) -> i32 {
        5
    }

    async fn init(&self, config: HashMap<String, String>) -> Result<()> {
        let schema = self.config_schema();
        if let Some(map) = schema.as_ref().and_then(|s| s.as_object()) {
            for key in map.keys() {
                if let Some((value, is_default)) = resolve_setting(key, &config, schema.as_ref()) {
                    let source = if is_default { "default" } else { "custom" };
                    tracing::info!(
                        setting = %key,
                        value = %value,
                        source,
                        "Psychology setting"
                    );
                }
            }
        }

        let merged = self.service.config()?.merged_with(&config);
        self.service.reconfigure(merged)?;

        tracing::info!(
            auto_detect_conflicts = merged.auto_detect_conflicts,
            auto_classify_archetypes = merged.auto_classify_archetypes,
            pretty_export = merged.pretty_export,
            "Psychology plugin initialized"
        );
        Ok(())
    }

    fn services(&self) -> Vec<Arc<dyn Service>> {
        vec![Arc::new(self.service.clone())]
    }

    fn config_schema(&self) -> Option<serde_json::Value> {
        Some(PsychologyConfig::schema())
    }
}
