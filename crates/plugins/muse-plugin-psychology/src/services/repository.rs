//! Profile Repository
//!
//! In-memory store of psychology profiles keyed by profile id. The repository
//! is a plain owned value: callers construct one, operate on it, and drop it.
//! It does no locking of its own; wrap it (see `PsychologyService`) when it is
//! shared between tasks.
//!
//! Lifecycle of a profile: absent → created → mutated* → exported or removed.

use crate::analysis::{
    detect_conflicts, flatten_motivation_tree, predict_behavior, suggest_enneagram_type,
    suggest_jungian_archetype,
};
use crate::config::PsychologyConfig;
use crate::types::*;
use chrono::Utc;
use muse_core::{MuseError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregate numbers over the stored profiles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryStats {
    /// Stored profiles
    pub profiles: usize,
    /// Motivations across all profiles
    pub total_motivations: usize,
    /// Unresolved conflicts across all profiles
    pub unresolved_conflicts: usize,
}

/// In-memory profile store
#[derive(Debug, Default)]
pub struct ProfileRepository {
    config: PsychologyConfig,
    profiles: HashMap<String, PsychologyProfile>,
}

impl ProfileRepository {
    /// Create an empty repository with default configuration
    pub fn new() -> Self {
        Self::with_config(PsychologyConfig::default())
    }

    /// Create an empty repository
    pub fn with_config(config: PsychologyConfig) -> Self {
        Self {
            config,
            profiles: HashMap::new(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &PsychologyConfig {
        &self.config
    }

    /// Replace the configuration for subsequent operations
    pub fn set_config(&mut self, config: PsychologyConfig) {
        self.config = config;
    }

    /// Number of stored profiles
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the repository is empty
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Create and store a profile from partial data
    ///
    /// Never fails: omitted collections become empty, omitted archetypes are
    /// classified (or defaulted), and conflicts are detected when none were
    /// supplied.
    pub fn create_profile(
        &mut self,
        character_id: impl Into<String>,
        character_name: impl Into<String>,
        draft: ProfileDraft,
    ) -> PsychologyProfile {
        self.store_draft(character_id.into(), character_name.into(), draft, &[])
    }

    /// Create and store a profile for content generated from `context`
    ///
    /// Same as `create_profile`, except the character's established traits
    /// also feed Jungian classification.
    pub fn create_profile_in_context(
        &mut self,
        character_id: impl Into<String>,
        context: &PsychologyGenerationContext,
        draft: ProfileDraft,
    ) -> PsychologyProfile {
        self.store_draft(
            character_id.into(),
            context.character_name.clone(),
            draft,
            &context.existing_traits,
        )
    }

    fn store_draft(
        &mut self,
        character_id: String,
        character_name: String,
        draft: ProfileDraft,
        traits: &[String],
    ) -> PsychologyProfile {
        let ProfileDraft {
            motivation_tree,
            internal_conflicts,
            fears,
            desires,
            wounds,
            defense_mechanisms,
            archetypes,
            core_beliefs,
            values,
            blind_spots,
            ..
        } = draft;

        let mut motivation_tree = motivation_tree.unwrap_or_default();
        motivation_tree.character_id = character_id.clone();
        motivation_tree.refresh_stats();

        let internal_conflicts = if internal_conflicts.is_empty() && self.config.auto_detect_conflicts {
            detect_conflicts(&motivation_tree)
        } else {
            internal_conflicts
        };

        let archetypes = self.resolve_archetypes(&archetypes, &motivation_tree, &fears, traits);

        let now = Utc::now();
        let profile = PsychologyProfile {
            id: new_id(),
            character_id,
            character_name,
            motivation_tree,
            internal_conflicts,
            fears,
            desires,
            wounds,
            defense_mechanisms,
            archetypes,
            core_beliefs,
            values,
            blind_spots,
            created_at: now,
            updated_at: now,
        };

        tracing::info!(
            profile_id = %profile.id,
            character_id = %profile.character_id,
            motivations = profile.motivation_tree.total_motivations(),
            conflicts = profile.internal_conflicts.len(),
            "Created psychology profile"
        );

        self.profiles.insert(profile.id.clone(), profile.clone());
        profile
    }

    fn resolve_archetypes(
        &self,
        draft: &ArchetypesDraft,
        tree: &MotivationTree,
        fears: &[Fear],
        traits: &[String],
    ) -> PsychologicalArchetypes {
        let classify = self.config.auto_classify_archetypes;
        let flat = flatten_motivation_tree(tree);

        let enneagram_type = draft.enneagram.valid_type().unwrap_or_else(|| {
            if classify {
                suggest_enneagram_type(&flat, fears)
            } else {
                EnneagramType::INVESTIGATOR
            }
        });

        let primary = draft.jungian.primary.unwrap_or_else(|| {
            if classify {
                suggest_jungian_archetype(&flat, traits)
            } else {
                JungianArchetype::default()
            }
        });

        PsychologicalArchetypes {
            jungian: JungianProfile {
                primary,
                secondary: draft.jungian.secondary,
                shadow: draft.jungian.shadow,
            },
            enneagram: draft.enneagram.complete(enneagram_type),
        }
    }

    /// Look up a profile by id
    pub fn get_profile(&self, id: &str) -> Option<&PsychologyProfile> {
        self.profiles.get(id)
    }

    /// Look up the most recently created profile for a character
    pub fn get_profile_by_character(&self, character_id: &str) -> Option<&PsychologyProfile> {
        self.profiles
            .values()
            .filter(|p| p.character_id == character_id)
            .max_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)))
    }

    /// All profiles, oldest first
    pub fn list_profiles(&self) -> Vec<&PsychologyProfile> {
        let mut profiles: Vec<_> = self.profiles.values().collect();
        profiles.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        profiles
    }

    /// Remove a profile, returning it
    pub fn remove_profile(&mut self, id: &str) -> Option<PsychologyProfile> {
        let removed = self.profiles.remove(id);
        if removed.is_some() {
            tracing::info!(profile_id = %id, "Removed psychology profile");
        }
        removed
    }

    fn profile_mut(&mut self, id: &str) -> Result<&mut PsychologyProfile> {
        self.profiles.get_mut(id).ok_or_else(|| {
            tracing::warn!(profile_id = %id, "Psychology profile not found");
            MuseError::profile_not_found(id)
        })
    }

    /// Shallow-merge an update into a profile
    pub fn update_profile(&mut self, id: &str, update: ProfileUpdate) -> Result<PsychologyProfile> {
        let profile = self.profile_mut(id)?;
        let tree_replaced = profile.apply(update);
        if tree_replaced {
            tracing::debug!(
                profile_id = %id,
                motivations = profile.motivation_tree.total_motivations(),
                max_depth = profile.motivation_tree.max_depth(),
                "Replaced motivation tree"
            );
        }
        Ok(profile.clone())
    }

    /// Add a motivation as a new root, or under `parent_id`
    ///
    /// The motivation gets a fresh id. If `parent_id` does not resolve the
    /// tree is left untouched and `MotivationNotFound` is returned.
    pub fn add_motivation(
        &mut self,
        id: &str,
        motivation: NewMotivation,
        parent_id: Option<&str>,
    ) -> Result<Motivation> {
        let profile = self.profile_mut(id)?;
        let tree = &mut profile.motivation_tree;

        let index = tree.insert_new(motivation, parent_id).ok_or_else(|| {
            let missing = parent_id.unwrap_or_default();
            tracing::warn!(profile_id = %id, parent_id = %missing, "Parent motivation not found");
            MuseError::motivation_not_found(id, missing)
        })?;

        let added = tree
            .to_motivation(index)
            .ok_or_else(|| MuseError::other("inserted motivation missing from arena"))?;
        profile.touch();

        tracing::debug!(
            profile_id = %id,
            motivation_id = %added.id,
            total = profile.motivation_tree.total_motivations(),
            "Added motivation"
        );
        Ok(added)
    }

    /// Add an authored conflict
    pub fn add_conflict(&mut self, id: &str, conflict: NewConflict) -> Result<InternalConflict> {
        let profile = self.profile_mut(id)?;
        let conflict = InternalConflict::from(conflict);
        profile.internal_conflicts.push(conflict.clone());
        profile.touch();
        tracing::debug!(profile_id = %id, conflict_id = %conflict.id, "Added conflict");
        Ok(conflict)
    }

    /// Mark a conflict resolved
    ///
    /// Returns `false` if either the profile or the conflict does not exist.
    pub fn resolve_conflict(
        &mut self,
        id: &str,
        conflict_id: &str,
        resolution_path: impl Into<String>,
        scene_id: Option<String>,
    ) -> bool {
        let Some(profile) = self.profiles.get_mut(id) else {
            tracing::warn!(profile_id = %id, "Psychology profile not found");
            return false;
        };
        let Some(conflict) = profile
            .internal_conflicts
            .iter_mut()
            .find(|c| c.id == conflict_id)
        else {
            tracing::warn!(profile_id = %id, conflict_id = %conflict_id, "Conflict not found");
            return false;
        };

        conflict.resolve(resolution_path, scene_id);
        profile.touch();
        tracing::info!(profile_id = %id, conflict_id = %conflict_id, "Resolved conflict");
        true
    }

    /// Predict how a stored character behaves in a situation
    pub fn predict_behavior_for_character(&self, id: &str, situation: &str) -> Result<BehaviorPrediction> {
        let profile = self
            .profiles
            .get(id)
            .ok_or_else(|| MuseError::profile_not_found(id))?;
        Ok(predict_behavior(profile, situation))
    }

    /// Serialize a profile to JSON
    pub fn export_profile(&self, id: &str) -> Result<String> {
        let profile = self
            .profiles
            .get(id)
            .ok_or_else(|| MuseError::profile_not_found(id))?;
        let json = if self.config.pretty_export {
            serde_json::to_string_pretty(profile)?
        } else {
            serde_json::to_string(profile)?
        };
        Ok(json)
    }

    /// Parse a profile document and store it as a new profile
    ///
    /// The document goes through `create_profile`, so derived data (tree
    /// statistics, conflicts when none are listed, unspecified archetypes) is
    /// recomputed rather than trusted. The stored copy gets a fresh id.
    pub fn import_profile(&mut self, json: &str) -> Result<PsychologyProfile> {
        let draft: ProfileDraft = serde_json::from_str(json).map_err(|e| {
            tracing::warn!(error = %e, "Failed to parse profile document");
            MuseError::from(e)
        })?;
        let character_id = draft.character_id.clone().unwrap_or_default();
        let character_name = draft.character_name.clone().unwrap_or_default();
        Ok(self.create_profile(character_id, character_name, draft))
    }

    /// Aggregate numbers over the stored profiles
    pub fn stats(&self) -> RepositoryStats {
        RepositoryStats {
            profiles: self.profiles.len(),
            total_motivations: self
                .profiles
                .values()
                .map(|p| p.motivation_tree.total_motivations())
                .sum(),
            unresolved_conflicts: self
                .profiles
                .values()
                .map(|p| p.unresolved_conflicts().count())
                .sum(),
        }
    }
}
