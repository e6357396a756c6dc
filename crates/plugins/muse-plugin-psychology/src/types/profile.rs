//! Psychology Profile - the aggregate root
//!
//! A profile owns one motivation tree plus flat collections of conflicts,
//! fears, desires, wounds and defenses. [`ProfileDraft`] is the partial shape
//! profiles are created from (hand-written or generated); [`ProfileUpdate`] is
//! the shallow patch applied by updates.

use super::{
    DefenseMechanism, Desire, EnneagramProfile, EnneagramType, Fear, InternalConflict,
    JungianArchetype, MotivationTree, PsychologicalArchetypes, Wound,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything the engine knows about one character's psychology
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PsychologyProfile {
    /// Profile id
    pub id: String,
    /// Character this profile describes
    pub character_id: String,
    /// Character display name
    pub character_name: String,
    /// Motivation hierarchy
    pub motivation_tree: MotivationTree,
    /// Internal conflicts
    pub internal_conflicts: Vec<InternalConflict>,
    /// Fears
    pub fears: Vec<Fear>,
    /// Desires
    pub desires: Vec<Desire>,
    /// Wounds
    pub wounds: Vec<Wound>,
    /// Habitual defenses
    pub defense_mechanisms: Vec<DefenseMechanism>,
    /// Archetype typing
    pub archetypes: PsychologicalArchetypes,
    /// Core beliefs
    pub core_beliefs: Vec<String>,
    /// Values
    pub values: Vec<String>,
    /// Blind spots
    pub blind_spots: Vec<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl PsychologyProfile {
    /// Mark the profile as modified now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Look up a conflict by id
    pub fn conflict(&self, conflict_id: &str) -> Option<&InternalConflict> {
        self.internal_conflicts.iter().find(|c| c.id == conflict_id)
    }

    /// Conflicts not yet resolved
    pub fn unresolved_conflicts(&self) -> impl Iterator<Item = &InternalConflict> {
        self.internal_conflicts.iter().filter(|c| !c.is_resolved)
    }

    /// Wounds that still affect behavior
    pub fn active_wounds(&self) -> impl Iterator<Item = &Wound> {
        self.wounds.iter().filter(|w| w.still_active)
    }

    /// Apply a shallow update; returns whether the motivation tree was replaced
    pub(crate) fn apply(&mut self, update: ProfileUpdate) -> bool {
        let ProfileUpdate {
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
        } = update;

        if let Some(name) = character_name {
            self.character_name = name;
        }
        let tree_replaced = motivation_tree.is_some();
        if let Some(mut tree) = motivation_tree {
            tree.character_id = self.character_id.clone();
            tree.refresh_stats();
            self.motivation_tree = tree;
        }
        if let Some(v) = internal_conflicts {
            self.internal_conflicts = v;
        }
        if let Some(v) = fears {
            self.fears = v;
        }
        if let Some(v) = desires {
            self.desires = v;
        }
        if let Some(v) = wounds {
            self.wounds = v;
        }
        if let Some(v) = defense_mechanisms {
            self.defense_mechanisms = v;
        }
        if let Some(v) = archetypes {
            self.archetypes = v;
        }
        if let Some(v) = core_beliefs {
            self.core_beliefs = v;
        }
        if let Some(v) = values {
            self.values = v;
        }
        if let Some(v) = blind_spots {
            self.blind_spots = v;
        }

        self.touch();
        tree_replaced
    }
}

/// Jungian typing as supplied by a caller; anything missing is filled in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JungianDraft {
    /// Dominant archetype
    pub primary: Option<JungianArchetype>,
    /// Supporting archetype
    pub secondary: Option<JungianArchetype>,
    /// Repressed archetype
    pub shadow: Option<JungianArchetype>,
}

/// Enneagram typing as supplied by a caller
///
/// Numbers are kept raw so out-of-range values degrade to "not supplied"
/// instead of rejecting the whole document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnneagramDraft {
    /// Core type
    #[serde(rename = "type")]
    pub enneagram_type: Option<u8>,
    /// Wing
    pub wing: Option<u8>,
    /// Growth direction
    pub integration_direction: Option<u8>,
    /// Stress direction
    pub disintegration_direction: Option<u8>,
}

impl EnneagramDraft {
    /// The supplied type, if it is a valid 1-9 value
    pub fn valid_type(&self) -> Option<EnneagramType> {
        self.enneagram_type.and_then(EnneagramType::new)
    }

    /// Complete the draft around a core type; missing or invalid directions
    /// fall back to the stated defaults (8 and 7) whatever the type
    pub fn complete(&self, enneagram_type: EnneagramType) -> EnneagramProfile {
        let standard = EnneagramProfile::default();
        EnneagramProfile {
            enneagram_type,
            wing: self.wing.and_then(EnneagramType::new),
            integration_direction: self
                .integration_direction
                .and_then(EnneagramType::new)
                .unwrap_or(standard.integration_direction),
            disintegration_direction: self
                .disintegration_direction
                .and_then(EnneagramType::new)
                .unwrap_or(standard.disintegration_direction),
        }
    }
}

/// Archetype typing as supplied by a caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchetypesDraft {
    /// Jungian part
    pub jungian: JungianDraft,
    /// Enneagram part
    pub enneagram: EnneagramDraft,
}

/// A partially filled profile, as produced by a generator or a JSON document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileDraft {
    /// Character id (used by import)
    pub character_id: Option<String>,
    /// Character name (used by import)
    pub character_name: Option<String>,
    /// Motivation hierarchy
    pub motivation_tree: Option<MotivationTree>,
    /// Internal conflicts
    pub internal_conflicts: Vec<InternalConflict>,
    /// Fears
    pub fears: Vec<Fear>,
    /// Desires
    pub desires: Vec<Desire>,
    /// Wounds
    pub wounds: Vec<Wound>,
    /// Defenses
    pub defense_mechanisms: Vec<DefenseMechanism>,
    /// Archetype typing
    pub archetypes: ArchetypesDraft,
    /// Core beliefs
    pub core_beliefs: Vec<String>,
    /// Values
    pub values: Vec<String>,
    /// Blind spots
    pub blind_spots: Vec<String>,
}

impl ProfileDraft {
    /// Set the motivation tree
    pub fn with_motivation_tree(mut self, tree: MotivationTree) -> Self {
        self.motivation_tree = Some(tree);
        self
    }

    /// Add a fear
    pub fn with_fear(mut self, fear: Fear) -> Self {
        self.fears.push(fear);
        self
    }

    /// Add a desire
    pub fn with_desire(mut self, desire: Desire) -> Self {
        self.desires.push(desire);
        self
    }

    /// Add a wound
    pub fn with_wound(mut self, wound: Wound) -> Self {
        self.wounds.push(wound);
        self
    }

    /// Add a defense mechanism
    pub fn with_defense_mechanism(mut self, defense: DefenseMechanism) -> Self {
        self.defense_mechanisms.push(defense);
        self
    }

    /// Add an authored conflict (suppresses automatic detection)
    pub fn with_conflict(mut self, conflict: InternalConflict) -> Self {
        self.internal_conflicts.push(conflict);
        self
    }

    /// Fix the primary Jungian archetype
    pub fn with_jungian_primary(mut self, archetype: JungianArchetype) -> Self {
        self.archetypes.jungian.primary = Some(archetype);
        self
    }

    /// Fix the Enneagram type
    pub fn with_enneagram_type(mut self, enneagram_type: u8) -> Self {
        self.archetypes.enneagram.enneagram_type = Some(enneagram_type);
        self
    }
}

/// Shallow patch applied by a profile update; `None` leaves a field alone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileUpdate {
    /// New display name
    pub character_name: Option<String>,
    /// Replacement motivation tree
    pub motivation_tree: Option<MotivationTree>,
    /// Replacement conflicts
    pub internal_conflicts: Option<Vec<InternalConflict>>,
    /// Replacement fears
    pub fears: Option<Vec<Fear>>,
    /// Replacement desires
    pub desires: Option<Vec<Desire>>,
    /// Replacement wounds
    pub wounds: Option<Vec<Wound>>,
    /// Replacement defenses
    pub defense_mechanisms: Option<Vec<DefenseMechanism>>,
    /// Replacement archetypes
    pub archetypes: Option<PsychologicalArchetypes>,
    /// Replacement core beliefs
    pub core_beliefs: Option<Vec<String>>,
    /// Replacement values
    pub values: Option<Vec<String>>,
    /// Replacement blind spots
    pub blind_spots: Option<Vec<String>>,
}
