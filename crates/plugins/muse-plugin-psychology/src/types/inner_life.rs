//! Fears, desires, wounds and defense mechanisms

use super::{clamp_percent, new_id};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Case-insensitive check: does any trigger occur inside `text`?
pub(crate) fn any_trigger_in(triggers: &[String], text: &str) -> bool {
    let haystack = text.to_lowercase();
    triggers.iter().any(|t| haystack.contains(&t.to_lowercase()))
}

/// Something the character fears
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Fear {
    /// Unique identifier
    pub id: String,
    /// Short label (e.g. "betrayal")
    pub label: String,
    /// Description
    pub description: String,
    /// Where the fear comes from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// Intensity (0 to 100)
    pub intensity: f32,
    /// Whether the fear is proportionate to real danger
    pub is_rational: bool,
    /// Situations that set the fear off
    pub triggers: Vec<String>,
    /// How the character copes
    pub coping_mechanisms: Vec<String>,
    /// Trauma the fear is tied to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_trauma: Option<String>,
}

impl Default for Fear {
    fn default() -> Self {
        Self {
            id: String::new(),
            label: String::new(),
            description: String::new(),
            origin: None,
            intensity: 50.0,
            is_rational: false,
            triggers: Vec::new(),
            coping_mechanisms: Vec::new(),
            related_trauma: None,
        }
    }
}

impl Fear {
    /// Create a new fear with a fresh id
    pub fn new(label: impl Into<String>, intensity: f32) -> Self {
        Self {
            id: new_id(),
            label: label.into(),
            intensity: clamp_percent(intensity),
            ..Default::default()
        }
    }

    /// Add a trigger
    pub fn with_trigger(mut self, trigger: impl Into<String>) -> Self {
        self.triggers.push(trigger.into());
        self
    }

    /// Add a coping mechanism
    pub fn with_coping_mechanism(mut self, coping: impl Into<String>) -> Self {
        self.coping_mechanisms.push(coping.into());
        self
    }

    /// Set origin
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Whether any trigger occurs in the situation text (case-insensitive)
    pub fn is_triggered_by(&self, situation: &str) -> bool {
        any_trigger_in(&self.triggers, situation)
    }
}

/// Want (conscious goal) or need (what the character actually lacks)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesireType {
    /// Conscious, external goal
    #[default]
    Want,
    /// Deeper, often unrecognized need
    Need,
}

/// Something the character desires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Desire {
    /// Unique identifier
    pub id: String,
    /// Short label
    pub label: String,
    /// Description
    pub description: String,
    /// Want or need
    #[serde(rename = "type")]
    pub desire_type: DesireType,
    /// Intensity (0 to 100)
    pub intensity: f32,
    /// Whether it can be achieved in the story world
    pub is_achievable: bool,
    /// What stands in the way
    pub obstacles: Vec<String>,
    /// How far the character will go for it (0 to 100)
    pub willingness: f32,
}

impl Default for Desire {
    fn default() -> Self {
        Self {
            id: String::new(),
            label: String::new(),
            description: String::new(),
            desire_type: DesireType::Want,
            intensity: 50.0,
            is_achievable: true,
            obstacles: Vec::new(),
            willingness: 50.0,
        }
    }
}

impl Desire {
    /// Create a new desire with a fresh id
    pub fn new(label: impl Into<String>, desire_type: DesireType, intensity: f32) -> Self {
        Self {
            id: new_id(),
            label: label.into(),
            desire_type,
            intensity: clamp_percent(intensity),
            ..Default::default()
        }
    }

    /// Add an obstacle
    pub fn with_obstacle(mut self, obstacle: impl Into<String>) -> Self {
        self.obstacles.push(obstacle.into());
        self
    }

    /// Set willingness
    pub fn with_willingness(mut self, willingness: f32) -> Self {
        self.willingness = clamp_percent(willingness);
        self
    }
}

/// Psychological defense mechanisms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefenseMechanismType {
    /// Refusing to accept reality
    #[default]
    Denial,
    /// Attributing one's own feelings to others
    Projection,
    /// Justifying behavior with plausible reasons
    Rationalization,
    /// Redirecting emotion to a safer target
    Displacement,
    /// Channeling impulses into acceptable activity
    Sublimation,
    /// Reverting to earlier behavior
    Regression,
    /// Pushing thoughts out of awareness
    Repression,
    /// Acting opposite to one's feelings
    ReactionFormation,
    /// Retreating into abstract reasoning
    Intellectualization,
    /// Keeping conflicting beliefs apart
    Compartmentalization,
}

impl DefenseMechanismType {
    /// All variants, in declaration order
    pub const ALL: [DefenseMechanismType; 10] = [
        DefenseMechanismType::Denial,
        DefenseMechanismType::Projection,
        DefenseMechanismType::Rationalization,
        DefenseMechanismType::Displacement,
        DefenseMechanismType::Sublimation,
        DefenseMechanismType::Regression,
        DefenseMechanismType::Repression,
        DefenseMechanismType::ReactionFormation,
        DefenseMechanismType::Intellectualization,
        DefenseMechanismType::Compartmentalization,
    ];
}

/// A past injury that still shapes the character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Wound {
    /// Unique identifier
    pub id: String,
    /// Short label
    pub label: String,
    /// Description
    pub description: String,
    /// What happened
    pub origin: String,
    /// Age at the time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_when_occurred: Option<u32>,
    /// Whether it still affects behavior
    pub still_active: bool,
    /// Healing progress (0 to 100)
    pub healing_progress: f32,
    /// Patterns that reopen the wound
    pub trigger_patterns: Vec<String>,
    /// Defenses the wound gave rise to
    pub defense_mechanisms: BTreeSet<DefenseMechanismType>,
}

impl Default for Wound {
    fn default() -> Self {
        Self {
            id: String::new(),
            label: String::new(),
            description: String::new(),
            origin: String::new(),
            age_when_occurred: None,
            still_active: true,
            healing_progress: 0.0,
            trigger_patterns: Vec::new(),
            defense_mechanisms: BTreeSet::new(),
        }
    }
}

impl Wound {
    /// Create a new, still active wound with a fresh id
    pub fn new(label: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            label: label.into(),
            origin: origin.into(),
            ..Default::default()
        }
    }

    /// Add a defense mechanism (set semantics)
    pub fn with_defense(mut self, defense: DefenseMechanismType) -> Self {
        self.defense_mechanisms.insert(defense);
        self
    }

    /// Add a trigger pattern
    pub fn with_trigger_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.trigger_patterns.push(pattern.into());
        self
    }

    /// Set healing progress
    pub fn with_healing_progress(mut self, progress: f32) -> Self {
        self.healing_progress = clamp_percent(progress);
        self
    }
}

/// A defense mechanism the character habitually uses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DefenseMechanism {
    /// Unique identifier
    pub id: String,
    /// Mechanism
    #[serde(rename = "type")]
    pub mechanism_type: DefenseMechanismType,
    /// Description
    pub description: String,
    /// Situations that activate it
    pub triggers: Vec<String>,
    /// How it shows up
    pub manifestations: Vec<String>,
    /// How adaptive it is (0 to 100)
    pub healthiness: f32,
}

impl Default for DefenseMechanism {
    fn default() -> Self {
        Self {
            id: String::new(),
            mechanism_type: DefenseMechanismType::default(),
            description: String::new(),
            triggers: Vec::new(),
            manifestations: Vec::new(),
            healthiness: 50.0,
        }
    }
}

impl DefenseMechanism {
    /// Create a new defense mechanism with a fresh id
    pub fn new(mechanism_type: DefenseMechanismType, healthiness: f32) -> Self {
        Self {
            id: new_id(),
            mechanism_type,
            healthiness: clamp_percent(healthiness),
            ..Default::default()
        }
    }

    /// Add a trigger
    pub fn with_trigger(mut self, trigger: impl Into<String>) -> Self {
        self.triggers.push(trigger.into());
        self
    }

    /// Add a manifestation
    pub fn with_manifestation(mut self, manifestation: impl Into<String>) -> Self {
        self.manifestations.push(manifestation.into());
        self
    }

    /// Whether any trigger occurs in the situation text (case-insensitive)
    pub fn is_triggered_by(&self, situation: &str) -> bool {
        any_trigger_in(&self.triggers, situation)
    }
}
