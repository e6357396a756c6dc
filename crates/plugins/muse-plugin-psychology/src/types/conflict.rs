//! Internal conflicts between motivations

use super::new_id;
use serde::{Deserialize, Serialize};

/// How much a conflict shapes the character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictSeverity {
    /// Background friction
    #[default]
    Minor,
    /// Noticeable in some scenes
    Moderate,
    /// Drives major story beats
    Major,
    /// Central to who the character is
    Defining,
}

impl ConflictSeverity {
    /// Lowercase name, matching the wire format
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictSeverity::Minor => "minor",
            ConflictSeverity::Moderate => "moderate",
            ConflictSeverity::Major => "major",
            ConflictSeverity::Defining => "defining",
        }
    }
}

impl std::fmt::Display for ConflictSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tension between two motivations
///
/// `motivation_a` and `motivation_b` are weak references into the owning
/// profile's motivation tree; nothing guarantees they still resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalConflict {
    /// Unique identifier
    #[serde(default)]
    pub id: String,

    /// Short name (e.g. "Protect family vs Pursue ambition")
    #[serde(default)]
    pub name: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// First motivation id
    #[serde(default)]
    pub motivation_a: String,

    /// Second motivation id
    #[serde(default)]
    pub motivation_b: String,

    /// Severity
    #[serde(default)]
    pub severity: ConflictSeverity,

    /// How the conflict shows up on the page
    #[serde(default)]
    pub manifestations: Vec<String>,

    /// How the conflict was or could be resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution_path: Option<String>,

    /// Effect on the story
    #[serde(default)]
    pub story_impact: String,

    /// Whether it has been resolved
    #[serde(default)]
    pub is_resolved: bool,

    /// Scene in which it was resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_in_scene: Option<String>,
}

impl InternalConflict {
    /// Create an unresolved conflict with a fresh id
    pub fn new(
        name: impl Into<String>,
        motivation_a: impl Into<String>,
        motivation_b: impl Into<String>,
        severity: ConflictSeverity,
    ) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            description: String::new(),
            motivation_a: motivation_a.into(),
            motivation_b: motivation_b.into(),
            severity,
            manifestations: Vec::new(),
            resolution_path: None,
            story_impact: String::new(),
            is_resolved: false,
            resolved_in_scene: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a manifestation
    pub fn with_manifestation(mut self, manifestation: impl Into<String>) -> Self {
        self.manifestations.push(manifestation.into());
        self
    }

    /// Set the story impact
    pub fn with_story_impact(mut self, impact: impl Into<String>) -> Self {
        self.story_impact = impact.into();
        self
    }

    /// Mark resolved
    pub fn resolve(&mut self, resolution_path: impl Into<String>, scene_id: Option<String>) {
        self.is_resolved = true;
        self.resolution_path = Some(resolution_path.into());
        self.resolved_in_scene = scene_id;
    }

    /// Whether this conflict involves the given motivation
    pub fn involves(&self, motivation_id: &str) -> bool {
        self.motivation_a == motivation_id || self.motivation_b == motivation_id
    }
}

/// A conflict to be added to a profile; the engine assigns its id and marks
/// it unresolved
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewConflict {
    /// Short name
    pub name: String,
    /// Description
    pub description: String,
    /// First motivation id
    pub motivation_a: String,
    /// Second motivation id
    pub motivation_b: String,
    /// Severity
    pub severity: ConflictSeverity,
    /// Manifestations
    pub manifestations: Vec<String>,
    /// Suggested resolution
    pub resolution_path: Option<String>,
    /// Effect on the story
    pub story_impact: String,
}

impl From<NewConflict> for InternalConflict {
    fn from(new: NewConflict) -> Self {
        Self {
            id: new_id(),
            name: new.name,
            description: new.description,
            motivation_a: new.motivation_a,
            motivation_b: new.motivation_b,
            severity: new.severity,
            manifestations: new.manifestations,
            resolution_path: new.resolution_path,
            story_impact: new.story_impact,
            is_resolved: false,
            resolved_in_scene: None,
        }
    }
}
