//! Behavior predictions

use super::DefenseMechanismType;
use serde::{Deserialize, Serialize};

/// Emotional state reported when any fear is active
pub const EMOTIONAL_STATE_DEFENSIVE: &str = "Anxious/Defensive";

/// Emotional state reported when no fear is active
pub const EMOTIONAL_STATE_NORMAL: &str = "Normal";

/// How a character is likely to act in a situation
///
/// A value object computed on demand, never stored with the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorPrediction {
    /// The situation as given
    pub situation: String,
    /// Predicted response
    pub likely_response: String,
    /// Predicted emotional state
    pub emotional_state: String,
    /// Motivation driving the response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motivation_triggered: Option<String>,
    /// Defenses the situation activates
    #[serde(default)]
    pub defense_mechanisms_activated: Vec<DefenseMechanismType>,
    /// Ids of unresolved, non-minor conflicts in play
    #[serde(default)]
    pub conflicts_triggered: Vec<String>,
    /// Confidence (0 to 100)
    pub confidence: u8,
}

impl BehaviorPrediction {
    /// Whether the character is predicted to be on the defensive
    pub fn is_defensive(&self) -> bool {
        self.emotional_state == EMOTIONAL_STATE_DEFENSIVE
    }
}
