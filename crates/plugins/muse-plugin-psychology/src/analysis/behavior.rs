//! Behavior prediction
//!
//! Combines what a situation sets off in a profile (fears, defenses) with the
//! character's standing drives and open conflicts. Nothing is generated; the
//! prediction is assembled from data already in the profile.

use super::tree::flatten_motivation_tree;
use crate::types::{
    BehaviorPrediction, ConflictSeverity, DefenseMechanism, Fear, InternalConflict, MotivationLevel,
    MotivationNode, PsychologyProfile, EMOTIONAL_STATE_DEFENSIVE, EMOTIONAL_STATE_NORMAL,
};
use ordered_float::OrderedFloat;

const BASE_CONFIDENCE: i32 = 60;
const ACTIVE_FEAR_PENALTY: i32 = -20;
const PRIMARY_MOTIVATION_BONUS: i32 = 20;

/// What a situation activates in a profile
#[derive(Debug, Clone)]
pub struct BehaviorAnalysis<'a> {
    /// First primary motivation in pre-order
    pub primary_motivation: Option<&'a MotivationNode>,
    /// Fears whose triggers occur in the situation
    pub active_fears: Vec<&'a Fear>,
    /// Unresolved conflicts above minor severity
    pub triggered_conflicts: Vec<&'a InternalConflict>,
    /// Defenses whose triggers occur in the situation
    pub active_defenses: Vec<&'a DefenseMechanism>,
}

impl<'a> BehaviorAnalysis<'a> {
    /// Inspect a profile against a situation
    pub fn analyze(profile: &'a PsychologyProfile, situation: &str) -> Self {
        let primary_motivation = flatten_motivation_tree(&profile.motivation_tree)
            .into_iter()
            .find(|m| m.level == MotivationLevel::Primary);

        let active_fears = profile
            .fears
            .iter()
            .filter(|f| f.is_triggered_by(situation))
            .collect();

        let triggered_conflicts = profile
            .internal_conflicts
            .iter()
            .filter(|c| !c.is_resolved && c.severity != ConflictSeverity::Minor)
            .collect();

        let active_defenses = profile
            .defense_mechanisms
            .iter()
            .filter(|d| d.is_triggered_by(situation))
            .collect();

        Self {
            primary_motivation,
            active_fears,
            triggered_conflicts,
            active_defenses,
        }
    }

    /// The most intense active fear; the earliest wins a tie
    pub fn dominant_fear(&self) -> Option<&'a Fear> {
        self.active_fears
            .iter()
            .copied()
            .rev()
            .max_by_key(|f| OrderedFloat(f.intensity))
    }

    /// Confidence before clamping: 60, -20 when afraid, +20 with a primary drive
    pub fn raw_confidence(&self) -> i32 {
        let mut confidence = BASE_CONFIDENCE;
        if !self.active_fears.is_empty() {
            confidence += ACTIVE_FEAR_PENALTY;
        }
        if self.primary_motivation.is_some() {
            confidence += PRIMARY_MOTIVATION_BONUS;
        }
        confidence
    }

    fn emotional_state(&self) -> &'static str {
        if self.active_fears.is_empty() {
            EMOTIONAL_STATE_NORMAL
        } else {
            EMOTIONAL_STATE_DEFENSIVE
        }
    }

    fn likely_response(&self) -> String {
        match (self.primary_motivation, self.dominant_fear()) {
            (Some(m), Some(f)) => format!(
                "Torn between \"{}\" and a fear of {}; likely to act defensively while still pursuing what matters most",
                m.label,
                f.label.to_lowercase()
            ),
            (Some(m), None) => format!("Likely to act in pursuit of \"{}\"", m.label),
            (None, Some(f)) => format!(
                "Likely to withdraw or lash out, driven by a fear of {}",
                f.label.to_lowercase()
            ),
            (None, None) => {
                "Likely to respond out of habit, with no dominant motivation engaged".to_string()
            }
        }
    }

    /// Assemble the prediction
    pub fn into_prediction(self, situation: &str) -> BehaviorPrediction {
        BehaviorPrediction {
            situation: situation.to_string(),
            likely_response: self.likely_response(),
            emotional_state: self.emotional_state().to_string(),
            motivation_triggered: self.primary_motivation.map(|m| m.id.clone()),
            defense_mechanisms_activated: self
                .active_defenses
                .iter()
                .map(|d| d.mechanism_type)
                .collect(),
            conflicts_triggered: self.triggered_conflicts.iter().map(|c| c.id.clone()).collect(),
            confidence: self.raw_confidence().clamp(0, 100) as u8,
        }
    }
}

/// Predict how the character will behave in a situation
pub fn predict_behavior(profile: &PsychologyProfile, situation: &str) -> BehaviorPrediction {
    let analysis = BehaviorAnalysis::analyze(profile, situation);
    tracing::debug!(
        profile_id = %profile.id,
        active_fears = analysis.active_fears.len(),
        active_defenses = analysis.active_defenses.len(),
        triggered_conflicts = analysis.triggered_conflicts.len(),
        "Analyzed situation"
    );
    analysis.into_prediction(situation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        DefenseMechanismType, Motivation, MotivationTree, PsychologicalArchetypes,
    };
    use chrono::Utc;

    fn profile(roots: Vec<Motivation>) -> PsychologyProfile {
        PsychologyProfile {
            id: "p1".to_string(),
            character_id: "c1".to_string(),
            character_name: "Mara".to_string(),
            motivation_tree: MotivationTree::from_roots("c1", roots, MotivationLevel::Primary),
            internal_conflicts: Vec::new(),
            fears: Vec::new(),
            desires: Vec::new(),
            wounds: Vec::new(),
            defense_mechanisms: Vec::new(),
            archetypes: PsychologicalArchetypes::default(),
            core_beliefs: Vec::new(),
            values: Vec::new(),
            blind_spots: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_crowd_fear_makes_character_defensive() {
        let mut p = profile(Vec::new());
        let fear = Fear::new("Crowds", 75.0).with_trigger("crowd");
        let fear_id = fear.id.clone();
        p.fears.push(fear);
        p.fears.push(Fear::new("Heights", 60.0).with_trigger("cliff"));

        let analysis = BehaviorAnalysis::analyze(&p, "She walks into a crowded room");
        assert_eq!(analysis.active_fears.len(), 1);
        assert_eq!(analysis.active_fears[0].id, fear_id);

        let prediction = predict_behavior(&p, "She walks into a crowded room");
        assert_eq!(prediction.emotional_state, "Anxious/Defensive");
        assert!(prediction.is_defensive());
        assert_eq!(prediction.confidence, 40);
        assert!(prediction.motivation_triggered.is_none());
    }

    #[test]
    fn test_whitespace_trigger_matches_any_spaced_situation() {
        let mut p = profile(Vec::new());
        p.fears.push(Fear::new("Everything", 30.0).with_trigger(" "));

        let prediction = predict_behavior(&p, "she walks in");
        assert_eq!(prediction.emotional_state, "Anxious/Defensive");
        assert_eq!(prediction.confidence, 40);
        assert_eq!(predict_behavior(&p, "silence").emotional_state, "Normal");
    }

    #[test]
    fn test_confidence_outcomes() {
        let primary = Motivation::new("Protect family", MotivationLevel::Primary, 90.0).with_id("m1");

        let calm = profile(vec![primary.clone()]);
        let prediction = predict_behavior(&calm, "A quiet morning");
        assert_eq!(prediction.confidence, 80);
        assert_eq!(prediction.emotional_state, "Normal");
        assert_eq!(prediction.motivation_triggered.as_deref(), Some("m1"));

        let mut afraid = profile(vec![primary]);
        afraid.fears.push(Fear::new("Storms", 50.0).with_trigger("thunder"));
        assert_eq!(predict_behavior(&afraid, "Thunder rolls in").confidence, 60);

        let empty = profile(Vec::new());
        assert_eq!(predict_behavior(&empty, "Nothing happens").confidence, 60);
    }

    #[test]
    fn test_primary_motivation_is_first_in_pre_order() {
        let tree = vec![
            Motivation::new("Hide", MotivationLevel::Hidden, 40.0)
                .with_id("h")
                .with_child(Motivation::new("Survive", MotivationLevel::Primary, 80.0).with_id("deep")),
            Motivation::new("Lead", MotivationLevel::Primary, 70.0).with_id("later"),
        ];
        let p = profile(tree);
        let analysis = BehaviorAnalysis::analyze(&p, "");
        assert_eq!(analysis.primary_motivation.map(|m| m.id.as_str()), Some("deep"));
    }

    #[test]
    fn test_only_open_significant_conflicts_trigger() {
        let mut p = profile(Vec::new());
        let major = InternalConflict::new("A vs B", "a", "b", ConflictSeverity::Major);
        let minor = InternalConflict::new("C vs D", "c", "d", ConflictSeverity::Minor);
        let mut resolved = InternalConflict::new("E vs F", "e", "f", ConflictSeverity::Defining);
        resolved.resolve("Made peace", None);
        let major_id = major.id.clone();
        p.internal_conflicts = vec![major, minor, resolved];

        let prediction = predict_behavior(&p, "anything");
        assert_eq!(prediction.conflicts_triggered, vec![major_id]);
    }

    #[test]
    fn test_defenses_activate_on_trigger() {
        let mut p = profile(Vec::new());
        p.defense_mechanisms.push(
            DefenseMechanism::new(DefenseMechanismType::Intellectualization, 55.0).with_trigger("funeral"),
        );
        p.defense_mechanisms
            .push(DefenseMechanism::new(DefenseMechanismType::Denial, 20.0).with_trigger("diagnosis"));

        let prediction = predict_behavior(&p, "At her father's FUNERAL");
        assert_eq!(
            prediction.defense_mechanisms_activated,
            vec![DefenseMechanismType::Intellectualization]
        );
    }

    #[test]
    fn test_dominant_fear_is_most_intense() {
        let mut p = profile(Vec::new());
        p.fears.push(Fear::new("Dogs", 40.0).with_trigger("dog"));
        p.fears.push(Fear::new("Failure", 90.0).with_trigger("exam"));
        p.fears.push(Fear::new("Noise", 90.0).with_trigger("barking"));

        let analysis = BehaviorAnalysis::analyze(&p, "A barking dog outside the exam hall");
        assert_eq!(analysis.active_fears.len(), 3);
        assert_eq!(analysis.dominant_fear().map(|f| f.label.as_str()), Some("Failure"));
    }

    #[test]
    fn test_confidence_stays_in_range() {
        let p = profile(Vec::new());
        let analysis = BehaviorAnalysis::analyze(&p, "");
        let raw = analysis.raw_confidence();
        let prediction = analysis.into_prediction("");
        assert!((0..=100).contains(&raw));
        assert!(prediction.confidence <= 100);
    }
}
