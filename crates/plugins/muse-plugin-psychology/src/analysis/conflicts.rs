//! Conflict detection
//!
//! Two motivations conflict when one is tied to a fear that the other is
//! tied to as a desire. Detection is a pairwise scan over the flattened tree,
//! quadratic in node count; motivation trees are hand-authored and stay small.

use super::tree::flatten_motivation_tree;
use crate::types::{ConflictSeverity, InternalConflict, MotivationNode, MotivationTree};

/// Raw severity score of a pair of motivations
///
/// `avg(strength) * avg(level weight) / 100`, with level weights primary 4,
/// secondary 3, hidden 2, unconscious 1.
pub fn severity_score(a: &MotivationNode, b: &MotivationNode) -> f32 {
    let avg_strength = (a.strength + b.strength) / 2.0;
    let avg_level_weight = (a.level.weight() + b.level.weight()) / 2.0;
    avg_strength * avg_level_weight / 100.0
}

/// Map a severity score onto the four severity bands
pub fn severity_for_score(score: f32) -> ConflictSeverity {
    if score > 3.0 {
        ConflictSeverity::Defining
    } else if score > 2.0 {
        ConflictSeverity::Major
    } else if score > 1.0 {
        ConflictSeverity::Moderate
    } else {
        ConflictSeverity::Minor
    }
}

/// Severity of a conflict between two motivations
pub fn calculate_severity(a: &MotivationNode, b: &MotivationNode) -> ConflictSeverity {
    severity_for_score(severity_score(a, b))
}

/// Labels `a` fears that `b` desires, followed by labels `a` desires that `b` fears
fn opposed_labels(a: &MotivationNode, b: &MotivationNode) -> Vec<String> {
    let feared_by_a = a
        .related_fears
        .iter()
        .filter(|label| b.related_desires.contains(label));
    let desired_by_a = a
        .related_desires
        .iter()
        .filter(|label| b.related_fears.contains(label));

    let mut labels: Vec<String> = Vec::new();
    for label in feared_by_a.chain(desired_by_a) {
        if !labels.contains(label) {
            labels.push(label.clone());
        }
    }
    labels
}

/// Find every pair of motivations pulling in opposite directions
///
/// Pairs are visited in flattened (pre-order) order with `a` before `b`; each
/// pair yields at most one conflict, unresolved and with a fresh id.
pub fn detect_conflicts(tree: &MotivationTree) -> Vec<InternalConflict> {
    let flat = flatten_motivation_tree(tree);
    let mut conflicts = Vec::new();

    for (i, a) in flat.iter().enumerate() {
        for b in &flat[i + 1..] {
            let shared = opposed_labels(a, b);
            if shared.is_empty() {
                continue;
            }

            let severity = calculate_severity(a, b);
            tracing::debug!(
                motivation_a = %a.id,
                motivation_b = %b.id,
                severity = %severity,
                "Detected internal conflict"
            );

            let mut conflict = InternalConflict::new(
                format!("{} vs {}", a.label, b.label),
                a.id.clone(),
                b.id.clone(),
                severity,
            )
            .with_description(format!(
                "The drive to {} is at odds with the drive to {}",
                a.label.to_lowercase(),
                b.label.to_lowercase()
            ))
            .with_story_impact(format!(
                "Choosing between \"{}\" and \"{}\" forces the character to reveal what matters most",
                a.label, b.label
            ));
            conflict.manifestations = shared;
            conflicts.push(conflict);
        }
    }

    conflicts
}
