//! End-to-End Tests for Profile Analysis
//!
//! Exercises the repository the way an author's tooling would:
//! - Profile creation with conflict detection and classification
//! - Motivation editing and tree statistics
//! - Behavior prediction for concrete situations

mod common;

use common::*;
use muse_plugin_psychology::*;
use std::collections::HashSet;

#[test]
fn family_and_ambition_produce_one_major_conflict() {
    let (_, profile) = repository_with_mara();

    assert_eq!(profile.internal_conflicts.len(), 1);
    let conflict = &profile.internal_conflicts[0];
    assert_eq!(conflict.name, "Protect family vs Pursue ambition");
    assert_eq!(conflict.severity, ConflictSeverity::Major);
    assert!(!conflict.is_resolved);
    assert!(conflict.involves("family"));
    assert!(conflict.involves("ambition"));

    let family = profile.motivation_tree.find("family").unwrap();
    let ambition = profile.motivation_tree.find("ambition").unwrap();
    let score = severity_score(family, ambition);
    assert!((score - 2.8).abs() < 1e-4);
}

#[test]
fn flattened_tree_matches_cached_statistics() {
    let (_, profile) = repository_with_mara();
    let tree = &profile.motivation_tree;

    let flat = flatten_motivation_tree(tree);
    assert_eq!(flat.len(), tree.total_motivations());
    assert_eq!(flat.len(), 3);

    let ids: HashSet<_> = flat.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids.len(), flat.len());

    let order: Vec<_> = flat.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(order, vec!["family", "farm", "ambition"]);

    assert_eq!(calculate_tree_depth(tree), 2);
    assert_eq!(tree.max_depth(), 2);
}

#[test]
fn conflict_detection_is_symmetric() {
    let forward = family_versus_ambition();
    let reversed = MotivationTree::from_roots("char-mara", forward.to_nested().into_iter().rev().collect(), MotivationLevel::Primary);

    let a = detect_conflicts(&forward);
    let b = detect_conflicts(&reversed);
    assert_eq!(a.len(), b.len());
    assert_eq!(a[0].severity, b[0].severity);
}

#[test]
fn crowded_room_makes_mara_defensive() {
    let (repo, profile) = repository_with_mara();

    let prediction = repo
        .predict_behavior_for_character(&profile.id, "She walks into a crowded room")
        .unwrap();

    assert_eq!(prediction.emotional_state, "Anxious/Defensive");
    assert_eq!(prediction.motivation_triggered.as_deref(), Some("family"));
    assert_eq!(prediction.confidence, 60);
    assert_eq!(prediction.conflicts_triggered, vec![profile.internal_conflicts[0].id.clone()]);
    assert!(prediction.defense_mechanisms_activated.is_empty());

    let analysis = BehaviorAnalysis::analyze(&profile, "She walks into a crowded room");
    assert_eq!(analysis.active_fears.len(), 1);
    assert_eq!(analysis.active_fears[0].label, "Crowds");
}

#[test]
fn resolving_the_conflict_quiets_predictions() {
    let (mut repo, profile) = repository_with_mara();
    let conflict_id = profile.internal_conflicts[0].id.clone();

    assert!(repo.resolve_conflict(&profile.id, &conflict_id, "Sells the farm", None));
    let prediction = repo
        .predict_behavior_for_character(&profile.id, "A quiet evening at home")
        .unwrap();
    assert!(prediction.conflicts_triggered.is_empty());
    assert_eq!(prediction.emotional_state, "Normal");
    assert_eq!(prediction.confidence, 80);
}

#[test]
fn added_motivations_extend_the_tree() {
    let (mut repo, profile) = repository_with_mara();

    let added = repo
        .add_motivation(
            &profile.id,
            NewMotivation::new("Make her father proud", MotivationLevel::Unconscious, 85.0),
            Some("farm"),
        )
        .unwrap();
    assert_eq!(added.parent_id.as_deref(), Some("farm"));

    let stored = repo.get_profile(&profile.id).unwrap();
    assert_eq!(stored.motivation_tree.total_motivations(), 4);
    assert_eq!(stored.motivation_tree.max_depth(), 3);
    assert_eq!(stored.motivation_tree.depth_of(&added.id), Some(3));
    assert_eq!(
        stored.motivation_tree.parent_of(&added.id).map(|m| m.id.as_str()),
        Some("farm")
    );
    assert!(stored.updated_at >= profile.updated_at);
}

#[test]
fn missing_parent_leaves_profile_untouched() {
    let (mut repo, profile) = repository_with_mara();

    let err = repo
        .add_motivation(
            &profile.id,
            NewMotivation::new("Orphaned", MotivationLevel::Hidden, 30.0),
            Some("no-such-motivation"),
        )
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(repo.get_profile(&profile.id), Some(&profile));
}

#[test]
fn unknown_profiles_are_reported() {
    let mut repo = ProfileRepository::new();

    assert!(repo.update_profile("ghost", ProfileUpdate::default()).unwrap_err().is_not_found());
    assert!(repo
        .add_motivation("ghost", NewMotivation::default(), None)
        .unwrap_err()
        .is_not_found());
    assert!(repo.add_conflict("ghost", NewConflict::default()).unwrap_err().is_not_found());
    assert!(repo.predict_behavior_for_character("ghost", "x").unwrap_err().is_not_found());
    assert!(repo.export_profile("ghost").unwrap_err().is_not_found());
    assert!(!repo.resolve_conflict("ghost", "c", "path", None));
}

#[test]
fn classification_is_deterministic() {
    let tree = family_versus_ambition();
    let flat = flatten_motivation_tree(&tree);
    let fears = vec![Fear::new("Being betrayed", 70.0)];

    let first = suggest_enneagram_type(&flat, &fears);
    for _ in 0..5 {
        assert_eq!(suggest_enneagram_type(&flat, &fears), first);
    }
    // protect (+2) and betray (+1) put type 6 ahead of ambition's type 3
    assert_eq!(first.get(), 6);
}
