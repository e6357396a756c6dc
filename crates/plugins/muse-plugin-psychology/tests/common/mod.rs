//! Shared fixtures for the psychology integration tests

#![allow(dead_code)]

use muse_plugin_psychology::*;

/// Two motivations where one fears what the other desires
pub fn family_versus_ambition() -> MotivationTree {
    MotivationTree::from_roots(
        "char-mara",
        vec![
            Motivation::new("Protect family", MotivationLevel::Primary, 90.0)
                .with_id("family")
                .with_related_fear("Losing independence")
                .with_child(
                    Motivation::new("Keep the farm running", MotivationLevel::Secondary, 60.0)
                        .with_id("farm"),
                ),
            Motivation::new("Pursue ambition", MotivationLevel::Secondary, 70.0)
                .with_id("ambition")
                .with_related_desire("Losing independence"),
        ],
        MotivationLevel::Primary,
    )
}

/// A fully populated draft for round-trip checks
pub fn rich_draft() -> ProfileDraft {
    ProfileDraft::default()
        .with_motivation_tree(family_versus_ambition())
        .with_fear(
            Fear::new("Crowds", 75.0)
                .with_trigger("crowd")
                .with_coping_mechanism("Counts exits")
                .with_origin("Stampede at the fair"),
        )
        .with_desire(Desire::new("Recognition", DesireType::Want, 65.0).with_obstacle("Her brother"))
        .with_desire(Desire::new("Belonging", DesireType::Need, 80.0))
        .with_wound(
            Wound::new("Abandoned at the fair", "Age seven")
                .with_defense(DefenseMechanismType::Repression)
                .with_trigger_pattern("Loud gatherings"),
        )
        .with_defense_mechanism(
            DefenseMechanism::new(DefenseMechanismType::Intellectualization, 55.0)
                .with_trigger("funeral")
                .with_manifestation("Recites statistics"),
        )
}

/// Create a repository holding one rich profile
pub fn repository_with_mara() -> (ProfileRepository, PsychologyProfile) {
    muse_core::init_logging();
    let mut repo = ProfileRepository::new();
    let profile = repo.create_profile("char-mara", "Mara", rich_draft());
    (repo, profile)
}
