//! Archetype classification
//!
//! Keyword scoring against fixed reference tables. Both classifiers are total:
//! with no matching input they fall back to the first candidate evaluated
//! (Enneagram type 1, the hero archetype).

use crate::types::{EnneagramType, Fear, JungianArchetype, MotivationNode};

/// Reference entry for one Enneagram type
#[derive(Debug, Clone, Copy)]
pub struct EnneagramDefinition {
    /// Type number
    pub number: u8,
    /// Conventional name
    pub name: &'static str,
    /// Substrings that indicate the type's core motivation
    pub motivation_keywords: &'static [&'static str],
    /// Substrings that indicate the type's core fear
    pub fear_keywords: &'static [&'static str],
}

/// Reference entry for one Jungian archetype
#[derive(Debug, Clone, Copy)]
pub struct JungianDefinition {
    /// Archetype
    pub archetype: JungianArchetype,
    /// Substrings that indicate the archetype
    pub keywords: &'static [&'static str],
}

/// Enneagram reference table, ordered by type number
pub const ENNEAGRAM_TYPES: [EnneagramDefinition; 9] = [
    EnneagramDefinition {
        number: 1,
        name: "Reformer",
        motivation_keywords: &["perfect", "right", "improve", "integrity", "order", "principle", "correct"],
        fear_keywords: &["corrupt", "evil", "defective", "wrong", "mistake"],
    },
    EnneagramDefinition {
        number: 2,
        name: "Helper",
        motivation_keywords: &["help", "love", "needed", "care", "appreciat", "support"],
        fear_keywords: &["unloved", "unwanted", "rejected", "unworthy"],
    },
    EnneagramDefinition {
        number: 3,
        name: "Achiever",
        motivation_keywords: &["success", "achieve", "admir", "recognition", "win", "status", "ambition"],
        fear_keywords: &["worthless", "failure", "fail", "humiliat"],
    },
    EnneagramDefinition {
        number: 4,
        name: "Individualist",
        motivation_keywords: &["identity", "unique", "authentic", "express", "meaning", "beauty"],
        fear_keywords: &["no identity", "ordinary", "insignificant", "invisible"],
    },
    EnneagramDefinition {
        number: 5,
        name: "Investigator",
        motivation_keywords: &["knowledge", "understand", "competen", "master", "learn", "truth"],
        fear_keywords: &["helpless", "incompetent", "useless", "incapable", "ignoran"],
    },
    EnneagramDefinition {
        number: 6,
        name: "Loyalist",
        motivation_keywords: &["security", "safety", "protect", "loyal", "trust", "certain"],
        fear_keywords: &["betray", "abandon", "alone", "uncertain", "danger"],
    },
    EnneagramDefinition {
        number: 7,
        name: "Enthusiast",
        motivation_keywords: &["freedom", "adventure", "experience", "fun", "excite", "joy", "pleasure"],
        fear_keywords: &["pain", "depriv", "trapped", "bored", "missing out"],
    },
    EnneagramDefinition {
        number: 8,
        name: "Challenger",
        motivation_keywords: &["control", "power", "strength", "independ", "justice", "dominat"],
        fear_keywords: &["controlled", "harmed", "weak", "vulnerab", "manipulat"],
    },
    EnneagramDefinition {
        number: 9,
        name: "Peacemaker",
        motivation_keywords: &["peace", "harmony", "stability", "calm", "balance", "comfort"],
        fear_keywords: &["conflict", "loss", "separation", "disconnect", "fragment"],
    },
];

/// Jungian reference table, in evaluation order
pub const JUNGIAN_ARCHETYPES: [JungianDefinition; 12] = [
    JungianDefinition {
        archetype: JungianArchetype::Hero,
        keywords: &["courage", "prove", "save", "protect", "defeat", "brave", "triumph"],
    },
    JungianDefinition {
        archetype: JungianArchetype::Mentor,
        keywords: &["teach", "guide", "wisdom", "advise", "mentor", "pass on"],
    },
    JungianDefinition {
        archetype: JungianArchetype::Shadow,
        keywords: &["revenge", "destroy", "hatred", "corrupt", "vengeance", "ruin"],
    },
    JungianDefinition {
        archetype: JungianArchetype::Trickster,
        keywords: &["mischief", "trick", "chaos", "laugh", "humor", "prank"],
    },
    JungianDefinition {
        archetype: JungianArchetype::Innocent,
        keywords: &["happiness", "goodness", "pure", "innocen", "simple", "faith"],
    },
    JungianDefinition {
        archetype: JungianArchetype::Orphan,
        keywords: &["belong", "fit in", "acceptance", "community", "connect"],
    },
    JungianDefinition {
        archetype: JungianArchetype::Caregiver,
        keywords: &["care", "nurtur", "help", "heal", "serve", "family"],
    },
    JungianDefinition {
        archetype: JungianArchetype::Explorer,
        keywords: &["freedom", "discover", "explore", "adventure", "journey", "wander"],
    },
    JungianDefinition {
        archetype: JungianArchetype::Rebel,
        keywords: &["rebel", "revolution", "overthrow", "defy", "break free", "tear down"],
    },
    JungianDefinition {
        archetype: JungianArchetype::Lover,
        keywords: &["love", "passion", "intima", "romance", "devotion", "desire"],
    },
    JungianDefinition {
        archetype: JungianArchetype::Creator,
        keywords: &["create", "build", "invent", "artist", "imagin", "vision"],
    },
    JungianDefinition {
        archetype: JungianArchetype::Ruler,
        keywords: &["control", "order", "lead", "power", "rule", "ambition"],
    },
];

/// Per-type scores, in type order (index 0 is type 1)
pub fn score_enneagram_types(motivations: &[&MotivationNode], fears: &[Fear]) -> [u32; 9] {
    let motivation_labels: Vec<String> = motivations.iter().map(|m| m.label.to_lowercase()).collect();
    let fear_labels: Vec<String> = fears.iter().map(|f| f.label.to_lowercase()).collect();

    let mut scores = [0u32; 9];
    for (slot, def) in scores.iter_mut().zip(ENNEAGRAM_TYPES.iter()) {
        for keyword in def.motivation_keywords {
            if motivation_labels.iter().any(|label| label.contains(keyword)) {
                *slot += 2;
            }
        }
        for keyword in def.fear_keywords {
            if fear_labels.iter().any(|label| label.contains(keyword)) {
                *slot += 1;
            }
        }
    }
    scores
}

/// Suggest the Enneagram type best matching the motivation and fear labels
///
/// Highest score wins; ties go to the lowest-numbered type.
pub fn suggest_enneagram_type(motivations: &[&MotivationNode], fears: &[Fear]) -> EnneagramType {
    let scores = score_enneagram_types(motivations, fears);

    let mut best = EnneagramType::REFORMER;
    let mut best_score = scores[0];
    for (t, score) in EnneagramType::all().zip(scores.iter()) {
        if *score > best_score {
            best = t;
            best_score = *score;
        }
    }

    tracing::debug!(enneagram_type = %best, score = best_score, "Suggested enneagram type");
    best
}

/// Per-archetype scores, in evaluation order
pub fn score_jungian_archetypes(motivations: &[&MotivationNode], traits: &[String]) -> [u32; 12] {
    let mut corpus = String::new();
    for m in motivations {
        corpus.push_str(&m.label.to_lowercase());
        corpus.push(' ');
        corpus.push_str(&m.description.to_lowercase());
        corpus.push(' ');
    }
    for t in traits {
        corpus.push_str(&t.to_lowercase());
        corpus.push(' ');
    }

    let mut scores = [0u32; 12];
    for (slot, def) in scores.iter_mut().zip(JUNGIAN_ARCHETYPES.iter()) {
        if def.keywords.iter().any(|keyword| corpus.contains(keyword)) {
            *slot += 2;
        }
    }
    scores
}

/// Suggest the Jungian archetype best matching motivations and traits
///
/// Highest score wins; ties resolve to the earlier archetype, so `Hero` wins
/// when nothing matches.
pub fn suggest_jungian_archetype(motivations: &[&MotivationNode], traits: &[String]) -> JungianArchetype {
    let scores = score_jungian_archetypes(motivations, traits);

    let mut best = JungianArchetype::Hero;
    let mut best_score = 0;
    for (def, score) in JUNGIAN_ARCHETYPES.iter().zip(scores.iter()) {
        if *score > best_score {
            best = def.archetype;
            best_score = *score;
        }
    }

    tracing::debug!(archetype = %best, score = best_score, "Suggested jungian archetype");
    best
}
