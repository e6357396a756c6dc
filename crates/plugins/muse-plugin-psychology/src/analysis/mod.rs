//! Deterministic analyses over psychology profiles
//!
//! - `tree`: depth and pre-order flattening of the motivation arena
//! - `conflicts`: pairwise fear/desire conflict detection with severity scoring
//! - `archetypes`: keyword-scored Enneagram and Jungian classification
//! - `behavior`: situational behavior prediction

pub mod archetypes;
pub mod behavior;
pub mod conflicts;
pub mod tree;

pub use archetypes::{suggest_enneagram_type, suggest_jungian_archetype};
pub use behavior::{predict_behavior, BehaviorAnalysis};
pub use conflicts::{calculate_severity, detect_conflicts, severity_for_score, severity_score};
pub use tree::{calculate_tree_depth, flatten_motivation_tree};
