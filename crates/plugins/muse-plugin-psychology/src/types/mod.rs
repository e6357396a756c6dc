//! Core types for the Character Psychology Engine
//!
//! - Motivation: hierarchical drives stored in an arena-backed tree
//! - InternalConflict: tension between two motivations
//! - Fear, Desire, Wound, DefenseMechanism: the character's inner life
//! - PsychologicalArchetypes: Jungian and Enneagram typing
//! - PsychologyProfile: the aggregate root tying everything together

mod archetype;
mod conflict;
mod context;
mod inner_life;
pub mod motivation;
mod prediction;
pub mod profile;

pub use archetype::*;
pub use conflict::*;
pub use context::*;
pub use inner_life::*;
pub use motivation::*;
pub use prediction::*;
pub use profile::*;

use uuid::Uuid;

/// Fresh identifier for any engine entity
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Clamp a 0-100 rating; NaN collapses to 0
pub(crate) fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}
