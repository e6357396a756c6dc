//! Psychological archetypes: Jungian archetypes and Enneagram types

use serde::{Deserialize, Serialize};

/// Narrative archetypes, in classifier evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JungianArchetype {
    /// Rises to meet a challenge and proves their worth
    #[default]
    Hero,
    /// Guides and teaches others
    Mentor,
    /// Embodies what others repress; seeks destruction or dominance
    Shadow,
    /// Disrupts the status quo through wit and mischief
    Trickster,
    /// Seeks safety and goodness, trusts the world
    Innocent,
    /// Longs to belong; the everyman
    Orphan,
    /// Protects and nurtures others
    Caregiver,
    /// Seeks freedom through discovery
    Explorer,
    /// Breaks rules that no longer serve
    Rebel,
    /// Pursues intimacy and passion
    Lover,
    /// Gives form to a vision
    Creator,
    /// Takes control to create order
    Ruler,
}

impl JungianArchetype {
    /// All archetypes, in classifier evaluation order
    pub const ALL: [JungianArchetype; 12] = [
        JungianArchetype::Hero,
        JungianArchetype::Mentor,
        JungianArchetype::Shadow,
        JungianArchetype::Trickster,
        JungianArchetype::Innocent,
        JungianArchetype::Orphan,
        JungianArchetype::Caregiver,
        JungianArchetype::Explorer,
        JungianArchetype::Rebel,
        JungianArchetype::Lover,
        JungianArchetype::Creator,
        JungianArchetype::Ruler,
    ];

    /// Lowercase name, matching the wire format
    pub fn as_str(&self) -> &'static str {
        match self {
            JungianArchetype::Hero => "hero",
            JungianArchetype::Mentor => "mentor",
            JungianArchetype::Shadow => "shadow",
            JungianArchetype::Trickster => "trickster",
            JungianArchetype::Innocent => "innocent",
            JungianArchetype::Orphan => "orphan",
            JungianArchetype::Caregiver => "caregiver",
            JungianArchetype::Explorer => "explorer",
            JungianArchetype::Rebel => "rebel",
            JungianArchetype::Lover => "lover",
            JungianArchetype::Creator => "creator",
            JungianArchetype::Ruler => "ruler",
        }
    }
}

impl std::fmt::Display for JungianArchetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An Enneagram type, always within 1..=9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct EnneagramType(u8);

impl EnneagramType {
    /// Type 1, the Reformer
    pub const REFORMER: EnneagramType = EnneagramType(1);
    /// Type 5, the Investigator
    pub const INVESTIGATOR: EnneagramType = EnneagramType(5);

    /// Validate a raw type number
    pub fn new(value: u8) -> Option<Self> {
        (1..=9).contains(&value).then_some(Self(value))
    }

    /// All nine types, in ascending order
    pub fn all() -> impl Iterator<Item = EnneagramType> {
        (1..=9).map(EnneagramType)
    }

    /// Raw type number
    pub fn get(&self) -> u8 {
        self.0
    }

    /// Direction of growth along the Enneagram lines
    pub fn integration_direction(&self) -> EnneagramType {
        EnneagramType(match self.0 {
            1 => 7,
            2 => 4,
            3 => 6,
            4 => 1,
            5 => 8,
            6 => 9,
            7 => 5,
            8 => 2,
            _ => 3,
        })
    }

    /// Direction of stress along the Enneagram lines
    pub fn disintegration_direction(&self) -> EnneagramType {
        EnneagramType(match self.0 {
            1 => 4,
            2 => 8,
            3 => 9,
            4 => 2,
            5 => 7,
            6 => 3,
            7 => 1,
            8 => 5,
            _ => 6,
        })
    }
}

impl TryFrom<u8> for EnneagramType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        EnneagramType::new(value).ok_or_else(|| format!("enneagram type must be 1-9, got {}", value))
    }
}

impl From<EnneagramType> for u8 {
    fn from(value: EnneagramType) -> Self {
        value.0
    }
}

impl std::fmt::Display for EnneagramType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Jungian side of the typing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JungianProfile {
    /// Dominant archetype
    pub primary: JungianArchetype,
    /// Supporting archetype
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<JungianArchetype>,
    /// Archetype the character represses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<JungianArchetype>,
}

/// Enneagram side of the typing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnneagramProfile {
    /// Core type
    #[serde(rename = "type")]
    pub enneagram_type: EnneagramType,
    /// Wing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wing: Option<EnneagramType>,
    /// Type the character moves toward when growing
    pub integration_direction: EnneagramType,
    /// Type the character moves toward under stress
    pub disintegration_direction: EnneagramType,
}

impl EnneagramProfile {
    /// Profile for a type with the standard directions and no wing
    pub fn for_type(enneagram_type: EnneagramType) -> Self {
        Self {
            enneagram_type,
            wing: None,
            integration_direction: enneagram_type.integration_direction(),
            disintegration_direction: enneagram_type.disintegration_direction(),
        }
    }
}

impl Default for EnneagramProfile {
    fn default() -> Self {
        Self::for_type(EnneagramType::INVESTIGATOR)
    }
}

/// Complete archetype typing of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PsychologicalArchetypes {
    /// Jungian archetypes
    pub jungian: JungianProfile,
    /// Enneagram typing
    pub enneagram: EnneagramProfile,
}
