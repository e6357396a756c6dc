//! Generation context
//!
//! The input handed to whatever produces psychological content for a
//! character (usually a language model). The engine itself only stores and
//! passes this shape around; it consumes the structured profile that comes
//! back.

use serde::{Deserialize, Serialize};

/// A relationship the character has with someone else in the story
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterRelationship {
    /// Name of the other character
    pub name: String,
    /// Kind of relationship (e.g. "sister", "rival")
    pub relationship: String,
    /// Free-text notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Everything known about a character before its psychology is generated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PsychologyGenerationContext {
    /// Character name
    pub character_name: String,
    /// Role in the story (e.g. "protagonist", "antagonist")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_type: Option<String>,
    /// Traits already established
    pub existing_traits: Vec<String>,
    /// Backstory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Relationships to other characters
    pub relationships: Vec<CharacterRelationship>,
    /// Story context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_context: Option<String>,
    /// Project-level context (genre, tone)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_context: Option<String>,
}

impl PsychologyGenerationContext {
    /// Create a context for a named character
    pub fn new(character_name: impl Into<String>) -> Self {
        Self {
            character_name: character_name.into(),
            ..Default::default()
        }
    }

    /// Add an established trait
    pub fn with_trait(mut self, trait_name: impl Into<String>) -> Self {
        self.existing_traits.push(trait_name.into());
        self
    }

    /// Add a relationship
    pub fn with_relationship(mut self, name: impl Into<String>, relationship: impl Into<String>) -> Self {
        self.relationships.push(CharacterRelationship {
            name: name.into(),
            relationship: relationship.into(),
            notes: None,
        });
        self
    }

    /// Set background
    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }
}
