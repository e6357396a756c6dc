//! Motivation Tree
//!
//! A character's drives form a hierarchy: a primary motivation ("protect my
//! family") gives rise to sub-motivations ("keep the farm solvent"). The tree
//! is stored as an arena. Every node lives in one flat table and refers to its
//! parent and children by index, so there is exactly one source of truth for
//! the shape of the tree. The nested [`Motivation`] form, with `parentId`
//! back-references, only exists at the edges (JSON documents and query results)
//! and is always rebuilt from the arena.

use super::{clamp_percent, new_id};
use crate::analysis::tree::{calculate_tree_depth, flatten_motivation_tree};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How deep in the psyche a motivation sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotivationLevel {
    /// Consciously pursued, shapes most decisions
    #[default]
    Primary,
    /// Consciously pursued, subordinate to primary drives
    Secondary,
    /// Known to the character but concealed from others
    Hidden,
    /// Operates outside the character's awareness
    Unconscious,
}

impl MotivationLevel {
    /// Weight used by conflict severity scoring
    pub fn weight(&self) -> f32 {
        match self {
            MotivationLevel::Primary => 4.0,
            MotivationLevel::Secondary => 3.0,
            MotivationLevel::Hidden => 2.0,
            MotivationLevel::Unconscious => 1.0,
        }
    }
}

fn default_strength() -> f32 {
    50.0
}

/// A motivation in nested form
///
/// This is the shape documents arrive in and the shape query results are
/// handed back in. `parent_id` is informational: on ingest the nesting decides
/// the parent, on output it is filled from the arena.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Motivation {
    /// Unique identifier
    #[serde(default)]
    pub id: String,

    /// Short label (e.g. "Protect family")
    #[serde(default)]
    pub label: String,

    /// Longer free-text description
    #[serde(default)]
    pub description: String,

    /// Psychological depth
    #[serde(default)]
    pub level: MotivationLevel,

    /// Strength (0 to 100)
    #[serde(default = "default_strength")]
    pub strength: f32,

    /// Whether the character knows they are driven by this
    #[serde(default)]
    pub is_aware_of: bool,

    /// Id of the enclosing motivation, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    /// Sub-motivations, in order
    #[serde(default)]
    pub children: Vec<Motivation>,

    /// Labels of fears this motivation is tied to
    #[serde(default)]
    pub related_fears: Vec<String>,

    /// Labels of desires this motivation is tied to
    #[serde(default)]
    pub related_desires: Vec<String>,

    /// Situations that activate this motivation
    #[serde(default)]
    pub triggers: Vec<String>,
}

impl Motivation {
    /// Create a new motivation with a fresh id
    pub fn new(label: impl Into<String>, level: MotivationLevel, strength: f32) -> Self {
        Self {
            id: new_id(),
            label: label.into(),
            description: String::new(),
            level,
            strength: clamp_percent(strength),
            is_aware_of: !matches!(level, MotivationLevel::Unconscious),
            parent_id: None,
            children: Vec::new(),
            related_fears: Vec::new(),
            related_desires: Vec::new(),
            triggers: Vec::new(),
        }
    }

    /// Set the id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a related fear label
    pub fn with_related_fear(mut self, fear: impl Into<String>) -> Self {
        self.related_fears.push(fear.into());
        self
    }

    /// Add a related desire label
    pub fn with_related_desire(mut self, desire: impl Into<String>) -> Self {
        self.related_desires.push(desire.into());
        self
    }

    /// Add a trigger
    pub fn with_trigger(mut self, trigger: impl Into<String>) -> Self {
        self.triggers.push(trigger.into());
        self
    }

    /// Add a sub-motivation
    pub fn with_child(mut self, child: Motivation) -> Self {
        self.children.push(child);
        self
    }
}

/// A motivation to be added to an existing tree; the engine assigns its id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewMotivation {
    /// Short label
    pub label: String,
    /// Longer description
    pub description: String,
    /// Psychological depth
    pub level: MotivationLevel,
    /// Strength (0 to 100)
    pub strength: f32,
    /// Whether the character knows about it
    pub is_aware_of: bool,
    /// Related fear labels
    pub related_fears: Vec<String>,
    /// Related desire labels
    pub related_desires: Vec<String>,
    /// Activating situations
    pub triggers: Vec<String>,
}

impl NewMotivation {
    /// Create a new motivation draft
    pub fn new(label: impl Into<String>, level: MotivationLevel, strength: f32) -> Self {
        Self {
            label: label.into(),
            level,
            strength,
            is_aware_of: !matches!(level, MotivationLevel::Unconscious),
            ..Default::default()
        }
    }

    fn into_motivation(self) -> Motivation {
        Motivation {
            id: new_id(),
            label: self.label,
            description: self.description,
            level: self.level,
            strength: self.strength,
            is_aware_of: self.is_aware_of,
            parent_id: None,
            children: Vec::new(),
            related_fears: self.related_fears,
            related_desires: self.related_desires,
            triggers: self.triggers,
        }
    }
}

/// Position of a node inside its tree's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// Raw arena slot
    pub fn get(&self) -> usize {
        self.0
    }
}

/// A motivation stored in the arena
#[derive(Debug, Clone, PartialEq)]
pub struct MotivationNode {
    /// Unique identifier (unique within the tree)
    pub id: String,
    /// Short label
    pub label: String,
    /// Longer description
    pub description: String,
    /// Psychological depth
    pub level: MotivationLevel,
    /// Strength (0 to 100)
    pub strength: f32,
    /// Whether the character knows about it
    pub is_aware_of: bool,
    /// Related fear labels
    pub related_fears: Vec<String>,
    /// Related desire labels
    pub related_desires: Vec<String>,
    /// Activating situations
    pub triggers: Vec<String>,
    parent: Option<NodeIndex>,
    children: Vec<NodeIndex>,
}

impl MotivationNode {
    /// Arena index of the parent, `None` for roots
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Arena indices of the children, in order
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    /// Whether this node is a root
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// The motivation hierarchy of one character
///
/// `total_motivations` and `max_depth` are cached and refreshed on every
/// change to the tree's shape. `dominant_level` is caller-supplied metadata
/// and is never derived from the nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "MotivationTreeDocument", into = "MotivationTreeDocument")]
pub struct MotivationTree {
    /// Character this tree belongs to
    pub character_id: String,

    /// Level the author considers dominant
    pub dominant_level: MotivationLevel,

    nodes: Vec<MotivationNode>,
    roots: Vec<NodeIndex>,
    index: HashMap<String, NodeIndex>,
    total_motivations: usize,
    max_depth: usize,
}

impl MotivationTree {
    /// Create an empty tree
    pub fn new(character_id: impl Into<String>) -> Self {
        Self {
            character_id: character_id.into(),
            ..Default::default()
        }
    }

    /// Build a tree from nested root motivations
    ///
    /// Nesting is authoritative: any `parent_id` on the input is ignored. Ids
    /// that are empty or already used elsewhere in the tree are replaced with
    /// fresh ones.
    pub fn from_roots(
        character_id: impl Into<String>,
        roots: Vec<Motivation>,
        dominant_level: MotivationLevel,
    ) -> Self {
        let mut tree = Self::new(character_id);
        tree.dominant_level = dominant_level;
        for root in roots {
            tree.ingest(root, None);
        }
        tree.refresh_stats();
        tree
    }

    /// Total number of motivations (cached)
    pub fn total_motivations(&self) -> usize {
        self.total_motivations
    }

    /// Longest root-to-leaf path, roots counting as depth 1 (cached)
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number of nodes in the arena
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no motivations
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Arena indices of the roots, in order
    pub fn root_indices(&self) -> &[NodeIndex] {
        &self.roots
    }

    /// Node at an arena index
    pub fn get(&self, index: NodeIndex) -> Option<&MotivationNode> {
        self.nodes.get(index.0)
    }

    /// Root nodes, in order
    pub fn roots(&self) -> impl Iterator<Item = &MotivationNode> + '_ {
        self.roots.iter().filter_map(move |idx| self.get(*idx))
    }

    /// Arena index of the motivation with this id
    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// Look up a motivation by id
    pub fn find(&self, id: &str) -> Option<&MotivationNode> {
        self.index_of(id).and_then(|idx| self.get(idx))
    }

    /// Whether a motivation with this id exists
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Parent of the motivation with this id
    pub fn parent_of(&self, id: &str) -> Option<&MotivationNode> {
        self.find(id)
            .and_then(|node| node.parent)
            .and_then(|idx| self.get(idx))
    }

    /// Direct children of the motivation with this id
    pub fn children_of(&self, id: &str) -> Vec<&MotivationNode> {
        self.find(id)
            .map(|node| node.children.iter().filter_map(|idx| self.get(*idx)).collect())
            .unwrap_or_default()
    }

    /// Depth of a motivation, roots being depth 1
    pub fn depth_of(&self, id: &str) -> Option<usize> {
        let mut current = self.index_of(id)?;
        let mut depth = 1;
        while let Some(parent) = self.get(current).and_then(|node| node.parent) {
            depth += 1;
            current = parent;
        }
        Some(depth)
    }

    /// Insert a motivation (and its nested children) under `parent_id`, or as a
    /// new root when no parent is given
    ///
    /// Returns `None` without touching the tree if `parent_id` does not
    /// resolve.
    pub fn insert(&mut self, motivation: Motivation, parent_id: Option<&str>) -> Option<NodeIndex> {
        let parent = match parent_id {
            Some(id) => Some(self.index_of(id)?),
            None => None,
        };
        let idx = self.ingest(motivation, parent);
        self.refresh_stats();
        Some(idx)
    }

    /// Insert a new motivation with an engine-assigned id
    pub fn insert_new(&mut self, motivation: NewMotivation, parent_id: Option<&str>) -> Option<NodeIndex> {
        self.insert(motivation.into_motivation(), parent_id)
    }

    /// Recompute the cached statistics from the arena
    pub fn refresh_stats(&mut self) {
        self.total_motivations = flatten_motivation_tree(self).len();
        self.max_depth = calculate_tree_depth(self);
    }

    /// Rebuild the nested form of one node and its subtree
    pub fn to_motivation(&self, index: NodeIndex) -> Option<Motivation> {
        let node = self.get(index)?;
        Some(Motivation {
            id: node.id.clone(),
            label: node.label.clone(),
            description: node.description.clone(),
            level: node.level,
            strength: node.strength,
            is_aware_of: node.is_aware_of,
            parent_id: node
                .parent
                .and_then(|p| self.get(p))
                .map(|p| p.id.clone()),
            children: node
                .children
                .iter()
                .filter_map(|child| self.to_motivation(*child))
                .collect(),
            related_fears: node.related_fears.clone(),
            related_desires: node.related_desires.clone(),
            triggers: node.triggers.clone(),
        })
    }

    /// Rebuild the nested form of the whole tree
    pub fn to_nested(&self) -> Vec<Motivation> {
        self.roots
            .iter()
            .filter_map(|idx| self.to_motivation(*idx))
            .collect()
    }

    fn ingest(&mut self, motivation: Motivation, parent: Option<NodeIndex>) -> NodeIndex {
        let Motivation {
            id,
            label,
            description,
            level,
            strength,
            is_aware_of,
            children,
            related_fears,
            related_desires,
            triggers,
            ..
        } = motivation;

        let id = if id.is_empty() || self.index.contains_key(&id) {
            new_id()
        } else {
            id
        };

        let idx = NodeIndex(self.nodes.len());
        self.nodes.push(MotivationNode {
            id: id.clone(),
            label,
            description,
            level,
            strength: clamp_percent(strength),
            is_aware_of,
            related_fears,
            related_desires,
            triggers,
            parent,
            children: Vec::new(),
        });
        self.index.insert(id, idx);

        match parent {
            Some(p) => self.nodes[p.0].children.push(idx),
            None => self.roots.push(idx),
        }

        for child in children {
            self.ingest(child, Some(idx));
        }

        idx
    }
}

/// Document shape of a motivation tree
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct MotivationTreeDocument {
    character_id: String,
    root_motivations: Vec<Motivation>,
    total_motivations: usize,
    max_depth: usize,
    dominant_level: MotivationLevel,
}

impl From<MotivationTreeDocument> for MotivationTree {
    fn from(doc: MotivationTreeDocument) -> Self {
        // cached stats in the document are not trusted
        MotivationTree::from_roots(doc.character_id, doc.root_motivations, doc.dominant_level)
    }
}

impl From<MotivationTree> for MotivationTreeDocument {
    fn from(tree: MotivationTree) -> Self {
        Self {
            root_motivations: tree.to_nested(),
            total_motivations: tree.total_motivations,
            max_depth: tree.max_depth,
            dominant_level: tree.dominant_level,
            character_id: tree.character_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> MotivationTree {
        let root = Motivation::new("Protect family", MotivationLevel::Primary, 90.0)
            .with_id("m1")
            .with_child(
                Motivation::new("Keep the farm", MotivationLevel::Secondary, 60.0)
                    .with_id("m2")
                    .with_child(Motivation::new("Prove worth", MotivationLevel::Hidden, 40.0).with_id("m3")),
            );
        let second = Motivation::new("Be loved", MotivationLevel::Unconscious, 30.0).with_id("m4");
        MotivationTree::from_roots("char-1", vec![root, second], MotivationLevel::Primary)
    }

    #[test]
    fn test_from_roots_builds_arena() {
        let tree = sample_tree();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.total_motivations(), 4);
        assert_eq!(tree.max_depth(), 3);
        assert_eq!(tree.roots().count(), 2);
        assert_eq!(tree.parent_of("m3").map(|n| n.id.as_str()), Some("m2"));
        assert!(tree.parent_of("m1").is_none());
        assert_eq!(tree.depth_of("m3"), Some(3));
        assert_eq!(tree.children_of("m1").len(), 1);
    }

    #[test]
    fn test_nested_parent_ids_follow_arena() {
        let tree = sample_tree();
        let nested = tree.to_nested();
        assert_eq!(nested[0].parent_id, None);
        assert_eq!(nested[0].children[0].parent_id.as_deref(), Some("m1"));
        assert_eq!(nested[0].children[0].children[0].parent_id.as_deref(), Some("m2"));
    }

    #[test]
    fn test_ingest_ignores_stale_parent_id() {
        let mut orphan = Motivation::new("Stray", MotivationLevel::Primary, 10.0).with_id("x");
        orphan.parent_id = Some("does-not-exist".to_string());
        let tree = MotivationTree::from_roots("c", vec![orphan], MotivationLevel::Primary);
        assert!(tree.find("x").unwrap().is_root());
        assert_eq!(tree.to_nested()[0].parent_id, None);
    }

    #[test]
    fn test_duplicate_ids_are_replaced() {
        let a = Motivation::new("A", MotivationLevel::Primary, 10.0).with_id("dup");
        let b = Motivation::new("B", MotivationLevel::Primary, 10.0).with_id("dup");
        let tree = MotivationTree::from_roots("c", vec![a, b], MotivationLevel::Primary);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.find("dup").unwrap().label, "A");
        let ids: Vec<_> = tree.roots().map(|n| n.id.clone()).collect();
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_insert_under_parent_refreshes_stats() {
        let mut tree = sample_tree();
        let idx = tree
            .insert_new(NewMotivation::new("Earn respect", MotivationLevel::Hidden, 55.0), Some("m3"))
            .unwrap();
        let node = tree.get(idx).unwrap();
        assert!(!node.id.is_empty());
        assert_eq!(tree.parent_of(&node.id).map(|n| n.id.as_str()), Some("m3"));
        assert_eq!(tree.total_motivations(), 5);
        assert_eq!(tree.max_depth(), 4);
    }

    #[test]
    fn test_insert_with_unknown_parent_leaves_tree_untouched() {
        let mut tree = sample_tree();
        let before = tree.clone();
        let result = tree.insert_new(NewMotivation::new("Lost", MotivationLevel::Primary, 10.0), Some("nope"));
        assert!(result.is_none());
        assert_eq!(tree, before);
    }

    #[test]
    fn test_strength_is_clamped_on_ingest() {
        let mut m = Motivation::new("Overdrive", MotivationLevel::Primary, 10.0);
        m.strength = 250.0;
        let tree = MotivationTree::from_roots("c", vec![m], MotivationLevel::Primary);
        assert_eq!(tree.roots().next().unwrap().strength, 100.0);
    }

    #[test]
    fn test_document_serialization() {
        let tree = sample_tree();
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json["characterId"], "char-1");
        assert_eq!(json["totalMotivations"], 4);
        assert_eq!(json["maxDepth"], 3);
        assert_eq!(json["dominantLevel"], "primary");
        assert_eq!(json["rootMotivations"][0]["children"][0]["parentId"], "m1");

        let back: MotivationTree = serde_json::from_value(json).unwrap();
        assert_eq!(back, tree);
    }

    #[test]
    fn test_document_stats_are_recomputed() {
        let json = serde_json::json!({
            "characterId": "c",
            "rootMotivations": [{"id": "a", "label": "A", "children": [{"id": "b", "label": "B"}]}],
            "totalMotivations": 99,
            "maxDepth": 42
        });
        let tree: MotivationTree = serde_json::from_value(json).unwrap();
        assert_eq!(tree.total_motivations(), 2);
        assert_eq!(tree.max_depth(), 2);
        assert_eq!(tree.find("b").unwrap().strength, 50.0);
    }
}
