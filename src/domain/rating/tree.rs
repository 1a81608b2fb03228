//! RatingTree - the SKIVE competency self-assessment.
//!
//! The shape is fixed by [`RatingTree::default`]: five top-level branches
//! (skills, knowledge, identity, values, ethics) whose leaves start at
//! `Rating::Low`. Only leaf values ever change, and every change produces a
//! new tree.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::foundation::{DomainError, Rating};

use super::{display_name, flatten, CompetencyEntry, CompetencyPath, RatingNode};

/// Top-level SKIVE branches in display order.
pub const SKIVE_BRANCHES: [&str; 5] = ["skills", "knowledge", "identity", "values", "ethics"];

/// Upper bound of the radar chart axis.
pub const MAX_SCORE: f64 = 3.0;

/// One axis of the radar summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BranchScore {
    /// Capitalised branch name, e.g. "Skills".
    pub subject: String,
    /// Equal-weight average of the branch.
    pub score: f64,
    pub full_mark: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingTree {
    root: RatingNode,
}

impl RatingTree {
    /// Returns the root node.
    pub fn root(&self) -> &RatingNode {
        &self.root
    }

    /// Returns a top-level branch by name.
    pub fn branch(&self, name: &str) -> Option<&RatingNode> {
        self.root.child(name)
    }

    /// Returns the leaf value at `path`.
    pub fn leaf(&self, path: &CompetencyPath) -> Option<Rating> {
        self.root.leaf(path.segments())
    }

    /// Returns a new tree with exactly the leaf at `path` set to `value`.
    ///
    /// # Errors
    ///
    /// `InvalidPath` if `path` does not resolve to an existing leaf.
    pub fn set_leaf(&self, path: &CompetencyPath, value: Rating) -> Result<RatingTree, DomainError> {
        self.root
            .with_leaf(path.segments(), value)
            .map(|root| RatingTree { root })
            .ok_or_else(|| DomainError::invalid_path(path.to_string()))
    }

    /// All leaf paths, depth-first in schema order.
    pub fn leaf_paths(&self) -> Vec<CompetencyPath> {
        self.leaves().into_iter().map(|(path, _)| path).collect()
    }

    /// All leaves with their current value, depth-first in schema order.
    pub fn leaves(&self) -> Vec<(CompetencyPath, Rating)> {
        let mut out = Vec::new();
        self.root
            .for_each_leaf(&CompetencyPath::from_segments(Vec::<String>::new()), &mut |path, rating| {
                out.push((path.clone(), rating))
            });
        out
    }

    /// Leaves of one top-level branch, as edited by a single wizard step.
    pub fn branch_leaves(&self, branch: &str) -> Vec<(CompetencyPath, Rating)> {
        let mut out = Vec::new();
        if let Some(node) = self.branch(branch) {
            node.for_each_leaf(&CompetencyPath::from_segments([branch]), &mut |path, rating| {
                out.push((path.clone(), rating))
            });
        }
        out
    }

    /// Equal-weight average of one top-level branch, 0 if absent.
    pub fn branch_average(&self, branch: &str) -> f64 {
        self.branch(branch).map(RatingNode::average).unwrap_or(0.0)
    }

    /// Radar summary: one score per top-level branch in schema order.
    pub fn summary(&self) -> Vec<BranchScore> {
        match &self.root {
            RatingNode::Branch(children) => children
                .iter()
                .map(|(name, node)| BranchScore {
                    subject: display_name(name),
                    score: node.average(),
                    full_mark: MAX_SCORE,
                })
                .collect(),
            RatingNode::Leaf(_) => Vec::new(),
        }
    }

    /// Prioritised competencies (rated above Low), highest first.
    pub fn competencies(&self) -> Vec<CompetencyEntry> {
        flatten(self)
    }

    /// Overlays a partial tree onto the default schema.
    ///
    /// Leaves present in `incoming` win; anything missing keeps its default
    /// and keys outside the schema are ignored.
    pub fn merged_with_defaults(incoming: &RatingNode) -> RatingTree {
        RatingTree {
            root: RatingTree::default().root.overlay(incoming),
        }
    }
}

impl Default for RatingTree {
    fn default() -> Self {
        let skills = RatingNode::branch([
            (
                "cognitive",
                RatingNode::leaves(&[
                    "analytical",
                    "decisionMaking",
                    "strategicPlanning",
                    "criticalEvaluation",
                ]),
            ),
            (
                "interpersonal",
                RatingNode::leaves(&["communication", "collaboration", "empathy", "negotiation"]),
            ),
            (
                "psychomotor",
                RatingNode::leaves(&["precision", "proceduralExecution", "coordination"]),
            ),
            (
                "metacognitive",
                RatingNode::leaves(&["reflection", "adaptability", "selfRegulation"]),
            ),
        ]);
        let knowledge = RatingNode::branch([
            ("declarative", RatingNode::leaves(&["conceptual", "factual", "theoretical"])),
            ("procedural", RatingNode::leaves(&["methods", "processes", "techniques"])),
            ("conditional", RatingNode::leaves(&["whenToApply", "contextualUse"])),
        ]);
        let identity = RatingNode::leaves(&[
            "professionalRole",
            "communityBelonging",
            "selfEfficacy",
            "dispositions",
        ]);
        let values = RatingNode::leaves(&["coreValues", "epistemicValues", "stakeholderValues"]);
        let ethics = RatingNode::leaves(&["deontological", "consequentialist", "virtue"]);

        RatingTree {
            root: RatingNode::branch([
                ("skills", skills),
                ("knowledge", knowledge),
                ("identity", identity),
                ("values", values),
                ("ethics", ethics),
            ]),
        }
    }
}

impl Serialize for RatingTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RatingTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let incoming = RatingNode::deserialize(deserializer)?;
        Ok(RatingTree::merged_with_defaults(&incoming))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use proptest::prelude::*;

    fn path(dotted: &str) -> CompetencyPath {
        CompetencyPath::parse(dotted).unwrap()
    }

    #[test]
    fn default_tree_has_five_branches_in_order() {
        let tree = RatingTree::default();
        let subjects: Vec<String> = tree.summary().into_iter().map(|s| s.subject).collect();
        assert_eq!(subjects, ["Skills", "Knowledge", "Identity", "Values", "Ethics"]);
    }

    #[test]
    fn default_tree_leaves_are_all_low() {
        let tree = RatingTree::default();
        assert_eq!(tree.leaves().len(), 32);
        assert!(tree.leaves().iter().all(|(_, r)| *r == Rating::Low));
    }

    #[test]
    fn default_summary_scores_one_everywhere() {
        for score in RatingTree::default().summary() {
            assert_eq!(score.score, 1.0);
            assert_eq!(score.full_mark, 3.0);
        }
    }

    #[test]
    fn set_leaf_returns_new_tree_and_keeps_original() {
        let tree = RatingTree::default();
        let updated = tree
            .set_leaf(&path("skills.cognitive.analytical"), Rating::High)
            .unwrap();

        assert_eq!(updated.leaf(&path("skills.cognitive.analytical")), Some(Rating::High));
        assert_eq!(tree.leaf(&path("skills.cognitive.analytical")), Some(Rating::Low));
    }

    #[test]
    fn set_leaf_on_depth_two_leaf_works() {
        let updated = RatingTree::default()
            .set_leaf(&path("identity.professionalRole"), Rating::Medium)
            .unwrap();
        assert_eq!(updated.leaf(&path("identity.professionalRole")), Some(Rating::Medium));
    }

    #[test]
    fn set_leaf_rejects_invalid_paths() {
        let tree = RatingTree::default();
        for bad in ["skills.cognitive", "skills.cognitive.unknown", "nope", "identity.professionalRole.x"] {
            let err = tree.set_leaf(&path(bad), Rating::High).unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidPath);
        }
    }

    #[test]
    fn cognitive_average_matches_example() {
        let tree = RatingTree::default()
            .set_leaf(&path("skills.cognitive.analytical"), Rating::High)
            .unwrap()
            .set_leaf(&path("skills.cognitive.strategicPlanning"), Rating::Medium)
            .unwrap();
        let cognitive = tree.branch("skills").unwrap().child("cognitive").unwrap();
        // analytical 3, decisionMaking 1, strategicPlanning 2, criticalEvaluation 1
        assert_eq!(cognitive.average(), 7.0 / 4.0);
    }

    #[test]
    fn branch_leaves_scopes_to_one_branch() {
        let leaves = RatingTree::default().branch_leaves("ethics");
        let names: Vec<&str> = leaves.iter().map(|(p, _)| p.leaf_name()).collect();
        assert_eq!(names, ["deontological", "consequentialist", "virtue"]);
        assert!(RatingTree::default().branch_leaves("unknown").is_empty());
    }

    #[test]
    fn deserialization_merges_partial_payload_onto_defaults() {
        let json = r#"{"skills":{"cognitive":{"analytical":3}},"ethics":{"virtue":2},"extra":{"a":3}}"#;
        let tree: RatingTree = serde_json::from_str(json).unwrap();

        assert_eq!(tree.leaf(&path("skills.cognitive.analytical")), Some(Rating::High));
        assert_eq!(tree.leaf(&path("ethics.virtue")), Some(Rating::Medium));
        assert_eq!(tree.leaf(&path("values.coreValues")), Some(Rating::Low));
        assert_eq!(tree.leaf_paths(), RatingTree::default().leaf_paths());
    }

    #[test]
    fn serialization_round_trips() {
        let tree = RatingTree::default()
            .set_leaf(&path("knowledge.conditional.whenToApply"), Rating::High)
            .unwrap();
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json["knowledge"]["conditional"]["whenToApply"], 3);

        let back: RatingTree = serde_json::from_value(json).unwrap();
        assert_eq!(back, tree);
    }

    fn leaf_index_and_rating() -> impl Strategy<Value = (usize, Rating)> {
        (0usize..32, prop::sample::select(Rating::ALL.to_vec()))
    }

    proptest! {
        #[test]
        fn set_leaf_is_idempotent_and_shape_preserving((idx, value) in leaf_index_and_rating()) {
            let tree = RatingTree::default();
            let target = tree.leaf_paths()[idx].clone();

            let once = tree.set_leaf(&target, value).unwrap();
            let twice = once.set_leaf(&target, value).unwrap();

            prop_assert_eq!(&once, &twice);
            prop_assert_eq!(once.leaf_paths(), tree.leaf_paths());
            prop_assert_eq!(once.leaf(&target), Some(value));
        }
    }
}
