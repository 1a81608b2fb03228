//! RatingNode - closed sum type for the nested rating structure.
//!
//! A node is either a leaf score or a branch of named children. Children keep
//! their declaration order, which drives both JSON key order and the tie order
//! of the prioritised competency listing.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::domain::foundation::Rating;

use super::CompetencyPath;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RatingNode {
    Leaf(Rating),
    Branch(Vec<(String, RatingNode)>),
}

impl RatingNode {
    /// Builds a branch from `(key, child)` pairs.
    pub fn branch<I, S>(children: I) -> Self
    where
        I: IntoIterator<Item = (S, RatingNode)>,
        S: Into<String>,
    {
        RatingNode::Branch(children.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Builds a branch of leaves that all start at `Rating::Low`.
    pub fn leaves(keys: &[&str]) -> Self {
        RatingNode::Branch(
            keys.iter()
                .map(|k| (k.to_string(), RatingNode::Leaf(Rating::Low)))
                .collect(),
        )
    }

    /// Mean score of this node.
    ///
    /// Each direct child counts once regardless of its own size, so a
    /// subcategory with two leaves weighs the same as one with five.
    /// An empty branch averages to 0.
    pub fn average(&self) -> f64 {
        match self {
            RatingNode::Leaf(rating) => rating.value() as f64,
            RatingNode::Branch(children) => {
                if children.is_empty() {
                    return 0.0;
                }
                let total: f64 = children.iter().map(|(_, child)| child.average()).sum();
                total / children.len() as f64
            }
        }
    }

    /// Returns the direct child with the given key.
    pub fn child(&self, key: &str) -> Option<&RatingNode> {
        match self {
            RatingNode::Leaf(_) => None,
            RatingNode::Branch(children) => {
                children.iter().find(|(k, _)| k == key).map(|(_, v)| v)
            }
        }
    }

    /// Returns the leaf value at `path`, relative to this node.
    pub fn leaf(&self, path: &[String]) -> Option<Rating> {
        match (self, path.split_first()) {
            (RatingNode::Leaf(rating), None) => Some(*rating),
            (RatingNode::Branch(_), Some((head, rest))) => self.child(head)?.leaf(rest),
            _ => None,
        }
    }

    /// Returns a copy with the leaf at `path` replaced, or `None` when the
    /// path does not end exactly on a leaf. `self` is left untouched.
    pub fn with_leaf(&self, path: &[String], value: Rating) -> Option<RatingNode> {
        match (self, path.split_first()) {
            (RatingNode::Leaf(_), None) => Some(RatingNode::Leaf(value)),
            (RatingNode::Branch(children), Some((head, rest))) => {
                let idx = children.iter().position(|(k, _)| k == head)?;
                let replaced = children[idx].1.with_leaf(rest, value)?;
                let mut children = children.clone();
                children[idx].1 = replaced;
                Some(RatingNode::Branch(children))
            }
            _ => None,
        }
    }

    /// Visits every leaf depth-first in declaration order.
    pub fn for_each_leaf<F>(&self, prefix: &CompetencyPath, visit: &mut F)
    where
        F: FnMut(&CompetencyPath, Rating),
    {
        match self {
            RatingNode::Leaf(rating) => visit(prefix, *rating),
            RatingNode::Branch(children) => {
                for (key, child) in children {
                    child.for_each_leaf(&prefix.child(key), visit);
                }
            }
        }
    }

    /// Overlays `incoming` onto this node's shape.
    ///
    /// Keys of `self` define the result; matching leaves take the incoming
    /// value, missing or mismatched entries keep the current value and keys
    /// unknown to `self` are dropped.
    pub fn overlay(&self, incoming: &RatingNode) -> RatingNode {
        match (self, incoming) {
            (RatingNode::Leaf(_), RatingNode::Leaf(value)) => RatingNode::Leaf(*value),
            (RatingNode::Branch(children), RatingNode::Branch(_)) => RatingNode::Branch(
                children
                    .iter()
                    .map(|(key, child)| {
                        let merged = match incoming.child(key) {
                            Some(theirs) => child.overlay(theirs),
                            None => child.clone(),
                        };
                        (key.clone(), merged)
                    })
                    .collect(),
            ),
            _ => self.clone(),
        }
    }
}

impl Serialize for RatingNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RatingNode::Leaf(rating) => rating.serialize(serializer),
            RatingNode::Branch(children) => {
                let mut map = serializer.serialize_map(Some(children.len()))?;
                for (key, child) in children {
                    map.serialize_entry(key, child)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for RatingNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RatingNodeVisitor)
    }
}

struct RatingNodeVisitor;

impl RatingNodeVisitor {
    fn leaf<E: de::Error>(value: i64) -> Result<RatingNode, E> {
        u8::try_from(value)
            .ok()
            .and_then(|v| Rating::try_from_u8(v).ok())
            .map(RatingNode::Leaf)
            .ok_or_else(|| E::custom(format!("rating must be 1, 2 or 3, got {}", value)))
    }
}

impl<'de> Visitor<'de> for RatingNodeVisitor {
    type Value = RatingNode;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a rating between 1 and 3 or a map of ratings")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<RatingNode, E> {
        Self::leaf(i64::try_from(value).unwrap_or(i64::MAX))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<RatingNode, E> {
        Self::leaf(value)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RatingNode, A::Error> {
        let mut children = Vec::new();
        while let Some((key, child)) = map.next_entry::<String, RatingNode>()? {
            children.push((key, child));
        }
        Ok(RatingNode::Branch(children))
    }
}
