//! Prioritised competency listing derived from a rating tree.

use serde::Serialize;

use crate::domain::foundation::Rating;

use super::{display_name, CompetencyId, CompetencyPath, RatingTree};

/// One competency rated above Low.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompetencyEntry {
    pub id: CompetencyId,
    #[serde(skip)]
    pub path: CompetencyPath,
    pub display_name: String,
    pub top_category: String,
    pub sub_category: String,
    pub value: Rating,
}

impl CompetencyEntry {
    fn from_leaf(path: &CompetencyPath, value: Rating) -> Self {
        Self {
            id: path.competency_id(),
            path: path.clone(),
            display_name: display_name(path.leaf_name()),
            top_category: path.top_category().to_string(),
            sub_category: path.sub_category().to_string(),
            value,
        }
    }
}

/// Lists every leaf rated Medium or High, highest first.
///
/// Low leaves are excluded, so an all-Low tree yields nothing. Entries of
/// equal value keep depth-first tree order. The result is derived on every
/// call and never cached.
pub fn flatten(tree: &RatingTree) -> Vec<CompetencyEntry> {
    let mut entries: Vec<CompetencyEntry> = tree
        .leaves()
        .into_iter()
        .filter(|(_, value)| value.is_prioritised())
        .map(|(path, value)| CompetencyEntry::from_leaf(&path, value))
        .collect();
    // stable sort keeps traversal order among ties
    entries.sort_by(|a, b| b.value.cmp(&a.value));
    entries
}
