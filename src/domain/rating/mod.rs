//! Rating module - the SKIVE self-assessment tree.
//!
//! - `RatingNode` - closed Leaf | Branch type with equal-weight averaging
//! - `RatingTree` - fixed SKIVE schema, immutable leaf updates, radar summary
//! - `flatten` - prioritised competency listing for learning design

mod listing;
mod node;
mod path;
mod tree;

pub use listing::{flatten, CompetencyEntry};
pub use node::RatingNode;
pub use path::{display_name, CompetencyId, CompetencyPath};
pub use tree::{BranchScore, RatingTree, MAX_SCORE, SKIVE_BRANCHES};
