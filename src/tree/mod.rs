//! Read-only traversal of parsed document trees.
//!
//! Every operation here is soft: a path that does not resolve yields `None`,
//! a branch that cannot be searched yields no results, and an unusable
//! layer is skipped. None of them return errors or panic.

mod error;
mod locate;
mod merge;
mod node;
mod resolve;
mod search;
mod segment;

pub use locate::get_inner_dict;
pub use merge::merge_dicts;
pub use node::{Mapping, Node};
pub use resolve::find_in_dict;
pub use search::{search_deep_keys, FoundPath, KeyFinder};
pub use segment::{join_path, PathSegment};
