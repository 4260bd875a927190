pub mod config;
pub mod tree;

pub use config::{ConfigError, SearchOptions, DEFAULT_MAX_DEPTH, PARENT_METADATA_KEY};
pub use tree::{
    find_in_dict, get_inner_dict, join_path, merge_dicts, search_deep_keys, FoundPath, KeyFinder,
    Mapping, Node, PathSegment,
};
