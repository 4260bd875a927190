//! Recursive search for every occurrence of a key.

use tracing::{trace, warn};

use super::node::{Mapping, Node};
use super::segment::{join_path, PathSegment};
use crate::config::SearchOptions;

/// One occurrence of the searched key: its root-relative address (ending
/// with the key itself) and the value stored under it.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundPath<'a, N> {
    pub path: Vec<PathSegment>,
    pub value: &'a N,
}

impl<N> FoundPath<'_, N> {
    /// Address of the mapping that holds the key.
    pub fn parent(&self) -> &[PathSegment] {
        &self.path[..self.path.len().saturating_sub(1)]
    }

    /// The address as a `/`-delimited path string.
    pub fn path_string(&self) -> String {
        join_path(&self.path)
    }
}

/// Finds every occurrence of `search_key` in `tree` with default options.
///
/// Results are in pre-order, and `path_prefix` is prepended to every
/// reported path. See [`KeyFinder`] for details.
pub fn search_deep_keys<'a, N: Node>(
    search_key: &str,
    tree: &'a N,
    path_prefix: &[PathSegment],
) -> Vec<FoundPath<'a, N>> {
    KeyFinder::new(search_key).search(tree, path_prefix)
}

/// Deep key search over a mapping/sequence tree.
///
/// Every mapping entry whose key equals the target is reported, including
/// entries nested below other matches. Sequences are descended element by
/// element with the index appended to the path. A mapping stored under an
/// excluded key (by default only [`PARENT_METADATA_KEY`]) is never entered,
/// though the key itself can still match.
///
/// ```
/// use dragon_tree::{KeyFinder, PathSegment};
/// use serde_json::json;
///
/// let tree = json!({"resource": [{"tags": {"env": "prod"}}]});
/// let found = KeyFinder::new("env").search(&tree, &[]);
///
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].path_string(), "resource/[0]/tags/env");
/// assert_eq!(found[0].value, &json!("prod"));
/// ```
///
/// [`PARENT_METADATA_KEY`]: crate::PARENT_METADATA_KEY
#[derive(Debug, Clone)]
#[must_use = "a key finder does nothing until .search() is called"]
pub struct KeyFinder {
    target: String,
    options: SearchOptions,
}

impl KeyFinder {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            options: SearchOptions::default(),
        }
    }

    /// Replaces the search options. A `max_depth` of 0 is raised to 1, the
    /// smallest value [`SearchOptions::from_toml_str`] accepts.
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self.options.max_depth = self.options.max_depth.max(1);
        self
    }

    /// Limits how many nesting levels below the root are visited. At least
    /// one level is always visited.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.options.max_depth = max_depth.max(1);
        self
    }

    pub fn search<'a, N: Node>(
        &self,
        tree: &'a N,
        path_prefix: &[PathSegment],
    ) -> Vec<FoundPath<'a, N>> {
        let mut found = Vec::new();
        self.walk(tree, path_prefix, 0, &mut found);
        found
    }

    fn walk<'a, N: Node>(
        &self,
        node: &'a N,
        path: &[PathSegment],
        depth: usize,
        found: &mut Vec<FoundPath<'a, N>>,
    ) {
        if depth > self.options.max_depth {
            warn!(
                path = %join_path(path),
                max_depth = self.options.max_depth,
                "search depth exceeded, skipping branch"
            );
            return;
        }

        if let Some(mapping) = node.as_mapping() {
            for (key, value) in mapping.entries() {
                let key_path = extend(path, PathSegment::Key(key.to_string()));

                if key == self.target {
                    found.push(FoundPath {
                        path: key_path.clone(),
                        value,
                    });
                }

                if value.as_mapping().is_some() {
                    if self.options.is_excluded(key) {
                        trace!(path = %join_path(&key_path), "not descending into excluded key");
                        continue;
                    }
                    self.walk(value, &key_path, depth + 1, found);
                } else if value.as_sequence().is_some() {
                    self.walk(value, &key_path, depth + 1, found);
                }
            }
        } else if let Some(items) = node.as_sequence() {
            for (index, item) in items.iter().enumerate() {
                let item_path = extend(path, PathSegment::Index(index));
                self.walk(item, &item_path, depth + 1, found);
            }
        }
    }
}

/// Copies `path` with `segment` appended, leaving siblings' paths untouched.
fn extend(path: &[PathSegment], segment: PathSegment) -> Vec<PathSegment> {
    let mut extended = Vec::with_capacity(path.len() + 1);
    extended.extend_from_slice(path);
    extended.push(segment);
    extended
}
