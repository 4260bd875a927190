//! Single-value lookup by `/`-delimited path.
//!
//! A path is a list of segments joined by `/`. A segment written as `[N]`
//! indexes a sequence; anything else is a mapping key:
//!
//! ```text
//! resource/aws_s3_bucket/[0]/tags
//! ```

use tracing::debug;

use super::error::LookupError;
use super::node::{Mapping, Node};

/// Returns the value at `key_path`, or `None` if any step fails.
///
/// Resolution is all-or-nothing: a missing key, a step into the wrong kind
/// of container, a bad or out-of-range index, or a null anywhere along the
/// way all yield `None`. The reason is logged at debug level.
pub fn find_in_dict<'a, N: Node>(tree: &'a N, key_path: &str) -> Option<&'a N> {
    match resolve(tree, key_path) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(path = key_path, reason = %e, "could not find path in tree");
            None
        }
    }
}

fn resolve<'a, N: Node>(tree: &'a N, key_path: &str) -> Result<&'a N, LookupError> {
    let mut current = tree;

    for segment in key_path.split('/') {
        current = match index_segment(segment) {
            Some(inner) => step_index(current, inner)?,
            None => step_key(current, segment)?,
        };
        if current.is_null() {
            return Err(LookupError::Null(segment.to_string()));
        }
    }

    Ok(current)
}

/// Returns the bracket contents if `segment` is written as `[...]`.
fn index_segment(segment: &str) -> Option<&str> {
    segment.strip_prefix('[')?.strip_suffix(']')
}

fn step_index<'a, N: Node>(current: &'a N, inner: &str) -> Result<&'a N, LookupError> {
    let items = current
        .as_sequence()
        .ok_or_else(|| LookupError::NotASequence(format!("[{inner}]")))?;
    let index: usize = inner
        .parse()
        .map_err(|_| LookupError::InvalidIndex(inner.to_string()))?;

    items.get(index).ok_or(LookupError::IndexOutOfRange {
        index,
        len: items.len(),
    })
}

fn step_key<'a, N: Node>(current: &'a N, key: &str) -> Result<&'a N, LookupError> {
    current
        .as_mapping()
        .ok_or_else(|| LookupError::NotAMapping(key.to_string()))?
        .lookup(key)
        .ok_or_else(|| LookupError::MissingKey(key.to_string()))
}
