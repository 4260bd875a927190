//! Descent through nested mappings by key, tolerating indexed instance names.
//!
//! Resources expanded with `for_each`/`count` are addressed by names such as
//! `bucket[0]` or `bucket["logs"]`, while the source mapping only holds
//! `bucket`. A segment that misses as an exact key therefore falls back to
//! the first key that is a prefix of it.

use tracing::{debug, trace};

use super::node::{Mapping, Node};

/// Follows `path` from `tree`, one mapping key per segment.
///
/// Each step tries an exact key first, then a prefix match. A step that
/// matches neither, or that lands on a non-mapping, leaves the current
/// value unchanged and moves on to the next segment.
pub fn get_inner_dict<'a, N, S>(tree: &'a N, path: &[S]) -> &'a N
where
    N: Node,
    S: AsRef<str>,
{
    path.iter().fold(tree, |current, segment| {
        let segment = segment.as_ref();
        let Some(mapping) = current.as_mapping() else {
            debug!(segment, "cannot descend into non-mapping value, staying put");
            return current;
        };

        if let Some(value) = mapping.lookup(segment) {
            return value;
        }
        prefix_match::<N, _>(mapping, segment).unwrap_or_else(|| {
            debug!(segment, "no key matches segment, staying put");
            current
        })
    })
}

/// First key, in iteration order, that `segment` starts with.
fn prefix_match<'a, N, M>(mapping: &'a M, segment: &str) -> Option<&'a N>
where
    N: 'a,
    M: Mapping<N>,
{
    let (key, value) = mapping
        .entries()
        .find(|(key, _)| segment.starts_with(*key))?;
    trace!(segment, key, "matched segment by key prefix");
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_exact_match() {
        let tree = json!({"res[0]": {"x": 1}});
        assert_eq!(get_inner_dict(&tree, &["res[0]"]), &json!({"x": 1}));
    }

    #[test]
    fn test_prefix_fallback() {
        let tree = json!({"res": {"x": 1}});
        assert_eq!(get_inner_dict(&tree, &["res[0]"]), &json!({"x": 1}));
    }

    #[test]
    fn test_exact_wins_over_prefix() {
        let tree = json!({"res": {"x": 1}, "res[0]": {"x": 2}});
        assert_eq!(get_inner_dict(&tree, &["res[0]"]), &json!({"x": 2}));
    }

    #[test]
    fn test_first_prefix_candidate_wins() {
        let tree = json!({"bucket": {"n": 1}, "bucket_log": {"n": 2}});
        assert_eq!(get_inner_dict(&tree, &["bucket_log[\"a\"]"]), &json!({"n": 1}));
    }

    #[test]
    fn test_nested_path() {
        let tree = json!({
            "resource": {
                "aws_s3_bucket": {
                    "logs": {"acl": "private"}
                }
            }
        });
        let path = vec![
            "resource".to_string(),
            "aws_s3_bucket".to_string(),
            "logs[\"eu\"]".to_string(),
        ];
        assert_eq!(get_inner_dict(&tree, &path), &json!({"acl": "private"}));
    }

    #[test]
    fn test_miss_leaves_value_unchanged() {
        let tree = json!({"a": {"b": {"c": 1}}});
        assert_eq!(get_inner_dict(&tree, &["a", "zzz", "b"]), &json!({"c": 1}));
        assert_eq!(get_inner_dict(&tree, &["zzz"]), &tree);
    }

    #[test]
    fn test_non_mapping_step_is_noop() {
        let tree = json!({"a": [1, 2]});
        assert_eq!(get_inner_dict(&tree, &["a", "b"]), &json!([1, 2]));
    }

    #[test]
    fn test_empty_path_returns_root() {
        let tree = json!({"a": 1});
        let empty: [&str; 0] = [];
        assert_eq!(get_inner_dict(&tree, &empty), &tree);
    }

    #[test]
    fn test_toml_tree() {
        let tree = toml::Value::Table(
            toml::from_str(
                r#"
                [module.network]
                cidr = "10.0.0.0/16"
                "#,
            )
            .unwrap(),
        );
        let inner = get_inner_dict(&tree, &["module", "network[1]"]);
        assert_eq!(inner.get("cidr").and_then(|v| v.as_str()), Some("10.0.0.0/16"));
    }
}
