use tracing::trace;

use super::node::{Mapping, Node};

/// Merges mapping layers into one, later layers taking precedence.
///
/// The merge is shallow: a key defined in a later layer replaces the
/// earlier value wholesale, even when both are mappings or the later value
/// is empty or null. Layers that are null, empty, or not mappings at all
/// are skipped.
///
/// ```
/// use dragon_tree::merge_dicts;
/// use serde_json::{json, Value};
///
/// let defaults = json!({"region": "eu-west-1", "tags": {"team": "infra"}});
/// let module = json!({"tags": {}});
/// let merged = merge_dicts([&defaults, &Value::Null, &module]);
///
/// assert_eq!(Value::Object(merged), json!({"region": "eu-west-1", "tags": {}}));
/// ```
pub fn merge_dicts<'a, N, I>(layers: I) -> N::Mapping
where
    N: Node + Clone + 'a,
    I: IntoIterator<Item = &'a N>,
{
    let mut merged: N::Mapping = Default::default();

    for (position, layer) in layers.into_iter().enumerate() {
        let Some(mapping) = layer.as_mapping().filter(|m| !m.is_empty()) else {
            trace!(position, "skipping empty or non-mapping layer");
            continue;
        };
        for (key, value) in mapping.entries() {
            merged.put(key.to_string(), value.clone());
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn merge_json(layers: &[Value]) -> Value {
        Value::Object(merge_dicts(layers))
    }

    #[test]
    fn test_later_layer_wins() {
        let merged = merge_json(&[json!({}), json!({"a": 1}), Value::Null, json!({"a": 2, "b": 3})]);
        assert_eq!(merged, json!({"a": 2, "b": 3}));
    }

    #[test]
    fn test_no_layers() {
        let none: [&Value; 0] = [];
        assert!(merge_dicts(none).is_empty());
    }

    #[test]
    fn test_non_mapping_layers_skipped() {
        let merged = merge_json(&[json!({"a": 1}), json!([{"a": 2}]), json!("a"), json!(false)]);
        assert_eq!(merged, json!({"a": 1}));
    }

    #[test]
    fn test_falsy_values_inside_layer_override() {
        let merged = merge_json(&[
            json!({"a": 1, "b": 2, "c": 3, "d": 4}),
            json!({"a": null, "b": "", "c": {}, "d": 0}),
        ]);
        assert_eq!(merged, json!({"a": null, "b": "", "c": {}, "d": 0}));
    }

    #[test]
    fn test_shallow_merge() {
        let merged = merge_json(&[
            json!({"tags": {"team": "infra", "env": "dev"}}),
            json!({"tags": {"env": "prod"}}),
        ]);
        assert_eq!(merged, json!({"tags": {"env": "prod"}}));
    }

    #[test]
    fn test_self_merge_is_identity() {
        let layer = json!({"a": 1, "b": [1, 2], "c": {"d": null}});
        assert_eq!(merge_json(&[layer.clone(), layer.clone()]), layer);
    }

    #[test]
    fn test_inputs_untouched() {
        let base = json!({"a": 1});
        let overlay = json!({"a": 2});
        let _ = merge_dicts([&base, &overlay]);
        assert_eq!(base, json!({"a": 1}));
        assert_eq!(overlay, json!({"a": 2}));
    }

    #[test]
    fn test_toml_layers() {
        let defaults: toml::Value = toml::Value::Table(
            toml::from_str(
                r#"
                name = "app"
                port = 8080
                "#,
            )
            .unwrap(),
        );
        let local: toml::Value = toml::Value::Table(toml::from_str("port = 3000").unwrap());
        let scalar = toml::Value::Integer(1);

        let merged = merge_dicts([&defaults, &scalar, &local]);
        assert_eq!(merged.get("name").and_then(|v| v.as_str()), Some("app"));
        assert_eq!(merged.get("port").and_then(|v| v.as_integer()), Some(3000));
        assert_eq!(merged.len(), 2);
    }
}
