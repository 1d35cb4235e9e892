//! Deep object merge used by `InsertMode::MergeObject`

use serde_json::{Map, Value};

/// Merge `template` into `target`.
///
/// - object + object: merged recursively
/// - array + array: template items appended after the existing ones
/// - `null` template value: skipped, the target keeps what it had
/// - anything else: template value replaces the target value
///
/// Values copied wholesale (new keys, replaced values) are taken as-is.
pub fn merge_into(target: &mut Map<String, Value>, template: &Map<String, Value>) {
    for (key, incoming) in template {
        if incoming.is_null() {
            continue;
        }

        match (target.get_mut(key), incoming) {
            (Some(Value::Object(existing)), Value::Object(nested)) => {
                merge_into(existing, nested);
            }
            (Some(Value::Array(existing)), Value::Array(items)) => {
                existing.extend(items.iter().cloned());
            }
            (Some(slot), _) => {
                *slot = incoming.clone();
            }
            (None, _) => {
                target.insert(key.clone(), incoming.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn merged(target: Value, template: Value) -> Value {
        let mut target = target;
        merge_into(
            target.as_object_mut().unwrap(),
            template.as_object().unwrap(),
        );
        target
    }

    #[test]
    fn test_arrays_concatenate() {
        let out = merged(json!({"tags": ["a"]}), json!({"tags": ["b", "c"]}));
        assert_eq!(out, json!({"tags": ["a", "b", "c"]}));
    }

    #[test]
    fn test_nulls_are_ignored() {
        let out = merged(json!({"a": 1}), json!({"a": null, "b": null}));
        assert_eq!(out, json!({"a": 1}));
    }

    #[test]
    fn test_nested_objects_merge() {
        let out = merged(
            json!({"transform": {"scale": 1, "origin": {"x": 0.5}}}),
            json!({"transform": {"origin": {"y": 0.25, "x": null}}}),
        );
        assert_eq!(
            out,
            json!({"transform": {"scale": 1, "origin": {"x": 0.5, "y": 0.25}}})
        );
    }

    #[test]
    fn test_mismatched_kinds_replace() {
        let out = merged(json!({"a": [1], "b": {"c": 1}}), json!({"a": {"x": 1}, "b": 3}));
        assert_eq!(out, json!({"a": {"x": 1}, "b": 3}));
    }
}
