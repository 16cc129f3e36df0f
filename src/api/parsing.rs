use serde_json::{Map, Value};

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Non-null JSON object at `key`; `null` and missing are treated alike.
pub fn v_object<'a>(root: &'a Value, key: &str) -> Option<&'a Map<String, Value>> {
    root.get(key).and_then(|v| v.as_object())
}

pub fn v_bool(root: &Value, key: &str) -> bool {
    root.get(key).and_then(Value::as_bool).unwrap_or(false)
}

/// Flattens a `{key: value}` or `{key: [values]}` object into ordered pairs.
/// Non-string scalars are rendered with their JSON text.
pub fn string_pairs(map: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in map {
        match value {
            Value::Array(items) => {
                for item in items {
                    if let Some(s) = scalar_to_string(item) {
                        pairs.push((key.clone(), s));
                    }
                }
            }
            other => {
                if let Some(s) = scalar_to_string(other) {
                    pairs.push((key.clone(), s));
                }
            }
        }
    }
    pairs
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_string_lookup() {
        let event = json!({ "requestContext": { "http": { "method": "POST" } } });
        assert_eq!(v_str(&event, &["requestContext", "http", "method"]), Some("POST"));
        assert_eq!(v_str(&event, &["requestContext", "stage"]), None);
    }

    #[test]
    fn string_pairs_expands_arrays_and_skips_nulls() {
        let map = json!({ "a": ["1", "2"], "b": "x", "c": null, "d": 5 });
        let pairs = string_pairs(map.as_object().unwrap());
        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), "1".to_string()),
                ("a".to_string(), "2".to_string()),
                ("b".to_string(), "x".to_string()),
                ("d".to_string(), "5".to_string()),
            ]
        );
    }
}
