//! Schema inference from YAML values

use super::types::{JsonType, SchemaFragment};
use serde_yaml::Value;

/// Infer the fragment for a whole document
///
/// Returns `None` for an empty document (the root parses as null), which
/// contributes nothing to the merged schema.
pub fn infer_document(doc: &Value) -> Option<SchemaFragment> {
    match doc {
        Value::Null => None,
        other => Some(infer_value(other).0),
    }
}

/// Infer the fragment for one YAML value
///
/// The boolean is the required flag: a key is required when it is present
/// with a non-null value.
pub fn infer_value(value: &Value) -> (SchemaFragment, bool) {
    match value {
        Value::Null => (SchemaFragment::new(JsonType::Null), false),
        Value::Bool(_) => (SchemaFragment::new(JsonType::Boolean), true),
        Value::Number(n) => {
            let json_type = if n.is_i64() || n.is_u64() {
                JsonType::Integer
            } else {
                JsonType::Number
            };
            (SchemaFragment::new(json_type), true)
        }
        Value::String(_) => (SchemaFragment::new(JsonType::String), true),
        Value::Sequence(seq) => (infer_sequence(seq), true),
        Value::Mapping(map) => (infer_mapping(map), true),
        Value::Tagged(tagged) => infer_value(&tagged.value),
    }
}

fn infer_sequence(seq: &[Value]) -> SchemaFragment {
    // Only the first element shapes `items`; later elements are not
    // cross-checked against it.
    let items = seq.first().map(|first| infer_value(first).0);
    SchemaFragment::array(items)
}

fn infer_mapping(map: &serde_yaml::Mapping) -> SchemaFragment {
    let mut fragment = SchemaFragment::object();
    for (key, value) in map {
        let name = key_name(key);
        let (child, is_required) = infer_value(value);
        if is_required {
            fragment.required.insert(name.clone());
        }
        fragment.properties.insert(name, child);
    }
    fragment
}

/// Mapping keys are almost always strings; anything else is rendered
/// through its YAML scalar form.
fn key_name(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
