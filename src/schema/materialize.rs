//! Schema materialization and rendering
//!
//! Converts the merged fragment tree into the final, ordered JSON Schema
//! document and serializes it with the configured indentation. Key order
//! is stable: `$schema` first, root metadata next, then the fragment keys
//! in a fixed sequence with properties in first-seen order.

use super::types::{JsonType, SchemaFragment};
use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};

/// Convert the merged fragment into the final schema document
///
/// Injects the `$schema` draft URL first, then the root-only metadata when
/// non-empty, then the fragment itself.
pub fn to_document(fragment: &SchemaFragment, draft_url: &str) -> Result<Map<String, Value>> {
    let mut document = Map::new();
    document.insert(
        "$schema".to_string(),
        Value::String(draft_url.to_string()),
    );
    if let Some(id) = non_empty(fragment.id.as_deref()) {
        document.insert("$id".to_string(), Value::String(id.to_string()));
    }
    if let Some(title) = non_empty(fragment.title.as_deref()) {
        document.insert("title".to_string(), Value::String(title.to_string()));
    }
    if let Some(description) = non_empty(fragment.description.as_deref()) {
        document.insert(
            "description".to_string(),
            Value::String(description.to_string()),
        );
    }
    append_fragment(&mut document, fragment)?;
    Ok(document)
}

/// Serialize the document with the configured indentation
///
/// The rendered bytes end with a newline.
pub fn render(document: &Map<String, Value>, indent: usize) -> Result<Vec<u8>> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Emit one nested fragment as a JSON object value
fn fragment_value(fragment: &SchemaFragment) -> Result<Value> {
    let mut map = Map::new();
    append_fragment(&mut map, fragment)?;
    Ok(Value::Object(map))
}

/// Append the keys relevant to the fragment's type
///
/// Keys that do not belong to the type are treated as an internal
/// inconsistency and surfaced as an error instead of silently emitted.
fn append_fragment(map: &mut Map<String, Value>, fragment: &SchemaFragment) -> Result<()> {
    map.insert(
        "type".to_string(),
        serde_json::to_value(fragment.json_type)?,
    );

    match fragment.json_type {
        JsonType::Object => {
            if fragment.items.is_some() {
                return Err(Error::invariant("object fragment carries an items schema"));
            }
            if !fragment.properties.is_empty() {
                let mut properties = Map::new();
                for (name, child) in &fragment.properties {
                    properties.insert(name.clone(), fragment_value(child)?);
                }
                map.insert("properties".to_string(), Value::Object(properties));
            }
            if !fragment.required.is_empty() {
                let required = fragment
                    .required
                    .iter()
                    .map(|name| Value::String(name.clone()))
                    .collect();
                map.insert("required".to_string(), Value::Array(required));
            }
            if let Some(value) = fragment.additional_properties {
                map.insert("additionalProperties".to_string(), Value::Bool(value));
            }
        }
        JsonType::Array => {
            if !fragment.properties.is_empty() || !fragment.required.is_empty() {
                return Err(Error::invariant("array fragment carries object fields"));
            }
            if fragment.additional_properties.is_some() {
                return Err(Error::invariant(
                    "array fragment carries additionalProperties",
                ));
            }
            if let Some(items) = &fragment.items {
                map.insert("items".to_string(), fragment_value(items)?);
            }
        }
        _ => {
            if !fragment.properties.is_empty()
                || !fragment.required.is_empty()
                || fragment.items.is_some()
                || fragment.additional_properties.is_some()
            {
                return Err(Error::invariant(format!(
                    "{} fragment carries structural fields",
                    fragment.json_type
                )));
            }
        }
    }

    Ok(())
}
