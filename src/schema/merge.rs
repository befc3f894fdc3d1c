//! Schema merging and additionalProperties propagation

use super::types::{JsonType, SchemaFragment};

/// Merge `incoming` into `base`, returning the combined fragment
///
/// Called once per input document, in input order. Object properties union
/// in first-seen order and colliding keys merge recursively; the required
/// set is a deduplicated union. Fragments of differing types do not union:
/// the incoming fragment replaces the base one wholesale.
pub fn merge(base: SchemaFragment, incoming: SchemaFragment) -> SchemaFragment {
    match (base.json_type, incoming.json_type) {
        (JsonType::Object, JsonType::Object) => merge_objects(base, incoming),
        (JsonType::Array, JsonType::Array) => merge_arrays(base, incoming),
        // Last write wins on type conflicts and scalar re-definitions.
        _ => incoming,
    }
}

fn merge_objects(mut base: SchemaFragment, incoming: SchemaFragment) -> SchemaFragment {
    for (name, child) in incoming.properties {
        if let Some(existing) = base.properties.get_mut(&name) {
            let merged = merge(std::mem::take(existing), child);
            *existing = merged;
        } else {
            base.properties.insert(name, child);
        }
    }
    base.required.extend(incoming.required);
    base
}

fn merge_arrays(mut base: SchemaFragment, incoming: SchemaFragment) -> SchemaFragment {
    base.items = match (base.items, incoming.items) {
        (Some(a), Some(b)) => Some(Box::new(merge(*a, *b))),
        (Some(a), None) => Some(a),
        (None, b) => b,
    };
    base
}

/// Apply an additionalProperties policy to every object in the tree
///
/// Mutates in place. Only object fragments receive the flag; scalars and
/// arrays are left untouched, but objects held by an array's element
/// fragment are still reached through its properties.
pub fn set_additional_properties(fragment: &mut SchemaFragment, value: bool) {
    if fragment.is_object() {
        fragment.additional_properties = Some(value);
    }
    for child in fragment.properties.values_mut() {
        set_additional_properties(child, value);
    }
    if let Some(items) = fragment.items.as_deref_mut() {
        for child in items.properties.values_mut() {
            set_additional_properties(child, value);
        }
    }
}
