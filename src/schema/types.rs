//! Schema fragment types

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// JSON Schema type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    Object,
    Array,
    String,
    Number,
    Integer,
    Boolean,
    Null,
}

impl JsonType {
    /// The type name as it appears in the emitted schema
    pub fn as_str(self) -> &'static str {
        match self {
            JsonType::Object => "object",
            JsonType::Array => "array",
            JsonType::String => "string",
            JsonType::Number => "number",
            JsonType::Integer => "integer",
            JsonType::Boolean => "boolean",
            JsonType::Null => "null",
        }
    }
}

impl std::fmt::Display for JsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of an in-progress JSON Schema tree
///
/// Fragments are produced per input document by the inferencer, folded into
/// a single aggregate by the merger, and finally converted into the output
/// document by the materializer. Each fragment exclusively owns its
/// children.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaFragment {
    /// Inferred type of this node
    pub json_type: JsonType,

    /// Nested property fragments, in first-seen order across merges
    /// (objects only)
    pub properties: IndexMap<String, SchemaFragment>,

    /// Element fragment (arrays only; `None` for empty arrays)
    pub items: Option<Box<SchemaFragment>>,

    /// Names of properties that appeared with a non-null value, in
    /// first-seen order
    pub required: IndexSet<String>,

    /// Schema title, set on the merged root from configuration
    pub title: Option<String>,

    /// Schema description, set on the merged root from configuration
    pub description: Option<String>,

    /// Schema `$id`, set on the merged root from configuration
    pub id: Option<String>,

    /// Three-state additionalProperties policy; the key is only emitted
    /// when this is set
    pub additional_properties: Option<bool>,
}

impl Default for SchemaFragment {
    fn default() -> Self {
        Self::object()
    }
}

impl SchemaFragment {
    /// Create a fragment of the given type
    pub fn new(json_type: JsonType) -> Self {
        Self {
            json_type,
            properties: IndexMap::new(),
            items: None,
            required: IndexSet::new(),
            title: None,
            description: None,
            id: None,
            additional_properties: None,
        }
    }

    /// Create an empty object fragment
    pub fn object() -> Self {
        Self::new(JsonType::Object)
    }

    /// Create an array fragment with an optional element fragment
    pub fn array(items: Option<SchemaFragment>) -> Self {
        Self {
            items: items.map(Box::new),
            ..Self::new(JsonType::Array)
        }
    }

    /// Check whether this fragment describes an object
    pub fn is_object(&self) -> bool {
        self.json_type == JsonType::Object
    }
}
