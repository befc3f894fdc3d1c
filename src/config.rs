//! Generation configuration
//!
//! Holds everything the engine needs for one run: the input list, the
//! target draft, indentation, root metadata, and the two
//! additionalProperties policies. Validation happens up front, before any
//! input is fetched.

use crate::error::{Error, Result};

/// JSON Schema draft targeted by the generated document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Draft {
    Draft4,
    Draft6,
    Draft7,
    Draft2019,
    Draft2020,
}

impl Draft {
    /// Resolve a configured draft identifier
    pub fn from_version(version: u32) -> Result<Self> {
        match version {
            4 => Ok(Draft::Draft4),
            6 => Ok(Draft::Draft6),
            7 => Ok(Draft::Draft7),
            2019 => Ok(Draft::Draft2019),
            2020 => Ok(Draft::Draft2020),
            _ => Err(Error::UnknownDraft { draft: version }),
        }
    }

    /// The specification URL embedded as `$schema`
    pub fn url(self) -> &'static str {
        match self {
            Draft::Draft4 => "http://json-schema.org/draft-04/schema#",
            Draft::Draft6 => "http://json-schema.org/draft-06/schema#",
            Draft::Draft7 => "http://json-schema.org/draft-07/schema#",
            Draft::Draft2019 => "https://json-schema.org/draft/2019-09/schema",
            Draft::Draft2020 => "https://json-schema.org/draft/2020-12/schema",
        }
    }
}

/// Root-level schema metadata and the root-only additionalProperties policy
#[derive(Debug, Clone, Default)]
pub struct SchemaRoot {
    /// Schema title
    pub title: Option<String>,
    /// Schema description
    pub description: Option<String>,
    /// Schema `$id`
    pub id: Option<String>,
    /// additionalProperties for the top-level object only, no recursion
    pub additional_properties: Option<bool>,
}

/// Configuration for one generation run
#[derive(Debug, Clone)]
pub struct Config {
    /// Input YAML file paths or http(s) URLs, merged in order
    pub input: Vec<String>,
    /// Draft identifier, resolved through [`Draft::from_version`]
    pub draft: u32,
    /// Indentation width for the rendered document (even, at least 2)
    pub indent: usize,
    /// Root metadata and root-only policy
    pub schema_root: SchemaRoot,
    /// additionalProperties applied to every object in the tree
    pub additional_properties: Option<bool>,
}

impl Config {
    /// Create a configuration with default draft (2020) and indent (4)
    pub fn new(input: Vec<String>) -> Self {
        Self {
            input,
            draft: 2020,
            indent: 4,
            schema_root: SchemaRoot::default(),
            additional_properties: None,
        }
    }

    /// Set the draft identifier
    #[must_use]
    pub fn with_draft(mut self, draft: u32) -> Self {
        self.draft = draft;
        self
    }

    /// Set the indentation width
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set the root metadata and root-only policy
    #[must_use]
    pub fn with_schema_root(mut self, schema_root: SchemaRoot) -> Self {
        self.schema_root = schema_root;
        self
    }

    /// Set the all-levels additionalProperties policy
    #[must_use]
    pub fn with_additional_properties(mut self, value: bool) -> Self {
        self.additional_properties = Some(value);
        self
    }

    /// Validate the configuration before any processing starts
    pub fn validate(&self) -> Result<()> {
        if self.input.is_empty() {
            return Err(Error::config("at least one input file is required"));
        }
        if self.indent == 0 {
            return Err(Error::config("indentation must be a positive number"));
        }
        if self.indent % 2 != 0 {
            return Err(Error::config("indentation must be an even number"));
        }
        self.draft()?;
        Ok(())
    }

    /// Resolve the configured draft
    pub fn draft(&self) -> Result<Draft> {
        Draft::from_version(self.draft)
    }
}
