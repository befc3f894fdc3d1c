//! Generation engine
//!
//! Drives the full pipeline: fetch each input in order, infer a fragment
//! per document, fold the fragments into one aggregate, apply the
//! additionalProperties policies, and render the final document. The
//! engine returns the serialized bytes; writing them anywhere is the
//! caller's job.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::fetch;
use crate::schema::{self, SchemaFragment};
use tracing::{debug, info};

/// Schema generator
pub struct Generator {
    /// Run configuration
    config: Config,
    /// Shared client for remote inputs
    client: reqwest::Client,
}

impl Generator {
    /// Create a generator for the given configuration
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Run the full pipeline and return the serialized schema document
    ///
    /// Inputs are processed strictly sequentially: merge order is
    /// semantically significant, both for type tie-breaks and for the
    /// first-seen property order of the output.
    pub async fn generate(&self) -> Result<Vec<u8>> {
        self.config.validate()?;
        let draft = self.config.draft()?;

        let mut aggregate: Option<SchemaFragment> = None;
        for input in &self.config.input {
            let bytes = fetch::fetch_input(&self.client, input).await?;
            let doc: serde_yaml::Value =
                serde_yaml::from_slice(&bytes).map_err(|e| Error::YamlParse {
                    path: input.clone(),
                    source: e,
                })?;

            let Some(fragment) = schema::infer_document(&doc) else {
                debug!(%input, "skipping empty document");
                continue;
            };

            debug!(%input, "merging document fragment");
            aggregate = Some(match aggregate.take() {
                Some(base) => schema::merge(base, fragment),
                None => fragment,
            });
        }

        // An input set of only empty documents still yields a schema.
        let mut merged = aggregate.unwrap_or_else(SchemaFragment::object);

        let root = &self.config.schema_root;
        merged.title = root.title.clone();
        merged.description = root.description.clone();
        merged.id = root.id.clone();

        // Root-only policy first; the recursive policy overrides it.
        if let Some(value) = root.additional_properties {
            if merged.is_object() {
                merged.additional_properties = Some(value);
            }
        }
        if let Some(value) = self.config.additional_properties {
            schema::set_additional_properties(&mut merged, value);
        }

        let document = schema::to_document(&merged, draft.url())?;
        let bytes = schema::render(&document, self.config.indent)?;
        info!(inputs = self.config.input.len(), "schema generated");
        Ok(bytes)
    }
}
