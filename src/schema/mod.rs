//! Schema inference and merging
//!
//! The core of the crate: walks parsed YAML documents, infers a schema
//! fragment per node, merges fragments from multiple documents into one
//! aggregate, propagates the additionalProperties policy, and materializes
//! the result as an ordered JSON Schema document.
//!
//! # Components
//!
//! - **Inference**: YAML value → fragment plus required flag
//! - **Merging**: deterministic, order-dependent left-fold over documents
//! - **Propagation**: recursive additionalProperties rewrite
//! - **Materialization**: fragment tree → ordered output map → bytes

mod infer;
mod materialize;
mod merge;
mod types;

pub use infer::{infer_document, infer_value};
pub use materialize::{render, to_document};
pub use merge::{merge, set_additional_properties};
pub use types::{JsonType, SchemaFragment};
