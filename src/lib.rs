// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # valschema
//!
//! Generate a JSON Schema from one or more YAML values files.
//!
//! ## Features
//!
//! - **Type Inference**: Infers object/array/scalar types from example data
//! - **Multi-File Merging**: Folds any number of values files into one schema
//! - **Required Detection**: Keys present with a non-null value are required
//! - **additionalProperties Policies**: Root-only or recursive, three-state
//! - **Remote Inputs**: Values files can be fetched over http(s)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use valschema::{Config, Generator, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::new(vec!["values.yaml".to_string()]);
//!     let bytes = Generator::new(config).generate().await?;
//!     std::fs::write("values.schema.json", bytes)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! inputs ──▶ fetch ──▶ infer ──▶ merge (left-fold) ──▶ propagate ──▶ render
//!            file/URL  per doc   one aggregate         additionalProps
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for valschema
pub mod error;

/// Generation configuration and the draft table
pub mod config;

/// Input fetching (local files and http(s) URLs)
pub mod fetch;

/// Schema inference, merging, propagation, and materialization
pub mod schema;

/// Generation engine
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{Config, Draft, SchemaRoot};
pub use engine::Generator;
pub use error::{Error, Result};
pub use schema::{JsonType, SchemaFragment};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
