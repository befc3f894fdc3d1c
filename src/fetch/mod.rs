//! Input fetching
//!
//! Resolves each configured input identifier to raw bytes. Identifiers
//! with an http(s) scheme are downloaded; everything else is read from
//! disk. Fetch failures always name the offending input.

mod loader;

pub use loader::{fetch_input, is_url};
