//! viewtmpl store - document snapshots and label files
//!
//! Provides:
//! - Snapshot Format v1 schema (YAML, JSON accepted)
//! - Parser with validation
//! - Content digest for provenance
//! - Hydration into the in-memory host model
//! - TOML label overrides

pub mod errors;
pub mod labels;
pub mod snapshot;

// Re-export key types
pub use errors::Result;
pub use snapshot::{load_document, LoadedDocument};
