//! Document snapshots
//!
//! Provides:
//! - Snapshot Format v1 schema
//! - Parser with validation
//! - Raw content digest
//! - Hydration into [`MemoryDocument`](viewtmpl_core::MemoryDocument)

pub mod digest;
pub mod format_v1;
pub mod hydrate;
pub mod parser;

pub use digest::snapshot_digest;
pub use format_v1::SnapshotV1;
pub use hydrate::{hydrate_document, load_document, LoadedDocument};
pub use parser::{parse_snapshot_file, parse_snapshot_str};
