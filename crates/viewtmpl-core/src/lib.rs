//! viewtmpl core - view template comparison
//!
//! This crate provides the comparison kernel:
//! - Host seams ([`model::Template`], [`model::DocumentContext`]) and an
//!   in-memory implementation ([`memory`])
//! - The pass-ordered comparison engine producing [`DiffRecord`]s
//! - HTML and Markdown report rendering
//! - Localizable label vocabulary
//! - Error and structured logging facilities shared with the store and CLI

pub mod compare;
pub mod errors;
pub mod labels;
pub mod logging_facility;
pub mod memory;
pub mod model;
pub mod report;

// Used by the exported logging macros
pub use viewtmpl_core_types;

// Re-export commonly used types
pub use compare::{compare_templates, ComparisonEngine, DiffRecord};
pub use errors::{ExError, ExErrorKind, Result, TemplateError};
pub use labels::{Labels, Language};
pub use memory::{MemoryDocument, MemoryTemplate};
pub use report::{generate_report, render_text_summary, HtmlReport};
