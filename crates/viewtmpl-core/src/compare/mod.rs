//! Template comparison engine.
//!
//! Compares two view templates pass by pass and produces an ordered list of
//! [`DiffRecord`]s for the report renderer.
//!
//! ## Entry point
//!
//! ```ignore
//! use viewtmpl_core::compare::ComparisonEngine;
//!
//! let records = ComparisonEngine::new(&doc, &template1, &template2).compare();
//! let html = viewtmpl_core::report::generate_report(&records, "Plan A", "Plan B");
//! ```
//!
//! ## Guarantees
//!
//! - **Order**: general, model categories, annotation categories, filters,
//!   view range; categories and filters by name within their pass.
//! - **No failures**: unresolvable references and missing data degrade to
//!   sentinel strings or a skipped pass. `compare` cannot fail.
//! - **Read-only**: templates and document are only read.

pub mod accessor;
pub mod engine;
pub mod overrides;
pub mod record;

pub use accessor::FieldAccessor;
pub use engine::{compare_templates, ComparisonEngine, Pass};
pub use overrides::overrides_equal;
pub use record::DiffRecord;
