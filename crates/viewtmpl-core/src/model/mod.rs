//! Domain model for view templates and the document they live in.

pub mod catalog;
pub mod field;
pub mod graphics;
pub mod ids;
pub mod template;
pub mod view;

pub use catalog::{Category, CategoryKind, NamedFilter};
pub use field::{FieldId, FieldValue};
pub use graphics::{DetailLevel, OverrideRecord, PlanRange, Rgb};
pub use ids::ElementId;
pub use template::{DocumentContext, Template};
pub use view::ViewKind;
