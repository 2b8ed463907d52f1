//! Host seams: the template handle and the document it belongs to
//!
//! The comparison engine only ever reads through these traits. Hosts
//! (an authoring application, a snapshot file, a test fixture) implement
//! them; [`crate::memory`] provides the in-memory implementation.

use super::catalog::{Category, NamedFilter};
use super::field::{FieldId, FieldValue};
use super::graphics::{OverrideRecord, PlanRange};
use super::ids::ElementId;
use super::view::ViewKind;

/// Read-only handle to one view template
pub trait Template {
    fn id(&self) -> ElementId;

    fn name(&self) -> &str;

    fn view_kind(&self) -> ViewKind;

    /// Whether category and filter overrides exist for this kind of view at all
    fn allows_graphics_overrides(&self) -> bool;

    /// Check if the template controls (owns a value for) `field`
    ///
    /// # Returns
    /// * `true` - `field` is in the template's controlled set
    /// * `false` - the template defers this field to the view it is applied to
    fn controls(&self, field: FieldId) -> bool;

    /// Stored value of `field`, `None` when unset
    fn field_value(&self, field: FieldId) -> Option<FieldValue>;

    fn category_overrides(&self, category: ElementId) -> Option<OverrideRecord>;

    fn category_hidden(&self, category: ElementId) -> bool;

    /// Ids of the filters applied by this template, in application order
    fn filter_ids(&self) -> Vec<ElementId>;

    fn filter_overrides(&self, filter: ElementId) -> Option<OverrideRecord>;

    fn filter_hidden(&self, filter: ElementId) -> bool;

    /// View range offsets; `None` unless the template resolves as a plan with range data
    fn plan_range(&self) -> Option<PlanRange>;
}

/// Document-level lookups the comparison needs beyond the two templates
///
/// Passed explicitly into the field accessor and the comparison engine.
pub trait DocumentContext {
    /// Display name of a referenced element, `None` if it cannot be resolved
    fn element_name(&self, id: ElementId) -> Option<String>;

    /// The category catalog, in any order
    fn categories(&self) -> Vec<Category>;

    /// Resolve a filter id to its definition
    fn filter(&self, id: ElementId) -> Option<NamedFilter>;
}
