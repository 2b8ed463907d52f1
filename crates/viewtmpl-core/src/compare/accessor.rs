//! Field accessor: one template field to one display string.

use crate::labels::Labels;
use crate::model::{DocumentContext, FieldId, FieldValue, Template};

/// Resolves template fields into display strings
///
/// Controlled-ness is checked before the value is read: a field outside the
/// template's controlled set is always reported as `not controlled`, whatever
/// the template happens to store.
pub struct FieldAccessor<'a> {
    doc: &'a dyn DocumentContext,
    labels: &'a Labels,
}

impl<'a> FieldAccessor<'a> {
    pub fn new(doc: &'a dyn DocumentContext, labels: &'a Labels) -> Self {
        Self { doc, labels }
    }

    /// Display string for `field` on `template`
    ///
    /// Returns the `not controlled` sentinel, the `no value` sentinel, or
    /// the formatted value. Never fails.
    pub fn resolve_field(&self, template: &dyn Template, field: FieldId) -> String {
        if !template.controls(field) {
            return self.labels.not_controlled.clone();
        }

        match template.field_value(field) {
            Some(value) => self.format_value(&value),
            None => self.labels.no_value.clone(),
        }
    }

    /// Format a raw value according to its storage kind
    pub fn format_value(&self, value: &FieldValue) -> String {
        match value {
            FieldValue::Element(id) if id.is_invalid() => self.labels.none.clone(),
            FieldValue::Element(id) => match self.doc.element_name(*id) {
                Some(name) => name,
                None => {
                    tracing::debug!(
                        component = module_path!(),
                        element_id = id.value(),
                        "referenced element not resolvable, using raw id"
                    );
                    id.to_string()
                }
            },
            FieldValue::Text(text) => text.clone(),
            FieldValue::Other { display, raw } => display
                .as_ref()
                .or(raw.as_ref())
                .cloned()
                .unwrap_or_else(|| self.labels.not_available.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryDocument, MemoryTemplate};
    use crate::model::{ElementId, ViewKind};

    fn doc() -> MemoryDocument {
        let mut doc = MemoryDocument::new("test");
        doc.add_element(ElementId(500), "Hidden Line");
        doc
    }

    fn template() -> MemoryTemplate {
        MemoryTemplate::new(ElementId(1), "Plan", ViewKind::FloorPlan)
    }

    #[test]
    fn test_uncontrolled_ignores_stored_value() {
        let doc = doc();
        let labels = Labels::default();
        let accessor = FieldAccessor::new(&doc, &labels);
        let t = template().with_value(FieldId::ViewScale, FieldValue::display("1:100"));

        assert_eq!(
            accessor.resolve_field(&t, FieldId::ViewScale),
            "not controlled"
        );
    }

    #[test]
    fn test_controlled_without_value() {
        let doc = doc();
        let labels = Labels::default();
        let accessor = FieldAccessor::new(&doc, &labels);
        let t = template().control(FieldId::Discipline);

        assert_eq!(accessor.resolve_field(&t, FieldId::Discipline), "no value");
    }

    #[test]
    fn test_element_reference_formatting() {
        let doc = doc();
        let labels = Labels::default();
        let accessor = FieldAccessor::new(&doc, &labels);

        assert_eq!(
            accessor.format_value(&FieldValue::element(ElementId(500))),
            "Hidden Line"
        );
        assert_eq!(
            accessor.format_value(&FieldValue::element(ElementId(501))),
            "501"
        );
        assert_eq!(
            accessor.format_value(&FieldValue::element(ElementId::INVALID)),
            "none"
        );
    }

    #[test]
    fn test_other_value_fallback_chain() {
        let doc = doc();
        let labels = Labels::default();
        let accessor = FieldAccessor::new(&doc, &labels);

        let both = FieldValue::Other {
            display: Some("1 : 100".to_string()),
            raw: Some("100".to_string()),
        };
        assert_eq!(accessor.format_value(&both), "1 : 100");
        assert_eq!(accessor.format_value(&FieldValue::raw("100")), "100");
        assert_eq!(
            accessor.format_value(&FieldValue::Other {
                display: None,
                raw: None
            }),
            "N/A"
        );
        assert_eq!(accessor.format_value(&FieldValue::text("Coordination")), "Coordination");
    }
}
