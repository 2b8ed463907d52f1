use viewtmpl_core::model::{Category, CategoryKind, ElementId, FieldId, FieldValue, NamedFilter, PlanRange, ViewKind};
use viewtmpl_core::{MemoryDocument, MemoryTemplate};

pub const WALLS: ElementId = ElementId(100);
pub const DOORS: ElementId = ElementId(101);
pub const FLOORS: ElementId = ElementId(102);
pub const DIMENSIONS: ElementId = ElementId(200);
pub const TEXT_NOTES: ElementId = ElementId(201);
pub const PHASE_1: ElementId = ElementId(300);
pub const PHASE_2: ElementId = ElementId(301);
pub const HIDDEN_LINE: ElementId = ElementId(400);

/// A document with a small category and filter catalog
///
/// "Floors" does not allow bound parameters and is never compared.
#[allow(dead_code)]
pub fn sample_document() -> MemoryDocument {
    let mut doc = MemoryDocument::new("Sample Project");
    doc.add_element(HIDDEN_LINE, "Hidden Line");
    doc.add_category(Category::new(WALLS, "Walls", CategoryKind::Model));
    doc.add_category(Category::new(DOORS, "Doors", CategoryKind::Model));
    doc.add_category(Category::new(FLOORS, "Floors", CategoryKind::Model).without_bound_parameters());
    doc.add_category(Category::new(DIMENSIONS, "Dimensions", CategoryKind::Annotation));
    doc.add_category(Category::new(TEXT_NOTES, "Text Notes", CategoryKind::Annotation));
    doc.add_filter(NamedFilter::new(PHASE_1, "Phase 1"));
    doc.add_filter(NamedFilter::new(PHASE_2, "Phase 2"));
    doc
}

/// A floor plan template controlling every group field, with equal defaults
#[allow(dead_code)]
pub fn full_plan(id: i64, name: &str) -> MemoryTemplate {
    MemoryTemplate::new(ElementId(id), name, ViewKind::FloorPlan)
        .controlled_value(FieldId::ViewScale, FieldValue::display("1:100"))
        .controlled_value(FieldId::DetailLevel, FieldValue::display("Medium"))
        .controlled_value(FieldId::GraphicsStyle, FieldValue::element(HIDDEN_LINE))
        .controlled_value(FieldId::Discipline, FieldValue::display("Architectural"))
        .control(FieldId::ModelCategoryOverrides)
        .control(FieldId::AnnotationCategoryOverrides)
        .control(FieldId::Filters)
        .control(FieldId::ViewRange)
        .with_plan_range(standard_range())
}

#[allow(dead_code)]
pub fn standard_range() -> PlanRange {
    PlanRange {
        top_clip: 2300.0,
        cut_plane: 1200.0,
        bottom_clip: 0.0,
        view_depth: 0.0,
    }
}
