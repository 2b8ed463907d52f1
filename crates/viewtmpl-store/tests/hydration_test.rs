// Integration tests for snapshot hydration and end-to-end comparison

mod common;

use common::fixture;
use std::fs;
use tempfile::TempDir;
use viewtmpl_core::model::{DocumentContext, ElementId, Template, ViewKind};
use viewtmpl_core::{compare_templates, generate_report};
use viewtmpl_store::snapshot::snapshot_digest;
use viewtmpl_store::load_document;

#[test]
fn test_load_document_hydrates_catalogs() {
    let loaded = load_document(&fixture("sample_project.yaml")).unwrap();
    let doc = &loaded.document;

    assert_eq!(doc.name(), "Sample Project");
    assert_eq!(doc.element_name(ElementId(500)), Some("Hidden Line".to_string()));
    assert_eq!(doc.categories().len(), 4);
    assert_eq!(
        doc.filter(ElementId(301)).map(|f| f.name),
        Some("Phase 2".to_string())
    );
    assert_eq!(doc.templates().len(), 4);
}

#[test]
fn test_load_document_digest_matches_content() {
    let path = fixture("sample_project.yaml");
    let content = fs::read_to_string(&path).unwrap();

    let loaded = load_document(&path).unwrap();

    assert_eq!(loaded.digest, snapshot_digest(&content));
}

#[test]
fn test_hydrated_template_settings() {
    let loaded = load_document(&fixture("sample_project.yaml")).unwrap();
    let doc = &loaded.document;

    let schedule = doc.find_template("Door Schedule").unwrap();
    assert!(!schedule.allows_graphics_overrides());

    let plan = doc.find_template("Architectural Plan").unwrap();
    assert!(plan.category_hidden(ElementId(200)));
    assert!(!plan.category_hidden(ElementId(100)));
    assert_eq!(plan.filter_ids(), vec![ElementId(300)]);
    assert!(plan.plan_range().is_some());

    let plans: Vec<&str> = doc
        .list_templates(Some(ViewKind::FloorPlan))
        .iter()
        .map(|t| t.name())
        .collect();
    assert_eq!(plans, vec!["Architectural Plan", "Coordination Plan"]);
}

#[test]
fn test_compare_hydrated_templates() {
    let loaded = load_document(&fixture("sample_project.yaml")).unwrap();
    let doc = &loaded.document;
    let (t1, t2) = doc
        .select_pair("Architectural Plan", "Coordination Plan")
        .unwrap();

    let records = compare_templates(doc, t1, t2);
    let find = |param: &str| {
        records
            .iter()
            .find(|r| r.parameter_name == param)
            .unwrap_or_else(|| panic!("missing record {param}"))
    };

    assert_eq!(find("View Scale").value1, "1:100");
    assert_eq!(find("View Scale").value2, "1:50");
    assert_eq!(find("Graphics Style").value2, "Shaded");
    assert_eq!(find("Discipline").value2, "not controlled");
    assert_eq!(find("Walls: Projection Lines (Weight)").value1, "5");
    assert_eq!(find("Filter: 'Phase 2'").value1, "absent");
    assert_eq!(find("Cut Plane (Offset)").value2, "1500");
    assert_eq!(
        find("All Overrides").value2,
        "not controlled",
        "annotation overrides are controlled by one side only"
    );
    // Phase 1 is identical on both sides
    assert!(records
        .iter()
        .all(|r| !r.parameter_name.starts_with("Filter 'Phase 1'")));

    let html = generate_report(&records, t1.name(), t2.name());
    assert!(html.contains("Architectural Plan"));
}

#[test]
fn test_load_document_from_temp_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");
    fs::write(
        &path,
        r#"{
  "schema_version": 1,
  "document": {"name": "From JSON"},
  "templates": [
    {"id": 7, "name": "Legend A", "view_kind": "legend"}
  ]
}"#,
    )
    .unwrap();

    let loaded = load_document(&path).unwrap();

    assert_eq!(loaded.document.name(), "From JSON");
    assert_eq!(
        loaded.document.find_template("Legend A").unwrap().id(),
        ElementId(7)
    );
}

#[test]
fn test_load_document_reports_invalid_snapshot() {
    let err = load_document(&fixture("snapshot_duplicate_category.yaml")).unwrap_err();
    assert_eq!(err.code(), "ERR_INVALID_SNAPSHOT");
}
