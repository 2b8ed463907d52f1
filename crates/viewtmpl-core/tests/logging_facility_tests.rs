#![allow(clippy::unwrap_used, clippy::expect_used)]

use viewtmpl_core::errors::TemplateError;
use viewtmpl_core::logging_facility::test_capture::init_test_capture;
use viewtmpl_core::model::{ElementId, ViewKind};
use viewtmpl_core::{
    compare_templates, log_op_end, log_op_error, log_op_start, ComparisonEngine, ExError,
    ExErrorKind,
};
use viewtmpl_core::{MemoryDocument, MemoryTemplate};
use viewtmpl_core_types::{RequestContext, RequestId};
use viewtmpl_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_PASS_SKIPPED, EVENT_START, FIELD_DIFFERENCE_COUNT,
    FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_ENTITY, FIELD_PASS, FIELD_RECORD_COUNT, FIELD_REQUEST_ID,
    FIELD_TEMPLATE1,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, template1 = "Plan A");

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_START));
    assert_eq!(events[0].field(FIELD_TEMPLATE1), Some("Plan A"));
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one end event");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = TemplateError::SameTemplate {
        name: "Plan A".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one error event");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(events[0].field(FIELD_ERR_CODE), Some("ERR_SAME_TEMPLATE"));
    assert_eq!(events[0].field(FIELD_ERR_ENTITY), Some("Plan A"));
}

#[test]
fn test_log_op_error_without_entity_omits_field() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_4";

    log_op_error!(op_name, ExError::new(ExErrorKind::Internal), duration_ms = 1);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].field(FIELD_ERR_CODE), Some("ERR_INTERNAL"));
    assert_eq!(events[0].field(FIELD_ERR_ENTITY), None);
}

#[test]
fn test_caller_request_context_tags_compare_events() {
    let capture = init_test_capture();
    let doc = MemoryDocument::new("logging");
    let t1 = MemoryTemplate::new(ElementId(1), "log-ctx-A", ViewKind::Schedule);
    let t2 = MemoryTemplate::new(ElementId(2), "log-ctx-B", ViewKind::Schedule);
    let context = RequestContext::with_request_id(RequestId::from_string("req-ctx-7".to_string()));

    ComparisonEngine::new(&doc, &t1, &t2)
        .with_context(context)
        .compare();

    let tagged: Vec<String> = capture
        .events_for_op("compare")
        .into_iter()
        .filter(|e| e.field(FIELD_REQUEST_ID) == Some("req-ctx-7"))
        .filter_map(|e| e.event)
        .collect();
    assert_eq!(tagged.first().map(String::as_str), Some(EVENT_START));
    assert_eq!(tagged.last().map(String::as_str), Some(EVENT_END));
    assert!(tagged.iter().any(|e| e == EVENT_PASS_SKIPPED));
}

#[test]
fn test_compare_logs_start_and_end_with_counts() {
    let capture = init_test_capture();
    let doc = MemoryDocument::new("logging");
    let t1 = MemoryTemplate::new(ElementId(1), "log-count-A", ViewKind::Section);
    let t2 = MemoryTemplate::new(ElementId(2), "log-count-B", ViewKind::Section);

    let records = compare_templates(&doc, &t1, &t2);

    let starts: Vec<_> = capture
        .events_for_op("compare")
        .into_iter()
        .filter(|e| {
            e.event.as_deref() == Some(EVENT_START) && e.field(FIELD_TEMPLATE1) == Some("log-count-A")
        })
        .collect();
    assert_eq!(starts.len(), 1);
    let request_id = starts[0].field(FIELD_REQUEST_ID).unwrap().to_string();

    let ends: Vec<_> = capture
        .events_for_op("compare")
        .into_iter()
        .filter(|e| {
            e.event.as_deref() == Some(EVENT_END)
                && e.field(FIELD_REQUEST_ID) == Some(request_id.as_str())
        })
        .collect();
    assert_eq!(ends.len(), 1);
    assert_eq!(
        ends[0].field(FIELD_RECORD_COUNT),
        Some(records.len().to_string().as_str())
    );
    assert_eq!(ends[0].field(FIELD_DIFFERENCE_COUNT), Some("0"));
    assert!(ends[0].field(FIELD_DURATION_MS).is_some());
}

#[test]
fn test_skipped_passes_are_logged() {
    let capture = init_test_capture();
    let doc = MemoryDocument::new("logging");
    let t1 = MemoryTemplate::new(ElementId(1), "log-skip-A", ViewKind::Schedule);
    let t2 = MemoryTemplate::new(ElementId(2), "log-skip-B", ViewKind::Schedule);

    compare_templates(&doc, &t1, &t2);

    let request_id = capture
        .events_for_op("compare")
        .into_iter()
        .find(|e| e.field(FIELD_TEMPLATE1) == Some("log-skip-A"))
        .and_then(|e| e.field(FIELD_REQUEST_ID).map(str::to_string))
        .unwrap();
    let skipped: Vec<String> = capture
        .events_for_op("compare")
        .into_iter()
        .filter(|e| {
            e.event.as_deref() == Some(EVENT_PASS_SKIPPED)
                && e.field(FIELD_REQUEST_ID) == Some(request_id.as_str())
        })
        .filter_map(|e| e.field(FIELD_PASS).map(str::to_string))
        .collect();

    assert_eq!(
        skipped,
        vec!["model_categories", "annotation_categories", "filters", "view_range"]
    );
}
