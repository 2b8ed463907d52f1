//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names consistent between the comparison engine,
//! the snapshot loader and the CLI.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";

// Comparison identifiers
pub const FIELD_TEMPLATE1: &str = "template1";
pub const FIELD_TEMPLATE2: &str = "template2";
pub const FIELD_PASS: &str = "pass";

// Collection sizes
pub const FIELD_RECORD_COUNT: &str = "record_count";
pub const FIELD_DIFFERENCE_COUNT: &str = "difference_count";
pub const FIELD_TEMPLATE_COUNT: &str = "template_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";
pub const FIELD_ERR_ENTITY: &str = "err_entity";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_PASS_SKIPPED: &str = "pass_skipped";
