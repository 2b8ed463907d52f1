//! Canonical logging macros
//!
//! Every operation of the comparison pipeline (snapshot loading, template
//! selection, the comparison itself, report output) is bracketed by a
//! `start` event and exactly one `end` or `end_error` event carrying the same
//! `op`. Extra `key = value` fields are passed through to `tracing`.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use viewtmpl_core::log_op_start;
/// log_op_start!("compare");
/// log_op_start!("compare", template1 = "Plan A", template2 = "Plan B");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)+)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::viewtmpl_core_types::schema::EVENT_START,
            $($($field)+)?
        );
    };
}

/// Log the successful end of an operation
///
/// `duration_ms` is mandatory so every `end` event can be timed.
///
/// # Example
///
/// ```
/// # use viewtmpl_core::log_op_end;
/// log_op_end!("compare", duration_ms = 3);
/// log_op_end!("compare", duration_ms = 3, record_count = 17u64, difference_count = 2u64);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::viewtmpl_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)+)?
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into [`ExError`](crate::errors::ExError) and
/// records its kind, its stable code and, when set, the offending entity
/// (template name, element id or file path).
///
/// # Example
///
/// ```
/// # use viewtmpl_core::{log_op_error, errors::TemplateError};
/// let err = TemplateError::TemplateNotFound { name: "Plan C".to_string() };
/// log_op_error!("select_template", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::viewtmpl_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            err_entity = ex_err.entity_id(),
            $($($field)+)?
        );
    }};
}
