//! Operation lifecycle macros
//!
//! Every casting command brackets its work with one `start` event and one
//! `end` or `end_error` event. All three carry `component` (the calling
//! module) and `op`; extra `key = value` fields are passed through as-is.
//! Event names come from `castlist_core_types::schema`, reached through
//! `$crate`, so callers only need `tracing` in scope.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($level:ident, $op:expr, $event:expr) => {
        tracing::event!(
            tracing::Level::$level,
            component = module_path!(),
            op = $op,
            event = $event,
        )
    };
    ($level:ident, $op:expr, $event:expr, $($field:tt)+) => {
        tracing::event!(
            tracing::Level::$level,
            component = module_path!(),
            op = $op,
            event = $event,
            $($field)+
        )
    };
}

/// Log that a casting operation has begun
///
/// # Example
///
/// ```
/// # use castlist_core::log_op_start;
/// log_op_start!("role_list");
/// log_op_start!("role_create", character_name = "Hamlet");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)+)?) => {
        $crate::__log_op_event!(INFO, $op, $crate::__schema::EVENT_START $(, $($field)+)?)
    };
}

/// Log that a casting operation finished
///
/// `duration_ms` is required; further fields describe the outcome.
///
/// # Example
///
/// ```
/// # use castlist_core::log_op_end;
/// log_op_end!("role_create", duration_ms = 3, role_id = 1);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {
        $crate::__log_op_event!(
            INFO,
            $op,
            $crate::__schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)+)?
        )
    };
}

/// Log that a casting operation failed
///
/// `$err` is anything convertible into `ExError`. The event records the
/// error kind, its stable code and, when known, the entity that failed.
///
/// # Example
///
/// ```
/// # use castlist_core::{log_op_error, errors::CastingError};
/// let err = CastingError::AuditionNotFound { audition_id: 7 };
/// log_op_error!("audition_call_back", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__log_op_event!(
            ERROR,
            $op,
            $crate::__schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            err_entity_id = ex_err.entity_id()
            $(, $($field)+)?
        )
    }};
}
