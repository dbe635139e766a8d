//! Canonical logging macros
//!
//! Every operation boundary logs `start`, then exactly one of `end` or
//! `end_error`, tagged with the operation name.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use duv_core::log_op_start;
/// log_op_start!("create_ship");
/// log_op_start!("read_ship", ship_id = "64b7f0a1c2d3e4f506172839");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = duv_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = duv_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use duv_core::log_op_end;
/// log_op_end!("create_ship", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = duv_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = duv_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into `ExError` and records its kind and code,
/// plus its request id when one is attached. Client errors log at `warn`,
/// everything else at `error`.
///
/// # Example
///
/// ```
/// # use duv_core::{log_op_error, errors::DuvError};
/// let err = DuvError::ShipNotFound { ship_id: "s1".to_string() };
/// log_op_error!("read_ship", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {
        $crate::log_op_error!($op, $err, duration_ms = $duration,)
    };
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        if ex_err.kind().is_client_error() {
            tracing::warn!(
                component = module_path!(),
                op = $op,
                event = duv_core_types::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err.kind = ?ex_err.kind(),
                err.code = ex_err.code(),
                request_id = ex_err.request_id().map(|id| id.as_str()),
                $($field)*
            );
        } else {
            tracing::error!(
                component = module_path!(),
                op = $op,
                event = duv_core_types::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err.kind = ?ex_err.kind(),
                err.code = ex_err.code(),
                err.message = ex_err.message(),
                request_id = ex_err.request_id().map(|id| id.as_str()),
                $($field)*
            );
        }
    }};
}
