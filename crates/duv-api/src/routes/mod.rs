//! # API Routes
//!
//! - `people` - `/api/pessoas`
//! - `ships` - `/api/navios`
//! - `declarations` - `/api/duvs`, including the populated view
//! - `health` - liveness and readiness probes
//! - `ui` - the embedded browser page at `/`

pub mod declarations;
pub mod health;
pub mod people;
pub mod ships;
pub mod ui;

use std::time::Instant;

use duv_core::{log_op_end, log_op_error, log_op_start};
use duv_core_types::RequestId;

use crate::error::AppError;

/// Run one handler body inside a `start` / `end` log boundary
///
/// Every event carries the request id set by the correlation middleware;
/// failures are logged with the id attached to the error itself.
pub(crate) fn observe<T>(
    op: &'static str,
    request_id: &RequestId,
    run: impl FnOnce() -> Result<T, AppError>,
) -> Result<T, AppError> {
    log_op_start!(op, request_id = request_id.as_str());
    let start = Instant::now();

    let result = run();

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => {
            log_op_end!(
                op,
                duration_ms = duration_ms,
                request_id = request_id.as_str()
            );
        }
        Err(err) => {
            let ex_err = err.to_ex_error().with_request_id(request_id.clone());
            log_op_error!(op, ex_err, duration_ms = duration_ms);
        }
    }
    result
}
