use crate::error::{with_last_error_mut, IsaErrorCode, IsaFailure};
use std::ffi::CString;

/// Record `error` as this thread's last failure.
pub(crate) fn set_last_error(error: &IsaFailure) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Record `error` and hand back its code.
#[inline]
pub(crate) fn track_error(error: &IsaFailure) -> IsaErrorCode {
    set_last_error(error);
    error.code()
}

/// Reset this thread's last failure after a successful call.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = IsaErrorCode::Ok;
    });
}

/// Write `value` through `out` on success, or record the failure.
///
/// # Safety
/// `out` must be null or valid for writes of `T`.
pub(crate) unsafe fn track_result<T, E>(
    result: Result<T, E>,
    out: *mut T,
    out_name: &str,
) -> IsaErrorCode
where
    IsaFailure: From<E>,
{
    if out.is_null() {
        return track_error(&IsaFailure::null_pointer(out_name));
    }

    match result {
        Ok(value) => {
            out.write(value);
            clear_last_error();
            IsaErrorCode::Ok
        }
        Err(err) => track_error(&IsaFailure::from(err)),
    }
}
