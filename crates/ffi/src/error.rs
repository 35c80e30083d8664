use isa_atmos_core::AtmosphereError;
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Failure recorded for the calling thread: the code handed back to C plus the
/// message served by [`isa_get_last_error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IsaFailure {
    code: IsaErrorCode,
    msg: String,
}

impl IsaFailure {
    /// `param_name` was null where an output pointer is required
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: IsaErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// `param_name` was NaN or infinite
    pub fn non_finite(param_name: &str, value: f64) -> Self {
        Self {
            code: IsaErrorCode::InvalidParameter,
            msg: format!("Parameter '{param_name}' must be finite, got {value}"),
        }
    }

    pub fn code(&self) -> IsaErrorCode {
        self.code
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }
}

impl From<AtmosphereError> for IsaFailure {
    fn from(error: AtmosphereError) -> Self {
        match error {
            AtmosphereError::OutOfRange { .. } => Self {
                code: IsaErrorCode::OutOfRange,
                msg: error.to_string(),
            },
        }
    }
}

/// Status returned by every `isa_*` function; 0 is success.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsaErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Input outside the model domain (altitude, pressure or potential temperature).
    OutOfRange = 2,

    /// Invalid parameter passed to function (NaN or infinite input).
    InvalidParameter = 3,
}

thread_local! {
    /// Last failure on this thread. Owning the `CString` here keeps the pointer
    /// from `isa_get_last_error` valid until the next call.
    static LAST_ERROR: RefCell<(Option<CString>, IsaErrorCode)> = const { RefCell::new((None, IsaErrorCode::Ok)) };
}

/// Read this thread's last failure.
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, IsaErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Replace this thread's last failure.
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, IsaErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Message of the last failed call on this thread, or null after a success.
///
/// The string is owned by the library and stays valid until the next `isa_*`
/// call on the same thread. Do not free it.
///
/// ```c
/// IsaState state;
/// if (isa_from_pressure(50.0, &state) != Ok) {
///     const char* error = isa_get_last_error();
///     if (error) {
///         fprintf(stderr, "conversion failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn isa_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Code of the last call on this thread (`Ok` after a success).
#[no_mangle]
pub extern "C" fn isa_get_last_error_code() -> IsaErrorCode {
    with_last_error(|(_cstring, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use isa_atmos_core::{Meters, StandardAtmosphere};

    #[test]
    fn test_range_error_maps_to_out_of_range() {
        let err = StandardAtmosphere::shared()
            .from_altitude(Meters::new(-5.0))
            .unwrap_err();
        let failure = IsaFailure::from(err);
        assert_eq!(failure.code(), IsaErrorCode::OutOfRange);
        assert_eq!(failure.msg(), err.to_string());
    }

    #[test]
    fn test_argument_failures_name_the_parameter() {
        let null = IsaFailure::null_pointer("out_limits");
        assert_eq!(null.code(), IsaErrorCode::NullPointer);
        assert_eq!(null.msg(), "Parameter 'out_limits' cannot be null");

        let nan = IsaFailure::non_finite("pascals", f64::INFINITY);
        assert_eq!(nan.code(), IsaErrorCode::InvalidParameter);
        assert_eq!(nan.msg(), "Parameter 'pascals' must be finite, got inf");
    }
}
