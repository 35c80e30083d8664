//! C ABI for the standard atmosphere.
//!
//! Every conversion runs against the process-wide model
//! ([`StandardAtmosphere::shared`]), which is immutable, so all functions are
//! safe to call concurrently from any thread. Failures return a non-zero
//! [`IsaErrorCode`]; the matching message is available from
//! [`isa_get_last_error`] on the same thread.
//!
//! # Example (C)
//! ```c
//! IsaState state;
//! if (isa_from_hectopascals(500.0, &state) == Ok) {
//!     printf("500 hPa is at %.1f m\n", state.altitude_m);
//! }
//! ```

mod error;
mod helpers;
mod state;

pub use error::{isa_get_last_error, isa_get_last_error_code, IsaErrorCode};
pub use state::{IsaLimits, IsaState};

use error::IsaFailure;
use helpers::track_result;
use isa_atmos_core::{
    AtmosphereError, AtmosphericState, Hectopascals, Kelvin, Kilofeet, Kilometers, Meters,
    Pascals, StandardAtmosphere,
};

/// Run `convert` on the shared model and write the resulting state to `out_state`.
///
/// # Safety
/// `out_state` must be null or valid for writes of `IsaState`.
unsafe fn convert_into<F>(
    value: f64,
    value_name: &str,
    out_state: *mut IsaState,
    convert: F,
) -> IsaErrorCode
where
    F: FnOnce(&StandardAtmosphere, f64) -> Result<AtmosphericState, AtmosphereError>,
{
    let result = if value.is_finite() {
        convert(StandardAtmosphere::shared(), value)
            .map(|state| IsaState::from(&state))
            .map_err(IsaFailure::from)
    } else {
        Err(IsaFailure::non_finite(value_name, value))
    };
    track_result(result, out_state, "out_state")
}

/// Atmospheric state at an altitude in meters.
///
/// Returns
/// - `IsaErrorCode::Ok` (0) on success with `out_state` filled in
/// - `IsaErrorCode::NullPointer` if `out_state` is null
/// - `IsaErrorCode::OutOfRange` if `meters` is outside [0, 47000]
/// - `IsaErrorCode::InvalidParameter` if `meters` is NaN or infinite
///
/// # Safety
/// `out_state` must be null or a valid pointer to an `IsaState`.
#[no_mangle]
pub unsafe extern "C" fn isa_from_altitude(meters: f64, out_state: *mut IsaState) -> IsaErrorCode {
    convert_into(meters, "meters", out_state, |isa, v| {
        isa.from_altitude(Meters::new(v))
    })
}

/// Atmospheric state at an altitude in kilometers.
///
/// Same return codes as [`isa_from_altitude`], with the domain [0, 47] km.
///
/// # Safety
/// `out_state` must be null or a valid pointer to an `IsaState`.
#[no_mangle]
pub unsafe extern "C" fn isa_from_kilometers(
    kilometers: f64,
    out_state: *mut IsaState,
) -> IsaErrorCode {
    convert_into(kilometers, "kilometers", out_state, |isa, v| {
        isa.from_kilometers(Kilometers::new(v))
    })
}

/// Atmospheric state at an altitude in kilofeet.
///
/// Same return codes as [`isa_from_altitude`].
///
/// # Safety
/// `out_state` must be null or a valid pointer to an `IsaState`.
#[no_mangle]
pub unsafe extern "C" fn isa_from_kilofeet(kilofeet: f64, out_state: *mut IsaState) -> IsaErrorCode {
    convert_into(kilofeet, "kilofeet", out_state, |isa, v| {
        isa.from_kilofeet(Kilofeet::new(v))
    })
}

/// Atmospheric state at a pressure in pascals (inverse lookup).
///
/// `OutOfRange` is returned for pressures above the ground pressure or below
/// the pressure at 47 km; see [`isa_get_limits`].
///
/// # Safety
/// `out_state` must be null or a valid pointer to an `IsaState`.
#[no_mangle]
pub unsafe extern "C" fn isa_from_pressure(pascals: f64, out_state: *mut IsaState) -> IsaErrorCode {
    convert_into(pascals, "pascals", out_state, |isa, v| {
        isa.from_pressure(Pascals::new(v))
    })
}

/// Atmospheric state at a pressure in hectopascals (inverse lookup).
///
/// # Safety
/// `out_state` must be null or a valid pointer to an `IsaState`.
#[no_mangle]
pub unsafe extern "C" fn isa_from_hectopascals(
    hectopascals: f64,
    out_state: *mut IsaState,
) -> IsaErrorCode {
    convert_into(hectopascals, "hectopascals", out_state, |isa, v| {
        isa.from_hectopascals(Hectopascals::new(v))
    })
}

/// Atmospheric state at a potential temperature in Kelvin (inverse lookup).
///
/// # Safety
/// `out_state` must be null or a valid pointer to an `IsaState`.
#[no_mangle]
pub unsafe extern "C" fn isa_from_potential_temperature(
    kelvin: f64,
    out_state: *mut IsaState,
) -> IsaErrorCode {
    convert_into(kelvin, "kelvin", out_state, |isa, v| {
        isa.from_potential_temperature(Kelvin::new(v))
    })
}

/// Valid input domain of every conversion.
///
/// Returns
/// - `IsaErrorCode::Ok` (0) on success with `out_limits` filled in
/// - `IsaErrorCode::NullPointer` if `out_limits` is null
///
/// # Safety
/// `out_limits` must be null or a valid pointer to an `IsaLimits`.
#[no_mangle]
pub unsafe extern "C" fn isa_get_limits(out_limits: *mut IsaLimits) -> IsaErrorCode {
    let limits = IsaLimits::from(StandardAtmosphere::shared());
    track_result(Ok::<_, IsaFailure>(limits), out_limits, "out_limits")
}
