//! Physical constants and layer definitions of the four-layer standard atmosphere.
//!
//! Values follow the ICAO Standard Atmosphere (1993) up to the stratopause.
//! The gas constant and specific heat are the AMS Glossary values used for the
//! Poisson relation, which is why `R` is 287.00 rather than 287.05.

/// Standard gravitational acceleration (m/s²).
pub const GRAVITY: f64 = 9.80665;

/// Specific gas constant for dry air (J/(kg·K)).
pub const GAS_CONSTANT_DRY_AIR: f64 = 287.00;

/// Specific heat of dry air at constant pressure (J/(kg·K)).
pub const SPECIFIC_HEAT_AIR: f64 = 1005.7;

/// Poisson exponent R/Cp used for potential temperature.
pub const POISSON_EXPONENT: f64 = GAS_CONSTANT_DRY_AIR / SPECIFIC_HEAT_AIR;

/// Reference pressure for potential temperature (Pa), i.e. 1000 hPa.
pub const REFERENCE_PRESSURE: f64 = 1.0e5;

/// Mean sea-level pressure (Pa).
pub const GROUND_PRESSURE: f64 = 101325.0;

/// Mean sea-level temperature (K).
pub const GROUND_TEMPERATURE: f64 = 288.15;

/// Number of layers in the model.
pub const LAYER_COUNT: usize = 4;

/// Temperature lapse rate per layer (K/m): troposphere, tropopause,
/// lower stratosphere, upper stratosphere.
pub const LAPSE_RATES: [f64; LAYER_COUNT] = [-0.0065, 0.0, 0.001, 0.0028];

/// Ceiling altitude per layer (m).
pub const CEILING_ALTITUDES: [f64; LAYER_COUNT] = [11000.0, 20000.0, 32000.0, 47000.0];

/// Layer names, for diagnostics.
pub const LAYER_NAMES: [&str; LAYER_COUNT] = [
    "troposphere",
    "tropopause",
    "lower stratosphere",
    "upper stratosphere",
];
