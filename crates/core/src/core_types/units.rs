//! Semantic unit types for type-safe physical quantity handling
//!
//! This module provides newtype wrappers for the physical quantities the
//! standard atmosphere converts between, so that an altitude in kilofeet can't
//! be handed to a function expecting meters, or hectopascals where pascals are
//! expected.
//!
//! # Design Philosophy
//! - Every type wraps an `f64`; the inverse lookups bisect down to sub-millimeter
//!   altitude steps, which f32 can't resolve at 47 km
//! - Implements common traits (Add, Sub, Mul, Div, Ord, Display, etc.)
//! - Provides explicit conversion methods between related types
//! - Serde support for serialization (newtypes serialize as the bare number)
//! - Total ordering via Ord trait (NaN handled as greater than all values)
//! - Constructors do not validate; domain checks live in the atmosphere model
//!   and are reported through `AtmosphereError`
//!
//! # Usage
//! ```
//! use isa_atmos_core::core_types::units::{Hectopascals, Kilofeet, Kilometers, Meters, Pascals};
//!
//! let alt = Kilometers::new(11.0);
//! let m: Meters = alt.into();
//! assert!((*m - 11000.0).abs() < 1e-9);
//!
//! let kft: Kilofeet = alt.into();
//! assert!((*kft - 36.08924).abs() < 1e-5);
//!
//! let hpa: Hectopascals = Pascals::new(101325.0).into();
//! assert!((*hpa - 1013.25).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, Div, Mul, Neg, Sub};

/// Kilofeet per kilometer (1 km = 3280.84 ft)
pub const KM2KFT: f64 = 3.28084;

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// Shared plumbing for every scalar quantity: ordering, `Deref` to the raw
/// value, raw conversions and a plain constructor.
macro_rules! scalar_quantity {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
        #[repr(transparent)]
        pub struct $name(f64);

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                f64_total_cmp(self.0, other.0)
            }
        }

        impl Deref for $name {
            type Target = f64;
            #[inline]
            fn deref(&self) -> &f64 {
                &self.0
            }
        }

        impl $name {
            #[doc = concat!("Create a new `", stringify!($name), "` value")]
            #[inline]
            #[must_use]
            pub const fn new(value: f64) -> Self {
                $name(value)
            }

            /// Get the raw f64 value
            #[inline]
            #[must_use]
            pub const fn value(self) -> f64 {
                self.0
            }
        }

        impl From<f64> for $name {
            fn from(v: f64) -> Self {
                $name(v)
            }
        }

        impl From<$name> for f64 {
            fn from(v: $name) -> f64 {
                v.0
            }
        }

        impl PartialEq<f64> for $name {
            fn eq(&self, other: &f64) -> bool {
                self.0 == *other
            }
        }

        impl PartialOrd<f64> for $name {
            fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
                self.0.partial_cmp(other)
            }
        }
    };
}

// ============================================================================
// LENGTH TYPES
// ============================================================================

scalar_quantity!(
    /// Altitude or distance in meters. Negative values are representable
    /// (below the reference surface) and are rejected by the model, not here.
    Meters
);

impl Meters {
    /// Sea level
    pub const ZERO: Meters = Meters(0.0);

    /// Convert to kilometers
    #[inline]
    #[must_use]
    pub fn to_kilometers(self) -> Kilometers {
        Kilometers(self.0 / 1.0e3)
    }

    /// Convert to kilofeet
    #[inline]
    #[must_use]
    pub fn to_kilofeet(self) -> Kilofeet {
        self.to_kilometers().to_kilofeet()
    }

    /// Midpoint between two altitudes
    #[inline]
    #[must_use]
    pub fn midpoint(self, other: Meters) -> Meters {
        Meters((self.0 + other.0) / 2.0)
    }
}

impl Add for Meters {
    type Output = Meters;
    fn add(self, rhs: Meters) -> Meters {
        Meters(self.0 + rhs.0)
    }
}

impl Sub for Meters {
    type Output = Meters;
    fn sub(self, rhs: Meters) -> Meters {
        Meters(self.0 - rhs.0)
    }
}

impl Mul<f64> for Meters {
    type Output = Meters;
    fn mul(self, rhs: f64) -> Meters {
        Meters(self.0 * rhs)
    }
}

impl Div<f64> for Meters {
    type Output = Meters;
    fn div(self, rhs: f64) -> Meters {
        Meters(self.0 / rhs)
    }
}

impl Neg for Meters {
    type Output = Meters;
    fn neg(self) -> Meters {
        Meters(-self.0)
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} m", self.0)
    }
}

scalar_quantity!(
    /// Altitude in kilometers
    Kilometers
);

impl Kilometers {
    /// Convert to meters
    #[inline]
    #[must_use]
    pub fn to_meters(self) -> Meters {
        Meters(self.0 * 1.0e3)
    }

    /// Convert to kilofeet
    #[inline]
    #[must_use]
    pub fn to_kilofeet(self) -> Kilofeet {
        Kilofeet(self.0 * KM2KFT)
    }
}

impl From<Kilometers> for Meters {
    fn from(km: Kilometers) -> Meters {
        km.to_meters()
    }
}

impl From<Kilometers> for Kilofeet {
    fn from(km: Kilometers) -> Kilofeet {
        km.to_kilofeet()
    }
}

impl fmt::Display for Kilometers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} km", self.0)
    }
}

scalar_quantity!(
    /// Altitude in thousands of feet (flight-level style)
    Kilofeet
);

impl Kilofeet {
    /// Convert to kilometers
    #[inline]
    #[must_use]
    pub fn to_kilometers(self) -> Kilometers {
        Kilometers(self.0 / KM2KFT)
    }

    /// Convert to meters
    #[inline]
    #[must_use]
    pub fn to_meters(self) -> Meters {
        Meters(self.0 / KM2KFT * 1.0e3)
    }
}

impl From<Kilofeet> for Kilometers {
    fn from(kft: Kilofeet) -> Kilometers {
        kft.to_kilometers()
    }
}

impl From<Kilofeet> for Meters {
    fn from(kft: Kilofeet) -> Meters {
        kft.to_meters()
    }
}

impl fmt::Display for Kilofeet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} kft", self.0)
    }
}

// ============================================================================
// PRESSURE TYPES
// ============================================================================

scalar_quantity!(
    /// Pressure in pascals
    Pascals
);

impl Pascals {
    /// Convert to hectopascals (millibars)
    #[inline]
    #[must_use]
    pub fn to_hectopascals(self) -> Hectopascals {
        Hectopascals(self.0 / 1.0e2)
    }
}

impl From<Pascals> for Hectopascals {
    fn from(p: Pascals) -> Hectopascals {
        p.to_hectopascals()
    }
}

impl Sub for Pascals {
    type Output = Pascals;
    fn sub(self, rhs: Pascals) -> Pascals {
        Pascals(self.0 - rhs.0)
    }
}

impl fmt::Display for Pascals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} Pa", self.0)
    }
}

scalar_quantity!(
    /// Pressure in hectopascals (numerically equal to millibars)
    Hectopascals
);

impl Hectopascals {
    /// Convert to pascals
    #[inline]
    #[must_use]
    pub fn to_pascals(self) -> Pascals {
        Pascals(self.0 * 1.0e2)
    }
}

impl From<Hectopascals> for Pascals {
    fn from(hpa: Hectopascals) -> Pascals {
        hpa.to_pascals()
    }
}

impl fmt::Display for Hectopascals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} hPa", self.0)
    }
}

// ============================================================================
// TEMPERATURE TYPES
// ============================================================================

scalar_quantity!(
    /// Absolute temperature in Kelvin (air temperature or potential temperature)
    Kelvin
);

impl Kelvin {
    /// Absolute zero
    pub const ABSOLUTE_ZERO: Kelvin = Kelvin(0.0);

    /// Celsius to Kelvin conversion offset (0°C = 273.15 K)
    const CELSIUS_KELVIN_OFFSET: f64 = 273.15;

    /// Temperature in degrees Celsius
    #[inline]
    #[must_use]
    pub fn to_celsius(self) -> f64 {
        self.0 - Self::CELSIUS_KELVIN_OFFSET
    }
}

impl Sub for Kelvin {
    type Output = Kelvin;
    fn sub(self, rhs: Kelvin) -> Kelvin {
        Kelvin(self.0 - rhs.0)
    }
}

impl fmt::Display for Kelvin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} K", self.0)
    }
}

scalar_quantity!(
    /// Temperature lapse rate in K/m (positive means warming with height)
    KelvinPerMeter
);

impl KelvinPerMeter {
    /// Whether the layer is isothermal
    #[inline]
    #[must_use]
    pub fn is_isothermal(self) -> bool {
        self.0 == 0.0
    }
}

impl Mul<Meters> for KelvinPerMeter {
    type Output = f64;
    fn mul(self, rhs: Meters) -> f64 {
        self.0 * rhs.0
    }
}

impl fmt::Display for KelvinPerMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} K/km", self.0 * 1.0e3)
    }
}

// ============================================================================
// DENSITY
// ============================================================================

scalar_quantity!(
    /// Air density in kg/m³
    KgPerCubicMeter
);

impl fmt::Display for KgPerCubicMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} kg/m³", self.0)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kilometers_to_meters() {
        let km = Kilometers(5.0);
        assert!((km.to_meters().0 - 5000.0).abs() < 1e-9);
    }

    #[test]
    fn test_kilofeet_round_trip() {
        let kft = Kilofeet(36.08924);
        let km = kft.to_kilometers();
        assert!((km.0 - 11.0).abs() < 1e-6);
        assert!((km.to_kilofeet().0 - kft.0).abs() < 1e-9);
    }

    #[test]
    fn test_kilofeet_to_meters_matches_via_kilometers() {
        let kft = Kilofeet(45.0);
        assert!((kft.to_meters().0 - kft.to_kilometers().to_meters().0).abs() < 1e-9);
    }

    #[test]
    fn test_pascals_to_hectopascals() {
        let p = Pascals(85000.0);
        assert_eq!(p.to_hectopascals(), Hectopascals(850.0));
        assert_eq!(Hectopascals(850.0).to_pascals(), p);
    }

    #[test]
    fn test_total_ordering_with_nan() {
        let nan = Meters(f64::NAN);
        assert!(nan > Meters(47000.0));
        assert_eq!(Meters(1.0).min(Meters(2.0)), Meters(1.0));
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(Meters(11000.0).midpoint(Meters(20000.0)), Meters(15500.0));
    }

    #[test]
    fn test_kelvin_to_celsius() {
        assert!((Kelvin(216.65).to_celsius() + 56.5).abs() < 1e-9);
    }

    #[test]
    fn test_lapse_rate_display_in_kelvin_per_km() {
        assert_eq!(KelvinPerMeter(-0.0065).to_string(), "-6.5 K/km");
        assert!(KelvinPerMeter(0.0).is_isothermal());
    }
}
