//! Dry-air thermodynamic relations shared by the standard atmosphere.
//!
//! # Scientific Background
//!
//! Potential temperature is the temperature a parcel would reach if brought
//! adiabatically to the 1000 hPa reference level (Poisson's equation):
//!
//! ```text
//! θ = T · (P₀ / P)^(R/Cp)
//! ```
//!
//! Density follows from the ideal gas law, `ρ = P / (R · T)`.

use super::constants::{GAS_CONSTANT_DRY_AIR, POISSON_EXPONENT, REFERENCE_PRESSURE};
use crate::core_types::units::{Kelvin, KgPerCubicMeter, Pascals};

/// Potential temperature of air at `temperature` and `pressure`.
#[inline]
#[must_use]
pub fn potential_temperature(temperature: Kelvin, pressure: Pascals) -> Kelvin {
    Kelvin::new(*temperature * (REFERENCE_PRESSURE / *pressure).powf(POISSON_EXPONENT))
}

/// Air temperature of a parcel with potential temperature `theta` at `pressure`.
///
/// Inverse of [`potential_temperature`].
#[inline]
#[must_use]
pub fn temperature_from_potential(theta: Kelvin, pressure: Pascals) -> Kelvin {
    Kelvin::new(*theta / (REFERENCE_PRESSURE / *pressure).powf(POISSON_EXPONENT))
}

/// Dry-air density from the ideal gas law.
#[inline]
#[must_use]
pub fn density(temperature: Kelvin, pressure: Pascals) -> KgPerCubicMeter {
    KgPerCubicMeter::new(*pressure / (GAS_CONSTANT_DRY_AIR * *temperature))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_potential_temperature_equals_temperature_at_reference_pressure() {
        let theta = potential_temperature(Kelvin::new(300.0), Pascals::new(REFERENCE_PRESSURE));
        assert_relative_eq!(*theta, 300.0, epsilon = 1e-12);
    }

    #[test]
    fn test_potential_temperature_at_sea_level() {
        let theta = potential_temperature(Kelvin::new(288.15), Pascals::new(101325.0));
        // Slightly below T because sea level sits above the 1000 hPa reference
        assert_relative_eq!(*theta, 287.069_633_577, epsilon = 1e-6);
    }

    #[test]
    fn test_temperature_from_potential_inverts_poisson() {
        let p = Pascals::new(25000.0);
        let t = Kelvin::new(221.0);
        let theta = potential_temperature(t, p);
        assert!(*theta > *t);
        assert_relative_eq!(*temperature_from_potential(theta, p), 221.0, epsilon = 1e-10);
    }

    #[test]
    fn test_sea_level_density() {
        let rho = density(Kelvin::new(288.15), Pascals::new(101325.0));
        assert_relative_eq!(*rho, 1.2252, epsilon = 1e-4);
    }
}
