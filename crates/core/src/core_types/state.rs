//! Atmospheric state at a single level of the standard atmosphere

use super::units::{Hectopascals, Kelvin, KgPerCubicMeter, Kilofeet, Kilometers, Meters, Pascals};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Full thermodynamic state at one altitude.
///
/// Every conversion of the standard atmosphere resolves to one of these, so a
/// caller that entered a pressure gets the altitude, temperature, potential
/// temperature and density from the same record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphericState {
    /// Geopotential altitude above mean sea level
    pub altitude: Meters,

    /// Static pressure
    pub pressure: Pascals,

    /// Air temperature
    pub temperature: Kelvin,

    /// Potential temperature referenced to 1000 hPa
    pub potential_temperature: Kelvin,

    /// Dry-air density
    pub density: KgPerCubicMeter,
}

impl AtmosphericState {
    /// Altitude in kilometers
    #[must_use]
    pub fn kilometers(&self) -> Kilometers {
        self.altitude.to_kilometers()
    }

    /// Altitude in kilofeet
    #[must_use]
    pub fn kilofeet(&self) -> Kilofeet {
        self.altitude.to_kilofeet()
    }

    /// Pressure in hectopascals
    #[must_use]
    pub fn hectopascals(&self) -> Hectopascals {
        self.pressure.to_hectopascals()
    }
}

impl fmt::Display for AtmosphericState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | T {} | θ {} | ρ {}",
            self.altitude,
            self.hectopascals(),
            self.temperature,
            self.potential_temperature,
            self.density
        )
    }
}
