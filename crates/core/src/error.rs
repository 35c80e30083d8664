//! Errors reported by the standard atmosphere model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical quantity whose valid domain was violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantity {
    /// Altitude (m)
    Altitude,
    /// Static pressure (Pa)
    Pressure,
    /// Potential temperature (K)
    PotentialTemperature,
}

impl Quantity {
    /// SI unit symbol the bounds are expressed in
    pub fn unit(self) -> &'static str {
        match self {
            Quantity::Altitude => "m",
            Quantity::Pressure => "Pa",
            Quantity::PotentialTemperature => "K",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Altitude => write!(f, "altitude"),
            Quantity::Pressure => write!(f, "pressure"),
            Quantity::PotentialTemperature => write!(f, "potential temperature"),
        }
    }
}

/// Errors that can occur when converting through the standard atmosphere
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AtmosphereError {
    /// Input outside the model's valid domain.
    ///
    /// `min`/`max` are the bounds in SI units. For pressure `max` is the ground
    /// value, since pressure falls with altitude.
    OutOfRange {
        /// Which input was rejected
        quantity: Quantity,
        /// The offending value
        value: f64,
        /// Lowest accepted value
        min: f64,
        /// Highest accepted value
        max: f64,
    },
}

impl AtmosphereError {
    pub(crate) fn out_of_range(quantity: Quantity, value: f64, min: f64, max: f64) -> Self {
        AtmosphereError::OutOfRange {
            quantity,
            value,
            min,
            max,
        }
    }

    /// Quantity the error refers to
    pub fn quantity(&self) -> Quantity {
        match self {
            AtmosphereError::OutOfRange { quantity, .. } => *quantity,
        }
    }
}

impl fmt::Display for AtmosphereError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtmosphereError::OutOfRange {
                quantity,
                value,
                min,
                max,
            } => match quantity {
                // Pressure is quoted ground-first, matching how it decreases with height
                Quantity::Pressure => write!(
                    f,
                    "{quantity} must be in [{max}, {min}] {}, got {value}",
                    quantity.unit()
                ),
                _ => write!(
                    f,
                    "{quantity} must be in [{min}, {max}] {}, got {value}",
                    quantity.unit()
                ),
            },
        }
    }
}

impl std::error::Error for AtmosphereError {}
