//! Altitude converter
//!
//! Keeps a readout of kilometers, kilofeet, hectopascals, temperature and
//! potential temperature in sync: editing any one of the altitude-like fields
//! recomputes all the others through the standard atmosphere. Temperature is
//! output-only because it is not monotonic with height (it is constant through
//! the tropopause and rises again in the stratosphere).
//!
//! A failed edit (unparseable text, or a value outside the model) is logged and
//! reported, and the previous readout stays in place.

use crate::atmosphere::StandardAtmosphere;
use crate::core_types::units::{Hectopascals, Kelvin, Kilofeet, Kilometers, KM2KFT};
use crate::core_types::AtmosphericState;
use crate::error::AtmosphereError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::error;

/// Editable field of the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConverterField {
    /// Altitude in km
    Kilometers,
    /// Altitude in kft
    Kilofeet,
    /// Pressure in hPa
    Hectopascals,
    /// Potential temperature in K
    PotentialTemperature,
}

impl fmt::Display for ConverterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConverterField::Kilometers => "km",
            ConverterField::Kilofeet => "kft",
            ConverterField::Hectopascals => "hPa",
            ConverterField::PotentialTemperature => "θ",
        };
        write!(f, "{label}")
    }
}

/// Current converter values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Readout {
    /// Altitude in km
    pub kilometers: Kilometers,
    /// Altitude in kft
    pub kilofeet: Kilofeet,
    /// Pressure in hPa
    pub hectopascals: Hectopascals,
    /// Air temperature (read-only field)
    pub temperature: Kelvin,
    /// Potential temperature
    pub potential_temperature: Kelvin,
}

impl Readout {
    fn from_state(state: &AtmosphericState) -> Self {
        let kilometers = state.kilometers();
        Self {
            kilometers,
            kilofeet: Kilofeet::new(*kilometers * KM2KFT),
            hectopascals: state.hectopascals(),
            temperature: state.temperature,
            potential_temperature: state.potential_temperature,
        }
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "km  {:10.4}", *self.kilometers)?;
        writeln!(f, "kft {:10.4}", *self.kilofeet)?;
        writeln!(f, "hPa {:10.4}", *self.hectopascals)?;
        writeln!(f, "K   {:10.4}", *self.temperature)?;
        write!(f, "θ   {:10.4}", *self.potential_temperature)
    }
}

/// Errors that can occur when editing a converter field
#[derive(Debug, Clone, PartialEq)]
pub enum ConverterError {
    /// Text could not be parsed as a number
    Parse {
        /// Field being edited
        field: ConverterField,
        /// Rejected input
        text: String,
    },
    /// Value outside the standard atmosphere
    Atmosphere(AtmosphereError),
}

impl fmt::Display for ConverterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConverterError::Parse { field, text } => {
                write!(f, "could not convert '{text}' to a number for {field}")
            }
            ConverterError::Atmosphere(err) => write!(f, "Failed to convert altitude: {err}"),
        }
    }
}

impl std::error::Error for ConverterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConverterError::Parse { .. } => None,
            ConverterError::Atmosphere(err) => Some(err),
        }
    }
}

impl From<AtmosphereError> for ConverterError {
    fn from(err: AtmosphereError) -> Self {
        ConverterError::Atmosphere(err)
    }
}

/// Converter state: the model plus the last valid readout.
#[derive(Debug, Clone)]
pub struct HeightConverter<'a> {
    atmosphere: &'a StandardAtmosphere,
    readout: Readout,
}

impl Default for HeightConverter<'static> {
    fn default() -> Self {
        Self::new(StandardAtmosphere::shared())
    }
}

impl<'a> HeightConverter<'a> {
    /// Converter over `atmosphere`, starting at 0 km
    pub fn new(atmosphere: &'a StandardAtmosphere) -> Self {
        Self {
            atmosphere,
            readout: Readout::from_state(atmosphere.ground()),
        }
    }

    /// Last valid values
    pub fn readout(&self) -> &Readout {
        &self.readout
    }

    /// Set the altitude in kilometers.
    ///
    /// # Errors
    /// Returns [`ConverterError::Atmosphere`] if the altitude is outside the model.
    pub fn set_kilometers(&mut self, km: Kilometers) -> Result<&Readout, ConverterError> {
        let result = self.atmosphere.from_kilometers(km).map(|state| Readout {
            kilometers: km,
            kilofeet: km.to_kilofeet(),
            ..Readout::from_state(&state)
        });
        self.apply(result)
    }

    /// Set the altitude in kilofeet.
    ///
    /// # Errors
    /// Returns [`ConverterError::Atmosphere`] if the altitude is outside the model.
    pub fn set_kilofeet(&mut self, kft: Kilofeet) -> Result<&Readout, ConverterError> {
        let result = self.atmosphere.from_kilofeet(kft).map(|state| Readout {
            kilometers: kft.to_kilometers(),
            kilofeet: kft,
            ..Readout::from_state(&state)
        });
        self.apply(result)
    }

    /// Set the pressure in hectopascals.
    ///
    /// # Errors
    /// Returns [`ConverterError::Atmosphere`] if the pressure is outside the model.
    pub fn set_hectopascals(&mut self, hpa: Hectopascals) -> Result<&Readout, ConverterError> {
        let result = self.atmosphere.from_hectopascals(hpa).map(|state| Readout {
            hectopascals: hpa,
            ..Readout::from_state(&state)
        });
        self.apply(result)
    }

    /// Set the potential temperature.
    ///
    /// # Errors
    /// Returns [`ConverterError::Atmosphere`] if `theta` is outside the model.
    pub fn set_potential_temperature(&mut self, theta: Kelvin) -> Result<&Readout, ConverterError> {
        let result = self
            .atmosphere
            .from_potential_temperature(theta)
            .map(|state| Readout {
                potential_temperature: theta,
                ..Readout::from_state(&state)
            });
        self.apply(result)
    }

    /// Set `field` from user-entered text.
    ///
    /// # Errors
    /// Returns [`ConverterError::Parse`] if `text` is not a number, or
    /// [`ConverterError::Atmosphere`] if the value is outside the model.
    pub fn set_text(&mut self, field: ConverterField, text: &str) -> Result<&Readout, ConverterError> {
        let value: f64 = match text.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                let err = ConverterError::Parse {
                    field,
                    text: text.to_owned(),
                };
                error!("{err}");
                return Err(err);
            }
        };

        match field {
            ConverterField::Kilometers => self.set_kilometers(Kilometers::new(value)),
            ConverterField::Kilofeet => self.set_kilofeet(Kilofeet::new(value)),
            ConverterField::Hectopascals => self.set_hectopascals(Hectopascals::new(value)),
            ConverterField::PotentialTemperature => {
                self.set_potential_temperature(Kelvin::new(value))
            }
        }
    }

    fn apply(&mut self, result: Result<Readout, AtmosphereError>) -> Result<&Readout, ConverterError> {
        match result {
            Ok(readout) => {
                self.readout = readout;
                Ok(&self.readout)
            }
            Err(err) => {
                let err = ConverterError::from(err);
                error!("{err}");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_starts_at_ground() {
        let converter = HeightConverter::default();
        let readout = converter.readout();
        assert_eq!(*readout.kilometers, 0.0);
        assert_eq!(*readout.kilofeet, 0.0);
        assert_relative_eq!(*readout.hectopascals, 1013.25, epsilon = 1e-9);
        assert_eq!(*readout.temperature, 288.15);
    }

    #[test]
    fn test_kilometers_updates_every_field() {
        let mut converter = HeightConverter::default();
        let readout = *converter.set_kilometers(Kilometers::new(11.0)).unwrap();
        assert_eq!(*readout.kilometers, 11.0);
        assert_relative_eq!(*readout.kilofeet, 11.0 * KM2KFT, epsilon = 1e-12);
        assert_relative_eq!(*readout.hectopascals, 226.257_914_896, epsilon = 1e-6);
        assert_relative_eq!(*readout.temperature, 216.65, epsilon = 1e-9);
    }

    #[test]
    fn test_kilofeet_keeps_entered_value() {
        let mut converter = HeightConverter::default();
        let readout = *converter.set_kilofeet(Kilofeet::new(30.0)).unwrap();
        assert_eq!(*readout.kilofeet, 30.0);
        assert_relative_eq!(*readout.kilometers, 30.0 / KM2KFT, epsilon = 1e-12);
    }

    #[test]
    fn test_hectopascals_sets_altitude() {
        let mut converter = HeightConverter::default();
        let readout = *converter.set_hectopascals(Hectopascals::new(500.0)).unwrap();
        assert_eq!(*readout.hectopascals, 500.0);
        assert!(*readout.kilometers > 5.5 && *readout.kilometers < 5.6);
    }

    #[test]
    fn test_failed_edit_keeps_previous_readout() {
        let mut converter = HeightConverter::default();
        converter.set_kilometers(Kilometers::new(5.0)).unwrap();
        let before = *converter.readout();

        let err = converter.set_kilometers(Kilometers::new(48.0)).unwrap_err();
        assert!(matches!(err, ConverterError::Atmosphere(_)));
        assert_eq!(*converter.readout(), before);

        let err = converter
            .set_text(ConverterField::Hectopascals, "abc")
            .unwrap_err();
        assert!(matches!(err, ConverterError::Parse { .. }));
        assert_eq!(*converter.readout(), before);
    }

    #[test]
    fn test_text_entry_for_potential_temperature() {
        let mut converter = HeightConverter::default();
        let readout = *converter
            .set_text(ConverterField::PotentialTemperature, " 350 ")
            .unwrap();
        assert_eq!(*readout.potential_temperature, 350.0);
        assert!(*readout.kilometers > 11.0 && *readout.kilometers < 20.0);
    }

    #[test]
    fn test_readout_formatting() {
        let converter = HeightConverter::default();
        let text = converter.readout().to_string();
        assert!(text.starts_with("km      0.0000\n"));
        assert_eq!(text.lines().count(), 5);
    }
}
