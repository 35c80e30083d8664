//! Standard Atmosphere Core Library
//!
//! A four-layer International Standard Atmosphere (0–47 km) for converting
//! between altitude, pressure, temperature, potential temperature and density.
//!
//! ## Conversions
//!
//! - Forward: altitude (m, km or kft) to the full atmospheric state
//! - Inverse: pressure (Pa or hPa) or potential temperature (K) to altitude,
//!   by bisection inside the bracketing layer
//! - Altitude converter that keeps km/kft/hPa/K/θ fields in sync
//! - Parallel profile tables
//!
//! ```
//! use isa_atmos_core::{Pascals, StandardAtmosphere};
//!
//! let isa = StandardAtmosphere::shared();
//! let state = isa.from_pressure(Pascals::new(50000.0)).unwrap();
//! assert!((*state.altitude - 5574.0).abs() < 5.0);
//! ```

// Core types and utilities
pub mod core_types;
pub mod error;

pub mod atmosphere;
pub mod converter;

// Re-export core types
pub use core_types::{AtmosphericState, Hectopascals, Kelvin, KgPerCubicMeter, Kilofeet};
pub use core_types::{KelvinPerMeter, Kilometers, Meters, Pascals, KM2KFT};

pub use atmosphere::{InverseSolution, Limits, SearchSettings, StandardAtmosphere};
pub use converter::{ConverterError, ConverterField, HeightConverter, Readout};
pub use error::{AtmosphereError, Quantity};
