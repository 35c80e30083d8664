//! International Standard Atmosphere up to the stratopause.
//!
//! This module models the four lowest ISA layers:
//! - Troposphere (0–11 km, −6.5 K/km)
//! - Tropopause (11–20 km, isothermal)
//! - Lower stratosphere (20–32 km, +1.0 K/km)
//! - Upper stratosphere (32–47 km, +2.8 K/km)
//!
//! Forward conversions take an altitude; the inverse conversions take a
//! pressure or a potential temperature and bisect for the altitude.
//!
//! # References
//!
//! - ICAO (1993). "Manual of the ICAO Standard Atmosphere", Doc 7488/3.
//! - American Meteorological Society, Glossary of Meteorology: "potential temperature".

pub mod constants;
mod layer;
mod profile;
mod search;
mod standard;
pub mod thermo;

pub use layer::{transition, AtmosphereLayer};
pub use search::{InverseSolution, SearchSettings};
pub use standard::{Limits, StandardAtmosphere, StandardAtmosphereBuilder};
