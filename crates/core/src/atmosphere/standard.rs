//! The four-layer International Standard Atmosphere.
//!
//! Forward conversions step hydrostatically from the base of the layer that
//! contains the requested altitude. The inverse conversions (pressure and
//! potential temperature to altitude) first bracket the target between two
//! tabulated layer boundaries and then bisect inside that layer.
//!
//! # Example
//! ```
//! use isa_atmos_core::atmosphere::StandardAtmosphere;
//! use isa_atmos_core::core_types::Kilometers;
//!
//! let isa = StandardAtmosphere::new();
//! let state = isa.from_kilometers(Kilometers::new(11.0)).unwrap();
//! assert!((*state.temperature - 216.65).abs() < 1e-9);
//!
//! let back = isa.from_hectopascals(state.hectopascals()).unwrap();
//! assert!((*back.altitude - 11000.0).abs() < 1e-3);
//! ```

use super::constants::{
    CEILING_ALTITUDES, GROUND_PRESSURE, GROUND_TEMPERATURE, LAPSE_RATES, LAYER_COUNT, LAYER_NAMES,
};
use super::layer::{self, AtmosphereLayer};
use super::search::{self, InverseSolution, SearchSettings, Trend};
use crate::core_types::units::{
    Hectopascals, Kelvin, KelvinPerMeter, Kilofeet, Kilometers, Meters, Pascals,
};
use crate::core_types::AtmosphericState;
use crate::error::{AtmosphereError, Quantity};
use std::ops::Deref;
use std::sync::LazyLock;
use tracing::debug;

static SHARED: LazyLock<StandardAtmosphere> = LazyLock::new(StandardAtmosphere::new);

/// Inclusive bounds of a valid input domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits<T> {
    /// Lowest accepted value
    pub min: T,
    /// Highest accepted value
    pub max: T,
}

impl<T: Deref<Target = f64>> Limits<T> {
    /// Whether `value` lies within the bounds (NaN never does).
    ///
    /// Compares the raw values with IEEE ordering, so `-0.0` counts as zero.
    pub fn contains(&self, value: &T) -> bool {
        *self.min <= **value && **value <= *self.max
    }
}

/// Immutable standard-atmosphere model.
///
/// Holds the layer table computed at construction plus the inverse-search
/// settings. Nothing mutates it afterwards, so one instance can be shared by
/// any number of threads (see [`StandardAtmosphere::shared`]).
#[derive(Debug, Clone, PartialEq)]
pub struct StandardAtmosphere {
    layers: [AtmosphereLayer; LAYER_COUNT],
    search: SearchSettings,
}

impl Default for StandardAtmosphere {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardAtmosphere {
    /// Model with default search settings
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start configuring a model
    pub fn builder() -> StandardAtmosphereBuilder {
        StandardAtmosphereBuilder::default()
    }

    /// Process-wide instance with default settings, built on first use
    pub fn shared() -> &'static StandardAtmosphere {
        &SHARED
    }

    /// Layer table, ground first
    pub fn layers(&self) -> &[AtmosphereLayer] {
        &self.layers
    }

    /// Settings used by the inverse conversions
    pub fn search_settings(&self) -> &SearchSettings {
        &self.search
    }

    /// State at mean sea level
    pub fn ground(&self) -> &AtmosphericState {
        &self.layers[0].base
    }

    /// State at the model top (47 km)
    pub fn top(&self) -> &AtmosphericState {
        &self.top_layer().ceiling
    }

    fn top_layer(&self) -> &AtmosphereLayer {
        &self.layers[LAYER_COUNT - 1]
    }

    /// Valid altitudes: [0, 47000] m
    pub fn altitude_limits(&self) -> Limits<Meters> {
        Limits {
            min: self.ground().altitude,
            max: self.top().altitude,
        }
    }

    /// Valid pressures: [pressure at 47 km, ground pressure]
    pub fn pressure_limits(&self) -> Limits<Pascals> {
        Limits {
            min: self.top().pressure,
            max: self.ground().pressure,
        }
    }

    /// Valid potential temperatures: [ground θ, θ at 47 km]
    pub fn potential_temperature_limits(&self) -> Limits<Kelvin> {
        Limits {
            min: self.ground().potential_temperature,
            max: self.top().potential_temperature,
        }
    }

    /// Pressure, temperature, potential temperature and density at `altitude`.
    ///
    /// # Errors
    /// Returns [`AtmosphereError::OutOfRange`] if `altitude` is outside [0, 47000] m.
    pub fn from_altitude(&self, altitude: Meters) -> Result<AtmosphericState, AtmosphereError> {
        let limits = self.altitude_limits();
        if !limits.contains(&altitude) {
            return Err(AtmosphereError::out_of_range(
                Quantity::Altitude,
                *altitude,
                *limits.min,
                *limits.max,
            ));
        }

        let layer = self
            .layers
            .iter()
            .find(|layer| altitude <= layer.ceiling.altitude)
            .unwrap_or(self.top_layer());
        Ok(layer.state_at(altitude))
    }

    /// Same as [`Self::from_altitude`] with the altitude in kilometers.
    ///
    /// # Errors
    /// Returns [`AtmosphereError::OutOfRange`] if the altitude is outside [0, 47] km.
    pub fn from_kilometers(&self, altitude: Kilometers) -> Result<AtmosphericState, AtmosphereError> {
        self.from_altitude(altitude.to_meters())
    }

    /// Same as [`Self::from_altitude`] with the altitude in kilofeet.
    ///
    /// # Errors
    /// Returns [`AtmosphereError::OutOfRange`] if the altitude is outside [0, 47] km.
    pub fn from_kilofeet(&self, altitude: Kilofeet) -> Result<AtmosphericState, AtmosphereError> {
        self.from_altitude(altitude.to_meters())
    }

    /// Altitude, temperature, potential temperature and density at `pressure`.
    ///
    /// # Errors
    /// Returns [`AtmosphereError::OutOfRange`] if `pressure` is above the ground
    /// pressure or below the pressure at 47 km.
    pub fn from_pressure(&self, pressure: Pascals) -> Result<AtmosphericState, AtmosphereError> {
        self.solve_pressure(pressure).map(|solution| solution.state)
    }

    /// Same as [`Self::from_pressure`] with the pressure in hectopascals.
    ///
    /// # Errors
    /// Returns [`AtmosphereError::OutOfRange`] if the pressure is outside the model.
    pub fn from_hectopascals(
        &self,
        pressure: Hectopascals,
    ) -> Result<AtmosphericState, AtmosphereError> {
        self.from_pressure(pressure.to_pascals())
    }

    /// Pressure, altitude, temperature and density at potential temperature `theta`.
    ///
    /// # Errors
    /// Returns [`AtmosphereError::OutOfRange`] if `theta` is below the ground
    /// potential temperature or above the one at 47 km.
    pub fn from_potential_temperature(
        &self,
        theta: Kelvin,
    ) -> Result<AtmosphericState, AtmosphereError> {
        self.solve_potential_temperature(theta)
            .map(|solution| solution.state)
    }

    /// Inverse pressure lookup with search diagnostics.
    ///
    /// Brackets `pressure` inside the first layer whose ceiling pressure is at or
    /// below it, then bisects on altitude: a midpoint pressure above the target
    /// means the answer lies higher up.
    ///
    /// # Errors
    /// Returns [`AtmosphereError::OutOfRange`] if `pressure` is outside the model.
    pub fn solve_pressure(&self, pressure: Pascals) -> Result<InverseSolution, AtmosphereError> {
        let limits = self.pressure_limits();
        if !limits.contains(&pressure) {
            return Err(AtmosphereError::out_of_range(
                Quantity::Pressure,
                *pressure,
                *limits.min,
                *limits.max,
            ));
        }

        let layer = self
            .layers
            .iter()
            .find(|layer| pressure >= layer.ceiling.pressure)
            .unwrap_or(self.top_layer());
        Ok(search::bisect(
            layer,
            *pressure,
            Trend::Decreasing,
            &self.search,
            |state| *state.pressure,
        ))
    }

    /// Inverse potential-temperature lookup with search diagnostics.
    ///
    /// Mirror image of [`Self::solve_pressure`]: a midpoint potential
    /// temperature below the target means the answer lies higher up.
    ///
    /// # Errors
    /// Returns [`AtmosphereError::OutOfRange`] if `theta` is outside the model.
    pub fn solve_potential_temperature(
        &self,
        theta: Kelvin,
    ) -> Result<InverseSolution, AtmosphereError> {
        let limits = self.potential_temperature_limits();
        if !limits.contains(&theta) {
            return Err(AtmosphereError::out_of_range(
                Quantity::PotentialTemperature,
                *theta,
                *limits.min,
                *limits.max,
            ));
        }

        let layer = self
            .layers
            .iter()
            .find(|layer| theta <= layer.ceiling.potential_temperature)
            .unwrap_or(self.top_layer());
        Ok(search::bisect(
            layer,
            *theta,
            Trend::Increasing,
            &self.search,
            |state| *state.potential_temperature,
        ))
    }
}

/// Builder for [`StandardAtmosphere`].
///
/// The layer table itself is fixed; only the inverse-search behaviour is
/// configurable.
#[derive(Debug, Clone, Default)]
pub struct StandardAtmosphereBuilder {
    search: SearchSettings,
}

impl StandardAtmosphereBuilder {
    /// Replace all search settings
    pub fn search(mut self, search: SearchSettings) -> Self {
        self.search = search;
        self
    }

    /// Absolute residual bound (Pa or K)
    pub fn absolute_tolerance(mut self, tolerance: f64) -> Self {
        self.search.absolute_tolerance = tolerance;
        self
    }

    /// Relative residual bound, or `None` for an absolute-only criterion
    pub fn relative_tolerance(mut self, tolerance: Option<f64>) -> Self {
        self.search.relative_tolerance = tolerance;
        self
    }

    /// Cap on interval halvings
    pub fn max_iterations(mut self, iterations: u32) -> Self {
        self.search.max_iterations = iterations;
        self
    }

    /// Compute the layer table, stepping up from the ground state one layer at a time.
    pub fn build(self) -> StandardAtmosphere {
        let ground = layer::state_at(
            Meters::ZERO,
            Pascals::new(GROUND_PRESSURE),
            Kelvin::new(GROUND_TEMPERATURE),
        );

        let mut base = ground;
        let layers: [AtmosphereLayer; LAYER_COUNT] = std::array::from_fn(|i| {
            let layer = AtmosphereLayer::above(
                LAYER_NAMES[i],
                base,
                KelvinPerMeter::new(LAPSE_RATES[i]),
                Meters::new(CEILING_ALTITUDES[i]),
            );
            base = layer.ceiling;
            layer
        });

        debug_assert!(layers.windows(2).all(|pair| {
            let (lower, upper) = (&pair[0].ceiling, &pair[1].ceiling);
            lower.altitude < upper.altitude
                && lower.pressure > upper.pressure
                && lower.potential_temperature < upper.potential_temperature
        }));

        for layer in &layers {
            debug!(
                "ISA layer {}: {} -> {}, lapse {}, ceiling {:.3} Pa / {:.3} K / θ {:.3} K",
                layer.name,
                layer.base.altitude,
                layer.ceiling.altitude,
                layer.lapse_rate,
                *layer.ceiling.pressure,
                *layer.ceiling.temperature,
                *layer.ceiling.potential_temperature
            );
        }

        StandardAtmosphere {
            layers,
            search: self.search,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atmosphere::thermo;
    use approx::assert_relative_eq;

    #[test]
    fn test_layer_table_ceilings() {
        let isa = StandardAtmosphere::new();
        let expected = [
            (11000.0, 22625.791_489_552, 216.65, 331.083_538_901),
            (20000.0, 5471.935_071_950, 216.65, 496.431_886_786),
            (32000.0, 867.254_994_120, 228.65, 886.276_436_484),
            (47000.0, 110.766_576_923, 270.65, 1887.361_433_588),
        ];
        for (layer, (h, p, t, theta)) in isa.layers().iter().zip(expected) {
            assert_eq!(*layer.ceiling.altitude, h);
            assert_relative_eq!(*layer.ceiling.pressure, p, max_relative = 1e-10);
            assert_relative_eq!(*layer.ceiling.temperature, t, epsilon = 1e-9);
            assert_relative_eq!(*layer.ceiling.potential_temperature, theta, max_relative = 1e-10);
        }
    }

    #[test]
    fn test_layers_are_contiguous() {
        let isa = StandardAtmosphere::new();
        for pair in isa.layers().windows(2) {
            assert_eq!(pair[0].ceiling, pair[1].base);
        }
    }

    #[test]
    fn test_ground_state() {
        let isa = StandardAtmosphere::new();
        let ground = isa.from_altitude(Meters::ZERO).unwrap();
        assert_eq!(*ground.pressure, 101325.0);
        assert_eq!(*ground.temperature, 288.15);
        let theta = thermo::potential_temperature(ground.temperature, ground.pressure);
        assert_eq!(ground.potential_temperature, theta);
        assert_relative_eq!(*ground.potential_temperature, 287.069_633_577, epsilon = 1e-6);
        assert_relative_eq!(*ground.density, 101325.0 / (287.0 * 288.15), epsilon = 1e-12);
    }

    #[test]
    fn test_mid_troposphere() {
        let state = StandardAtmosphere::shared()
            .from_altitude(Meters::new(5000.0))
            .unwrap();
        assert_relative_eq!(*state.pressure, 54013.629_354_799, max_relative = 1e-10);
        assert_relative_eq!(*state.temperature, 255.65, epsilon = 1e-9);
        assert_relative_eq!(*state.density, 0.736_165_848_409, max_relative = 1e-9);
    }

    #[test]
    fn test_kilofeet_wrapper() {
        let isa = StandardAtmosphere::new();
        let from_kft = isa.from_kilofeet(Kilofeet::new(36.08924)).unwrap();
        assert_relative_eq!(*from_kft.altitude, 11000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_out_of_range_altitudes() {
        let isa = StandardAtmosphere::new();
        for h in [-1.0, 47001.0, f64::NAN] {
            let err = isa.from_altitude(Meters::new(h)).unwrap_err();
            assert_eq!(err.quantity(), Quantity::Altitude);
        }
        assert!(isa.from_altitude(Meters::new(47000.0)).is_ok());
    }

    #[test]
    fn test_limits_treat_negative_zero_as_zero() {
        let limits = StandardAtmosphere::new().altitude_limits();
        assert!(limits.contains(&Meters::new(-0.0)));
        assert!(!limits.contains(&Meters::new(-1e-12)));
        assert!(!limits.contains(&Meters::new(f64::NAN)));
    }

    #[test]
    fn test_pressure_at_layer_ceiling_is_bracketed() {
        let isa = StandardAtmosphere::new();
        for layer in isa.layers() {
            let solution = isa.solve_pressure(layer.ceiling.pressure).unwrap();
            assert!(solution.converged);
            assert_relative_eq!(*solution.state.altitude, *layer.ceiling.altitude, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_potential_temperature_at_ground_is_bracketed() {
        let isa = StandardAtmosphere::new();
        let theta = isa.ground().potential_temperature;
        let solution = isa.solve_potential_temperature(theta).unwrap();
        assert!(solution.converged);
        assert!(*solution.state.altitude < 1e-3);
    }

    #[test]
    fn test_iteration_cap_returns_best_estimate() {
        let isa = StandardAtmosphere::builder()
            .absolute_tolerance(0.0)
            .relative_tolerance(None)
            .max_iterations(3)
            .build();
        let solution = isa.solve_pressure(Pascals::new(50000.0)).unwrap();
        assert!(!solution.converged);
        assert_eq!(solution.iterations, 3);
        assert!(*solution.state.altitude > 0.0 && *solution.state.altitude < 11000.0);
    }

    #[test]
    fn test_builder_keeps_search_settings() {
        let isa = StandardAtmosphere::builder()
            .search(SearchSettings::absolute_only())
            .build();
        assert_eq!(isa.search_settings().relative_tolerance, None);
        assert_eq!(isa.layers(), StandardAtmosphere::new().layers());
    }
}
