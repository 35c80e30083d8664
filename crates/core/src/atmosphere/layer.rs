//! Constant-lapse-rate layers and the hydrostatic transition between levels.
//!
//! # Scientific Background
//!
//! Within a layer of constant lapse rate `a`, hydrostatic balance plus the ideal
//! gas law integrate to
//!
//! ```text
//! a ≠ 0:  T₁ = T₀ + a (h₁ − h₀),   P₁ = P₀ (T₁ / T₀)^(−g / (a R))
//! a = 0:  T₁ = T₀,                 P₁ = P₀ exp(−g (h₁ − h₀) / (R T₀))
//! ```
//!
//! Every forward conversion of the standard atmosphere is one application of
//! this step from a layer's base level.

use super::constants::{GAS_CONSTANT_DRY_AIR, GRAVITY};
use super::thermo;
use crate::core_types::units::{Kelvin, KelvinPerMeter, Meters, Pascals};
use crate::core_types::AtmosphericState;

/// Pressure and temperature at `h1`, stepping from `(p0, t0)` at `h0` through a
/// layer with lapse rate `lapse_rate`.
#[must_use]
pub fn transition(
    p0: Pascals,
    t0: Kelvin,
    lapse_rate: KelvinPerMeter,
    h0: Meters,
    h1: Meters,
) -> (Pascals, Kelvin) {
    let dh = h1 - h0;
    if lapse_rate.is_isothermal() {
        let p1 = *p0 * (-GRAVITY / (GAS_CONSTANT_DRY_AIR * *t0) * *dh).exp();
        (Pascals::new(p1), t0)
    } else {
        let t1 = *t0 + lapse_rate * dh;
        let p1 = *p0 * (t1 / *t0).powf(-GRAVITY / (*lapse_rate * GAS_CONSTANT_DRY_AIR));
        (Pascals::new(p1), Kelvin::new(t1))
    }
}

/// Complete state at `altitude` given pressure and temperature there.
pub(crate) fn state_at(altitude: Meters, pressure: Pascals, temperature: Kelvin) -> AtmosphericState {
    AtmosphericState {
        altitude,
        pressure,
        temperature,
        potential_temperature: thermo::potential_temperature(temperature, pressure),
        density: thermo::density(temperature, pressure),
    }
}

/// One constant-lapse-rate layer of the table.
///
/// `base` is the state at the bottom of the layer (the previous layer's ceiling,
/// or the ground for the first layer) and `ceiling` the state at its top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereLayer {
    /// Layer name, e.g. "troposphere"
    pub name: &'static str,

    /// Temperature lapse rate inside the layer
    pub lapse_rate: KelvinPerMeter,

    /// State at the layer bottom
    pub base: AtmosphericState,

    /// State at the layer top
    pub ceiling: AtmosphericState,
}

impl AtmosphereLayer {
    /// Build a layer by stepping from `base` up to `ceiling_altitude`.
    pub(crate) fn above(
        name: &'static str,
        base: AtmosphericState,
        lapse_rate: KelvinPerMeter,
        ceiling_altitude: Meters,
    ) -> Self {
        let (p, t) = transition(
            base.pressure,
            base.temperature,
            lapse_rate,
            base.altitude,
            ceiling_altitude,
        );
        Self {
            name,
            lapse_rate,
            base,
            ceiling: state_at(ceiling_altitude, p, t),
        }
    }

    /// State at `altitude`, which must lie within this layer.
    #[must_use]
    pub fn state_at(&self, altitude: Meters) -> AtmosphericState {
        let (p, t) = transition(
            self.base.pressure,
            self.base.temperature,
            self.lapse_rate,
            self.base.altitude,
            altitude,
        );
        state_at(altitude, p, t)
    }

    /// Vertical extent of the layer
    #[must_use]
    pub fn thickness(&self) -> Meters {
        self.ceiling.altitude - self.base.altitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_troposphere_transition_to_tropopause() {
        let (p, t) = transition(
            Pascals::new(101325.0),
            Kelvin::new(288.15),
            KelvinPerMeter::new(-0.0065),
            Meters::new(0.0),
            Meters::new(11000.0),
        );
        assert_relative_eq!(*t, 216.65, epsilon = 1e-9);
        assert_relative_eq!(*p, 22625.791_489_552, epsilon = 1e-6);
    }

    #[test]
    fn test_isothermal_transition_keeps_temperature() {
        let t0 = Kelvin::new(216.65);
        let (p, t) = transition(
            Pascals::new(22625.791_489_552),
            t0,
            KelvinPerMeter::new(0.0),
            Meters::new(11000.0),
            Meters::new(20000.0),
        );
        assert_eq!(t, t0);
        assert_relative_eq!(*p, 5471.935_071_950, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_step_is_identity() {
        let (p, t) = transition(
            Pascals::new(101325.0),
            Kelvin::new(288.15),
            KelvinPerMeter::new(-0.0065),
            Meters::new(0.0),
            Meters::new(0.0),
        );
        assert_eq!(*p, 101325.0);
        assert_eq!(*t, 288.15);
    }

    #[test]
    fn test_layer_thickness_and_ceiling() {
        let ground = state_at(Meters::ZERO, Pascals::new(101325.0), Kelvin::new(288.15));
        let layer = AtmosphereLayer::above(
            "troposphere",
            ground,
            KelvinPerMeter::new(-0.0065),
            Meters::new(11000.0),
        );
        assert_eq!(layer.thickness(), Meters::new(11000.0));
        assert_eq!(layer.state_at(Meters::new(11000.0)), layer.ceiling);
    }
}
