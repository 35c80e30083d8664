//! Standard-atmosphere tables over many altitudes.

use super::standard::StandardAtmosphere;
use crate::core_types::units::Meters;
use crate::core_types::AtmosphericState;
use crate::error::AtmosphereError;
use rayon::prelude::*;

impl StandardAtmosphere {
    /// Finest spacing accepted by [`Self::evenly_spaced`]
    pub const MIN_PROFILE_STEP: Meters = Meters::new(0.1);

    /// Evaluate the model at every altitude in `levels`, preserving order.
    ///
    /// Levels are independent, so they are evaluated in parallel.
    ///
    /// # Errors
    /// Returns [`AtmosphereError::OutOfRange`] if any level is outside [0, 47000] m.
    pub fn profile(&self, levels: &[Meters]) -> Result<Vec<AtmosphericState>, AtmosphereError> {
        levels
            .par_iter()
            .map(|&altitude| self.from_altitude(altitude))
            .collect()
    }

    /// Altitudes 0, `step`, 2·`step`, … up to and always including the model top.
    ///
    /// A non-positive or non-finite `step` yields just the ground and the top.
    /// Steps finer than [`Self::MIN_PROFILE_STEP`] are widened to it.
    pub fn evenly_spaced(&self, step: Meters) -> Vec<Meters> {
        let top = self.top().altitude;
        if !(step.is_finite() && *step > 0.0) {
            return vec![Meters::ZERO, top];
        }
        let step = step.max(Self::MIN_PROFILE_STEP);

        let mut levels: Vec<Meters> = (0_u32..)
            .map(|i| step * f64::from(i))
            .take_while(|altitude| *altitude < top)
            .collect();
        levels.push(top);
        levels
    }
}
