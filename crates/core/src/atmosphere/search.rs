//! Bisection search used by the inverse conversions.
//!
//! Pressure falls and potential temperature rises with altitude throughout the
//! model, so within one bracketing layer either quantity is a monotonic
//! function of altitude and halving the altitude interval always keeps the
//! answer inside it. The direction of travel is the mirror image between the
//! two cases and is carried by [`Trend`].

use super::layer::AtmosphereLayer;
use crate::core_types::AtmosphericState;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Convergence controls for the inverse conversions.
///
/// A search is converged once `|computed - target|` is at most
/// `min(absolute_tolerance, relative_tolerance * |target|)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Absolute residual bound, in the target's unit (Pa or K)
    pub absolute_tolerance: f64,

    /// Optional residual bound relative to the target magnitude
    pub relative_tolerance: Option<f64>,

    /// Maximum number of interval halvings
    pub max_iterations: u32,
}

impl SearchSettings {
    /// Absolute residual bound of 0.05 Pa / 0.05 K
    pub const DEFAULT_ABSOLUTE_TOLERANCE: f64 = 0.05;

    /// Relative residual bound; keeps the altitude error sub-millimeter even
    /// near the model top where 0.05 Pa spans several meters.
    pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 1.0e-9;

    /// Default cap on interval halvings
    pub const DEFAULT_MAX_ITERATIONS: u32 = 50;

    /// Purely absolute criterion (0.05 units, 50 halvings)
    pub fn absolute_only() -> Self {
        Self {
            relative_tolerance: None,
            ..Self::default()
        }
    }

    /// Residual bound that applies to `target`
    pub fn tolerance_for(&self, target: f64) -> f64 {
        match self.relative_tolerance {
            Some(relative) => self.absolute_tolerance.min(relative * target.abs()),
            None => self.absolute_tolerance,
        }
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            absolute_tolerance: Self::DEFAULT_ABSOLUTE_TOLERANCE,
            relative_tolerance: Some(Self::DEFAULT_RELATIVE_TOLERANCE),
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Result of an inverse conversion, with the search diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InverseSolution {
    /// State at the final midpoint
    pub state: AtmosphericState,

    /// Interval halvings performed
    pub iterations: u32,

    /// Computed minus requested value at `state`
    pub residual: f64,

    /// Whether the residual met the tolerance before the iteration cap
    pub converged: bool,
}

/// How the searched quantity varies with altitude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Trend {
    /// Grows with altitude (potential temperature)
    Increasing,
    /// Shrinks with altitude (pressure)
    Decreasing,
}

/// Bisect `layer` for the altitude where `key(state) == target`.
///
/// Returns the last midpoint when the cap is hit; the caller gets the best
/// estimate rather than an error.
pub(crate) fn bisect<K>(
    layer: &AtmosphereLayer,
    target: f64,
    trend: Trend,
    settings: &SearchSettings,
    key: K,
) -> InverseSolution
where
    K: Fn(&AtmosphericState) -> f64,
{
    let tolerance = settings.tolerance_for(target);
    let mut lower = layer.base.altitude;
    let mut upper = layer.ceiling.altitude;
    let mut iterations = 0;

    loop {
        let mid = lower.midpoint(upper);
        let state = layer.state_at(mid);
        let value = key(&state);
        let residual = value - target;

        if residual.abs() <= tolerance {
            debug!(
                "Bisection in {} converged after {} iterations (residual {:e})",
                layer.name, iterations, residual
            );
            return InverseSolution {
                state,
                iterations,
                residual,
                converged: true,
            };
        }

        if iterations >= settings.max_iterations {
            warn!(
                "Bisection in {} stopped after {} iterations with residual {:e} (tolerance {:e})",
                layer.name, iterations, residual, tolerance
            );
            return InverseSolution {
                state,
                iterations,
                residual,
                converged: false,
            };
        }

        let target_is_higher = match trend {
            Trend::Decreasing => value > target,
            Trend::Increasing => value < target,
        };
        if target_is_higher {
            lower = mid;
        } else {
            upper = mid;
        }
        iterations += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = SearchSettings::default();
        assert_eq!(settings.absolute_tolerance, 0.05);
        assert_eq!(settings.max_iterations, 50);
        assert_eq!(settings.relative_tolerance, Some(1.0e-9));
    }

    #[test]
    fn test_tolerance_uses_tighter_bound() {
        let settings = SearchSettings::default();
        // 1e-9 relative of 101325 Pa is ~1e-4 Pa, tighter than 0.05 Pa
        assert!((settings.tolerance_for(101325.0) - 1.01325e-4).abs() < 1e-12);
        assert_eq!(SearchSettings::absolute_only().tolerance_for(101325.0), 0.05);
    }

    #[test]
    fn test_tolerance_caps_at_absolute() {
        let settings = SearchSettings {
            relative_tolerance: Some(1.0),
            ..SearchSettings::default()
        };
        assert_eq!(settings.tolerance_for(500.0), 0.05);
    }
}
