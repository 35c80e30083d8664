use isa_atmos_core::{AtmosphericState, StandardAtmosphere};

#[repr(C)]
/// FFI-friendly snapshot of one level of the standard atmosphere.
/// Keep this layout stable for C/C++/Python (ctypes) consumers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IsaState {
    /// Altitude above mean sea level (m).
    pub altitude_m: f64,

    /// Static pressure (Pa).
    pub pressure_pa: f64,

    /// Air temperature (K).
    pub temperature_k: f64,

    /// Potential temperature referenced to 1000 hPa (K).
    pub potential_temperature_k: f64,

    /// Dry-air density (kg/m³).
    pub density_kg_m3: f64,
}

impl From<&AtmosphericState> for IsaState {
    fn from(state: &AtmosphericState) -> Self {
        Self {
            altitude_m: *state.altitude,
            pressure_pa: *state.pressure,
            temperature_k: *state.temperature,
            potential_temperature_k: *state.potential_temperature,
            density_kg_m3: *state.density,
        }
    }
}

#[repr(C)]
/// Valid input domain of the model, in SI units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IsaLimits {
    /// Lowest altitude (m), the ground.
    pub min_altitude_m: f64,
    /// Highest altitude (m), the model top.
    pub max_altitude_m: f64,
    /// Lowest pressure (Pa), at the model top.
    pub min_pressure_pa: f64,
    /// Highest pressure (Pa), at the ground.
    pub max_pressure_pa: f64,
    /// Lowest potential temperature (K), at the ground.
    pub min_potential_temperature_k: f64,
    /// Highest potential temperature (K), at the model top.
    pub max_potential_temperature_k: f64,
}

impl From<&StandardAtmosphere> for IsaLimits {
    fn from(isa: &StandardAtmosphere) -> Self {
        let altitude = isa.altitude_limits();
        let pressure = isa.pressure_limits();
        let theta = isa.potential_temperature_limits();
        Self {
            min_altitude_m: *altitude.min,
            max_altitude_m: *altitude.max,
            min_pressure_pa: *pressure.min,
            max_pressure_pa: *pressure.max,
            min_potential_temperature_k: *theta.min,
            max_potential_temperature_k: *theta.max,
        }
    }
}
