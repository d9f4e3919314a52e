//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step size,
//! - gravitational constant,
//! - run length used by hosts that step a fixed number of times

use crate::simulation::error::SimError;

/// Gravitational constant [m^3 kg^-1 s^-2]
pub const G: f64 = 6.67428e-11;

/// Seconds per day
pub const DAY: f64 = 3600.0 * 24.0;

/// Default step size: one day [s]
pub const TIMESTEP: f64 = DAY;

/// Astronomical unit [m]
pub const AU: f64 = 149.6e6 * 1000.0;

/// Default run length: one year of daily steps
pub const DEFAULT_STEPS: u64 = 365;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub timestep: f64, // step size [s]
    pub g: f64, // gravitational constant
    pub steps: u64, // run length
}

impl Parameters {
    /// Reject step sizes the integrator cannot advance with
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.timestep.is_finite() && self.timestep > 0.0) {
            return Err(SimError::InvalidTimestep(self.timestep));
        }
        Ok(())
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            timestep: TIMESTEP,
            g: G,
            steps: DEFAULT_STEPS,
        }
    }
}
