//! Error taxonomy of the simulation core
//!
//! Every variant is a precondition violation. None is recoverable mid-step:
//! a failed `step()` leaves the system exactly as it was before the call.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Two bodies share a position, so the inverse-square force is undefined
    #[error(
        "degenerate configuration at step {step}: bodies #{first} ({first_name}) and #{second} ({second_name}) coincide"
    )]
    CoincidentBodies {
        step: u64,
        first: usize,
        first_name: String,
        second: usize,
        second_name: String,
    },

    /// A pair (or the running sum ending at that pair) produced an infinite or NaN force
    #[error(
        "non-finite force at step {step}: body #{first} ({first_name}) pulled by #{second} ({second_name})"
    )]
    NonFiniteForce {
        step: u64,
        first: usize,
        first_name: String,
        second: usize,
        second_name: String,
    },

    /// Integrating a finite force overflowed the body's velocity or position
    #[error("non-finite motion at step {step}: body #{body} ({name}) left the representable range")]
    NonFiniteMotion { step: u64, body: usize, name: String },

    #[error("body {name:?} has a NaN or infinite position or velocity")]
    NonFiniteState { name: String },

    #[error("body {name:?} has mass {mass}, expected a finite value > 0")]
    NonPositiveMass { name: String, mass: f64 },

    #[error("timestep {0} s is invalid, expected a finite value > 0")]
    InvalidTimestep(f64),
}
