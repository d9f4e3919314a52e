//! Fixed-step time integrator for the N-body system
//!
//! Semi-implicit (symplectic) Euler driven by `NewtonianGravity`, split into a
//! compute phase over a read-only snapshot and an apply phase that mutates.

use super::engine::Engine;
use super::error::SimError;
use super::forces::{NetForce, NewtonianGravity};
use super::params::Parameters;
use super::states::{is_finite, System};

/// Advance the system by one step of `params.timestep`
///
/// v_n+1 = v_n + dt * F(x_n) / m
/// x_n+1 = x_n + dt * v_n+1
///
/// If the force pass or the integration fails nothing is mutated, including `sys.t`.
pub fn semi_implicit_euler(
    sys: &mut System,
    gravity: &NewtonianGravity,
    engine: &Engine,
    params: &Parameters,
) -> Result<(), SimError> {
    let dt = params.timestep;
    let n = sys.len();

    // Compute: every net force from the pre-step state
    let mut pulls = vec![NetForce::default(); n];
    gravity.accumulate_forces(sys, &mut pulls, engine.parallel)?;

    // Integrate every body before committing any, so an overflow aborts cleanly
    let moves = sys
        .bodies()
        .iter()
        .zip(pulls.iter())
        .enumerate()
        .map(|(i, (b, pull))| {
            let (v, x) = b.integrate(pull, dt);
            if is_finite(&v) && is_finite(&x) {
                Ok((v, x))
            } else {
                Err(SimError::NonFiniteMotion {
                    step: sys.steps() + 1,
                    body: i,
                    name: b.name().to_owned(),
                })
            }
        })
        .collect::<Result<Vec<_>, SimError>>()?;

    // Apply: kick then drift, and record the trail
    for ((b, pull), (v, x)) in sys.bodies_mut().iter_mut().zip(pulls.iter()).zip(moves) {
        b.advance(v, x, pull);
    }

    sys.tick(dt);
    Ok(())
}
