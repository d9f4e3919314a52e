//! Force contributors for the n-body engine
//!
//! Direct pairwise Newtonian gravity. The pass only reads the system, so the
//! forces of one step are all computed from the same pre-step snapshot.

use rayon::prelude::*;

use crate::simulation::error::SimError;
use crate::simulation::states::{is_finite, Body, NVec2, System};

/// Pull of one body on another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attraction {
    pub force: NVec2, // force on `a` due to `b` [N]
    pub distance: f64, // separation of the pair [m]
}

/// Total force on one body plus what it saw of the anchor
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NetForce {
    pub force: NVec2,
    pub anchor_distance: Option<f64>,
}

/// 2D Newtonian gravity without softening
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl NewtonianGravity {
    /// Force on `a` due to `b`
    /// Returns `None` when the bodies coincide and the force is undefined.
    /// The force itself may still be non-finite when the distance underflows
    /// or the masses are extreme; [`NewtonianGravity::net_force`] rejects those.
    pub fn attraction(&self, a: &Body, b: &Body) -> Option<Attraction> {
        let d = b.position() - a.position();
        let distance = (d.x * d.x + d.y * d.y).sqrt();
        if distance == 0.0 || distance.is_nan() {
            return None;
        }

        let force = self.g * a.mass() * b.mass() / (distance * distance);

        // decompose along the line from a to b
        let theta = d.y.atan2(d.x);
        Some(Attraction {
            force: NVec2::new(force * theta.cos(), force * theta.sin()),
            distance,
        })
    }

    /// Sum of the attractions on body `i` from every other body, in insertion order
    pub fn net_force(&self, sys: &System, i: usize) -> Result<NetForce, SimError> {
        let bodies = sys.bodies();
        let a = &bodies[i];
        let mut net = NetForce::default();

        for (j, b) in bodies.iter().enumerate() {
            if j == i {
                continue;
            }
            let pull = self.attraction(a, b).ok_or_else(|| SimError::CoincidentBodies {
                step: sys.steps() + 1,
                first: i,
                first_name: a.name().to_owned(),
                second: j,
                second_name: b.name().to_owned(),
            })?;

            if b.is_anchor() {
                net.anchor_distance = Some(pull.distance);
            }
            net.force += pull.force;

            // a single pull or the running sum may overflow
            if !is_finite(&net.force) {
                return Err(SimError::NonFiniteForce {
                    step: sys.steps() + 1,
                    first: i,
                    first_name: a.name().to_owned(),
                    second: j,
                    second_name: b.name().to_owned(),
                });
            }
        }

        Ok(net)
    }

    /// Compute net forces for all bodies in `sys`
    /// - `out[i]` will be set to the net force on body i
    /// - with `parallel`, bodies are spread over the rayon pool; each sum keeps
    ///   its own insertion order so results match the serial pass bit for bit
    #[tracing::instrument(level = "trace", skip_all, fields(n = sys.len(), parallel = parallel))]
    pub fn accumulate_forces(&self, sys: &System, out: &mut [NetForce], parallel: bool) -> Result<(), SimError> {
        if parallel {
            out.par_iter_mut().enumerate().try_for_each(|(i, slot)| {
                *slot = self.net_force(sys, i)?;
                Ok(())
            })
        } else {
            for (i, slot) in out.iter_mut().enumerate() {
                *slot = self.net_force(sys, i)?;
            }
            Ok(())
        }
    }
}
