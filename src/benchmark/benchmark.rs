use std::time::Instant;

use crate::simulation::engine::Engine;
use crate::simulation::params::{Parameters, AU};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, NVec2};
use crate::simulation::error::SimError;

/// Deterministic ring of `n` bodies, no two at the same position
fn spiral_bodies(n: usize) -> Result<Vec<Body>, SimError> {
    (0..n)
        .map(|i| -> Result<Body, SimError> {
            let i_f = i as f64;
            let r = AU * (1.0 + 0.01 * i_f);
            let angle = i_f * 0.37;
            let x = NVec2::new(r * angle.cos(), r * angle.sin());
            let v = NVec2::new(-angle.sin(), angle.cos()) * 3.0e4;
            Body::new(format!("b{i}"), 1.0e24, x)?.with_velocity(v)
        })
        .collect()
}

/// Time serial against parallel force passes for growing N
pub fn bench_step() -> Result<(), SimError> {
    // Different system sizes to test
    let ns = [100, 200, 400, 800, 1600];
    let steps = 10;

    for n in ns {
        let bodies = spiral_bodies(n)?;
        let mut serial = Scenario::new(bodies.clone(), Parameters::default(), Engine { parallel: false })?;
        let mut parallel = Scenario::new(bodies, Parameters::default(), Engine { parallel: true })?;

        // Warm up
        serial.step()?;
        parallel.step()?;

        // Time serial
        let t0 = Instant::now();
        serial.run(steps)?;
        let dt_serial = t0.elapsed().as_secs_f64() / steps as f64;

        // Time parallel
        let t1 = Instant::now();
        parallel.run(steps)?;
        let dt_parallel = t1.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, serial = {:8.6} s/step, parallel = {:8.6} s/step", dt_serial, dt_parallel);
    }

    Ok(())
}
