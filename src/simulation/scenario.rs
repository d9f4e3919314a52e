//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario`, containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - the gravity law (`NewtonianGravity`)
//!
//! A `Scenario` is the single writer of its bodies. Hosts call [`Scenario::step`]
//! once per tick and read [`Scenario::system`] in between.

use tracing::{debug, info, warn};

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::error::SimError;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

#[derive(Debug, Clone)]
pub struct Scenario {
    engine: Engine,
    parameters: Parameters,
    system: System,
    gravity: NewtonianGravity,
}

impl Scenario {
    /// Bundle already-built bodies with the given settings
    pub fn new(bodies: Vec<Body>, parameters: Parameters, engine: Engine) -> Result<Self, SimError> {
        parameters.validate()?;

        let anchors = bodies.iter().filter(|b| b.is_anchor()).count();
        if anchors > 1 {
            warn!(anchors, "more than one anchor flagged; distances follow the last one");
        }

        let gravity = NewtonianGravity { g: parameters.g };
        Ok(Self {
            engine,
            parameters,
            system: System::new(bodies),
            gravity,
        })
    }

    #[tracing::instrument(skip_all, fields(bodies = cfg.bodies.len()))]
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| -> Result<Body, SimError> {
                let body = Body::new(bc.name.as_str(), bc.m, NVec2::new(bc.x[0], bc.x[1]))?
                    .with_velocity(NVec2::new(bc.v[0], bc.v[1]))?;
                Ok(if bc.anchor { body.anchored() } else { body })
            })
            .collect::<Result<Vec<Body>, SimError>>()?;

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            timestep: p_cfg.timestep,
            g: p_cfg.g,
            steps: p_cfg.steps,
        };

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            parallel: cfg.engine.parallel,
        };

        let scenario = Self::new(bodies, parameters, engine)?;
        info!(
            timestep = scenario.parameters.timestep,
            parallel = scenario.engine.parallel,
            "scenario built"
        );
        Ok(scenario)
    }

    /// Advance every body by one timestep
    /// On error the system is left at its previous step
    pub fn step(&mut self) -> Result<(), SimError> {
        semi_implicit_euler(&mut self.system, &self.gravity, &self.engine, &self.parameters)?;
        debug!(step = self.system.steps(), t = self.system.time(), "stepped");
        Ok(())
    }

    /// Take `steps` steps, stopping at the first failure
    #[tracing::instrument(skip(self), fields(from = self.system.steps()))]
    pub fn run(&mut self, steps: u64) -> Result<(), SimError> {
        for _ in 0..steps {
            self.step()?;
        }
        Ok(())
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn gravity(&self) -> &NewtonianGravity {
        &self.gravity
    }
}
