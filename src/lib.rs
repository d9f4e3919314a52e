pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, System, Trail, NVec2, TRAIL_CAPACITY};
pub use simulation::params::{Parameters, AU, DAY, G, TIMESTEP};
pub use simulation::engine::Engine;
pub use simulation::error::SimError;
pub use simulation::forces::{Attraction, NetForce, NewtonianGravity};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, DisplayConfig, BodyConfig, ScenarioConfig};

pub use visualization::projection::{Viewport, Sprite, BodyFrame, Display};

pub use benchmark::benchmark::bench_step;
