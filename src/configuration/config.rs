//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – how the force pass is scheduled
//! - [`ParametersConfig`] – step size, gravitational constant, run length
//! - [`DisplayConfig`]    – viewport used by hosts that draw the system
//! - [`BodyConfig`]       – initial state (and look) of each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every section but `bodies` may be omitted and falls back to its defaults.
//!
//! # YAML format
//! An example scenario matching these types:
//!
//! ```yaml
//! engine:
//!   parallel: false         # true -> rayon force pass
//!
//! parameters:
//!   timestep: 86400.0       # one day [s]
//!   G: 6.67428e-11          # gravitational constant
//!   steps: 365              # run length for the CLI host
//!
//! display:
//!   width: 800.0
//!   height: 800.0
//!   pixels_per_au: 8.0
//!
//! bodies:
//!   - name: Sun
//!     x: [ 0.0, 0.0 ]       # position [m]
//!     m: 1.98892e30         # mass [kg]
//!     anchor: true
//!     radius: 2.0           # display radius [px]
//!     color: [ 255, 255, 0 ]
//!   - name: Earth
//!     x: [ -1.496e11, 0.0 ]
//!     v: [ 0.0, 29783.0 ]   # velocity [m/s]
//!     m: 5.9742e24
//! ```
//!
//! Positions and velocities are SI; no unit conversion happens on load.
//! `Scenario::build_scenario` maps this into the runtime types and validates it.

use serde::Deserialize;

use crate::simulation::params::{DEFAULT_STEPS, G, TIMESTEP};

/// How the engine schedules each step
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub parallel: bool, // `false` - serial force pass, `true` - parallel over bodies
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub timestep: f64, // fixed step size [s]
    #[serde(rename = "G")]
    pub g: f64, // gravitational constant
    pub steps: u64, // number of steps a host runs
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            timestep: TIMESTEP,
            g: G,
            steps: DEFAULT_STEPS,
        }
    }
}

/// Surface the host draws on
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: f64, // [px]
    pub height: f64, // [px]
    pub pixels_per_au: f64, // display scale
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
            pixels_per_au: 8.0,
        }
    }
}

/// Configuration for a single body’s initial state
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String, // Label used in logs and diagnostics
    pub x: [f64; 2], // Initial position [m]
    #[serde(default)]
    pub v: [f64; 2], // Initial velocity [m/s]
    pub m: f64, // Mass [kg], must be > 0
    #[serde(default)]
    pub anchor: bool, // Track the distance of every other body to this one
    #[serde(default)]
    pub radius: Option<f64>, // Display radius [px]
    #[serde(default)]
    pub color: Option<[u8; 3]>, // Display colour (RGB)
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // Scheduling of the force pass
    #[serde(default)]
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    #[serde(default)]
    pub display: DisplayConfig, // Viewport for drawing hosts
    pub bodies: Vec<BodyConfig>, // List of bodies that define the initial state of the system
}

impl ScenarioConfig {
    /// Parse a scenario from YAML text
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Parse a scenario from a YAML reader
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_reader(reader)
    }
}
