//! Core state types for the N-body simulation.
//!
//! Defines the 2D body/system structs:
//! - `Trail`  bounded FIFO history of recent positions
//! - `Body`   a point mass with position, velocity and trail
//! - `System` the collection of bodies, simulation time `t` and step count
//!
//! Body state is read-only outside the crate. Only the integrator writes it,
//! and only between the compute and apply phases of a step.

use std::collections::VecDeque;

use nalgebra::Vector2;

use crate::simulation::error::SimError;
use crate::simulation::forces::NetForce;

pub type NVec2 = Vector2<f64>;

/// Number of recent positions kept per body
pub const TRAIL_CAPACITY: usize = 10;

/// Fixed-capacity ring buffer of positions, oldest first
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    points: VecDeque<NVec2>,
    capacity: usize,
}

impl Trail {
    /// Empty trail holding at most [`TRAIL_CAPACITY`] points
    pub fn new() -> Self {
        Self::with_capacity(TRAIL_CAPACITY)
    }

    /// Empty trail holding at most `capacity` points (minimum 1)
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append `p`, evicting the oldest point once over capacity
    pub fn record(&mut self, p: NVec2) {
        self.points.push_back(p);
        if self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Points in chronological order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NVec2> + '_ {
        self.points.iter()
    }

    pub fn oldest(&self) -> Option<&NVec2> {
        self.points.front()
    }

    pub fn latest(&self) -> Option<&NVec2> {
        self.points.back()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    name: String,
    x: NVec2, // position [m]
    v: NVec2, // velocity [m/s]
    m: f64, // mass [kg]
    anchor: bool, // distance to this body is tracked by the others
    distance_to_anchor: f64, // last separation from the anchor [m]
    trail: Trail,
}

impl Body {
    /// Create a body at rest at `position`
    /// - fails with [`SimError::NonPositiveMass`] unless `mass` is finite and > 0
    /// - fails with [`SimError::NonFiniteState`] if `position` is NaN or infinite
    pub fn new(name: impl Into<String>, mass: f64, position: NVec2) -> Result<Self, SimError> {
        let name = name.into();
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::NonPositiveMass { name, mass });
        }
        if !is_finite(&position) {
            return Err(SimError::NonFiniteState { name });
        }
        Ok(Self {
            name,
            x: position,
            v: NVec2::zeros(),
            m: mass,
            anchor: false,
            distance_to_anchor: 0.0,
            trail: Trail::new(),
        })
    }

    /// Set the initial velocity
    pub fn with_velocity(mut self, velocity: NVec2) -> Result<Self, SimError> {
        if !is_finite(&velocity) {
            return Err(SimError::NonFiniteState { name: self.name });
        }
        self.v = velocity;
        Ok(self)
    }

    /// Flag this body as the anchor
    pub fn anchored(mut self) -> Self {
        self.anchor = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> NVec2 {
        self.x
    }

    pub fn velocity(&self) -> NVec2 {
        self.v
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn is_anchor(&self) -> bool {
        self.anchor
    }

    pub fn distance_to_anchor(&self) -> f64 {
        self.distance_to_anchor
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub(crate) fn record_position(&mut self, p: NVec2) {
        self.trail.record(p);
    }

    /// Velocity and position after one semi-implicit Euler update
    /// Velocity first, then position from the new velocity
    pub(crate) fn integrate(&self, pull: &NetForce, dt: f64) -> (NVec2, NVec2) {
        let v = self.v + pull.force / self.m * dt;
        let x = self.x + v * dt;
        (v, x)
    }

    /// Commit a state produced by [`Body::integrate`]
    pub(crate) fn advance(&mut self, v: NVec2, x: NVec2, pull: &NetForce) {
        self.v = v;
        self.x = x;
        if let Some(d) = pull.anchor_distance {
            self.distance_to_anchor = d;
        }
        self.record_position(x);
    }
}

pub(crate) fn is_finite(p: &NVec2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

#[derive(Debug, Clone)]
pub struct System {
    bodies: Vec<Body>, // fixed for the lifetime of the system
    t: f64, // elapsed simulated time [s]
    steps: u64, // completed steps
}

impl System {
    /// System at t = 0 with the given bodies, in insertion order
    pub fn new(bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            t: 0.0,
            steps: 0,
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, i: usize) -> Option<&Body> {
        self.bodies.get(i)
    }

    /// Look a body up by name (first match)
    pub fn find(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// The anchor that distances are recorded against (last flagged body wins)
    pub fn anchor(&self) -> Option<&Body> {
        self.bodies.iter().rev().find(|b| b.anchor)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub(crate) fn tick(&mut self, dt: f64) {
        self.t += dt;
        self.steps += 1;
    }
}
